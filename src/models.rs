use std::collections::HashSet;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, Timestamp, Uint128, Uint64};

use crate::error::ContractError;

/// Percentage scale used throughout the contract: 1_000_000 == 100%.
pub const PCT_SCALE: u128 = 1_000_000;

#[cw_serde]
pub struct Config {
  pub token: Token,
  pub price: Uint128,
  pub countries: Vec<Country>,
  pub bonus_code: String,
  pub prize_tiers: Vec<PrizeTier>,
  pub round_seconds: Uint64,
  pub jackpot_seed: Uint128,
  pub jackpot_sales_pct: Uint128,
  pub use_approval: bool,
  pub marketing: MarketingInfo,
}

#[cw_serde]
pub struct MarketingInfo {
  pub name: String,
  pub description: Option<String>,
}

/// A participating draw unit, like a national draw or the SuperBall game.
/// Its winning number and any ticket selection lie in `[1, total_numbers]`.
#[cw_serde]
pub struct Country {
  pub code: String,
  pub total_numbers: u16,
}

/// One selection within a ticket: a number picked for one country. A full
/// ticket is a `Vec<Pick>` with at most one pick per country.
#[cw_serde]
pub struct Pick {
  pub country: String,
  pub number: u16,
}

/// One row of the prize table: tickets whose match count reaches `matches`
/// (and no higher tier) pay `amount`. The highest tier is the jackpot tier;
/// its payout comes from the rolling jackpot pot rather than `amount`.
#[cw_serde]
pub struct PrizeTier {
  pub matches: u8,
  pub amount: Uint128,
}

#[cw_serde]
pub enum Token {
  Native { denom: String },
  Cw20 { address: Addr },
}

#[cw_serde]
pub enum RoundStatus {
  Active,
  Drawing,
}

/// Record of one round's posted results and its running tally. The tally is
/// accumulated across as many transactions as it takes to process every
/// sold ticket in pages.
#[cw_serde]
pub struct Drawing {
  pub winning_numbers: Vec<Pick>,
  /// Frequency distribution: index i holds the number of tickets with
  /// exactly i matching numbers.
  pub match_counts: Vec<u32>,
  pub ticket_count: u32,
  pub processed_ticket_count: u32,
  /// Jackpot pot at the moment the round closed. Later sales feed the next
  /// round's pot.
  pub jackpot: Uint128,
  pub cursor: Option<(Addr, String)>,
  pub posted_at: Timestamp,
}

impl Drawing {
  pub fn is_complete(&self) -> bool {
    self.processed_ticket_count >= self.ticket_count
  }

  /// Number of tallied tickets at or above the given match count.
  pub fn tickets_with_at_least(
    &self,
    n_matches: u8,
  ) -> u32 {
    self
      .match_counts
      .iter()
      .skip(n_matches as usize)
      .sum()
  }
}

/// A player's computed winnings for one round. Match results are always
/// recomputed from the stored tickets and drawing; only the resulting
/// payout and its approval/payment status persist.
#[cw_serde]
pub struct Claim {
  pub round_no: Uint64,
  pub amount: Uint128,
  pub winning_ticket_count: u32,
  pub jackpot_ticket_count: u32,
  pub is_approved: bool,
  pub paid_at: Option<Timestamp>,
}

#[cw_serde]
pub struct AccountTotals {
  pub tickets: u32,
  pub wins: u32,
  pub amount_won: Uint128,
}

#[cw_serde]
pub struct Account {
  pub totals: AccountTotals,
}

impl Account {
  pub fn new() -> Self {
    Self {
      totals: AccountTotals {
        tickets: 0,
        wins: 0,
        amount_won: Uint128::zero(),
      },
    }
  }
}

impl Config {
  pub fn validate(
    &self,
    api: &dyn Api,
  ) -> Result<(), ContractError> {
    if let Token::Cw20 { address } = &self.token {
      api.addr_validate(address.as_str())?;
    }
    if self.price.is_zero() || self.round_seconds.is_zero() {
      return Err(ContractError::ValidationError);
    }
    if self.jackpot_sales_pct.u128() > PCT_SCALE {
      return Err(ContractError::ValidationError);
    }

    if self.countries.is_empty() {
      return Err(ContractError::ValidationError);
    }
    let mut codes: HashSet<&str> = HashSet::with_capacity(self.countries.len());
    for country in self.countries.iter() {
      if country.code.is_empty() || country.total_numbers == 0 {
        return Err(ContractError::ValidationError);
      }
      if !codes.insert(country.code.as_str()) {
        return Err(ContractError::DuplicateCountry);
      }
    }
    if !codes.contains(self.bonus_code.as_str()) {
      return Err(ContractError::UnknownCountry);
    }

    // Tiers must be strictly descending so the table reads jackpot-first and
    // no two tiers share a threshold.
    if self.prize_tiers.is_empty() {
      return Err(ContractError::EmptyPrizeTable);
    }
    for pair in self.prize_tiers.windows(2) {
      if pair[0].matches <= pair[1].matches {
        return Err(ContractError::ValidationError);
      }
    }
    if self.prize_tiers[0].matches as usize > self.countries.len() {
      return Err(ContractError::ValidationError);
    }
    if self.prize_tiers[0].matches == 0 {
      return Err(ContractError::ValidationError);
    }

    Ok(())
  }
}
