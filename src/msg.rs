use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128, Uint64};

use crate::models::{AccountTotals, Config, Pick, RoundStatus};

#[cw_serde]
pub struct InstantiateMsg {
  pub owner: Option<Addr>,
  pub config: Config,
}

#[cw_serde]
pub enum ExecuteMsg {
  Buy {
    tickets: Vec<Vec<Pick>>,
  },
  PostResults {
    numbers: Option<Vec<Pick>>,
  },
  Claim {
    round_no: Uint64,
  },
  Approve {
    address: Addr,
    round_no: Uint64,
  },
  Reject {
    address: Addr,
    round_no: Uint64,
  },
  SetConfig {
    config: Config,
  },
  Withdraw {
    amount: Uint128,
  },
}

#[cw_serde]
pub enum QueryMsg {
  Evaluate {
    ticket: Vec<Pick>,
    round_no: Option<Uint64>,
  },
  Drawing {
    round_no: Uint64,
  },
  Round {},
  Config {},
  Account {
    address: Addr,
  },
  ClaimsPendingApproval {},
  Ready {},
}

#[cw_serde]
pub struct MigrateMsg {}

/// Match count and payout for one ticket against one drawing, computed
/// fresh on each request.
#[cw_serde]
pub struct MatchResult {
  pub round_no: Uint64,
  pub match_count: u8,
  pub prize: Uint128,
}

#[cw_serde]
pub struct RoundView {
  pub round_no: Uint64,
  pub status: RoundStatus,
  pub start: Timestamp,
  pub end: Timestamp,
  pub ticket_count: u32,
  pub jackpot: Uint128,
}

#[cw_serde]
pub struct DrawingView {
  pub round_no: Uint64,
  pub winning_numbers: Vec<Pick>,
  pub match_counts: Vec<u32>,
  pub ticket_count: u32,
  pub processed_ticket_count: u32,
  pub jackpot: Uint128,
  pub is_complete: bool,
  pub posted_at: Timestamp,
}

#[cw_serde]
pub struct TicketView {
  pub picks: Vec<Pick>,
  pub result: Option<MatchResult>,
}

#[cw_serde]
pub struct ClaimView {
  pub owner: Addr,
  pub round_no: Uint64,
  pub amount: Uint128,
  pub winning_ticket_count: u32,
  pub jackpot_ticket_count: u32,
  pub is_approved: bool,
  pub is_paid: bool,
}

#[cw_serde]
pub struct AccountView {
  pub totals: AccountTotals,
  pub tickets: Vec<TicketView>,
  pub claims: Vec<ClaimView>,
}
