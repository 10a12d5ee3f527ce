use std::collections::{HashMap, HashSet};

use cosmwasm_std::Uint128;

use crate::{
  error::ContractError,
  models::{Pick, PrizeTier},
};

/// Counts how many of a ticket's picks match the posted winning numbers.
///
/// The bonus country pays on an exact country-and-number match only, never
/// through the standard value set. Every other country pays when its picked
/// value appears among the standard winning values, with each distinct value
/// credited at most once per ticket, so a ticket holding `7` under two
/// countries scores once even when both countries drew `7`.
///
/// A pick for a country with no posted result is skipped, as the number has
/// not been drawn yet. Duplicate countries within either input are malformed
/// and fail rather than skewing the count.
pub fn count_matches(
  picks: &[Pick],
  winning_numbers: &[Pick],
  bonus_code: &str,
) -> Result<u8, ContractError> {
  let mut winning_by_country: HashMap<&str, u16> =
    HashMap::with_capacity(winning_numbers.len());
  let mut standard_values: HashSet<u16> = HashSet::with_capacity(winning_numbers.len());

  for pick in winning_numbers.iter() {
    if winning_by_country
      .insert(pick.country.as_str(), pick.number)
      .is_some()
    {
      return Err(ContractError::DuplicateCountry);
    }
    if pick.country != bonus_code {
      standard_values.insert(pick.number);
    }
  }

  let mut n_matches: u8 = 0;
  let mut visited_countries: HashSet<&str> = HashSet::with_capacity(picks.len());
  let mut consumed_values: HashSet<u16> = HashSet::with_capacity(picks.len());
  let mut bonus_matched = false;

  for pick in picks.iter() {
    if !visited_countries.insert(pick.country.as_str()) {
      return Err(ContractError::DuplicateCountry);
    }
    if pick.country == bonus_code {
      if let Some(winning_number) = winning_by_country.get(bonus_code) {
        if !bonus_matched && pick.number == *winning_number {
          bonus_matched = true;
          n_matches += 1;
        }
      }
    } else {
      if !winning_by_country.contains_key(pick.country.as_str()) {
        continue;
      }
      if standard_values.contains(&pick.number) && consumed_values.insert(pick.number) {
        n_matches += 1;
      }
    }
  }

  Ok(n_matches)
}

/// Resolves the payout for a match count: the amount of the highest tier
/// whose threshold the count reaches, or zero below the lowest tier.
pub fn prize_for(
  n_matches: u8,
  tiers: &[PrizeTier],
) -> Result<Uint128, ContractError> {
  if tiers.is_empty() {
    return Err(ContractError::EmptyPrizeTable);
  }
  Ok(
    tiers
      .iter()
      .filter(|tier| tier.matches <= n_matches)
      .max_by_key(|tier| tier.matches)
      .map(|tier| tier.amount)
      .unwrap_or_else(Uint128::zero),
  )
}

/// The match count at which a ticket enters the jackpot tier.
pub fn jackpot_threshold(tiers: &[PrizeTier]) -> Result<u8, ContractError> {
  tiers
    .iter()
    .map(|tier| tier.matches)
    .max()
    .ok_or(ContractError::EmptyPrizeTable)
}

/// Rebuilds the prize table for one specific drawing, replacing the jackpot
/// tier's configured amount with an even share of the drawing's jackpot pot.
pub fn effective_tiers(
  tiers: &[PrizeTier],
  jackpot: Uint128,
  n_jackpot_tickets: u32,
) -> Vec<PrizeTier> {
  let mut effective = tiers.to_vec();
  if let Some(top) = effective.iter_mut().max_by_key(|tier| tier.matches) {
    top.amount = jackpot.multiply_ratio(1u128, n_jackpot_tickets.max(1) as u128);
  }
  effective
}
