use std::{collections::HashSet, marker::PhantomData};

use crate::{
  error::ContractError,
  matching::{count_matches, jackpot_threshold},
  models::{Drawing, Pick, RoundStatus},
  state::{
    ensure_round_can_end, ensure_sender_is_owner, load_country_ranges, load_drawing,
    CONFIG_BONUS_CODE, CONFIG_COUNTRIES, CONFIG_JACKPOT_SALES_PCT, CONFIG_JACKPOT_SEED,
    CONFIG_MARKETING, CONFIG_PRICE, CONFIG_PRIZE_TIERS, CONFIG_ROUND_SECONDS,
    CONFIG_USE_APPROVAL, DRAWINGS, JACKPOT, ROUND_NO, ROUND_START, ROUND_STATUS,
    ROUND_TICKET_COUNT, STAGED_CONFIG, TICKETS,
  },
};
use cosmwasm_std::{attr, Addr, DepsMut, Env, MessageInfo, Order, Response, Storage, Uint64};
use cw_storage_plus::Bound;

pub const TICKET_PAGE_SIZE: usize = 500;

/// Entry point for the official results upload. The first call carries the
/// winning numbers, closes the round, and tallies the first page of sold
/// tickets; while the tally is incomplete, repeated calls without numbers
/// continue from the stored cursor.
pub fn post_results(
  deps: DepsMut,
  env: Env,
  info: MessageInfo,
  maybe_numbers: Option<Vec<Pick>>,
) -> Result<Response, ContractError> {
  ensure_sender_is_owner(deps.storage, &info.sender)?;
  let round_no = ROUND_NO.load(deps.storage)?;
  match ROUND_STATUS.load(deps.storage)? {
    RoundStatus::Active => {
      let numbers = maybe_numbers.ok_or(ContractError::ValidationError)?;
      start_drawing(deps, env, round_no, numbers)
    },
    RoundStatus::Drawing => {
      if maybe_numbers.is_some() {
        return Err(ContractError::InvalidGameState);
      }
      continue_drawing(deps, env, round_no)
    },
  }
}

fn start_drawing(
  deps: DepsMut,
  env: Env,
  round_no: Uint64,
  numbers: Vec<Pick>,
) -> Result<Response, ContractError> {
  ensure_round_can_end(deps.storage, &env.block)?;
  require_valid_winning_numbers(deps.storage, &numbers)?;

  let countries = CONFIG_COUNTRIES.load(deps.storage)?;
  let bonus_code = CONFIG_BONUS_CODE.load(deps.storage)?;
  let ticket_count = ROUND_TICKET_COUNT.load(deps.storage)?;

  // Init the Drawing record, which aggregates tally totals accumulated
  // across as many transactions as the tally takes.
  let mut drawing = Drawing {
    winning_numbers: numbers,
    match_counts: vec![0; countries.len() + 1],
    ticket_count,
    processed_ticket_count: 0,
    jackpot: JACKPOT.load(deps.storage)?,
    cursor: None,
    posted_at: env.block.time,
  };

  if ticket_count > 0 {
    process_next_page(deps.storage, round_no, &bonus_code, &mut drawing)?;
  }

  if drawing.is_complete() {
    finish_drawing(deps.storage, &env, &mut drawing)?;
  } else {
    ROUND_STATUS.save(deps.storage, &RoundStatus::Drawing)?;
  }

  DRAWINGS.save(deps.storage, round_no.into(), &drawing)?;

  Ok(Response::new().add_attributes(vec![
    attr("action", "post_results"),
    attr("round_no", round_no.to_string()),
    attr("is_complete", drawing.is_complete().to_string()),
  ]))
}

fn continue_drawing(
  deps: DepsMut,
  env: Env,
  round_no: Uint64,
) -> Result<Response, ContractError> {
  let mut drawing = load_drawing(deps.storage, round_no)?;
  if drawing.is_complete() {
    return Err(ContractError::InvalidGameState);
  }

  let bonus_code = CONFIG_BONUS_CODE.load(deps.storage)?;
  process_next_page(deps.storage, round_no, &bonus_code, &mut drawing)?;

  if drawing.is_complete() {
    finish_drawing(deps.storage, &env, &mut drawing)?;
  }

  DRAWINGS.save(deps.storage, round_no.into(), &drawing)?;

  Ok(Response::new().add_attributes(vec![
    attr("action", "post_results"),
    attr("round_no", round_no.to_string()),
    attr("is_complete", drawing.is_complete().to_string()),
  ]))
}

fn process_next_page(
  storage: &mut dyn Storage,
  round_no: Uint64,
  bonus_code: &str,
  drawing: &mut Drawing,
) -> Result<(), ContractError> {
  let min = drawing
    .cursor
    .clone()
    .map(|cursor| Bound::Exclusive((cursor, PhantomData)));

  // Total number of tickets processed in this call:
  let mut processed_ticket_count: u32 = 0;

  // The last TICKETS Map key in the batch, used upon the next execution as a
  // cursor (for pagination):
  let mut cursor: Option<(Addr, String)> = None;

  // Frequency distribution for this batch, merged into the Drawing below.
  let mut match_counts: Vec<u32> = vec![0; drawing.match_counts.len()];

  for result in TICKETS
    .sub_prefix(round_no.into())
    .range(storage, min, None, Order::Ascending)
    .take(TICKET_PAGE_SIZE)
  {
    let ((addr, hash), picks) = result?;
    let n_matching_numbers = count_matches(&picks, &drawing.winning_numbers, bonus_code)?;
    match_counts[n_matching_numbers as usize] += 1;
    processed_ticket_count += 1;
    cursor = Some((addr, hash));
  }

  drawing.processed_ticket_count += processed_ticket_count;
  drawing.cursor = cursor;
  for (i, n) in match_counts.iter().enumerate() {
    drawing.match_counts[i] += n;
  }

  Ok(())
}

fn finish_drawing(
  storage: &mut dyn Storage,
  env: &Env,
  drawing: &mut Drawing,
) -> Result<(), ContractError> {
  drawing.cursor = None;

  // Reset the pot only when the jackpot tier was actually hit; an unwon
  // jackpot rolls into the next round.
  let tiers = CONFIG_PRIZE_TIERS.load(storage)?;
  let threshold = jackpot_threshold(&tiers)?;
  if drawing.tickets_with_at_least(threshold) > 0 {
    let seed = CONFIG_JACKPOT_SEED.load(storage)?;
    JACKPOT.save(storage, &seed)?;
  }

  reset_round_state(storage, env)
}

/// Clean up last round's state and increment the round counter.
pub fn reset_round_state(
  storage: &mut dyn Storage,
  env: &Env,
) -> Result<(), ContractError> {
  ROUND_STATUS.save(storage, &RoundStatus::Active)?;
  ROUND_START.save(storage, &env.block.time)?;
  ROUND_NO.update(storage, |n| -> Result<_, ContractError> {
    Ok(n + Uint64::one())
  })?;
  ROUND_TICKET_COUNT.save(storage, &0)?;

  // If there is a new config staged, it takes effect here at the round
  // boundary. Note that we never update the TOKEN config var, since claims
  // against past rounds must remain payable in the original token.
  if let Some(new_config) = STAGED_CONFIG.load(storage)? {
    CONFIG_PRICE.save(storage, &new_config.price)?;
    CONFIG_COUNTRIES.save(storage, &new_config.countries)?;
    CONFIG_BONUS_CODE.save(storage, &new_config.bonus_code)?;
    CONFIG_PRIZE_TIERS.save(storage, &new_config.prize_tiers)?;
    CONFIG_ROUND_SECONDS.save(storage, &new_config.round_seconds)?;
    CONFIG_JACKPOT_SEED.save(storage, &new_config.jackpot_seed)?;
    CONFIG_JACKPOT_SALES_PCT.save(storage, &new_config.jackpot_sales_pct)?;
    CONFIG_USE_APPROVAL.save(storage, &new_config.use_approval)?;
    CONFIG_MARKETING.save(storage, &new_config.marketing)?;

    // clear staged Config changes from state
    STAGED_CONFIG.save(storage, &None)?;
  }

  Ok(())
}

fn require_valid_winning_numbers(
  storage: &dyn Storage,
  numbers: &[Pick],
) -> Result<(), ContractError> {
  // A partial upload is allowed when a national feed is late, but an empty
  // one is malformed.
  if numbers.is_empty() {
    return Err(ContractError::ValidationError);
  }

  let ranges = load_country_ranges(storage)?;
  let mut visited: HashSet<&str> = HashSet::with_capacity(numbers.len());
  for pick in numbers.iter() {
    if !visited.insert(pick.country.as_str()) {
      return Err(ContractError::DuplicateCountry);
    }
    let total_numbers = ranges
      .get(&pick.country)
      .ok_or(ContractError::UnknownCountry)?;
    if pick.number < 1 || pick.number > *total_numbers {
      return Err(ContractError::NumberOutOfBounds);
    }
  }

  Ok(())
}
