use std::collections::{HashMap, HashSet};

use crate::{
  error::ContractError,
  models::Account,
  state::{
    load_country_ranges, require_active_game_state, ACCOUNTS, CONFIG_JACKPOT_SALES_PCT,
    CONFIG_PRICE, CONFIG_TOKEN, JACKPOT, ROUND_NO, ROUND_TICKET_COUNT, TICKETS,
  },
  util::{build_cw20_transfer_from_msg, get_cw20_balance, hash_picks, mul_pct},
};
use cosmwasm_std::{
  attr, Addr, DepsMut, Empty, Env, MessageInfo, QuerierWrapper, Response, Storage, Uint128,
  Uint64, WasmMsg,
};
use cw_utils::must_pay;

use crate::models::{Pick, Token};

pub fn buy(
  deps: DepsMut,
  env: Env,
  info: MessageInfo,
  tickets: Vec<Vec<Pick>>,
) -> Result<Response, ContractError> {
  require_active_game_state(deps.storage)?;

  if tickets.is_empty() {
    return Err(ContractError::ValidationError);
  }

  let ticket_price = CONFIG_PRICE.load(deps.storage)?;
  let round_no = ROUND_NO.load(deps.storage)?;
  let ranges = load_country_ranges(deps.storage)?;
  let total_price = Uint128::from(tickets.len() as u64) * ticket_price;

  // Upsert player account
  ACCOUNTS.update(
    deps.storage,
    info.sender.clone(),
    |maybe_account| -> Result<_, ContractError> {
      let mut account = maybe_account.unwrap_or_else(Account::new);
      account.totals.tickets += tickets.len() as u32;
      Ok(account)
    },
  )?;

  // Process each ticket in order, updating state
  for picks in tickets.iter() {
    process_ticket(deps.storage, &info.sender, round_no, picks, &ranges)?;
  }

  // A configured cut of every sale feeds the rolling jackpot.
  let jackpot_cut = mul_pct(total_price, CONFIG_JACKPOT_SALES_PCT.load(deps.storage)?);
  if !jackpot_cut.is_zero() {
    JACKPOT.update(deps.storage, |pot| -> Result<_, ContractError> {
      Ok(pot + jackpot_cut)
    })?;
  }

  let resp = Response::new().add_attributes(vec![
    attr("action", "buy"),
    attr("round_no", round_no.to_string()),
    attr("ticket_count", tickets.len().to_string()),
  ]);

  Ok(
    if let Some(msg) = take_payment(
      deps.storage,
      deps.querier,
      &env.contract.address,
      &info,
      total_price,
    )? {
      resp.add_message(msg)
    } else {
      resp
    },
  )
}

pub fn process_ticket(
  storage: &mut dyn Storage,
  sender: &Addr,
  round_no: Uint64,
  picks: &Vec<Pick>,
  ranges: &HashMap<String, u16>,
) -> Result<(), ContractError> {
  require_valid_picks(picks, ranges)?;

  // Build key into ticket map
  let hash = hash_picks(picks);
  let key = (round_no.into(), sender.clone(), hash);

  // Insert the ticket or error out if the sender already holds it.
  TICKETS.update(storage, key, |existing| -> Result<_, ContractError> {
    if existing.is_some() {
      Err(ContractError::TicketExists)
    } else {
      Ok(picks.clone())
    }
  })?;

  ROUND_TICKET_COUNT.update(storage, |n| -> Result<_, ContractError> { Ok(n + 1) })?;

  Ok(())
}

fn require_valid_picks(
  picks: &Vec<Pick>,
  ranges: &HashMap<String, u16>,
) -> Result<(), ContractError> {
  if picks.is_empty() {
    return Err(ContractError::ValidationError);
  }

  let mut visited: HashSet<&str> = HashSet::with_capacity(picks.len());
  for pick in picks.iter() {
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

fn take_payment(
  storage: &dyn Storage,
  querier: QuerierWrapper<Empty>,
  contract_address: &Addr,
  info: &MessageInfo,
  amount: Uint128,
) -> Result<Option<WasmMsg>, ContractError> {
  Ok(match CONFIG_TOKEN.load(storage)? {
    // Take native token payment attached to the tx
    Token::Native { denom } => {
      let paid = must_pay(info, &denom).map_err(|_| ContractError::InsufficientFunds)?;
      if paid != amount {
        return Err(ContractError::InsufficientFunds);
      }
      None
    },
    // Take CW20 payment
    Token::Cw20 {
      address: cw20_address,
    } => {
      let balance = get_cw20_balance(querier, &cw20_address, &info.sender)?;
      if balance < amount {
        return Err(ContractError::InsufficientFunds);
      }
      Some(build_cw20_transfer_from_msg(
        &info.sender,
        contract_address,
        &cw20_address,
        amount,
      )?)
    },
  })
}
