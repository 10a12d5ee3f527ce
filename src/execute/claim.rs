use crate::{
  error::ContractError,
  matching::{count_matches, effective_tiers, jackpot_threshold, prize_for},
  models::{Account, Claim, Drawing},
  state::{
    load_drawing, ACCOUNTS, CLAIMS, CONFIG_BONUS_CODE, CONFIG_PRIZE_TIERS, CONFIG_TOKEN,
    CONFIG_USE_APPROVAL, TICKETS,
  },
  util::build_send_submsg,
};
use cosmwasm_std::{
  attr, Addr, DepsMut, Env, MessageInfo, Order, Response, Storage, Uint128, Uint64,
};

pub fn claim(
  deps: DepsMut,
  env: Env,
  info: MessageInfo,
  round_no: Uint64,
) -> Result<Response, ContractError> {
  let drawing = load_drawing(deps.storage, round_no)?;
  if !drawing.is_complete() {
    return Err(ContractError::InvalidGameState);
  }

  let key = (info.sender.clone(), round_no.u64());
  let maybe_existing = CLAIMS.may_load(deps.storage, key.clone())?;
  if let Some(existing) = &maybe_existing {
    if existing.paid_at.is_some() {
      return Err(ContractError::AlreadyClaimed);
    }
  }

  let is_new = maybe_existing.is_none();
  let mut claim = match maybe_existing {
    Some(existing) => existing,
    None => build_claim(deps.storage, &info.sender, round_no, &drawing)?,
  };

  if claim.amount.is_zero() {
    return Err(ContractError::ClaimNotFound);
  }

  let resp = Response::new().add_attributes(vec![
    attr("action", "claim"),
    attr("round_no", round_no.to_string()),
    attr("amount", claim.amount.to_string()),
  ]);

  // Jackpot-bearing claims are held for moderation while approval is on. The
  // first contact records the claim; asking again while it is held is an
  // error.
  if CONFIG_USE_APPROVAL.load(deps.storage)?
    && claim.jackpot_ticket_count > 0
    && !claim.is_approved
  {
    if is_new {
      CLAIMS.save(deps.storage, key, &claim)?;
      return Ok(resp.add_attribute("status", "pending_approval"));
    }
    return Err(ContractError::PendingApproval);
  }

  claim.paid_at = Some(env.block.time);
  CLAIMS.save(deps.storage, key, &claim)?;

  ACCOUNTS.update(
    deps.storage,
    info.sender.clone(),
    |maybe_account| -> Result<_, ContractError> {
      let mut account = maybe_account.unwrap_or_else(Account::new);
      account.totals.wins += claim.winning_ticket_count;
      account.totals.amount_won += claim.amount;
      Ok(account)
    },
  )?;

  let token = CONFIG_TOKEN.load(deps.storage)?;
  Ok(resp.add_submessage(build_send_submsg(&info.sender, claim.amount, &token)?))
}

/// Computes a player's winnings for one completed drawing, fresh from their
/// stored tickets. Jackpot-tier tickets split the drawing's jackpot pot
/// evenly; lower tiers pay the configured fixed amounts.
pub fn build_claim(
  storage: &dyn Storage,
  owner: &Addr,
  round_no: Uint64,
  drawing: &Drawing,
) -> Result<Claim, ContractError> {
  let bonus_code = CONFIG_BONUS_CODE.load(storage)?;
  let tiers = CONFIG_PRIZE_TIERS.load(storage)?;
  let threshold = jackpot_threshold(&tiers)?;
  let n_jackpot_tickets = drawing.tickets_with_at_least(threshold);
  let effective = effective_tiers(&tiers, drawing.jackpot, n_jackpot_tickets);

  let mut amount = Uint128::zero();
  let mut winning_ticket_count: u32 = 0;
  let mut jackpot_ticket_count: u32 = 0;

  for result in TICKETS
    .prefix((round_no.into(), owner.clone()))
    .range(storage, None, None, Order::Ascending)
  {
    let (_, picks) = result?;
    let n_matching_numbers = count_matches(&picks, &drawing.winning_numbers, &bonus_code)?;
    let prize = prize_for(n_matching_numbers, &effective)?;
    if !prize.is_zero() {
      winning_ticket_count += 1;
      amount += prize;
    }
    if n_matching_numbers >= threshold {
      jackpot_ticket_count += 1;
    }
  }

  Ok(Claim {
    round_no,
    amount,
    winning_ticket_count,
    jackpot_ticket_count,
    is_approved: false,
    paid_at: None,
  })
}
