use crate::{
  error::ContractError,
  matching::{count_matches, effective_tiers, jackpot_threshold, prize_for},
  msg::{AccountView, ClaimView, MatchResult, TicketView},
  state::{ACCOUNTS, CLAIMS, CONFIG_BONUS_CODE, CONFIG_PRIZE_TIERS, DRAWINGS, ROUND_NO, TICKETS},
};
use cosmwasm_std::{Addr, Deps, Order, Uint64};

/// A player's lifetime totals, current-round tickets, and claim history.
/// Ticket results appear as soon as the current round has posted winning
/// numbers; until then they are unscored.
pub fn account(
  deps: Deps,
  address: Addr,
) -> Result<Option<AccountView>, ContractError> {
  let maybe_account = ACCOUNTS.may_load(deps.storage, address.clone())?;
  let account = match maybe_account {
    Some(account) => account,
    None => return Ok(None),
  };

  let round_no = ROUND_NO.load(deps.storage)?;
  let maybe_drawing = DRAWINGS.may_load(deps.storage, round_no.into())?;

  // Scoring context only exists once results are posted for this round.
  let scoring = match &maybe_drawing {
    Some(drawing) => {
      let bonus_code = CONFIG_BONUS_CODE.load(deps.storage)?;
      let tiers = CONFIG_PRIZE_TIERS.load(deps.storage)?;
      let threshold = jackpot_threshold(&tiers)?;
      let effective = effective_tiers(
        &tiers,
        drawing.jackpot,
        drawing.tickets_with_at_least(threshold),
      );
      Some((bonus_code, effective))
    },
    None => None,
  };

  let mut tickets: Vec<TicketView> = Vec::new();
  for result in TICKETS
    .prefix((round_no.into(), address.clone()))
    .range(deps.storage, None, None, Order::Ascending)
  {
    let (_, picks) = result?;
    let match_result = match (&maybe_drawing, &scoring) {
      (Some(drawing), Some((bonus_code, effective))) => {
        let match_count = count_matches(&picks, &drawing.winning_numbers, bonus_code)?;
        Some(MatchResult {
          round_no,
          match_count,
          prize: prize_for(match_count, effective)?,
        })
      },
      _ => None,
    };
    tickets.push(TicketView {
      picks,
      result: match_result,
    });
  }

  let mut claims: Vec<ClaimView> = Vec::new();
  for result in CLAIMS
    .prefix(address.clone())
    .range(deps.storage, None, None, Order::Ascending)
  {
    let (claim_round_no, claim) = result?;
    claims.push(ClaimView {
      owner: address.clone(),
      round_no: Uint64::from(claim_round_no),
      amount: claim.amount,
      winning_ticket_count: claim.winning_ticket_count,
      jackpot_ticket_count: claim.jackpot_ticket_count,
      is_approved: claim.is_approved,
      is_paid: claim.paid_at.is_some(),
    });
  }

  Ok(Some(AccountView {
    totals: account.totals,
    tickets,
    claims,
  }))
}
