use cosmwasm_std::{Deps, Order, Uint64};

use crate::{error::ContractError, msg::ClaimView, state::CLAIMS};

/// The moderation queue: jackpot-bearing claims waiting on an approve or
/// reject decision.
pub fn claims_pending_approval(deps: Deps) -> Result<Vec<ClaimView>, ContractError> {
  let mut claims: Vec<ClaimView> = Vec::new();

  for result in CLAIMS.range(deps.storage, None, None, Order::Ascending) {
    let ((owner, round_no), claim) = result?;
    if claim.paid_at.is_none() && !claim.is_approved && claim.jackpot_ticket_count > 0 {
      claims.push(ClaimView {
        owner,
        round_no: Uint64::from(round_no),
        amount: claim.amount,
        winning_ticket_count: claim.winning_ticket_count,
        jackpot_ticket_count: claim.jackpot_ticket_count,
        is_approved: claim.is_approved,
        is_paid: false,
      });
    }
  }

  Ok(claims)
}
