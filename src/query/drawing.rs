use crate::error::ContractError;
use crate::msg::DrawingView;
use crate::state::DRAWINGS;
use cosmwasm_std::{Deps, Uint64};

pub fn drawing(
  deps: Deps,
  round_no: Uint64,
) -> Result<Option<DrawingView>, ContractError> {
  Ok(
    DRAWINGS
      .may_load(deps.storage, round_no.into())?
      .map(|drawing| DrawingView {
        round_no,
        is_complete: drawing.is_complete(),
        winning_numbers: drawing.winning_numbers,
        match_counts: drawing.match_counts,
        ticket_count: drawing.ticket_count,
        processed_ticket_count: drawing.processed_ticket_count,
        jackpot: drawing.jackpot,
        posted_at: drawing.posted_at,
      }),
  )
}
