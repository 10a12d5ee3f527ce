use crate::{
  error::ContractError,
  matching::{count_matches, effective_tiers, jackpot_threshold, prize_for},
  models::{Drawing, Pick},
  msg::MatchResult,
  state::{load_drawing, CONFIG_BONUS_CODE, CONFIG_PRIZE_TIERS, DRAWINGS, ROUND_NO},
};
use cosmwasm_std::{Deps, Uint64};

/// Scores an arbitrary ticket against a round's posted winning numbers,
/// computed fresh on every request. Defaults to the most recent round with
/// posted results, which may still be mid-tally.
pub fn evaluate(
  deps: Deps,
  ticket: Vec<Pick>,
  maybe_round_no: Option<Uint64>,
) -> Result<MatchResult, ContractError> {
  let (round_no, drawing) = match maybe_round_no {
    Some(round_no) => (round_no, load_drawing(deps.storage, round_no)?),
    None => latest_drawing(deps)?,
  };

  let bonus_code = CONFIG_BONUS_CODE.load(deps.storage)?;
  let tiers = CONFIG_PRIZE_TIERS.load(deps.storage)?;
  let threshold = jackpot_threshold(&tiers)?;
  let effective = effective_tiers(
    &tiers,
    drawing.jackpot,
    drawing.tickets_with_at_least(threshold),
  );

  let match_count = count_matches(&ticket, &drawing.winning_numbers, &bonus_code)?;
  let prize = prize_for(match_count, &effective)?;

  Ok(MatchResult {
    round_no,
    match_count,
    prize,
  })
}

fn latest_drawing(deps: Deps) -> Result<(Uint64, Drawing), ContractError> {
  let round_no = ROUND_NO.load(deps.storage)?;
  if let Some(drawing) = DRAWINGS.may_load(deps.storage, round_no.into())? {
    return Ok((round_no, drawing));
  }
  if round_no > Uint64::one() {
    let prev = round_no - Uint64::one();
    if let Some(drawing) = DRAWINGS.may_load(deps.storage, prev.into())? {
      return Ok((prev, drawing));
    }
  }
  Err(ContractError::InvalidRoundNo)
}
