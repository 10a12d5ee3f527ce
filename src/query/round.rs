use crate::error::ContractError;
use crate::msg::RoundView;
use crate::state::{
  CONFIG_ROUND_SECONDS, JACKPOT, ROUND_NO, ROUND_START, ROUND_STATUS, ROUND_TICKET_COUNT,
};
use cosmwasm_std::Deps;

pub fn round(deps: Deps) -> Result<RoundView, ContractError> {
  let start = ROUND_START.load(deps.storage)?;
  let round_seconds = CONFIG_ROUND_SECONDS.load(deps.storage)?;

  Ok(RoundView {
    round_no: ROUND_NO.load(deps.storage)?,
    status: ROUND_STATUS.load(deps.storage)?,
    end: start.plus_seconds(round_seconds.u64()),
    start,
    ticket_count: ROUND_TICKET_COUNT.load(deps.storage)?,
    jackpot: JACKPOT.load(deps.storage)?,
  })
}
