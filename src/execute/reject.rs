use crate::{
  error::ContractError,
  state::{ensure_sender_is_owner, load_claim, CLAIMS},
};
use cosmwasm_std::{attr, Addr, DepsMut, Env, MessageInfo, Response, Uint128, Uint64};

/// Tombstones a held claim at zero. The claimant's tickets stay on record,
/// but the round can no longer be claimed.
pub fn reject(
  deps: DepsMut,
  env: Env,
  info: MessageInfo,
  claimant_addr: Addr,
  round_no: Uint64,
) -> Result<Response, ContractError> {
  ensure_sender_is_owner(deps.storage, &info.sender)?;

  let mut claim = load_claim(deps.storage, &claimant_addr, round_no)?;
  if claim.paid_at.is_some() {
    return Err(ContractError::AlreadyClaimed);
  }

  claim.amount = Uint128::zero();
  claim.winning_ticket_count = 0;
  claim.jackpot_ticket_count = 0;
  claim.paid_at = Some(env.block.time);
  CLAIMS.save(
    deps.storage,
    (claimant_addr.clone(), round_no.into()),
    &claim,
  )?;

  Ok(Response::new().add_attributes(vec![
    attr("action", "reject"),
    attr("address", claimant_addr.to_string()),
    attr("round_no", round_no.to_string()),
  ]))
}
