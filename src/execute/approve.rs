use crate::{
  error::ContractError,
  state::{ensure_sender_is_owner, CLAIMS},
};
use cosmwasm_std::{attr, Addr, DepsMut, Env, MessageInfo, Response, Uint64};

pub fn approve(
  deps: DepsMut,
  _env: Env,
  info: MessageInfo,
  address: Addr,
  round_no: Uint64,
) -> Result<Response, ContractError> {
  ensure_sender_is_owner(deps.storage, &info.sender)?;

  CLAIMS.update(
    deps.storage,
    (address.clone(), round_no.into()),
    |maybe_claim| -> Result<_, ContractError> {
      if let Some(mut claim) = maybe_claim {
        if claim.paid_at.is_some() {
          return Err(ContractError::AlreadyClaimed);
        }
        if claim.is_approved {
          return Err(ContractError::AlreadyApproved);
        }
        claim.is_approved = true;
        return Ok(claim);
      }
      Err(ContractError::ClaimNotFound)
    },
  )?;

  Ok(Response::new().add_attributes(vec![
    attr("action", "approve"),
    attr("address", address.to_string()),
    attr("round_no", round_no.to_string()),
  ]))
}
