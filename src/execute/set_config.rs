use crate::{
  error::ContractError,
  models::Config,
  state::{ensure_sender_is_owner, STAGED_CONFIG},
};
use cosmwasm_std::{attr, DepsMut, Env, MessageInfo, Response};

/// Stages a config swap. Staged changes take effect at the next round
/// boundary so an open round's rules never change under sold tickets.
pub fn set_config(
  deps: DepsMut,
  _env: Env,
  info: MessageInfo,
  config: Config,
) -> Result<Response, ContractError> {
  ensure_sender_is_owner(deps.storage, &info.sender)?;
  config.validate(deps.api)?;

  STAGED_CONFIG.save(deps.storage, &Some(config))?;

  Ok(Response::new().add_attributes(vec![attr("action", "set_config")]))
}
