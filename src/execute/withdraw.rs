use crate::{
  error::ContractError,
  state::{ensure_sender_is_owner, require_active_game_state, CONFIG_TOKEN},
  util::{build_send_submsg, get_token_balance},
};
use cosmwasm_std::{attr, DepsMut, Env, MessageInfo, Response, Uint128};

pub fn withdraw(
  deps: DepsMut,
  env: Env,
  info: MessageInfo,
  amount: Uint128,
) -> Result<Response, ContractError> {
  ensure_sender_is_owner(deps.storage, &info.sender)?;
  require_active_game_state(deps.storage)?;

  if amount.is_zero() {
    return Err(ContractError::ValidationError);
  }

  let token = CONFIG_TOKEN.load(deps.storage)?;
  let contract_balance = get_token_balance(deps.querier, &env.contract.address, &token)?;
  if contract_balance < amount {
    return Err(ContractError::InsufficientFunds);
  }

  Ok(
    Response::new()
      .add_attributes(vec![
        attr("action", "withdraw"),
        attr("amount", amount.to_string()),
      ])
      .add_submessage(build_send_submsg(&info.sender, amount, &token)?),
  )
}
