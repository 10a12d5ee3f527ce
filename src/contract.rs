use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state;
use cosmwasm_std::{entry_point, to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;

const CONTRACT_NAME: &str = "crates.io:cw-world-lotto";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
  deps: DepsMut,
  env: Env,
  info: MessageInfo,
  msg: InstantiateMsg,
) -> Result<Response, ContractError> {
  set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
  state::initialize(deps, &env, &info, &msg)?;
  Ok(Response::new().add_attribute("action", "instantiate"))
}

#[entry_point]
pub fn execute(
  deps: DepsMut,
  env: Env,
  info: MessageInfo,
  msg: ExecuteMsg,
) -> Result<Response, ContractError> {
  match msg {
    ExecuteMsg::Buy { tickets } => execute::buy(deps, env, info, tickets),
    ExecuteMsg::PostResults { numbers } => execute::post_results(deps, env, info, numbers),
    ExecuteMsg::Claim { round_no } => execute::claim(deps, env, info, round_no),
    ExecuteMsg::Approve { address, round_no } => {
      execute::approve(deps, env, info, address, round_no)
    },
    ExecuteMsg::Reject { address, round_no } => {
      execute::reject(deps, env, info, address, round_no)
    },
    ExecuteMsg::SetConfig { config } => execute::set_config(deps, env, info, config),
    ExecuteMsg::Withdraw { amount } => execute::withdraw(deps, env, info, amount),
  }
}

#[entry_point]
pub fn query(
  deps: Deps,
  env: Env,
  msg: QueryMsg,
) -> Result<Binary, ContractError> {
  let result = match msg {
    QueryMsg::Evaluate { ticket, round_no } => {
      to_binary(&query::evaluate(deps, ticket, round_no)?)
    },
    QueryMsg::Drawing { round_no } => to_binary(&query::drawing(deps, round_no)?),
    QueryMsg::Round {} => to_binary(&query::round(deps)?),
    QueryMsg::Config {} => to_binary(&query::config(deps)?),
    QueryMsg::Account { address } => to_binary(&query::account(deps, address)?),
    QueryMsg::ClaimsPendingApproval {} => to_binary(&query::claims_pending_approval(deps)?),
    QueryMsg::Ready {} => to_binary(&query::ready(deps, env)?),
  }?;
  Ok(result)
}

#[entry_point]
pub fn migrate(
  deps: DepsMut,
  _env: Env,
  _msg: MigrateMsg,
) -> Result<Response, ContractError> {
  set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
  Ok(Response::default())
}
