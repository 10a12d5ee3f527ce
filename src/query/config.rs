use crate::error::ContractError;
use crate::models::Config;
use crate::state::load_config;
use cosmwasm_std::Deps;

pub fn config(deps: Deps) -> Result<Config, ContractError> {
  load_config(deps.storage)
}
