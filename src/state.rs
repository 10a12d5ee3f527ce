use std::collections::HashMap;

use crate::error::ContractError;
use crate::models::{
  Account, Claim, Config, Country, Drawing, MarketingInfo, Pick, PrizeTier, RoundStatus, Token,
};
use crate::msg::InstantiateMsg;
use cosmwasm_std::{
  Addr, BlockInfo, DepsMut, Env, MessageInfo, Storage, Timestamp, Uint128, Uint64,
};
use cw_storage_plus::{Item, Map};

pub const CONFIG_TOKEN: Item<Token> = Item::new("config_token");
pub const CONFIG_PRICE: Item<Uint128> = Item::new("config_price");
pub const CONFIG_COUNTRIES: Item<Vec<Country>> = Item::new("config_countries");
pub const CONFIG_BONUS_CODE: Item<String> = Item::new("config_bonus_code");
pub const CONFIG_PRIZE_TIERS: Item<Vec<PrizeTier>> = Item::new("config_prize_tiers");
pub const CONFIG_ROUND_SECONDS: Item<Uint64> = Item::new("config_round_seconds");
pub const CONFIG_JACKPOT_SEED: Item<Uint128> = Item::new("config_jackpot_seed");
pub const CONFIG_JACKPOT_SALES_PCT: Item<Uint128> = Item::new("config_jackpot_sales_pct");
pub const CONFIG_USE_APPROVAL: Item<bool> = Item::new("config_use_approval");
pub const CONFIG_MARKETING: Item<MarketingInfo> = Item::new("config_marketing");

pub const OWNER: Item<Addr> = Item::new("owner");
pub const STAGED_CONFIG: Item<Option<Config>> = Item::new("staged_config");

pub const ROUND_STATUS: Item<RoundStatus> = Item::new("game_state");
pub const ROUND_NO: Item<Uint64> = Item::new("round_counter");
pub const ROUND_START: Item<Timestamp> = Item::new("round_start");
pub const ROUND_TICKET_COUNT: Item<u32> = Item::new("round_ticket_count");
pub const JACKPOT: Item<Uint128> = Item::new("jackpot");

pub const ACCOUNTS: Map<Addr, Account> = Map::new("accounts");
pub const TICKETS: Map<(u64, Addr, String), Vec<Pick>> = Map::new("tickets");
pub const CLAIMS: Map<(Addr, u64), Claim> = Map::new("claims");
pub const DRAWINGS: Map<u64, Drawing> = Map::new("drawings");

pub fn initialize(
  deps: DepsMut,
  env: &Env,
  info: &MessageInfo,
  msg: &InstantiateMsg,
) -> Result<(), ContractError> {
  msg.config.validate(deps.api)?;

  ROUND_NO.save(deps.storage, &Uint64::one())?;
  ROUND_START.save(deps.storage, &env.block.time)?;
  ROUND_TICKET_COUNT.save(deps.storage, &0)?;
  ROUND_STATUS.save(deps.storage, &RoundStatus::Active)?;
  JACKPOT.save(deps.storage, &msg.config.jackpot_seed)?;
  STAGED_CONFIG.save(deps.storage, &None)?;
  OWNER.save(
    deps.storage,
    &msg.owner.clone().unwrap_or_else(|| info.sender.clone()),
  )?;

  CONFIG_TOKEN.save(deps.storage, &msg.config.token)?;
  CONFIG_PRICE.save(deps.storage, &msg.config.price)?;
  CONFIG_COUNTRIES.save(deps.storage, &msg.config.countries)?;
  CONFIG_BONUS_CODE.save(deps.storage, &msg.config.bonus_code)?;
  CONFIG_PRIZE_TIERS.save(deps.storage, &msg.config.prize_tiers)?;
  CONFIG_ROUND_SECONDS.save(deps.storage, &msg.config.round_seconds)?;
  CONFIG_JACKPOT_SEED.save(deps.storage, &msg.config.jackpot_seed)?;
  CONFIG_JACKPOT_SALES_PCT.save(deps.storage, &msg.config.jackpot_sales_pct)?;
  CONFIG_USE_APPROVAL.save(deps.storage, &msg.config.use_approval)?;
  CONFIG_MARKETING.save(deps.storage, &msg.config.marketing)?;

  Ok(())
}

pub fn ensure_sender_is_owner(
  storage: &dyn Storage,
  principal: &Addr,
) -> Result<(), ContractError> {
  if OWNER.load(storage)? != *principal {
    Err(ContractError::NotAuthorized)
  } else {
    Ok(())
  }
}

pub fn require_active_game_state(storage: &dyn Storage) -> Result<(), ContractError> {
  if ROUND_STATUS.load(storage)? != RoundStatus::Active {
    return Err(ContractError::InvalidGameState);
  }
  Ok(())
}

/// True once the current round has run its configured duration and results
/// may be posted.
pub fn is_ready(
  storage: &dyn Storage,
  block: &BlockInfo,
) -> Result<bool, ContractError> {
  if ROUND_STATUS.load(storage)? != RoundStatus::Active {
    return Ok(false);
  }
  let round_start = ROUND_START.load(storage)?;
  let round_seconds = CONFIG_ROUND_SECONDS.load(storage)?;
  Ok(round_start.seconds() + round_seconds.u64() <= block.time.seconds())
}

pub fn ensure_round_can_end(
  storage: &dyn Storage,
  block: &BlockInfo,
) -> Result<(), ContractError> {
  let round_start = ROUND_START.load(storage)?;
  let round_seconds = CONFIG_ROUND_SECONDS.load(storage)?;
  if round_start.seconds() + round_seconds.u64() > block.time.seconds() {
    return Err(ContractError::ActiveRound);
  }
  Ok(())
}

pub fn load_drawing(
  storage: &dyn Storage,
  round_no: Uint64,
) -> Result<Drawing, ContractError> {
  DRAWINGS
    .load(storage, round_no.into())
    .map_err(|_| ContractError::DrawingNotFound)
}

pub fn load_claim(
  storage: &dyn Storage,
  owner: &Addr,
  round_no: Uint64,
) -> Result<Claim, ContractError> {
  CLAIMS
    .load(storage, (owner.clone(), round_no.into()))
    .map_err(|_| ContractError::ClaimNotFound)
}

pub fn load_country_ranges(
  storage: &dyn Storage
) -> Result<HashMap<String, u16>, ContractError> {
  let countries = CONFIG_COUNTRIES.load(storage)?;
  let mut ranges: HashMap<String, u16> = HashMap::with_capacity(countries.len());
  for country in countries.into_iter() {
    ranges.insert(country.code, country.total_numbers);
  }
  Ok(ranges)
}

pub fn load_config(storage: &dyn Storage) -> Result<Config, ContractError> {
  Ok(Config {
    token: CONFIG_TOKEN.load(storage)?,
    price: CONFIG_PRICE.load(storage)?,
    countries: CONFIG_COUNTRIES.load(storage)?,
    bonus_code: CONFIG_BONUS_CODE.load(storage)?,
    prize_tiers: CONFIG_PRIZE_TIERS.load(storage)?,
    round_seconds: CONFIG_ROUND_SECONDS.load(storage)?,
    jackpot_seed: CONFIG_JACKPOT_SEED.load(storage)?,
    jackpot_sales_pct: CONFIG_JACKPOT_SALES_PCT.load(storage)?,
    use_approval: CONFIG_USE_APPROVAL.load(storage)?,
    marketing: CONFIG_MARKETING.load(storage)?,
  })
}
