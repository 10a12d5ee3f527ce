use cosmwasm_std::{
  to_binary, Addr, BankMsg, Coin, Empty, QuerierWrapper, SubMsg, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::{
  error::ContractError,
  models::{Pick, Token, PCT_SCALE},
};

/// Builds the storage key for a ticket. Picks are keyed per country, so the
/// sorted rendering is canonical regardless of selection order.
pub fn hash_picks(picks: &[Pick]) -> String {
  let mut parts: Vec<String> = picks
    .iter()
    .map(|p| format!("{}:{}", p.country, p.number))
    .collect();
  parts.sort();
  parts.join("|")
}

pub fn mul_pct(
  total: Uint128,
  pct: Uint128,
) -> Uint128 {
  total.multiply_ratio(pct, Uint128::from(PCT_SCALE))
}

pub fn get_token_balance(
  querier: QuerierWrapper<Empty>,
  address: &Addr,
  token: &Token,
) -> Result<Uint128, ContractError> {
  Ok(match token {
    Token::Native { denom } => querier.query_balance(address, denom)?.amount,
    Token::Cw20 {
      address: cw20_address,
    } => get_cw20_balance(querier, cw20_address, address)?,
  })
}

pub fn get_cw20_balance(
  querier: QuerierWrapper<Empty>,
  cw20_address: &Addr,
  wallet: &Addr,
) -> Result<Uint128, ContractError> {
  let resp: BalanceResponse = querier.query_wasm_smart(
    cw20_address,
    &Cw20QueryMsg::Balance {
      address: wallet.to_string(),
    },
  )?;
  Ok(resp.balance)
}

pub fn build_cw20_transfer_from_msg(
  from: &Addr,
  to: &Addr,
  cw20_address: &Addr,
  amount: Uint128,
) -> Result<WasmMsg, ContractError> {
  Ok(WasmMsg::Execute {
    contract_addr: cw20_address.to_string(),
    msg: to_binary(&Cw20ExecuteMsg::TransferFrom {
      owner: from.to_string(),
      recipient: to.to_string(),
      amount,
    })?,
    funds: vec![],
  })
}

pub fn build_send_submsg(
  recipient: &Addr,
  amount: Uint128,
  token: &Token,
) -> Result<SubMsg, ContractError> {
  Ok(match token {
    Token::Native { denom } => SubMsg::new(BankMsg::Send {
      to_address: recipient.to_string(),
      amount: vec![Coin {
        denom: denom.clone(),
        amount,
      }],
    }),
    Token::Cw20 { address } => SubMsg::new(WasmMsg::Execute {
      contract_addr: address.to_string(),
      msg: to_binary(&Cw20ExecuteMsg::Transfer {
        recipient: recipient.to_string(),
        amount,
      })?,
      funds: vec![],
    }),
  })
}
