use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContractError {
  #[error("{0}")]
  Std(#[from] StdError),

  #[error("NotAuthorized")]
  NotAuthorized,

  #[error("TicketExists")]
  TicketExists,

  #[error("UnknownCountry")]
  UnknownCountry,

  #[error("DuplicateCountry")]
  DuplicateCountry,

  #[error("NumberOutOfBounds")]
  NumberOutOfBounds,

  #[error("EmptyPrizeTable")]
  EmptyPrizeTable,

  #[error("InsufficientFunds")]
  InsufficientFunds,

  #[error("AlreadyClaimed")]
  AlreadyClaimed,

  #[error("ClaimNotFound")]
  ClaimNotFound,

  #[error("PendingApproval")]
  PendingApproval,

  #[error("AlreadyApproved")]
  AlreadyApproved,

  #[error("DrawingNotFound")]
  DrawingNotFound,

  #[error("ActiveRound")]
  ActiveRound,

  #[error("InvalidRoundNo")]
  InvalidRoundNo,

  #[error("InvalidGameState")]
  InvalidGameState,

  #[error("ValidationError")]
  ValidationError,
}
