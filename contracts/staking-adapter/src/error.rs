use common::{CodecError, ErrorCategory, UnauthorizedCaller};
use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    UnauthorizedCaller(#[from] UnauthorizedCaller),

    #[error("Unknown function selector {selector}")]
    UnknownSelector { selector: String },

    #[error("Stake requires an explicit depositor")]
    MissingDepositor,

    #[error("Malformed stake payload: {0}")]
    MalformedPayload(#[from] CodecError),

    #[error("Stake amount does not fit in 128 bits")]
    AmountTooLarge,

    #[error("Insufficient fee: required {fee}, max fee {max_fee}")]
    InsufficientFee { fee: Uint128, max_fee: Uint128 },

    #[error("Invalid amount: fee {fee} exceeds deposit {amount}")]
    InvalidAmount { amount: Uint128, fee: Uint128 },
}

impl ContractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::UnauthorizedCaller(_) => ErrorCategory::Authorization,
            ContractError::Std(_)
            | ContractError::UnknownSelector { .. }
            | ContractError::MissingDepositor
            | ContractError::MalformedPayload(_)
            | ContractError::AmountTooLarge
            | ContractError::InvalidAmount { .. } => ErrorCategory::Validation,
            ContractError::Overflow(_) | ContractError::InsufficientFee { .. } => {
                ErrorCategory::Execution
            }
        }
    }
}
