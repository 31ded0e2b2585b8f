use common::ErrorCategory;
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: sender doesn't have admin role")]
    Unauthorized,

    #[error("Current fee is equal to new fee")]
    FeeUnchanged,

    #[error("Current bounds are equal to new bounds")]
    BoundsUnchanged,

    #[error("Upper bound must be larger than lower bound or 0: lower {lower_bound}, upper {upper_bound}")]
    InvalidBounds {
        lower_bound: Uint128,
        upper_bound: Uint128,
    },
}

impl ContractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::Std(_) => ErrorCategory::Validation,
            ContractError::Unauthorized => ErrorCategory::Authorization,
            ContractError::FeeUnchanged | ContractError::BoundsUnchanged => ErrorCategory::State,
            ContractError::InvalidBounds { .. } => ErrorCategory::Validation,
        }
    }
}
