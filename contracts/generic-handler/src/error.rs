use common::{CodecError, ErrorCategory};
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: sender must be the bridge")]
    Unauthorized,

    // ========================================================================
    // Resource Errors
    // ========================================================================
    #[error("Resource {resource_id} is not registered with this handler")]
    ResourceNotRegistered { resource_id: String },

    #[error("Invalid resource setup: {reason}")]
    InvalidResourceSetup { reason: String },

    // ========================================================================
    // Payload Errors
    // ========================================================================
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] CodecError),

    #[error("Function selector does not match the selector registered for the resource")]
    SelectorMismatch,

    #[error("Target contract {got} does not match registered target {expected}")]
    TargetMismatch { expected: String, got: String },

    // ========================================================================
    // Execution Errors
    // ========================================================================
    #[error("Generic call reverted: {reason}")]
    ExecutionReverted { reason: String },

    #[error("Unknown reply id {id}")]
    UnknownReplyId { id: u64 },
}

impl ContractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::Unauthorized => ErrorCategory::Authorization,
            ContractError::Std(_)
            | ContractError::ResourceNotRegistered { .. }
            | ContractError::InvalidResourceSetup { .. }
            | ContractError::MalformedPayload(_)
            | ContractError::SelectorMismatch
            | ContractError::TargetMismatch { .. } => ErrorCategory::Validation,
            ContractError::ExecutionReverted { .. } | ContractError::UnknownReplyId { .. } => {
                ErrorCategory::Execution
            }
        }
    }
}
