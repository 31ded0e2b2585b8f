use common::{CodecError, ErrorCategory};
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================
    #[error("Unauthorized: sender doesn't have admin role")]
    Unauthorized,

    #[error("Invalid signature for proposal batch")]
    InvalidSignature,

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Proposal batch is empty")]
    EmptyBatch,

    #[error("Resource id {resource_id} not found")]
    ResourceIdNotFound { resource_id: String },

    #[error("Invalid resource id: {0}")]
    InvalidResourceId(CodecError),

    #[error("Malformed proposal: {0}")]
    MalformedProposal(#[from] CodecError),

    #[error("Invalid {scheme} signer key: {len} bytes")]
    InvalidSignerKey { scheme: String, len: usize },

    // ========================================================================
    // State Errors
    // ========================================================================
    #[error("Bridge is paused")]
    BridgePaused,

    #[error("Signer key is already configured")]
    AlreadyConfigured,

    #[error("Signer key is not configured")]
    SignerNotConfigured,

    #[error("Update leaves the current value unchanged")]
    NoOpUpdate,

    // ========================================================================
    // Execution Errors
    // ========================================================================
    #[error("Unknown reply id {id}")]
    UnknownReplyId { id: u64 },
}

impl ContractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::Unauthorized | ContractError::InvalidSignature => {
                ErrorCategory::Authorization
            }
            ContractError::Std(_)
            | ContractError::EmptyBatch
            | ContractError::ResourceIdNotFound { .. }
            | ContractError::InvalidResourceId(_)
            | ContractError::MalformedProposal(_)
            | ContractError::InvalidSignerKey { .. } => ErrorCategory::Validation,
            ContractError::BridgePaused
            | ContractError::AlreadyConfigured
            | ContractError::SignerNotConfigured
            | ContractError::NoOpUpdate => ErrorCategory::State,
            ContractError::UnknownReplyId { .. } => ErrorCategory::Execution,
        }
    }
}
