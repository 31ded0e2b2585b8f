//! Message types for the generic bridge contract

use common::{DomainId, Proposal};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

use crate::state::RollbackPolicy;
use crate::verify::{SignatureScheme, SignerKey};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address for contract management
    pub admin: String,
    /// Domain id of this ledger, bound into every signed batch
    pub domain_id: DomainId,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Relayer Operations
    // ========================================================================
    /// Execute a single relay-signed proposal (a batch of one)
    ExecuteProposal {
        proposal: Proposal,
        signature: Binary,
    },

    /// Execute a relay-signed batch; entries fail independently
    ExecuteProposals {
        proposals: Vec<Proposal>,
        signature: Binary,
    },

    // ========================================================================
    // Admin Operations
    // ========================================================================
    /// Register or overwrite a resource route and forward `init_data` to the
    /// handler
    AdminSetResource {
        handler: String,
        resource_id: Binary,
        target: String,
        init_data: Binary,
    },

    /// Mark `(handler, target)` burnable
    AdminSetBurnable { handler: String, target: String },

    /// Install the signer key and lift the initial pause; one-shot
    EndKeygen {
        public_key: Binary,
        scheme: SignatureScheme,
    },

    AdminPause {},

    AdminUnpause {},

    AdminSetRollbackPolicy { policy: RollbackPolicy },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(ResourceResponse)]
    Resource { resource_id: Binary },

    #[returns(ResourcesResponse)]
    Resources {
        start_after: Option<Binary>,
        limit: Option<u32>,
    },

    #[returns(ProposalExecutedResponse)]
    IsProposalExecuted {
        domain_id: DomainId,
        deposit_nonce: u64,
    },

    /// Digest the signer must sign for `proposals` on this bridge
    #[returns(BatchDigestResponse)]
    BatchDigest { proposals: Vec<Proposal> },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub domain_id: DomainId,
    pub signer: Option<SignerKey>,
    pub paused: bool,
    pub rollback_policy: RollbackPolicy,
}

#[cw_serde]
pub struct ResourceResponse {
    pub resource_id: Binary,
    pub handler: Addr,
    pub target: Addr,
    pub is_burnable: bool,
}

#[cw_serde]
pub struct ResourcesResponse {
    pub resources: Vec<ResourceResponse>,
}

#[cw_serde]
pub struct ProposalExecutedResponse {
    pub executed: bool,
}

#[cw_serde]
pub struct BatchDigestResponse {
    pub digest: Binary,
}
