//! State definitions for the generic bridge contract

use common::DomainId;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

use crate::verify::SignerKey;

pub const CONTRACT_NAME: &str = "crates.io:generic-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Configuration
// ============================================================================

/// Which handler failures give the nonce back to the relayers
#[cw_serde]
#[derive(Copy, Eq, Default)]
pub enum RollbackPolicy {
    /// Only a fee ceiling below the required fee unmarks the nonce
    #[default]
    InsufficientFeeOnly,
    /// Every failed execution unmarks the nonce
    AllFailures,
}

impl RollbackPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RollbackPolicy::InsufficientFeeOnly => "insufficient_fee_only",
            RollbackPolicy::AllFailures => "all_failures",
        }
    }
}

#[cw_serde]
pub struct Config {
    /// Admin address for contract management
    pub admin: Addr,
    /// Domain id of the ledger this bridge lives on
    pub domain_id: DomainId,
    /// Relay signer key, unset until `EndKeygen`
    pub signer: Option<SignerKey>,
    /// Whether proposal execution is currently halted
    pub paused: bool,
    pub rollback_policy: RollbackPolicy,
}

pub const CONFIG: Item<Config> = Item::new("config");

// ============================================================================
// Resource Registry
// ============================================================================

/// Route registered for a resource id
#[cw_serde]
pub struct ResourceEntry {
    pub handler: Addr,
    pub target: Addr,
}

/// resource id (32 bytes) -> route
pub const RESOURCES: Map<&[u8], ResourceEntry> = Map::new("resources");

/// (handler, target) -> burnable
pub const BURNABLE: Map<(&Addr, &Addr), bool> = Map::new("burnable");

// ============================================================================
// Replay Guard
// ============================================================================

/// (origin domain, nonce / 64) -> 64-bit word of executed flags
pub const EXECUTED_NONCES: Map<(DomainId, u64), u64> = Map::new("executed_nonces");

// ============================================================================
// In-flight Executions
// ============================================================================

/// Proposal awaiting the reply of its handler sub-message
#[cw_serde]
pub struct PendingExecution {
    pub origin_domain_id: DomainId,
    pub deposit_nonce: u64,
}

/// Last reply id handed out
pub const REPLY_SEQ: Item<u64> = Item::new("reply_seq");

/// reply id -> proposal
pub const PENDING_EXECUTIONS: Map<u64, PendingExecution> = Map::new("pending_executions");
