//! Generic Bridge Contract
//!
//! Entry point of the destination domain. Relayers submit batches of
//! proposals under one signature from the configured signer key; each
//! proposal is checked against the replay guard, routed through the resource
//! registry to its handler and executed in isolation from the rest of the
//! batch.
//!
//! # Modules
//! - `execute/` - proposal dispatch and admin handlers
//! - `query` - query handlers
//! - `replay` - executed-nonce bitmap per origin domain
//! - `registry` - resource id -> (handler, target) routes and burnable flags
//! - `verify` - signature schemes accepted for the signer key
//!
//! # Lifecycle
//! The bridge starts paused. `EndKeygen` installs the signer key exactly once
//! and lifts the pause; afterwards the admin may pause and unpause at will.

pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod registry;
pub mod replay;
pub mod state;
pub mod verify;

pub use crate::error::ContractError;
