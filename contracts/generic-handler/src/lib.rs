//! Generic Handler Contract
//!
//! The handler sits between the bridge and the adapters. For every proposal
//! the bridge routes here it:
//! 1. loads the selector and depositor offset registered for the resource id
//! 2. decodes the opaque proposal data into a `CallDescriptor`
//! 3. checks the selector and target against the registration
//! 4. sends the resulting `GenericCall` to the target adapter
//!
//! Every execute message is accepted from the bridge only. Adapters in turn
//! accept calls from this contract only, so the handler address is the one
//! credential protecting adapter state.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
