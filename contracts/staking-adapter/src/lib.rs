//! Staking Adapter Contract
//!
//! Reference business logic behind the generic handler. A `stake` call
//! credits the depositor's stake for an external address, charges the fee
//! reported by the fee policy and mints reward units at a fixed exchange rate.
//!
//! The handler is the only accepted caller: every entry point starts with
//! `HandlerCapability::authorize`.

pub mod contract;
pub mod error;
pub mod msg;
pub mod payload;
pub mod state;

pub use crate::error::ContractError;
