//! Fee Policy Contract - Bounded Percentage Fees
//!
//! Adapters query this contract for the fee owed on a deposit. The fee is a
//! rate over 1e8 of the deposited amount, clamped into optional bounds.
//!
//! # Admin Surface
//! - `ChangeFee` - set the rate, rejected when unchanged
//! - `ChangeFeeBounds` - set the floor and ceiling, rejected when unchanged or
//!   when the ceiling is set but not above the floor
//!
//! Collected fees are minted or transferred to this contract's address by the
//! adapters that charge them.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
