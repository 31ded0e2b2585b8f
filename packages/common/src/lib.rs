//! Common - Shared Types and Utilities for the Generic Bridge Contracts
//!
//! This package holds everything two or more contracts must agree on:
//! - `codec` - byte layout of the generic call descriptor
//! - `proposal` - proposals, resource ids and the signed batch encoding
//! - `handler` / `adapter` - the interfaces handlers and adapters expose
//! - `fee` - bounded percentage fee math and the fee policy interface
//! - `guard` - the set-if-changed guard for admin updates
//! - `error` - the error taxonomy shared by every contract

pub mod adapter;
pub mod codec;
pub mod error;
pub mod fee;
pub mod guard;
pub mod handler;
pub mod hash;
pub mod proposal;

pub use adapter::{GenericCall, HandlerCapability, UnauthorizedCaller};
pub use codec::{CallDescriptor, CodecError};
pub use error::ErrorCategory;
pub use fee::{calculate_fee, FeeParameters, FEE_DENOMINATOR};
pub use guard::set_if_changed;
pub use handler::GenericResourceSetup;
pub use hash::keccak256;
pub use proposal::{DomainId, Proposal, ResourceId};
