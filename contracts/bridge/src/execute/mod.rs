//! Execute handlers for the generic bridge contract.
//!
//! - `proposal` - relay-signed batches, per-entry dispatch and handler replies
//! - `admin` - resource routes, signer key, pause and rollback policy

mod admin;
mod proposal;

pub use admin::*;
pub use proposal::*;
