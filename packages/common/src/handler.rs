//! Interface between the bridge and its handlers.
//!
//! The bridge only knows handlers through these messages; every handler must
//! accept them from the bridge and reject them from anyone else.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

/// `init_data` the generic handler expects in `SetResource`, JSON encoded
#[cw_serde]
pub struct GenericResourceSetup {
    /// Function selector a proposal must carry for this resource
    pub selector: Binary,
    /// Payload offset the depositor is spliced in at; `None` carries the
    /// depositor explicitly instead
    pub depositor_offset: Option<u32>,
}

/// Execute messages the bridge sends to a handler
#[cw_serde]
pub enum HandlerExecuteMsg {
    /// Register per-resource metadata forwarded from `AdminSetResource`
    SetResource {
        resource_id: Binary,
        target: String,
        init_data: Binary,
    },

    /// Mark a target asset burnable, forwarded from `AdminSetBurnable`
    SetBurnable { target: String },

    /// Execute a verified proposal's payload
    ExecuteProposal { resource_id: Binary, data: Binary },
}

/// Queries the bridge issues against a handler
#[cw_serde]
#[derive(QueryResponses)]
pub enum HandlerQueryMsg {
    /// Compare the fee the target would charge with the proposal's `max_fee`
    #[returns(FeeCeilingResponse)]
    CheckFeeCeiling { resource_id: Binary, data: Binary },
}

#[cw_serde]
pub struct FeeCeilingResponse {
    pub required_fee: Uint128,
    pub max_fee: Uint128,
    pub sufficient: bool,
}
