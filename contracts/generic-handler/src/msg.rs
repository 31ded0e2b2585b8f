use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

pub use common::handler::{FeeCeilingResponse, HandlerExecuteMsg as ExecuteMsg};

#[cw_serde]
pub struct InstantiateMsg {
    /// Bridge contract allowed to drive this handler
    pub bridge: String,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Fee the target adapter would charge against the proposal's max fee
    #[returns(FeeCeilingResponse)]
    CheckFeeCeiling { resource_id: Binary, data: Binary },

    #[returns(ConfigResponse)]
    Config {},

    /// Selector, target and depositor offset registered for a resource
    #[returns(ResourceConfigResponse)]
    ResourceConfig { resource_id: Binary },

    #[returns(IsBurnableResponse)]
    IsBurnable { target: String },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct ConfigResponse {
    pub bridge: Addr,
}

#[cw_serde]
pub struct ResourceConfigResponse {
    pub target: Addr,
    pub selector: Binary,
    pub depositor_offset: Option<u32>,
}

#[cw_serde]
pub struct IsBurnableResponse {
    pub is_burnable: bool,
}
