use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

pub use common::fee::{
    CalculateFeeResponse, FeeConfigResponse, FeeQueryMsg as QueryMsg,
};

#[cw_serde]
pub struct InstantiateMsg {
    /// Admin allowed to change the rate and bounds
    pub admin: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Admin: set the fee rate (scaled by 1e8)
    ChangeFee { new_fee: Uint128 },
    /// Admin: set the fee floor and ceiling (0 disables either)
    ChangeFeeBounds {
        new_lower_bound: Uint128,
        new_upper_bound: Uint128,
    },
}

#[cw_serde]
pub struct MigrateMsg {}
