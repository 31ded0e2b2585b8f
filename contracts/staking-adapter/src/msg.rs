use common::adapter::RequiredFeeResponse;
use common::GenericCall;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

pub use common::adapter::GenericCallMsg as ExecuteMsg;

#[cw_serde]
pub struct InstantiateMsg {
    /// Generic handler, the only accepted caller
    pub handler: String,
    /// Fee policy queried for every stake; also receives the fee
    pub fee_policy: String,
    /// CW20 the deposit (and therefore the fee) is denominated in
    pub deposit_token: String,
    /// CW20 minted to depositors as staking rewards
    pub reward_token: String,
    /// Reward units minted per net deposited unit
    pub exchange_rate: Uint128,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Fee the adapter would charge when executing `call`
    #[returns(RequiredFeeResponse)]
    RequiredFee { call: GenericCall },

    #[returns(ConfigResponse)]
    Config {},

    /// Net amount staked by `depositor` for `external_address`
    #[returns(StakedAmountResponse)]
    StakedAmount {
        external_address: String,
        depositor: String,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct ConfigResponse {
    pub handler: Addr,
    pub fee_policy: Addr,
    pub deposit_token: Addr,
    pub reward_token: Addr,
    pub exchange_rate: Uint128,
}

#[cw_serde]
pub struct StakedAmountResponse {
    pub amount: Uint128,
}
