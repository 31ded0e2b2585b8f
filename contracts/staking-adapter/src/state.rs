use common::HandlerCapability;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:generic-bridge-staking-adapter";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Selector registered for this adapter's only entry point
pub const STAKE_SELECTOR: &[u8] = b"stake";

#[cw_serde]
pub struct Config {
    pub handler: HandlerCapability,
    pub fee_policy: Addr,
    pub deposit_token: Addr,
    pub reward_token: Addr,
    pub exchange_rate: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// (external address, depositor) -> net staked amount
pub const STAKES: Map<(&str, &Addr), Uint128> = Map::new("stakes");
