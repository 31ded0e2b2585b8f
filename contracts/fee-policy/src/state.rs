use common::FeeParameters;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:generic-bridge-fee-policy";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ADMIN: Item<Addr> = Item::new("admin");

/// Rate and bounds, zeroed at instantiation
pub const FEE_PARAMS: Item<FeeParameters> = Item::new("fee_params");
