use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:generic-bridge-generic-handler";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id for the sub-message carrying a generic call to its target
pub const EXECUTE_REPLY_ID: u64 = 1;

/// Per-resource metadata forwarded by the bridge at registration
#[cw_serde]
pub struct GenericResource {
    pub target: Addr,
    pub selector: Binary,
    pub depositor_offset: Option<u32>,
}

pub const BRIDGE: Item<Addr> = Item::new("bridge");

/// resource id (32 bytes) -> registered metadata
pub const RESOURCES: Map<&[u8], GenericResource> = Map::new("resources");

pub const BURNABLE: Map<&Addr, bool> = Map::new("burnable");
