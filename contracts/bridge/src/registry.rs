//! Resource registry: resource id -> (handler, target), plus the set of
//! burnable (handler, target) pairs.

use common::{set_if_changed, ResourceId};
use cosmwasm_std::{Addr, StdResult, Storage};

use crate::error::ContractError;
use crate::msg::ResourceResponse;
use crate::state::{ResourceEntry, BURNABLE, RESOURCES};

/// Register or overwrite the route for `resource_id`.
pub fn register(
    storage: &mut dyn Storage,
    resource_id: &ResourceId,
    handler: Addr,
    target: Addr,
) -> StdResult<()> {
    RESOURCES.save(
        storage,
        resource_id.as_slice(),
        &ResourceEntry { handler, target },
    )
}

/// Look up the route for a raw resource id.
pub fn resolve(
    storage: &dyn Storage,
    resource_id: &[u8],
) -> Result<(ResourceId, ResourceEntry), ContractError> {
    let resource_id = ResourceId::from_slice(resource_id).map_err(ContractError::InvalidResourceId)?;
    let entry = RESOURCES
        .may_load(storage, resource_id.as_slice())?
        .ok_or_else(|| ContractError::ResourceIdNotFound {
            resource_id: resource_id.to_hex(),
        })?;
    Ok((resource_id, entry))
}

/// Mark `(handler, target)` burnable; rejected when it already is.
pub fn mark_burnable(
    storage: &mut dyn Storage,
    handler: &Addr,
    target: &Addr,
) -> Result<(), ContractError> {
    let mut burnable = is_burnable(storage, handler, target)?;
    set_if_changed(&mut burnable, true, || ContractError::NoOpUpdate)?;
    BURNABLE.save(storage, (handler, target), &burnable)?;
    Ok(())
}

pub fn is_burnable(storage: &dyn Storage, handler: &Addr, target: &Addr) -> StdResult<bool> {
    Ok(BURNABLE
        .may_load(storage, (handler, target))?
        .unwrap_or(false))
}

pub fn to_response(
    storage: &dyn Storage,
    resource_id: &[u8],
    entry: ResourceEntry,
) -> StdResult<ResourceResponse> {
    let is_burnable = is_burnable(storage, &entry.handler, &entry.target)?;
    Ok(ResourceResponse {
        resource_id: resource_id.to_vec().into(),
        handler: entry.handler,
        target: entry.target,
        is_burnable,
    })
}
