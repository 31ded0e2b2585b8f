//! Admin operations handlers.
//!
//! This module handles:
//! - Resource routes and burnable flags, forwarded to the handler
//! - One-shot signer key installation
//! - Pause/unpause and the rollback policy

use common::handler::HandlerExecuteMsg;
use common::hash::to_hex;
use common::{set_if_changed, ResourceId};
use cosmwasm_std::{to_json_binary, Binary, DepsMut, Event, MessageInfo, Response, WasmMsg};

use crate::error::ContractError;
use crate::registry;
use crate::state::{Config, RollbackPolicy, CONFIG};
use crate::verify::{SignatureScheme, SignerKey};

fn ensure_admin(config: &Config, info: &MessageInfo) -> Result<(), ContractError> {
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

// ============================================================================
// Resource Registry
// ============================================================================

pub fn execute_admin_set_resource(
    deps: DepsMut,
    info: MessageInfo,
    handler: String,
    resource_id: Binary,
    target: String,
    init_data: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    let resource_id =
        ResourceId::from_slice(&resource_id).map_err(ContractError::InvalidResourceId)?;
    let handler = deps.api.addr_validate(&handler)?;
    let target = deps.api.addr_validate(&target)?;

    registry::register(deps.storage, &resource_id, handler.clone(), target.clone())?;

    let forward = WasmMsg::Execute {
        contract_addr: handler.to_string(),
        msg: to_json_binary(&HandlerExecuteMsg::SetResource {
            resource_id: resource_id.to_binary(),
            target: target.to_string(),
            init_data,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(forward)
        .add_attribute("method", "admin_set_resource")
        .add_event(
            Event::new("set_resource")
                .add_attribute("resource_id", resource_id.to_hex())
                .add_attribute("handler", handler)
                .add_attribute("target", target),
        ))
}

pub fn execute_admin_set_burnable(
    deps: DepsMut,
    info: MessageInfo,
    handler: String,
    target: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    let handler = deps.api.addr_validate(&handler)?;
    let target = deps.api.addr_validate(&target)?;
    registry::mark_burnable(deps.storage, &handler, &target)?;

    let forward = WasmMsg::Execute {
        contract_addr: handler.to_string(),
        msg: to_json_binary(&HandlerExecuteMsg::SetBurnable {
            target: target.to_string(),
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(forward)
        .add_attribute("method", "admin_set_burnable")
        .add_event(
            Event::new("set_burnable")
                .add_attribute("handler", handler)
                .add_attribute("target", target),
        ))
}

// ============================================================================
// Signer Key
// ============================================================================

/// Install the signer key. Runs once; the bridge is unpaused afterwards.
pub fn execute_end_keygen(
    deps: DepsMut,
    info: MessageInfo,
    public_key: Binary,
    scheme: SignatureScheme,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    if config.signer.is_some() {
        return Err(ContractError::AlreadyConfigured);
    }
    if !scheme.accepts_key(&public_key) {
        return Err(ContractError::InvalidSignerKey {
            scheme: scheme.as_str().to_string(),
            len: public_key.len(),
        });
    }

    let key_hex = to_hex(&public_key);
    config.signer = Some(SignerKey { scheme, public_key });
    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "end_keygen")
        .add_event(
            Event::new("end_keygen")
                .add_attribute("scheme", scheme.as_str())
                .add_attribute("public_key", key_hex),
        ))
}

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause proposal execution.
pub fn execute_admin_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    set_if_changed(&mut config.paused, true, || ContractError::NoOpUpdate)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "pause"))
}

/// Resume proposal execution. Requires the signer key.
pub fn execute_admin_unpause(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    if config.signer.is_none() {
        return Err(ContractError::SignerNotConfigured);
    }
    set_if_changed(&mut config.paused, false, || ContractError::NoOpUpdate)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "unpause"))
}

pub fn execute_admin_set_rollback_policy(
    deps: DepsMut,
    info: MessageInfo,
    policy: RollbackPolicy,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    set_if_changed(&mut config.rollback_policy, policy, || {
        ContractError::NoOpUpdate
    })?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_rollback_policy")
        .add_attribute("policy", policy.as_str()))
}
