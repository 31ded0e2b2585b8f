//! Generic Handler - Entry Points

use common::adapter::{GenericCallMsg, GenericCallQueryMsg, RequiredFeeResponse};
use common::codec::inject_depositor;
use common::handler::FeeCeilingResponse;
use common::{CallDescriptor, GenericCall, GenericResourceSetup, ResourceId};
use cosmwasm_std::{
    entry_point, from_json, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Reply,
    Response, StdError, StdResult, SubMsg, SubMsgResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, IsBurnableResponse, MigrateMsg, QueryMsg,
    ResourceConfigResponse,
};
use crate::state::{
    GenericResource, BRIDGE, BURNABLE, CONTRACT_NAME, CONTRACT_VERSION, EXECUTE_REPLY_ID,
    RESOURCES,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let bridge = deps.api.addr_validate(&msg.bridge)?;
    BRIDGE.save(deps.storage, &bridge)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("bridge", bridge))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let bridge = BRIDGE.load(deps.storage)?;
    if info.sender != bridge {
        return Err(ContractError::Unauthorized);
    }

    match msg {
        ExecuteMsg::SetResource {
            resource_id,
            target,
            init_data,
        } => execute_set_resource(deps, resource_id, target, init_data),
        ExecuteMsg::SetBurnable { target } => execute_set_burnable(deps, target),
        ExecuteMsg::ExecuteProposal { resource_id, data } => {
            execute_proposal(deps, resource_id, data)
        }
    }
}

fn execute_set_resource(
    deps: DepsMut,
    resource_id: Binary,
    target: String,
    init_data: Binary,
) -> Result<Response, ContractError> {
    let resource_id = ResourceId::from_slice(&resource_id)?;
    let target = deps.api.addr_validate(&target)?;
    let setup: GenericResourceSetup =
        from_json(&init_data).map_err(|err| ContractError::InvalidResourceSetup {
            reason: err.to_string(),
        })?;
    if setup.selector.is_empty() {
        return Err(ContractError::InvalidResourceSetup {
            reason: "selector must not be empty".to_string(),
        });
    }

    let offset = setup
        .depositor_offset
        .map(|offset| offset.to_string())
        .unwrap_or_else(|| "blank".to_string());

    RESOURCES.save(
        deps.storage,
        resource_id.as_slice(),
        &GenericResource {
            target: target.clone(),
            selector: setup.selector,
            depositor_offset: setup.depositor_offset,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "set_resource")
        .add_attribute("resource_id", resource_id.to_hex())
        .add_attribute("target", target)
        .add_attribute("depositor_offset", offset))
}

fn execute_set_burnable(deps: DepsMut, target: String) -> Result<Response, ContractError> {
    let target = deps.api.addr_validate(&target)?;
    BURNABLE.save(deps.storage, &target, &true)?;

    Ok(Response::new()
        .add_attribute("method", "set_burnable")
        .add_attribute("target", target))
}

fn execute_proposal(
    deps: DepsMut,
    resource_id: Binary,
    data: Binary,
) -> Result<Response, ContractError> {
    let (target, call) = build_call(deps.as_ref(), &resource_id, &data)?;

    let attrs = vec![
        ("method", "execute_proposal".to_string()),
        ("target", target.to_string()),
        ("max_fee", call.max_fee.to_string()),
    ];
    let msg = WasmMsg::Execute {
        contract_addr: target.into_string(),
        msg: to_json_binary(&GenericCallMsg::GenericCall(call))?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_error(msg, EXECUTE_REPLY_ID))
        .add_attributes(attrs))
}

/// Decode proposal data against the registration of its resource and
/// assemble the call for the target adapter.
pub fn build_call(
    deps: Deps,
    resource_id: &[u8],
    data: &[u8],
) -> Result<(Addr, GenericCall), ContractError> {
    let resource_id = ResourceId::from_slice(resource_id)?;
    let resource = RESOURCES
        .may_load(deps.storage, resource_id.as_slice())?
        .ok_or_else(|| ContractError::ResourceNotRegistered {
            resource_id: resource_id.to_hex(),
        })?;

    let descriptor = CallDescriptor::decode(data)?;
    if descriptor.function_selector != resource.selector.as_slice() {
        return Err(ContractError::SelectorMismatch);
    }
    let target = descriptor.target_str()?;
    if target != resource.target.as_str() {
        return Err(ContractError::TargetMismatch {
            expected: resource.target.to_string(),
            got: target.to_string(),
        });
    }
    let depositor = descriptor.depositor_str()?.to_string();

    let (depositor, payload) = match resource.depositor_offset {
        None => (Some(depositor), descriptor.execution_payload),
        Some(offset) => (
            None,
            inject_depositor(
                &descriptor.execution_payload,
                offset as usize,
                depositor.as_bytes(),
            )?,
        ),
    };

    // The adapter charges in Uint128; any larger ceiling is effectively unbounded.
    let max_fee = Uint128::try_from(descriptor.max_fee).unwrap_or(Uint128::MAX);

    Ok((
        resource.target,
        GenericCall {
            selector: resource.selector,
            depositor,
            payload: Binary::from(payload),
            max_fee,
        },
    ))
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match (msg.id, msg.result) {
        (EXECUTE_REPLY_ID, SubMsgResult::Err(reason)) => {
            Err(ContractError::ExecutionReverted { reason })
        }
        (EXECUTE_REPLY_ID, SubMsgResult::Ok(_)) => Ok(Response::new()),
        (id, _) => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::CheckFeeCeiling { resource_id, data } => {
            to_json_binary(&query_check_fee_ceiling(deps, resource_id, data)?)
        }
        QueryMsg::Config {} => to_json_binary(&ConfigResponse {
            bridge: BRIDGE.load(deps.storage)?,
        }),
        QueryMsg::ResourceConfig { resource_id } => {
            to_json_binary(&query_resource_config(deps, resource_id)?)
        }
        QueryMsg::IsBurnable { target } => {
            let target = deps.api.addr_validate(&target)?;
            to_json_binary(&IsBurnableResponse {
                is_burnable: BURNABLE.may_load(deps.storage, &target)?.unwrap_or(false),
            })
        }
    }
}

fn query_check_fee_ceiling(
    deps: Deps,
    resource_id: Binary,
    data: Binary,
) -> StdResult<FeeCeilingResponse> {
    let (target, call) = build_call(deps, &resource_id, &data)
        .map_err(|err| StdError::generic_err(err.to_string()))?;
    let max_fee = call.max_fee;

    let res: RequiredFeeResponse = deps
        .querier
        .query_wasm_smart(target, &GenericCallQueryMsg::RequiredFee { call })?;

    Ok(FeeCeilingResponse {
        required_fee: res.fee,
        max_fee,
        sufficient: res.fee <= max_fee,
    })
}

fn query_resource_config(deps: Deps, resource_id: Binary) -> StdResult<ResourceConfigResponse> {
    let resource_id = ResourceId::from_slice(&resource_id)
        .map_err(|err| StdError::generic_err(err.to_string()))?;
    let resource = RESOURCES.load(deps.storage, resource_id.as_slice())?;
    Ok(ResourceConfigResponse {
        target: resource.target,
        selector: resource.selector,
        depositor_offset: resource.depositor_offset,
    })
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
