use common::fee::bounds_are_valid;
use common::{calculate_fee, set_if_changed, FeeParameters};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response,
    StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    CalculateFeeResponse, ExecuteMsg, FeeConfigResponse, InstantiateMsg, MigrateMsg, QueryMsg,
};
use crate::state::{ADMIN, CONTRACT_NAME, CONTRACT_VERSION, FEE_PARAMS};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    ADMIN.save(deps.storage, &admin)?;
    FEE_PARAMS.save(deps.storage, &FeeParameters::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::ChangeFee { new_fee } => execute_change_fee(deps, info, new_fee),
        ExecuteMsg::ChangeFeeBounds {
            new_lower_bound,
            new_upper_bound,
        } => execute_change_fee_bounds(deps, info, new_lower_bound, new_upper_bound),
    }
}

fn ensure_admin(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let admin = ADMIN.load(deps.storage)?;
    if info.sender != admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

fn execute_change_fee(
    deps: DepsMut,
    info: MessageInfo,
    new_fee: Uint128,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    let mut params = FEE_PARAMS.load(deps.storage)?;
    set_if_changed(&mut params.rate, new_fee, || ContractError::FeeUnchanged)?;
    FEE_PARAMS.save(deps.storage, &params)?;

    Ok(Response::new()
        .add_attribute("method", "change_fee")
        .add_event(Event::new("fee_changed").add_attribute("new_fee", new_fee)))
}

fn execute_change_fee_bounds(
    deps: DepsMut,
    info: MessageInfo,
    new_lower_bound: Uint128,
    new_upper_bound: Uint128,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    let mut params = FEE_PARAMS.load(deps.storage)?;
    let mut bounds = params.bounds();
    set_if_changed(&mut bounds, (new_lower_bound, new_upper_bound), || {
        ContractError::BoundsUnchanged
    })?;
    if !bounds_are_valid(new_lower_bound, new_upper_bound) {
        return Err(ContractError::InvalidBounds {
            lower_bound: new_lower_bound,
            upper_bound: new_upper_bound,
        });
    }

    params.lower_bound = new_lower_bound;
    params.upper_bound = new_upper_bound;
    FEE_PARAMS.save(deps.storage, &params)?;

    Ok(Response::new()
        .add_attribute("method", "change_fee_bounds")
        .add_event(
            Event::new("fee_bounds_changed")
                .add_attribute("new_lower_bound", new_lower_bound)
                .add_attribute("new_upper_bound", new_upper_bound),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::CalculateFee { amount } => to_json_binary(&query_calculate_fee(deps, amount)?),
        QueryMsg::FeeConfig {} => to_json_binary(&query_fee_config(deps)?),
    }
}

fn query_calculate_fee(deps: Deps, amount: Uint128) -> StdResult<CalculateFeeResponse> {
    let params = FEE_PARAMS.load(deps.storage)?;
    Ok(CalculateFeeResponse {
        fee: calculate_fee(amount, &params)?,
    })
}

fn query_fee_config(deps: Deps) -> StdResult<FeeConfigResponse> {
    let admin = ADMIN.load(deps.storage)?;
    let params = FEE_PARAMS.load(deps.storage)?;
    Ok(FeeConfigResponse {
        admin: admin.to_string(),
        rate: params.rate,
        lower_bound: params.lower_bound,
        upper_bound: params.upper_bound,
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
