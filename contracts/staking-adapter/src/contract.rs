//! Staking Adapter - Entry Points

use common::adapter::RequiredFeeResponse;
use common::fee::{CalculateFeeResponse, FeeQueryMsg};
use common::{GenericCall, HandlerCapability};
use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response,
    StdError, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, StakedAmountResponse,
};
use crate::payload::StakePayload;
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, STAKES, STAKE_SELECTOR};

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

    let config = Config {
        handler: HandlerCapability::new(deps.api.addr_validate(&msg.handler)?),
        fee_policy: deps.api.addr_validate(&msg.fee_policy)?,
        deposit_token: deps.api.addr_validate(&msg.deposit_token)?,
        reward_token: deps.api.addr_validate(&msg.reward_token)?,
        exchange_rate: msg.exchange_rate,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("handler", config.handler.handler().as_str())
        .add_attribute("fee_policy", config.fee_policy)
        .add_attribute("exchange_rate", config.exchange_rate))
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
    let config = CONFIG.load(deps.storage)?;
    config.handler.authorize(&info)?;

    match msg {
        ExecuteMsg::GenericCall(call) => execute_stake(deps, config, call),
    }
}

fn execute_stake(
    deps: DepsMut,
    config: Config,
    call: GenericCall,
) -> Result<Response, ContractError> {
    let (payload, fee) = quote(deps.as_ref(), &config, &call)?;
    let depositor = call
        .depositor
        .as_deref()
        .ok_or(ContractError::MissingDepositor)?;
    let depositor = deps.api.addr_validate(depositor)?;

    if fee > call.max_fee {
        return Err(ContractError::InsufficientFee {
            fee,
            max_fee: call.max_fee,
        });
    }
    if fee > payload.amount {
        return Err(ContractError::InvalidAmount {
            amount: payload.amount,
            fee,
        });
    }

    let net = payload.amount - fee;
    let reward = net.checked_mul(config.exchange_rate)?;

    STAKES.update(
        deps.storage,
        (payload.external_address.as_str(), &depositor),
        |staked| -> Result<_, ContractError> {
            Ok(staked.unwrap_or_default().checked_add(net)?)
        },
    )?;

    // cw20-base rejects zero-amount mints
    let mut messages = vec![];
    if !fee.is_zero() {
        messages.push(mint(&config.deposit_token, &config.fee_policy, fee)?);
    }
    if !reward.is_zero() {
        messages.push(mint(&config.reward_token, &depositor, reward)?);
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "stake")
        .add_attribute("fee", fee)
        .add_event(
            Event::new("stake")
                .add_attribute("user", depositor)
                .add_attribute("external_address", payload.external_address)
                .add_attribute("staked", net)
                .add_attribute("amount", reward),
        ))
}

fn mint(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<WasmMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    })
}

/// Validate the selector, decode the payload and ask the fee policy for the
/// fee on the deposited amount.
fn quote(
    deps: Deps,
    config: &Config,
    call: &GenericCall,
) -> Result<(StakePayload, Uint128), ContractError> {
    if call.selector.as_slice() != STAKE_SELECTOR {
        return Err(ContractError::UnknownSelector {
            selector: common::hash::to_hex(&call.selector),
        });
    }
    let payload = StakePayload::decode(&call.payload)?;
    let res: CalculateFeeResponse = deps.querier.query_wasm_smart(
        &config.fee_policy,
        &FeeQueryMsg::CalculateFee {
            amount: payload.amount,
        },
    )?;
    Ok((payload, res.fee))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::RequiredFee { call } => {
            let config = CONFIG.load(deps.storage)?;
            let (_, fee) = quote(deps, &config, &call)
                .map_err(|err| StdError::generic_err(err.to_string()))?;
            to_json_binary(&RequiredFeeResponse { fee })
        }
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&ConfigResponse {
                handler: config.handler.handler().clone(),
                fee_policy: config.fee_policy,
                deposit_token: config.deposit_token,
                reward_token: config.reward_token,
                exchange_rate: config.exchange_rate,
            })
        }
        QueryMsg::StakedAmount {
            external_address,
            depositor,
        } => {
            let depositor = deps.api.addr_validate(&depositor)?;
            let amount = STAKES
                .may_load(deps.storage, (external_address.as_str(), &depositor))?
                .unwrap_or_default();
            to_json_binary(&StakedAmountResponse { amount })
        }
    }
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
