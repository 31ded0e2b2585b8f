//! Generic Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_admin_pause, execute_admin_set_burnable, execute_admin_set_resource,
    execute_admin_set_rollback_policy, execute_admin_unpause, execute_end_keygen,
    execute_proposals, handle_execution_reply,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_batch_digest, query_config, query_is_proposal_executed, query_resource,
    query_resources,
};
use crate::state::{Config, RollbackPolicy, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

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

    let admin = deps.api.addr_validate(&msg.admin)?;

    // Paused until EndKeygen installs the signer key
    let config = Config {
        admin,
        domain_id: msg.domain_id,
        signer: None,
        paused: true,
        rollback_policy: RollbackPolicy::default(),
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("domain_id", config.domain_id.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Relayer operations
        ExecuteMsg::ExecuteProposal {
            proposal,
            signature,
        } => execute_proposals(deps, env, vec![proposal], signature),
        ExecuteMsg::ExecuteProposals {
            proposals,
            signature,
        } => execute_proposals(deps, env, proposals, signature),

        // Admin operations
        ExecuteMsg::AdminSetResource {
            handler,
            resource_id,
            target,
            init_data,
        } => execute_admin_set_resource(deps, info, handler, resource_id, target, init_data),
        ExecuteMsg::AdminSetBurnable { handler, target } => {
            execute_admin_set_burnable(deps, info, handler, target)
        }
        ExecuteMsg::EndKeygen { public_key, scheme } => {
            execute_end_keygen(deps, info, public_key, scheme)
        }
        ExecuteMsg::AdminPause {} => execute_admin_pause(deps, info),
        ExecuteMsg::AdminUnpause {} => execute_admin_unpause(deps, info),
        ExecuteMsg::AdminSetRollbackPolicy { policy } => {
            execute_admin_set_rollback_policy(deps, info, policy)
        }
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    handle_execution_reply(deps, msg)
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Resource { resource_id } => to_json_binary(&query_resource(deps, resource_id)?),
        QueryMsg::Resources { start_after, limit } => {
            to_json_binary(&query_resources(deps, start_after, limit)?)
        }
        QueryMsg::IsProposalExecuted {
            domain_id,
            deposit_nonce,
        } => to_json_binary(&query_is_proposal_executed(deps, domain_id, deposit_nonce)?),
        QueryMsg::BatchDigest { proposals } => {
            to_json_binary(&query_batch_digest(deps, env, proposals)?)
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
