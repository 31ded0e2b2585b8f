//! Proposal dispatch.
//!
//! A batch is accepted or rejected as a whole up to signature verification
//! and route resolution. From there on every entry stands alone: the nonce is
//! marked, the handler is asked whether the depositor's fee ceiling covers
//! the required fee, and the proposal runs as a `reply_always` sub-message so
//! a failing handler only produces a `failed_handler_execution` event.

use common::handler::{FeeCeilingResponse, HandlerExecuteMsg, HandlerQueryMsg};
use common::proposal::batch_digest;
use common::{DomainId, Proposal, ResourceId};
use cosmwasm_std::{
    to_json_binary, Addr, Binary, DepsMut, Env, Event, Reply, Response, StdResult, Storage,
    SubMsg, SubMsgResult, WasmMsg,
};

use crate::error::ContractError;
use crate::registry;
use crate::replay;
use crate::state::{PendingExecution, RollbackPolicy, CONFIG, PENDING_EXECUTIONS, REPLY_SEQ};
use crate::verify::SignatureVerifier;

// ============================================================================
// Batches
// ============================================================================

pub fn execute_proposals(
    mut deps: DepsMut,
    env: Env,
    proposals: Vec<Proposal>,
    signature: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let signer = match (&config.signer, config.paused) {
        (Some(signer), false) => signer,
        _ => return Err(ContractError::BridgePaused),
    };
    if proposals.is_empty() {
        return Err(ContractError::EmptyBatch);
    }

    let digest = batch_digest(config.domain_id, env.contract.address.as_str(), &proposals)?;
    if !signer.verify(deps.api, &digest, &signature) {
        return Err(ContractError::InvalidSignature);
    }

    // Every route must resolve before the first nonce is marked
    let mut routes = Vec::with_capacity(proposals.len());
    for proposal in &proposals {
        routes.push(registry::resolve(deps.storage, &proposal.resource_id)?);
    }

    let mut response = Response::new()
        .add_attribute("method", "execute_proposals")
        .add_attribute("count", proposals.len().to_string());

    for (proposal, (resource_id, entry)) in proposals.into_iter().zip(routes) {
        response = dispatch(
            deps.branch(),
            config.rollback_policy,
            proposal,
            resource_id,
            entry.handler,
            response,
        )?;
    }

    Ok(response)
}

fn dispatch(
    deps: DepsMut,
    policy: RollbackPolicy,
    proposal: Proposal,
    resource_id: ResourceId,
    handler: Addr,
    response: Response,
) -> Result<Response, ContractError> {
    let Proposal {
        origin_domain_id,
        deposit_nonce,
        data,
        ..
    } = proposal;

    if replay::is_executed(deps.storage, origin_domain_id, deposit_nonce)? {
        return Ok(response);
    }
    replay::mark_executed(deps.storage, origin_domain_id, deposit_nonce)?;

    let preflight: StdResult<FeeCeilingResponse> = deps.querier.query_wasm_smart(
        handler.as_str(),
        &HandlerQueryMsg::CheckFeeCeiling {
            resource_id: resource_id.to_binary(),
            data: data.clone(),
        },
    );
    match preflight {
        Ok(ceiling) if !ceiling.sufficient => {
            replay::rollback(deps.storage, origin_domain_id, deposit_nonce)?;
            return Ok(response.add_event(failed_handler_execution(
                origin_domain_id,
                deposit_nonce,
                format!(
                    "insufficient fee: required {}, max fee {}",
                    ceiling.required_fee, ceiling.max_fee
                ),
            )));
        }
        Err(err) => {
            if policy == RollbackPolicy::AllFailures {
                replay::rollback(deps.storage, origin_domain_id, deposit_nonce)?;
            }
            return Ok(response.add_event(failed_handler_execution(
                origin_domain_id,
                deposit_nonce,
                err.to_string(),
            )));
        }
        Ok(_) => {}
    }

    let reply_id = next_reply_id(deps.storage)?;
    PENDING_EXECUTIONS.save(
        deps.storage,
        reply_id,
        &PendingExecution {
            origin_domain_id,
            deposit_nonce,
        },
    )?;

    let msg = WasmMsg::Execute {
        contract_addr: handler.into_string(),
        msg: to_json_binary(&HandlerExecuteMsg::ExecuteProposal {
            resource_id: resource_id.to_binary(),
            data,
        })?,
        funds: vec![],
    };

    Ok(response.add_submessage(SubMsg::reply_always(msg, reply_id)))
}

fn next_reply_id(storage: &mut dyn Storage) -> StdResult<u64> {
    let id = REPLY_SEQ.may_load(storage)?.unwrap_or_default().wrapping_add(1);
    REPLY_SEQ.save(storage, &id)?;
    Ok(id)
}

// ============================================================================
// Handler Replies
// ============================================================================

pub fn handle_execution_reply(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let pending = PENDING_EXECUTIONS
        .may_load(deps.storage, msg.id)?
        .ok_or(ContractError::UnknownReplyId { id: msg.id })?;
    PENDING_EXECUTIONS.remove(deps.storage, msg.id);

    let PendingExecution {
        origin_domain_id,
        deposit_nonce,
    } = pending;

    match msg.result {
        SubMsgResult::Ok(_) => Ok(Response::new().add_event(
            Event::new("proposal_execution")
                .add_attribute("origin_domain_id", origin_domain_id.to_string())
                .add_attribute("deposit_nonce", deposit_nonce.to_string()),
        )),
        SubMsgResult::Err(reason) => {
            let config = CONFIG.load(deps.storage)?;
            if config.rollback_policy == RollbackPolicy::AllFailures {
                replay::rollback(deps.storage, origin_domain_id, deposit_nonce)?;
            }
            Ok(Response::new().add_event(failed_handler_execution(
                origin_domain_id,
                deposit_nonce,
                reason,
            )))
        }
    }
}

fn failed_handler_execution(
    origin_domain_id: DomainId,
    deposit_nonce: u64,
    reason: String,
) -> Event {
    Event::new("failed_handler_execution")
        .add_attribute("origin_domain_id", origin_domain_id.to_string())
        .add_attribute("deposit_nonce", deposit_nonce.to_string())
        .add_attribute("reason", reason)
}
