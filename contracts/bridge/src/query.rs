//! Query handlers for the generic bridge contract.

use common::proposal::batch_digest;
use common::{DomainId, Proposal};
use cosmwasm_std::{Binary, Deps, Env, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{
    BatchDigestResponse, ConfigResponse, ProposalExecutedResponse, ResourceResponse,
    ResourcesResponse,
};
use crate::registry;
use crate::replay;
use crate::state::{CONFIG, RESOURCES};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        domain_id: config.domain_id,
        signer: config.signer,
        paused: config.paused,
        rollback_policy: config.rollback_policy,
    })
}

// ============================================================================
// Resource Queries
// ============================================================================

pub fn query_resource(deps: Deps, resource_id: Binary) -> StdResult<ResourceResponse> {
    let (resource_id, entry) = registry::resolve(deps.storage, &resource_id)
        .map_err(|err| StdError::generic_err(err.to_string()))?;
    registry::to_response(deps.storage, resource_id.as_slice(), entry)
}

pub fn query_resources(
    deps: Deps,
    start_after: Option<Binary>,
    limit: Option<u32>,
) -> StdResult<ResourcesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let resources = RESOURCES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (resource_id, entry) = item?;
            registry::to_response(deps.storage, &resource_id, entry)
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ResourcesResponse { resources })
}

// ============================================================================
// Proposal Queries
// ============================================================================

pub fn query_is_proposal_executed(
    deps: Deps,
    domain_id: DomainId,
    deposit_nonce: u64,
) -> StdResult<ProposalExecutedResponse> {
    Ok(ProposalExecutedResponse {
        executed: replay::is_executed(deps.storage, domain_id, deposit_nonce)?,
    })
}

pub fn query_batch_digest(
    deps: Deps,
    env: Env,
    proposals: Vec<Proposal>,
) -> StdResult<BatchDigestResponse> {
    let config = CONFIG.load(deps.storage)?;
    let digest = batch_digest(config.domain_id, env.contract.address.as_str(), &proposals)
        .map_err(|err| StdError::generic_err(err.to_string()))?;
    Ok(BatchDigestResponse {
        digest: Binary::from(digest.to_vec()),
    })
}
