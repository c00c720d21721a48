//! Query handlers for the token messenger contract

use cosmwasm_std::{Binary, Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::burn_message::MESSAGE_BODY_VERSION;
use crate::msg::{
    BurnLimitEntry, BurnMessageVersionResponse, ConfigResponse, MaxMessageBodySizeResponse,
    NextAvailableNonceResponse, PausedResponse, PerMessageBurnLimitResponse,
    PerMessageBurnLimitsResponse, RemoteTokenMessengerResponse, RemoteTokenMessengersResponse,
    RolesResponse, TokenPairResponse, TokenPairsResponse,
};
use crate::state::{
    ATTESTER_MANAGER, BURNING_AND_MINTING_PAUSED, CONFIG, MAX_MESSAGE_BODY_SIZE,
    NEXT_AVAILABLE_NONCE, OWNER, PENDING_OWNER, PER_MESSAGE_BURN_LIMITS, REMOTE_TOKEN_MESSENGERS,
    SENDING_AND_RECEIVING_PAUSED, TOKEN_CONTROLLER, TOKEN_PAIRS,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        local_domain: config.local_domain,
        burn_denom: config.burn_denom,
    })
}

pub fn query_roles(deps: Deps) -> StdResult<RolesResponse> {
    Ok(RolesResponse {
        owner: OWNER.load(deps.storage)?,
        attester_manager: ATTESTER_MANAGER.load(deps.storage)?,
        token_controller: TOKEN_CONTROLLER.load(deps.storage)?,
        pending_owner: PENDING_OWNER.may_load(deps.storage)?,
    })
}

pub fn query_next_available_nonce(deps: Deps) -> StdResult<NextAvailableNonceResponse> {
    Ok(NextAvailableNonceResponse {
        nonce: NEXT_AVAILABLE_NONCE.load(deps.storage)?,
    })
}

pub fn query_sending_and_receiving_paused(deps: Deps) -> StdResult<PausedResponse> {
    Ok(PausedResponse {
        paused: SENDING_AND_RECEIVING_PAUSED.load(deps.storage)?,
    })
}

pub fn query_burning_and_minting_paused(deps: Deps) -> StdResult<PausedResponse> {
    Ok(PausedResponse {
        paused: BURNING_AND_MINTING_PAUSED.load(deps.storage)?,
    })
}

pub fn query_max_message_body_size(deps: Deps) -> StdResult<MaxMessageBodySizeResponse> {
    Ok(MaxMessageBodySizeResponse {
        size: MAX_MESSAGE_BODY_SIZE.load(deps.storage)?,
    })
}

pub fn query_burn_message_version() -> StdResult<BurnMessageVersionResponse> {
    Ok(BurnMessageVersionResponse {
        version: MESSAGE_BODY_VERSION,
    })
}

pub fn query_per_message_burn_limit(
    deps: Deps,
    denom: String,
) -> StdResult<PerMessageBurnLimitResponse> {
    let denom = denom.to_lowercase();
    let amount = PER_MESSAGE_BURN_LIMITS.may_load(deps.storage, &denom)?;
    Ok(PerMessageBurnLimitResponse { denom, amount })
}

pub fn query_per_message_burn_limits(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<PerMessageBurnLimitsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start: Option<Bound<&str>> = start_after.as_deref().map(Bound::exclusive);

    let limits = PER_MESSAGE_BURN_LIMITS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (denom, amount) = item?;
            Ok(BurnLimitEntry { denom, amount })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(PerMessageBurnLimitsResponse { limits })
}

pub fn query_remote_token_messenger(
    deps: Deps,
    domain_id: u32,
) -> StdResult<RemoteTokenMessengerResponse> {
    let messenger = REMOTE_TOKEN_MESSENGERS.load(deps.storage, domain_id)?;
    Ok(RemoteTokenMessengerResponse {
        domain_id: messenger.domain_id,
        address: messenger.address,
    })
}

pub fn query_remote_token_messengers(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<RemoteTokenMessengersResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start: Option<Bound<u32>> = start_after.map(Bound::exclusive);

    let remote_token_messengers = REMOTE_TOKEN_MESSENGERS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| Ok(item?.1))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(RemoteTokenMessengersResponse {
        remote_token_messengers,
    })
}

pub fn query_token_pair(
    deps: Deps,
    remote_domain: u32,
    remote_token: Binary,
) -> StdResult<TokenPairResponse> {
    let pair = TOKEN_PAIRS.load(deps.storage, (remote_domain, remote_token.as_slice()))?;
    Ok(TokenPairResponse {
        remote_domain: pair.remote_domain,
        remote_token: pair.remote_token,
        local_token: pair.local_token,
    })
}

pub fn query_token_pairs(
    deps: Deps,
    start_after: Option<(u32, Binary)>,
    limit: Option<u32>,
) -> StdResult<TokenPairsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start: Option<Bound<(u32, &[u8])>> = start_after
        .as_ref()
        .map(|(domain, token)| Bound::exclusive((*domain, token.as_slice())));

    let token_pairs = TOKEN_PAIRS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| Ok(item?.1))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TokenPairsResponse { token_pairs })
}
