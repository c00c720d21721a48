//! Registry handlers for remote token messengers, token pairs, and
//! per-message burn limits.

use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::hash::bytes_to_hex;
use crate::message::ADDRESS_LEN;
use crate::state::{
    assert_role, RemoteTokenMessenger, Role, TokenPair, PER_MESSAGE_BURN_LIMITS,
    REMOTE_TOKEN_MESSENGERS, TOKEN_PAIRS,
};

/// Fixed width of remote token identifiers
pub const REMOTE_TOKEN_LEN: usize = 32;

/// Register the token messenger of a remote domain (owner only)
pub fn execute_add_remote_token_messenger(
    deps: DepsMut,
    info: MessageInfo,
    domain_id: u32,
    address: Binary,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, Role::Owner, &info.sender)?;

    let bytes = address.as_slice();
    if bytes.len() != ADDRESS_LEN || bytes.iter().all(|&b| b == 0) {
        return Err(ContractError::InvalidAddress {
            reason: format!(
                "remote token messenger address must be {} nonzero bytes",
                ADDRESS_LEN
            ),
        });
    }

    if REMOTE_TOKEN_MESSENGERS
        .may_load(deps.storage, domain_id)?
        .is_some()
    {
        return Err(ContractError::RemoteTokenMessengerAlreadyRegistered { domain: domain_id });
    }

    let address_hex = bytes_to_hex(bytes);
    REMOTE_TOKEN_MESSENGERS.save(
        deps.storage,
        domain_id,
        &RemoteTokenMessenger { domain_id, address },
    )?;

    Ok(Response::new()
        .add_attribute("method", "add_remote_token_messenger")
        .add_attribute("domain_id", domain_id.to_string())
        .add_attribute("address", address_hex))
}

/// Drop the token messenger of a remote domain (owner only)
pub fn execute_remove_remote_token_messenger(
    deps: DepsMut,
    info: MessageInfo,
    domain_id: u32,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, Role::Owner, &info.sender)?;

    let existing = REMOTE_TOKEN_MESSENGERS
        .may_load(deps.storage, domain_id)?
        .ok_or(ContractError::RemoteTokenMessengerNotFound { domain: domain_id })?;
    REMOTE_TOKEN_MESSENGERS.remove(deps.storage, domain_id);

    Ok(Response::new()
        .add_attribute("method", "remove_remote_token_messenger")
        .add_attribute("domain_id", domain_id.to_string())
        .add_attribute("address", bytes_to_hex(existing.address.as_slice())))
}

/// Cap single-burn amounts for a denomination (token controller only)
pub fn execute_set_per_message_burn_limit(
    deps: DepsMut,
    info: MessageInfo,
    denom: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, Role::TokenController, &info.sender)?;

    let denom_key = denom.to_lowercase();
    PER_MESSAGE_BURN_LIMITS.save(deps.storage, &denom_key, &amount)?;

    Ok(Response::new()
        .add_attribute("method", "set_per_message_burn_limit")
        .add_attribute("denom", denom_key)
        .add_attribute("amount", amount.to_string()))
}

/// Map a remote token to a local denomination (token controller only)
pub fn execute_link_token_pair(
    deps: DepsMut,
    info: MessageInfo,
    remote_domain: u32,
    remote_token: Binary,
    local_token: String,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, Role::TokenController, &info.sender)?;

    let token_bytes = remote_token.as_slice();
    if token_bytes.len() != REMOTE_TOKEN_LEN {
        return Err(ContractError::InvalidRemoteToken {
            expected: REMOTE_TOKEN_LEN,
        });
    }

    if TOKEN_PAIRS
        .may_load(deps.storage, (remote_domain, token_bytes))?
        .is_some()
    {
        return Err(ContractError::TokenPairAlreadyLinked);
    }

    let local_token = local_token.to_lowercase();
    TOKEN_PAIRS.save(
        deps.storage,
        (remote_domain, token_bytes),
        &TokenPair {
            remote_domain,
            remote_token: remote_token.clone(),
            local_token: local_token.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "link_token_pair")
        .add_attribute("local_token", local_token)
        .add_attribute("remote_domain", remote_domain.to_string())
        .add_attribute("remote_token", bytes_to_hex(token_bytes)))
}

/// Remove a remote-to-local token mapping (token controller only)
pub fn execute_unlink_token_pair(
    deps: DepsMut,
    info: MessageInfo,
    remote_domain: u32,
    remote_token: Binary,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, Role::TokenController, &info.sender)?;

    let token_bytes = remote_token.as_slice();
    if token_bytes.len() != REMOTE_TOKEN_LEN {
        return Err(ContractError::InvalidRemoteToken {
            expected: REMOTE_TOKEN_LEN,
        });
    }

    let pair = TOKEN_PAIRS
        .may_load(deps.storage, (remote_domain, token_bytes))?
        .ok_or(ContractError::TokenPairNotFound)?;
    TOKEN_PAIRS.remove(deps.storage, (remote_domain, token_bytes));

    Ok(Response::new()
        .add_attribute("method", "unlink_token_pair")
        .add_attribute("local_token", pair.local_token)
        .add_attribute("remote_domain", remote_domain.to_string())
        .add_attribute("remote_token", bytes_to_hex(token_bytes)))
}
