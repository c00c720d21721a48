//! Contract entry points: instantiation, execute dispatch, query dispatch
//! and migration.

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{admin, burn, registry, send};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{
    Config, ATTESTER_MANAGER, BURNING_AND_MINTING_PAUSED, CONFIG, CONTRACT_NAME, CONTRACT_VERSION,
    DEFAULT_MAX_MESSAGE_BODY_SIZE, MAX_MESSAGE_BODY_SIZE, NEXT_AVAILABLE_NONCE, OWNER,
    SENDING_AND_RECEIVING_PAUSED, TOKEN_CONTROLLER,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let attester_manager = deps.api.addr_validate(&msg.attester_manager)?;
    let token_controller = deps.api.addr_validate(&msg.token_controller)?;

    if msg.burn_denom.is_empty() {
        return Err(StdError::generic_err("burn denom must not be empty").into());
    }

    let config = Config {
        local_domain: msg.local_domain,
        burn_denom: msg.burn_denom.to_lowercase(),
    };
    CONFIG.save(deps.storage, &config)?;

    OWNER.save(deps.storage, &owner)?;
    ATTESTER_MANAGER.save(deps.storage, &attester_manager)?;
    TOKEN_CONTROLLER.save(deps.storage, &token_controller)?;

    NEXT_AVAILABLE_NONCE.save(deps.storage, &0)?;
    SENDING_AND_RECEIVING_PAUSED.save(deps.storage, &false)?;
    BURNING_AND_MINTING_PAUSED.save(deps.storage, &false)?;
    MAX_MESSAGE_BODY_SIZE.save(
        deps.storage,
        &msg.max_message_body_size
            .unwrap_or(DEFAULT_MAX_MESSAGE_BODY_SIZE),
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("attester_manager", attester_manager)
        .add_attribute("token_controller", token_controller)
        .add_attribute("local_domain", msg.local_domain.to_string())
        .add_attribute("burn_denom", config.burn_denom))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SendMessage {
            destination_domain,
            recipient,
            message_body,
        } => send::execute_send_message(deps, info, destination_domain, recipient, message_body),
        ExecuteMsg::SendMessageWithCaller {
            destination_domain,
            recipient,
            message_body,
            destination_caller,
        } => send::execute_send_message_with_caller(
            deps,
            info,
            destination_domain,
            recipient,
            message_body,
            destination_caller,
        ),
        ExecuteMsg::DepositForBurn {
            amount,
            destination_domain,
            mint_recipient,
            burn_token,
        } => burn::execute_deposit_for_burn(
            deps,
            env,
            info,
            amount,
            destination_domain,
            mint_recipient,
            burn_token,
        ),
        ExecuteMsg::DepositForBurnWithCaller {
            amount,
            destination_domain,
            mint_recipient,
            burn_token,
            destination_caller,
        } => burn::execute_deposit_for_burn_with_caller(
            deps,
            env,
            info,
            amount,
            destination_domain,
            mint_recipient,
            burn_token,
            destination_caller,
        ),
        ExecuteMsg::UpdateOwner { new_owner } => admin::execute_update_owner(deps, info, new_owner),
        ExecuteMsg::AcceptOwner {} => admin::execute_accept_owner(deps, info),
        ExecuteMsg::UpdateAttesterManager {
            new_attester_manager,
        } => admin::execute_update_attester_manager(deps, info, new_attester_manager),
        ExecuteMsg::UpdateTokenController {
            new_token_controller,
        } => admin::execute_update_token_controller(deps, info, new_token_controller),
        ExecuteMsg::PauseBurningAndMinting {} => {
            admin::execute_pause_burning_and_minting(deps, info)
        }
        ExecuteMsg::UnpauseBurningAndMinting {} => {
            admin::execute_unpause_burning_and_minting(deps, info)
        }
        ExecuteMsg::PauseSendingAndReceiving {} => {
            admin::execute_pause_sending_and_receiving(deps, info)
        }
        ExecuteMsg::UnpauseSendingAndReceiving {} => {
            admin::execute_unpause_sending_and_receiving(deps, info)
        }
        ExecuteMsg::SetMaxMessageBodySize { size } => {
            admin::execute_set_max_message_body_size(deps, info, size)
        }
        ExecuteMsg::SetPerMessageBurnLimit { denom, amount } => {
            registry::execute_set_per_message_burn_limit(deps, info, denom, amount)
        }
        ExecuteMsg::AddRemoteTokenMessenger { domain_id, address } => {
            registry::execute_add_remote_token_messenger(deps, info, domain_id, address)
        }
        ExecuteMsg::RemoveRemoteTokenMessenger { domain_id } => {
            registry::execute_remove_remote_token_messenger(deps, info, domain_id)
        }
        ExecuteMsg::LinkTokenPair {
            remote_domain,
            remote_token,
            local_token,
        } => registry::execute_link_token_pair(deps, info, remote_domain, remote_token, local_token),
        ExecuteMsg::UnlinkTokenPair {
            remote_domain,
            remote_token,
        } => registry::execute_unlink_token_pair(deps, info, remote_domain, remote_token),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query::query_config(deps)?),
        QueryMsg::Roles {} => to_json_binary(&query::query_roles(deps)?),
        QueryMsg::NextAvailableNonce {} => {
            to_json_binary(&query::query_next_available_nonce(deps)?)
        }
        QueryMsg::SendingAndReceivingMessagesPaused {} => {
            to_json_binary(&query::query_sending_and_receiving_paused(deps)?)
        }
        QueryMsg::BurningAndMintingPaused {} => {
            to_json_binary(&query::query_burning_and_minting_paused(deps)?)
        }
        QueryMsg::MaxMessageBodySize {} => {
            to_json_binary(&query::query_max_message_body_size(deps)?)
        }
        QueryMsg::BurnMessageVersion {} => to_json_binary(&query::query_burn_message_version()?),
        QueryMsg::PerMessageBurnLimit { denom } => {
            to_json_binary(&query::query_per_message_burn_limit(deps, denom)?)
        }
        QueryMsg::PerMessageBurnLimits { start_after, limit } => {
            to_json_binary(&query::query_per_message_burn_limits(deps, start_after, limit)?)
        }
        QueryMsg::RemoteTokenMessenger { domain_id } => {
            to_json_binary(&query::query_remote_token_messenger(deps, domain_id)?)
        }
        QueryMsg::RemoteTokenMessengers { start_after, limit } => {
            to_json_binary(&query::query_remote_token_messengers(deps, start_after, limit)?)
        }
        QueryMsg::TokenPair {
            remote_domain,
            remote_token,
        } => to_json_binary(&query::query_token_pair(deps, remote_domain, remote_token)?),
        QueryMsg::TokenPairs { start_after, limit } => {
            to_json_binary(&query::query_token_pairs(deps, start_after, limit)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
