//! Role and policy administration handlers.
//!
//! Every handler authorizes first, then validates, then mutates. Ownership
//! moves in two steps: the owner proposes, the candidate accepts.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{
    assert_role, Role, ATTESTER_MANAGER, BURNING_AND_MINTING_PAUSED, MAX_MESSAGE_BODY_SIZE, OWNER,
    PENDING_OWNER, SENDING_AND_RECEIVING_PAUSED, TOKEN_CONTROLLER,
};

/// Propose a new owner; takes effect when the candidate accepts
pub fn execute_update_owner(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, Role::Owner, &info.sender)?;

    let new_owner =
        deps.api
            .addr_validate(&new_owner)
            .map_err(|_| ContractError::InvalidAddress {
                reason: "invalid owner address".to_string(),
            })?;
    PENDING_OWNER.save(deps.storage, &new_owner)?;

    Ok(Response::new()
        .add_attribute("method", "update_owner")
        .add_attribute("pending_owner", new_owner))
}

/// Complete an ownership transfer; only the proposed owner may call
pub fn execute_accept_owner(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let pending = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingOwner)?;

    if info.sender != pending {
        return Err(ContractError::UnauthorizedPendingOwner);
    }

    let previous = OWNER.load(deps.storage)?;
    OWNER.save(deps.storage, &pending)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "accept_owner")
        .add_attribute("previous_owner", previous)
        .add_attribute("new_owner", pending))
}

/// Replace the attester manager (owner only)
pub fn execute_update_attester_manager(
    deps: DepsMut,
    info: MessageInfo,
    new_attester_manager: String,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, Role::Owner, &info.sender)?;

    let new_attester_manager = deps
        .api
        .addr_validate(&new_attester_manager)
        .map_err(|_| ContractError::InvalidAddress {
            reason: "invalid attester manager address".to_string(),
        })?;

    let previous = ATTESTER_MANAGER.load(deps.storage)?;
    ATTESTER_MANAGER.save(deps.storage, &new_attester_manager)?;

    Ok(Response::new()
        .add_attribute("method", "update_attester_manager")
        .add_attribute("previous_attester_manager", previous)
        .add_attribute("new_attester_manager", new_attester_manager))
}

/// Replace the token controller (owner only)
pub fn execute_update_token_controller(
    deps: DepsMut,
    info: MessageInfo,
    new_token_controller: String,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, Role::Owner, &info.sender)?;

    let new_token_controller = deps
        .api
        .addr_validate(&new_token_controller)
        .map_err(|_| ContractError::InvalidAddress {
            reason: "invalid token controller address".to_string(),
        })?;

    let previous = TOKEN_CONTROLLER.load(deps.storage)?;
    TOKEN_CONTROLLER.save(deps.storage, &new_token_controller)?;

    Ok(Response::new()
        .add_attribute("method", "update_token_controller")
        .add_attribute("previous_token_controller", previous)
        .add_attribute("new_token_controller", new_token_controller))
}

/// Halt deposit-for-burn processing (owner only)
pub fn execute_pause_burning_and_minting(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, Role::Owner, &info.sender)?;
    BURNING_AND_MINTING_PAUSED.save(deps.storage, &true)?;

    Ok(Response::new()
        .add_attribute("method", "pause_burning_and_minting")
        .add_attribute("paused", "true"))
}

/// Resume deposit-for-burn processing (owner only)
pub fn execute_unpause_burning_and_minting(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, Role::Owner, &info.sender)?;
    BURNING_AND_MINTING_PAUSED.save(deps.storage, &false)?;

    Ok(Response::new()
        .add_attribute("method", "unpause_burning_and_minting")
        .add_attribute("paused", "false"))
}

/// Halt message emission (owner only)
pub fn execute_pause_sending_and_receiving(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, Role::Owner, &info.sender)?;
    SENDING_AND_RECEIVING_PAUSED.save(deps.storage, &true)?;

    Ok(Response::new()
        .add_attribute("method", "pause_sending_and_receiving")
        .add_attribute("paused", "true"))
}

/// Resume message emission (owner only)
pub fn execute_unpause_sending_and_receiving(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, Role::Owner, &info.sender)?;
    SENDING_AND_RECEIVING_PAUSED.save(deps.storage, &false)?;

    Ok(Response::new()
        .add_attribute("method", "unpause_sending_and_receiving")
        .add_attribute("paused", "false"))
}

/// Set the upper bound on message body length (owner only)
pub fn execute_set_max_message_body_size(
    deps: DepsMut,
    info: MessageInfo,
    size: u64,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, Role::Owner, &info.sender)?;
    MAX_MESSAGE_BODY_SIZE.save(deps.storage, &size)?;

    Ok(Response::new()
        .add_attribute("method", "set_max_message_body_size")
        .add_attribute("size", size.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_info, MockApi, MockQuerier, MockStorage};
    use cosmwasm_std::{Addr, OwnedDeps};

    fn setup_deps() -> OwnedDeps<MockStorage, MockApi, MockQuerier> {
        let mut deps = mock_dependencies();
        let storage = deps.as_mut().storage;
        OWNER
            .save(storage, &Addr::unchecked("terra1owner"))
            .unwrap();
        ATTESTER_MANAGER
            .save(storage, &Addr::unchecked("terra1attester"))
            .unwrap();
        TOKEN_CONTROLLER
            .save(storage, &Addr::unchecked("terra1controller"))
            .unwrap();
        deps
    }

    #[test]
    fn test_ownership_transfer_two_step() {
        let mut deps = setup_deps();

        let err = execute_update_owner(
            deps.as_mut(),
            mock_info("terra1mallory", &[]),
            "terra1mallory".to_string(),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized { role: Role::Owner });

        let err = execute_accept_owner(deps.as_mut(), mock_info("terra1next", &[])).unwrap_err();
        assert_eq!(err, ContractError::NoPendingOwner);

        execute_update_owner(
            deps.as_mut(),
            mock_info("terra1owner", &[]),
            "terra1next".to_string(),
        )
        .unwrap();
        assert_eq!(
            OWNER.load(deps.as_ref().storage).unwrap(),
            Addr::unchecked("terra1owner")
        );

        let err = execute_accept_owner(deps.as_mut(), mock_info("terra1mallory", &[])).unwrap_err();
        assert_eq!(err, ContractError::UnauthorizedPendingOwner);

        execute_accept_owner(deps.as_mut(), mock_info("terra1next", &[])).unwrap();
        assert_eq!(
            OWNER.load(deps.as_ref().storage).unwrap(),
            Addr::unchecked("terra1next")
        );
        assert!(PENDING_OWNER.may_load(deps.as_ref().storage).unwrap().is_none());
    }

    #[test]
    fn test_update_attester_manager_requires_owner() {
        let mut deps = setup_deps();

        let err = execute_update_attester_manager(
            deps.as_mut(),
            mock_info("terra1attester", &[]),
            "terra1newattester".to_string(),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized { role: Role::Owner });

        execute_update_attester_manager(
            deps.as_mut(),
            mock_info("terra1owner", &[]),
            "terra1newattester".to_string(),
        )
        .unwrap();
        assert_eq!(
            ATTESTER_MANAGER.load(deps.as_ref().storage).unwrap(),
            Addr::unchecked("terra1newattester")
        );
    }

    #[test]
    fn test_update_attester_manager_rejects_bad_address() {
        let mut deps = setup_deps();

        let err = execute_update_attester_manager(
            deps.as_mut(),
            mock_info("terra1owner", &[]),
            "x".to_string(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::InvalidAddress {
                reason: "invalid attester manager address".to_string(),
            }
        );
    }

    #[test]
    fn test_pause_switches_toggle_flags() {
        let mut deps = setup_deps();
        SENDING_AND_RECEIVING_PAUSED
            .save(deps.as_mut().storage, &false)
            .unwrap();
        BURNING_AND_MINTING_PAUSED
            .save(deps.as_mut().storage, &false)
            .unwrap();

        execute_pause_sending_and_receiving(deps.as_mut(), mock_info("terra1owner", &[])).unwrap();
        assert!(SENDING_AND_RECEIVING_PAUSED
            .load(deps.as_ref().storage)
            .unwrap());

        execute_unpause_sending_and_receiving(deps.as_mut(), mock_info("terra1owner", &[]))
            .unwrap();
        assert!(!SENDING_AND_RECEIVING_PAUSED
            .load(deps.as_ref().storage)
            .unwrap());

        let err = execute_pause_burning_and_minting(deps.as_mut(), mock_info("terra1user", &[]))
            .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized { role: Role::Owner });
    }
}
