//! Burn-and-bridge orchestration.
//!
//! A deposit burns the attached funds and emits a burn payload addressed to
//! the token messenger registered on the destination domain. The envelope
//! sender is the contract itself; the depositing account is carried inside
//! the payload as the message sender.

use cosmwasm_std::{
    coin, to_json_binary, BankMsg, Binary, Coin, DepsMut, Env, MessageInfo, Response, Uint128,
};

use crate::burn_message::{BurnMessage, MESSAGE_BODY_VERSION, MINT_RECIPIENT_LEN};
use crate::error::ContractError;
use crate::execute::send::{emit_message, validate_destination_caller};
use crate::hash::{address_to_bytes32, bytes32_to_hex, bytes_to_hex, keccak256};
use crate::msg::DepositForBurnResponse;
use crate::state::{
    BURNING_AND_MINTING_PAUSED, CONFIG, PER_MESSAGE_BURN_LIMITS, REMOTE_TOKEN_MESSENGERS,
};

/// Execute handler for burning attached funds toward a destination domain
pub fn execute_deposit_for_burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    destination_domain: u32,
    mint_recipient: Binary,
    burn_token: String,
) -> Result<Response, ContractError> {
    deposit_for_burn(
        deps,
        env,
        info,
        amount,
        destination_domain,
        mint_recipient,
        burn_token,
        [0u8; 32],
        "deposit_for_burn",
    )
}

/// Execute handler for a burn only `destination_caller` may complete
pub fn execute_deposit_for_burn_with_caller(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    destination_domain: u32,
    mint_recipient: Binary,
    burn_token: String,
    destination_caller: Binary,
) -> Result<Response, ContractError> {
    // validated before any funds handling
    let caller = validate_destination_caller(destination_caller.as_slice())?;
    deposit_for_burn(
        deps,
        env,
        info,
        amount,
        destination_domain,
        mint_recipient,
        burn_token,
        caller,
        "deposit_for_burn_with_caller",
    )
}

/// Shared deposit-for-burn core.
///
/// A destination caller of all zeros leaves the message unrestricted.
/// Checks run before any state change; the burn and the emitted message
/// commit or abort together with the surrounding transaction.
#[allow(clippy::too_many_arguments)]
fn deposit_for_burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    destination_domain: u32,
    mint_recipient: Binary,
    burn_token: String,
    destination_caller: [u8; 32],
    method: &str,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }

    let recipient_slice = mint_recipient.as_slice();
    if recipient_slice.len() != MINT_RECIPIENT_LEN || recipient_slice.iter().all(|&b| b == 0) {
        return Err(ContractError::InvalidMintRecipient);
    }

    let remote_messenger = REMOTE_TOKEN_MESSENGERS
        .may_load(deps.storage, destination_domain)?
        .ok_or(ContractError::RemoteTokenMessengerNotFound {
            domain: destination_domain,
        })?;

    let config = CONFIG.load(deps.storage)?;
    let denom_key = burn_token.to_lowercase();
    if denom_key != config.burn_denom {
        return Err(ContractError::UnsupportedBurnDenom { denom: burn_token });
    }

    if BURNING_AND_MINTING_PAUSED.load(deps.storage)? {
        return Err(ContractError::BurningPaused);
    }

    if let Some(limit) = PER_MESSAGE_BURN_LIMITS.may_load(deps.storage, &denom_key)? {
        if amount > limit {
            return Err(ContractError::BurnLimitExceeded { amount, limit });
        }
    }

    // the attached funds are the transfer into contract custody
    let expected = coin(amount.u128(), &burn_token);
    if info.funds.len() != 1 || info.funds[0] != expected {
        return Err(ContractError::InvalidDepositFunds {
            expected,
            received: format_funds(&info.funds),
        });
    }

    let message_sender = address_to_bytes32(deps.as_ref(), &info.sender)?;
    let mut recipient_bytes = [0u8; MINT_RECIPIENT_LEN];
    recipient_bytes.copy_from_slice(recipient_slice);

    let burn_message = BurnMessage {
        version: MESSAGE_BODY_VERSION,
        burn_token: keccak256(denom_key.as_bytes()),
        mint_recipient: recipient_bytes,
        amount,
        message_sender,
    };
    let body = burn_message.to_bytes();

    // the contract itself is the envelope sender for burn messages
    let module_sender = address_to_bytes32(deps.as_ref(), &env.contract.address)?;
    let message = emit_message(
        deps.storage,
        module_sender,
        destination_domain,
        remote_messenger.address.as_slice(),
        destination_caller,
        &body,
    )?;

    Ok(Response::new()
        .add_message(BankMsg::Burn {
            amount: vec![expected],
        })
        .set_data(to_json_binary(&DepositForBurnResponse {
            nonce: message.nonce,
        })?)
        .add_attribute("method", method)
        .add_attribute("depositor", info.sender.to_string())
        .add_attribute("burn_token", bytes32_to_hex(&keccak256(burn_token.as_bytes())))
        .add_attribute("amount", amount.to_string())
        .add_attribute("destination_domain", destination_domain.to_string())
        .add_attribute("mint_recipient", bytes_to_hex(recipient_slice))
        .add_attribute(
            "destination_token_messenger",
            bytes_to_hex(remote_messenger.address.as_slice()),
        )
        .add_attribute("destination_caller", bytes_to_hex(&destination_caller))
        .add_attribute("nonce", message.nonce.to_string())
        .add_attribute("message", bytes_to_hex(&message.to_bytes())))
}

fn format_funds(funds: &[Coin]) -> String {
    if funds.is_empty() {
        return "none".to_string();
    }
    funds
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{
        mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage,
    };
    use cosmwasm_std::{coins, from_json, Addr, CosmosMsg, OwnedDeps};

    use crate::message::Message;
    use crate::state::{
        Config, RemoteTokenMessenger, MAX_MESSAGE_BODY_SIZE, NEXT_AVAILABLE_NONCE,
        SENDING_AND_RECEIVING_PAUSED,
    };

    const LOCAL_DOMAIN: u32 = 4;
    const REMOTE_DOMAIN: u32 = 0;
    const MESSENGER: [u8; 32] = [0xee; 32];

    fn setup_deps() -> OwnedDeps<MockStorage, MockApi, MockQuerier> {
        let mut deps = mock_dependencies();
        let storage = deps.as_mut().storage;
        CONFIG
            .save(
                storage,
                &Config {
                    local_domain: LOCAL_DOMAIN,
                    burn_denom: "uusdc".to_string(),
                },
            )
            .unwrap();
        NEXT_AVAILABLE_NONCE.save(storage, &0).unwrap();
        SENDING_AND_RECEIVING_PAUSED.save(storage, &false).unwrap();
        BURNING_AND_MINTING_PAUSED.save(storage, &false).unwrap();
        MAX_MESSAGE_BODY_SIZE.save(storage, &8000).unwrap();
        REMOTE_TOKEN_MESSENGERS
            .save(
                storage,
                REMOTE_DOMAIN,
                &RemoteTokenMessenger {
                    domain_id: REMOTE_DOMAIN,
                    address: Binary::from(MESSENGER.to_vec()),
                },
            )
            .unwrap();
        deps
    }

    fn attribute(res: &Response, key: &str) -> String {
        res.attributes
            .iter()
            .find(|a| a.key == key)
            .unwrap_or_else(|| panic!("missing attribute {}", key))
            .value
            .clone()
    }

    fn decode_message(res: &Response) -> Message {
        let hex_attr = attribute(res, "message");
        let raw = hex::decode(hex_attr.trim_start_matches("0x")).unwrap();
        Message::from_bytes(&raw).unwrap()
    }

    fn deposit(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        amount: u128,
        funds: &[Coin],
    ) -> Result<Response, ContractError> {
        execute_deposit_for_burn(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1depositor", funds),
            Uint128::new(amount),
            REMOTE_DOMAIN,
            Binary::from([0x11; 32].to_vec()),
            "uusdc".to_string(),
        )
    }

    #[test]
    fn test_deposit_for_burn_happy_path() {
        let mut deps = setup_deps();

        let res = deposit(&mut deps, 1_000_000, &coins(1_000_000, "uusdc")).unwrap();

        assert_eq!(res.messages.len(), 1);
        assert_eq!(
            res.messages[0].msg,
            CosmosMsg::Bank(BankMsg::Burn {
                amount: coins(1_000_000, "uusdc"),
            })
        );

        assert_eq!(attribute(&res, "nonce"), "0");
        let data: DepositForBurnResponse = from_json(res.data.as_ref().unwrap()).unwrap();
        assert_eq!(data.nonce, 0);
        assert_eq!(NEXT_AVAILABLE_NONCE.load(deps.as_ref().storage).unwrap(), 1);

        let message = decode_message(&res);
        assert_eq!(message.source_domain, LOCAL_DOMAIN);
        assert_eq!(message.destination_domain, REMOTE_DOMAIN);
        assert_eq!(message.recipient, MESSENGER);
        assert_eq!(message.destination_caller, [0u8; 32]);

        let contract_sender =
            address_to_bytes32(deps.as_ref(), &mock_env().contract.address).unwrap();
        assert_eq!(message.sender, contract_sender);

        let payload = BurnMessage::from_bytes(&message.message_body).unwrap();
        assert_eq!(payload.version, MESSAGE_BODY_VERSION);
        assert_eq!(payload.burn_token, keccak256(b"uusdc"));
        assert_eq!(payload.mint_recipient, [0x11; 32]);
        assert_eq!(payload.amount, Uint128::new(1_000_000));

        let depositor =
            address_to_bytes32(deps.as_ref(), &Addr::unchecked("terra1depositor")).unwrap();
        assert_eq!(payload.message_sender, depositor);
    }

    /// The audit attribute hashes the denomination exactly as supplied,
    /// while the payload hashes the lower-cased form
    #[test]
    fn test_mixed_case_burn_token() {
        let mut deps = setup_deps();

        let res = execute_deposit_for_burn(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1depositor", &coins(500, "uUSDC")),
            Uint128::new(500),
            REMOTE_DOMAIN,
            Binary::from([0x11; 32].to_vec()),
            "uUSDC".to_string(),
        )
        .unwrap();

        assert_eq!(
            attribute(&res, "burn_token"),
            bytes32_to_hex(&keccak256(b"uUSDC"))
        );

        let payload = BurnMessage::from_bytes(&decode_message(&res).message_body).unwrap();
        assert_eq!(payload.burn_token, keccak256(b"uusdc"));
    }

    #[test]
    fn test_rejects_zero_amount() {
        let mut deps = setup_deps();
        let err = deposit(&mut deps, 0, &[]).unwrap_err();
        assert_eq!(err, ContractError::InvalidAmount);
    }

    #[test]
    fn test_rejects_zero_mint_recipient() {
        let mut deps = setup_deps();

        let err = execute_deposit_for_burn(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1depositor", &coins(500, "uusdc")),
            Uint128::new(500),
            REMOTE_DOMAIN,
            Binary::from([0u8; 32].to_vec()),
            "uusdc".to_string(),
        )
        .unwrap_err();

        assert_eq!(err, ContractError::InvalidMintRecipient);
    }

    #[test]
    fn test_rejects_unknown_destination_domain() {
        let mut deps = setup_deps();

        let err = execute_deposit_for_burn(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1depositor", &coins(500, "uusdc")),
            Uint128::new(500),
            99,
            Binary::from([0x11; 32].to_vec()),
            "uusdc".to_string(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            ContractError::RemoteTokenMessengerNotFound { domain: 99 }
        );
    }

    #[test]
    fn test_rejects_unsupported_denom() {
        let mut deps = setup_deps();

        let err = execute_deposit_for_burn(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1depositor", &coins(500, "uluna")),
            Uint128::new(500),
            REMOTE_DOMAIN,
            Binary::from([0x11; 32].to_vec()),
            "uluna".to_string(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            ContractError::UnsupportedBurnDenom {
                denom: "uluna".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_when_burning_paused() {
        let mut deps = setup_deps();
        BURNING_AND_MINTING_PAUSED
            .save(deps.as_mut().storage, &true)
            .unwrap();

        let err = deposit(&mut deps, 500, &coins(500, "uusdc")).unwrap_err();
        assert_eq!(err, ContractError::BurningPaused);
        assert_eq!(NEXT_AVAILABLE_NONCE.load(deps.as_ref().storage).unwrap(), 0);
    }

    #[test]
    fn test_burn_limit_boundary() {
        let mut deps = setup_deps();
        PER_MESSAGE_BURN_LIMITS
            .save(deps.as_mut().storage, "uusdc", &Uint128::new(1000))
            .unwrap();

        assert!(deposit(&mut deps, 1000, &coins(1000, "uusdc")).is_ok());

        let err = deposit(&mut deps, 1001, &coins(1001, "uusdc")).unwrap_err();
        assert_eq!(
            err,
            ContractError::BurnLimitExceeded {
                amount: Uint128::new(1001),
                limit: Uint128::new(1000),
            }
        );
        assert_eq!(NEXT_AVAILABLE_NONCE.load(deps.as_ref().storage).unwrap(), 1);
    }

    #[test]
    fn test_rejects_missing_funds() {
        let mut deps = setup_deps();

        let err = deposit(&mut deps, 500, &[]).unwrap_err();
        assert_eq!(
            err,
            ContractError::InvalidDepositFunds {
                expected: coin(500, "uusdc"),
                received: "none".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_wrong_funds_amount() {
        let mut deps = setup_deps();

        let err = deposit(&mut deps, 500, &coins(400, "uusdc")).unwrap_err();
        assert!(matches!(err, ContractError::InvalidDepositFunds { .. }));

        let err = deposit(&mut deps, 500, &coins(600, "uusdc")).unwrap_err();
        assert!(matches!(err, ContractError::InvalidDepositFunds { .. }));
    }

    #[test]
    fn test_rejects_extra_coins() {
        let mut deps = setup_deps();

        let funds = vec![coin(500, "uusdc"), coin(10, "uluna")];
        let err = deposit(&mut deps, 500, &funds).unwrap_err();
        assert!(matches!(err, ContractError::InvalidDepositFunds { .. }));
    }

    /// Amount is checked before the mint recipient
    #[test]
    fn test_amount_check_precedes_recipient() {
        let mut deps = setup_deps();

        let err = execute_deposit_for_burn(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1depositor", &[]),
            Uint128::zero(),
            REMOTE_DOMAIN,
            Binary::from([0u8; 32].to_vec()),
            "uusdc".to_string(),
        )
        .unwrap_err();

        assert_eq!(err, ContractError::InvalidAmount);
    }

    /// Messenger lookup precedes the denomination check
    #[test]
    fn test_messenger_lookup_precedes_denom_check() {
        let mut deps = setup_deps();

        let err = execute_deposit_for_burn(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1depositor", &coins(500, "uluna")),
            Uint128::new(500),
            99,
            Binary::from([0x11; 32].to_vec()),
            "uluna".to_string(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            ContractError::RemoteTokenMessengerNotFound { domain: 99 }
        );
    }

    #[test]
    fn test_with_caller_embeds_caller() {
        let mut deps = setup_deps();

        let res = execute_deposit_for_burn_with_caller(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1depositor", &coins(500, "uusdc")),
            Uint128::new(500),
            REMOTE_DOMAIN,
            Binary::from([0x11; 32].to_vec()),
            "uusdc".to_string(),
            Binary::from([0xcc; 32].to_vec()),
        )
        .unwrap();

        let message = decode_message(&res);
        assert_eq!(message.destination_caller, [0xcc; 32]);
        assert_eq!(
            attribute(&res, "destination_caller"),
            bytes_to_hex(&[0xcc; 32])
        );
    }

    /// The caller argument fails before any other deposit validation
    #[test]
    fn test_with_caller_rejects_zero_caller_first() {
        let mut deps = setup_deps();

        let err = execute_deposit_for_burn_with_caller(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1depositor", &[]),
            Uint128::zero(),
            99,
            Binary::from([0u8; 32].to_vec()),
            "uluna".to_string(),
            Binary::from([0u8; 32].to_vec()),
        )
        .unwrap_err();

        assert_eq!(err, ContractError::InvalidDestinationCaller);
        assert_eq!(NEXT_AVAILABLE_NONCE.load(deps.as_ref().storage).unwrap(), 0);
    }

    /// Sends and burns draw nonces from the same ledger
    #[test]
    fn test_burn_shares_nonce_space_with_send() {
        let mut deps = setup_deps();

        let res = deposit(&mut deps, 500, &coins(500, "uusdc")).unwrap();
        assert_eq!(attribute(&res, "nonce"), "0");

        let res = crate::execute::send::execute_send_message(
            deps.as_mut(),
            mock_info("terra1sender", &[]),
            REMOTE_DOMAIN,
            Binary::from([0xbb; 32].to_vec()),
            Binary::from(b"hello".to_vec()),
        )
        .unwrap();
        assert_eq!(attribute(&res, "nonce"), "1");

        let res = deposit(&mut deps, 600, &coins(600, "uusdc")).unwrap();
        assert_eq!(attribute(&res, "nonce"), "2");
    }
}
