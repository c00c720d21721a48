//! Message emission handlers.
//!
//! Both entry points and the burn orchestrator funnel through
//! `emit_message`, which owns the pause gate, the recipient and body-size
//! checks, and the nonce allocation. The serialized envelope is published
//! as a `message` attribute for relayers to pick up.

use cosmwasm_std::{to_json_binary, Binary, DepsMut, MessageInfo, Response, Storage};

use crate::error::ContractError;
use crate::hash::{address_to_bytes32, bytes_to_hex};
use crate::message::{Message, ADDRESS_LEN, MESSAGE_VERSION};
use crate::msg::SendMessageResponse;
use crate::state::{allocate_nonce, CONFIG, MAX_MESSAGE_BODY_SIZE, SENDING_AND_RECEIVING_PAUSED};

/// Execute handler for sending a message callable by anyone
pub fn execute_send_message(
    deps: DepsMut,
    info: MessageInfo,
    destination_domain: u32,
    recipient: Binary,
    message_body: Binary,
) -> Result<Response, ContractError> {
    let sender = address_to_bytes32(deps.as_ref(), &info.sender)?;
    let message = emit_message(
        deps.storage,
        sender,
        destination_domain,
        recipient.as_slice(),
        [0u8; ADDRESS_LEN],
        message_body.as_slice(),
    )?;

    send_response("send_message", &info, &message)
}

/// Execute handler for sending a message only `destination_caller` may relay
pub fn execute_send_message_with_caller(
    deps: DepsMut,
    info: MessageInfo,
    destination_domain: u32,
    recipient: Binary,
    message_body: Binary,
    destination_caller: Binary,
) -> Result<Response, ContractError> {
    let caller = validate_destination_caller(destination_caller.as_slice())?;
    let sender = address_to_bytes32(deps.as_ref(), &info.sender)?;
    let message = emit_message(
        deps.storage,
        sender,
        destination_domain,
        recipient.as_slice(),
        caller,
        message_body.as_slice(),
    )?;

    Ok(send_response("send_message_with_caller", &info, &message)?
        .add_attribute("destination_caller", bytes_to_hex(&message.destination_caller)))
}

/// Shared emission core.
///
/// Checks run in a fixed order: pause gate, recipient, body size. Only
/// after all of them pass is a nonce reserved, so failed calls never
/// consume one. A destination caller of all zeros means unrestricted.
pub(crate) fn emit_message(
    storage: &mut dyn Storage,
    sender: [u8; 32],
    destination_domain: u32,
    recipient: &[u8],
    destination_caller: [u8; 32],
    message_body: &[u8],
) -> Result<Message, ContractError> {
    if SENDING_AND_RECEIVING_PAUSED.load(storage)? {
        return Err(ContractError::MessagingPaused);
    }

    if recipient.len() != ADDRESS_LEN || recipient.iter().all(|&b| b == 0) {
        return Err(ContractError::InvalidRecipient);
    }

    let max = MAX_MESSAGE_BODY_SIZE.load(storage)?;
    if message_body.len() as u64 > max {
        return Err(ContractError::MessageBodyTooLarge {
            size: message_body.len() as u64,
            max,
        });
    }

    let config = CONFIG.load(storage)?;
    let nonce = allocate_nonce(storage)?;

    let mut recipient_bytes = [0u8; ADDRESS_LEN];
    recipient_bytes.copy_from_slice(recipient);

    Ok(Message {
        version: MESSAGE_VERSION,
        source_domain: config.local_domain,
        destination_domain,
        nonce,
        sender,
        recipient: recipient_bytes,
        destination_caller,
        message_body: message_body.to_vec(),
    })
}

/// Check a destination caller argument: exactly 32 bytes, not all zero
pub(crate) fn validate_destination_caller(bytes: &[u8]) -> Result<[u8; 32], ContractError> {
    if bytes.len() != ADDRESS_LEN || bytes.iter().all(|&b| b == 0) {
        return Err(ContractError::InvalidDestinationCaller);
    }

    let mut caller = [0u8; ADDRESS_LEN];
    caller.copy_from_slice(bytes);
    Ok(caller)
}

fn send_response(
    method: &str,
    info: &MessageInfo,
    message: &Message,
) -> Result<Response, ContractError> {
    Ok(Response::new()
        .set_data(to_json_binary(&SendMessageResponse {
            nonce: message.nonce,
        })?)
        .add_attribute("method", method)
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("destination_domain", message.destination_domain.to_string())
        .add_attribute("recipient", bytes_to_hex(&message.recipient))
        .add_attribute("nonce", message.nonce.to_string())
        .add_attribute("message", bytes_to_hex(&message.to_bytes())))
}
