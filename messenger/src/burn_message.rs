//! Byte codec for the burn payload carried in the envelope body.
//!
//! Wire layout (fixed 132 bytes, big-endian):
//! - Bytes 0-3:     version (u32)
//! - Bytes 4-35:    burn token (keccak256 of the lower-cased denomination)
//! - Bytes 36-67:   mint recipient (32 bytes)
//! - Bytes 68-99:   amount (left-padded big-endian integer)
//! - Bytes 100-131: message sender (32 bytes, zero-left-padded account)

use cosmwasm_std::Uint128;

use crate::error::ContractError;

/// Version stamped into every burn payload
pub const MESSAGE_BODY_VERSION: u32 = 0;

/// Fixed length of the serialized burn payload
pub const BURN_MESSAGE_LEN: usize = 132;

/// Fixed width of the mint recipient field
pub const MINT_RECIPIENT_LEN: usize = 32;

/// Burn payload describing one burn-and-mint transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnMessage {
    pub version: u32,
    pub burn_token: [u8; 32],
    pub mint_recipient: [u8; 32],
    pub amount: Uint128,
    pub message_sender: [u8; 32],
}

impl BurnMessage {
    /// Serialize into the wire layout
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; BURN_MESSAGE_LEN];
        out[0..4].copy_from_slice(&self.version.to_be_bytes());
        out[4..36].copy_from_slice(&self.burn_token);
        out[36..68].copy_from_slice(&self.mint_recipient);
        // amount occupies a 32-byte field; the 16-byte value goes in the
        // low half, the high half stays zero
        out[84..100].copy_from_slice(&self.amount.u128().to_be_bytes());
        out[100..132].copy_from_slice(&self.message_sender);
        out
    }

    /// Parse from the wire layout
    pub fn from_bytes(data: &[u8]) -> Result<Self, ContractError> {
        if data.len() != BURN_MESSAGE_LEN {
            return Err(ContractError::ParsingBurnMessage {
                reason: format!("expected {} bytes, got {}", BURN_MESSAGE_LEN, data.len()),
            });
        }

        if data[68..84].iter().any(|&b| b != 0) {
            return Err(ContractError::ParsingBurnMessage {
                reason: "amount exceeds 128 bits".to_string(),
            });
        }

        let mut version = [0u8; 4];
        version.copy_from_slice(&data[0..4]);

        let mut burn_token = [0u8; 32];
        burn_token.copy_from_slice(&data[4..36]);

        let mut mint_recipient = [0u8; 32];
        mint_recipient.copy_from_slice(&data[36..68]);

        let mut amount = [0u8; 16];
        amount.copy_from_slice(&data[84..100]);

        let mut message_sender = [0u8; 32];
        message_sender.copy_from_slice(&data[100..132]);

        Ok(BurnMessage {
            version: u32::from_be_bytes(version),
            burn_token,
            mint_recipient,
            amount: Uint128::new(u128::from_be_bytes(amount)),
            message_sender,
        })
    }
}
