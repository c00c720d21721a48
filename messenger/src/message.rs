//! Byte codec for the outbound message envelope.
//!
//! Wire layout (big-endian, header 116 bytes + variable body):
//! - Bytes 0-3:     version (u32)
//! - Bytes 4-7:     source domain (u32)
//! - Bytes 8-11:    destination domain (u32)
//! - Bytes 12-19:   nonce (u64)
//! - Bytes 20-51:   sender (32 bytes)
//! - Bytes 52-83:   recipient (32 bytes)
//! - Bytes 84-115:  destination caller (32 bytes, all-zero = unrestricted)
//! - Bytes 116-:    message body

use crate::error::ContractError;

/// Version stamped into every envelope header
pub const MESSAGE_VERSION: u32 = 0;

/// Fixed width of the sender/recipient/destination caller fields
pub const ADDRESS_LEN: usize = 32;

/// Envelope header length; the body starts here
pub const HEADER_LEN: usize = 116;

/// Outbound message envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub version: u32,
    pub source_domain: u32,
    pub destination_domain: u32,
    pub nonce: u64,
    pub sender: [u8; 32],
    pub recipient: [u8; 32],
    pub destination_caller: [u8; 32],
    pub message_body: Vec<u8>,
}

impl Message {
    /// Serialize into the wire layout
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.message_body.len());
        out.extend_from_slice(&self.version.to_be_bytes());
        out.extend_from_slice(&self.source_domain.to_be_bytes());
        out.extend_from_slice(&self.destination_domain.to_be_bytes());
        out.extend_from_slice(&self.nonce.to_be_bytes());
        out.extend_from_slice(&self.sender);
        out.extend_from_slice(&self.recipient);
        out.extend_from_slice(&self.destination_caller);
        out.extend_from_slice(&self.message_body);
        out
    }

    /// Parse from the wire layout; the body may be empty
    pub fn from_bytes(data: &[u8]) -> Result<Self, ContractError> {
        if data.len() < HEADER_LEN {
            return Err(ContractError::ParsingMessage {
                reason: format!(
                    "expected at least {} bytes, got {}",
                    HEADER_LEN,
                    data.len()
                ),
            });
        }

        Ok(Message {
            version: read_u32(data, 0),
            source_domain: read_u32(data, 4),
            destination_domain: read_u32(data, 8),
            nonce: read_u64(data, 12),
            sender: read_bytes32(data, 20),
            recipient: read_bytes32(data, 52),
            destination_caller: read_bytes32(data, 84),
            message_body: data[HEADER_LEN..].to_vec(),
        })
    }
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&data[offset..offset + 4]);
    u32::from_be_bytes(buf)
}

fn read_u64(data: &[u8], offset: usize) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&data[offset..offset + 8]);
    u64::from_be_bytes(buf)
}

fn read_bytes32(data: &[u8], offset: usize) -> [u8; 32] {
    let mut buf = [0u8; 32];
    buf.copy_from_slice(&data[offset..offset + 32]);
    buf
}
