//! Keccak-256 and byte-encoding helpers shared by the message codecs.
//!
//! Cross-chain identifiers in this protocol are opaque 32-byte values.
//! Local bech32 accounts are widened into that field by canonicalizing and
//! left-padding with zeros, matching how counterpart chains encode their
//! 20-byte addresses.

use cosmwasm_std::{Addr, Deps, StdError, StdResult};
use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Widen a local account address into the 32-byte identifier field.
///
/// Canonical addresses of 32 bytes or fewer are left-padded with zeros;
/// anything wider is hashed into the field.
pub fn address_to_bytes32(deps: Deps, addr: &Addr) -> StdResult<[u8; 32]> {
    let canonical = deps.api.addr_canonicalize(addr.as_str())?;
    let bytes = canonical.as_slice();

    if bytes.is_empty() {
        return Err(StdError::generic_err("empty canonical address"));
    }

    let mut result = [0u8; 32];
    if bytes.len() <= 32 {
        result[32 - bytes.len()..].copy_from_slice(bytes);
    } else {
        result = keccak256(bytes);
    }
    Ok(result)
}

/// Convert 32-byte value to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    let mut out = String::with_capacity(66);
    out.push_str("0x");
    out.push_str(&hex::encode(bytes));
    out
}

/// Convert an arbitrary byte slice to a 0x-prefixed hex string
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    out.push_str(&hex::encode(bytes));
    out
}

/// Parse hex string (with or without 0x prefix) to 32-byte array
pub fn hex_to_bytes32(input: &str) -> Result<[u8; 32], &'static str> {
    let input = input.strip_prefix("0x").unwrap_or(input);
    if input.len() != 64 {
        return Err("Invalid hex length: expected 64 characters");
    }

    let mut result = [0u8; 32];
    hex::decode_to_slice(input, &mut result).map_err(|_| "Invalid hex character")?;
    Ok(result)
}
