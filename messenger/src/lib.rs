//! Token Messenger Contract - Cross-Chain Burn-and-Mint Transfers
//!
//! This contract is the local outpost of a burn-and-mint transfer protocol.
//! It emits attestable messages into a shared, gapless nonce sequence and
//! orchestrates token burns that a counterpart messenger on the destination
//! domain redeems as mints.
//!
//! # Flow
//! 1. User attaches tokens and calls `DepositForBurn` (optionally with a
//!    destination caller restriction)
//! 2. The contract burns the deposit and emits a burn message addressed to
//!    the registered token messenger on the destination domain
//! 3. Off-chain attesters observe the message event and sign it
//! 4. The destination messenger verifies the attestation and mints to the
//!    recipient
//!
//! # Generic Messaging
//! `SendMessage` emits an arbitrary-body message into the same nonce
//! sequence without moving funds, for callers that bring their own
//! destination-side handler.
//!
//! # Security
//! - Three-role access control (owner, attester manager, token controller)
//!   with two-step ownership transfer
//! - Independent pause switches for messaging and for burning
//! - Per-message burn limits per denom

pub mod burn_message;
pub mod contract;
pub mod error;
pub mod execute;
pub mod hash;
pub mod message;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
