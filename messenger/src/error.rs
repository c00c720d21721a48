//! Error types for the token messenger contract

use cosmwasm_std::{Coin, StdError, Uint128};
use thiserror::Error;

use crate::state::Role;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization
    // ========================================================================
    #[error("unauthorized: only the {role} may perform this action")]
    Unauthorized { role: Role },

    #[error("unauthorized: only the pending owner can accept ownership")]
    UnauthorizedPendingOwner,

    #[error("no pending owner change to accept")]
    NoPendingOwner,

    // ========================================================================
    // Addresses
    // ========================================================================
    #[error("invalid address: {reason}")]
    InvalidAddress { reason: String },

    // ========================================================================
    // Message emission
    // ========================================================================
    #[error("sending and receiving messages is paused")]
    MessagingPaused,

    #[error("recipient must not be nonzero")]
    InvalidRecipient,

    #[error("destination caller must be nonzero")]
    InvalidDestinationCaller,

    #[error("message body exceeds max size: {size} > {max}")]
    MessageBodyTooLarge { size: u64, max: u64 },

    // ========================================================================
    // Burn orchestration
    // ========================================================================
    #[error("amount must be positive")]
    InvalidAmount,

    #[error("mint recipient must be nonzero")]
    InvalidMintRecipient,

    #[error("unable to look up destination token messenger for domain {domain}")]
    RemoteTokenMessengerNotFound { domain: u32 },

    #[error("burning denom: {denom} is not supported")]
    UnsupportedBurnDenom { denom: String },

    #[error("burning and minting are paused")]
    BurningPaused,

    #[error("cannot burn more than the maximum per message burn limit: {amount} exceeds {limit}")]
    BurnLimitExceeded { amount: Uint128, limit: Uint128 },

    #[error("error during transfer: expected funds of exactly {expected}, received {received}")]
    InvalidDepositFunds { expected: Coin, received: String },

    // ========================================================================
    // Registry
    // ========================================================================
    #[error("remote token messenger already registered for domain {domain}")]
    RemoteTokenMessengerAlreadyRegistered { domain: u32 },

    #[error("invalid remote token: must be a byte{expected} array")]
    InvalidRemoteToken { expected: usize },

    #[error("token pair doesn't exist in store")]
    TokenPairNotFound,

    #[error("token pair already linked for this remote domain and token")]
    TokenPairAlreadyLinked,

    // ========================================================================
    // Wire codecs
    // ========================================================================
    #[error("error parsing message: {reason}")]
    ParsingMessage { reason: String },

    #[error("error parsing burn message: {reason}")]
    ParsingBurnMessage { reason: String },
}
