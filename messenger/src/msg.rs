//! Message definitions for the token messenger contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::state::{RemoteTokenMessenger, TokenPair};

/// Instantiate message for contract initialization
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address (role rotation, pausing, messenger registry)
    pub owner: String,
    /// Attester manager address
    pub attester_manager: String,
    /// Token controller address (token pairs, burn limits)
    pub token_controller: String,
    /// Domain identifier of this chain
    pub local_domain: u32,
    /// The single denomination accepted for burning
    pub burn_denom: String,
    /// Upper bound on message body length in bytes (default 8000)
    pub max_message_body_size: Option<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Messaging
    // ========================================================================
    /// Emit an outbound message callable by anyone on the destination
    SendMessage {
        destination_domain: u32,
        /// 32-byte recipient on the destination domain
        recipient: Binary,
        message_body: Binary,
    },
    /// Emit an outbound message only `destination_caller` may relay
    SendMessageWithCaller {
        destination_domain: u32,
        /// 32-byte recipient on the destination domain
        recipient: Binary,
        message_body: Binary,
        /// 32-byte caller allowed to use the message on the destination
        destination_caller: Binary,
    },

    // ========================================================================
    // Burns
    // ========================================================================
    /// Burn attached funds and emit the matching mint instruction
    DepositForBurn {
        amount: Uint128,
        destination_domain: u32,
        /// 32-byte recipient of the minted funds on the destination domain
        mint_recipient: Binary,
        /// Denomination to burn; must match the attached funds
        burn_token: String,
    },
    /// `DepositForBurn` restricted to a single caller on the destination
    DepositForBurnWithCaller {
        amount: Uint128,
        destination_domain: u32,
        /// 32-byte recipient of the minted funds on the destination domain
        mint_recipient: Binary,
        /// Denomination to burn; must match the attached funds
        burn_token: String,
        /// 32-byte caller allowed to complete the transfer on the destination
        destination_caller: Binary,
    },

    // ========================================================================
    // Roles
    // ========================================================================
    /// Propose a new owner (owner only); takes effect on `AcceptOwner`
    UpdateOwner { new_owner: String },
    /// Accept a proposed ownership transfer (pending owner only)
    AcceptOwner {},
    /// Replace the attester manager (owner only)
    UpdateAttesterManager { new_attester_manager: String },
    /// Replace the token controller (owner only)
    UpdateTokenController { new_token_controller: String },

    // ========================================================================
    // Pause switches (owner only)
    // ========================================================================
    PauseBurningAndMinting {},
    UnpauseBurningAndMinting {},
    PauseSendingAndReceiving {},
    UnpauseSendingAndReceiving {},

    // ========================================================================
    // Limits and registries
    // ========================================================================
    /// Set the upper bound on message body length (owner only)
    SetMaxMessageBodySize { size: u64 },
    /// Cap single-burn amounts for a denomination (token controller only)
    SetPerMessageBurnLimit { denom: String, amount: Uint128 },
    /// Register the token messenger for a remote domain (owner only)
    AddRemoteTokenMessenger {
        domain_id: u32,
        /// 32-byte messenger address on the remote domain
        address: Binary,
    },
    /// Drop the token messenger of a remote domain (owner only)
    RemoveRemoteTokenMessenger { domain_id: u32 },
    /// Map a remote token to a local denomination (token controller only)
    LinkTokenPair {
        remote_domain: u32,
        /// 32-byte token identifier on the remote domain
        remote_token: Binary,
        local_token: String,
    },
    /// Remove a remote-to-local token mapping (token controller only)
    UnlinkTokenPair {
        remote_domain: u32,
        /// 32-byte token identifier on the remote domain
        remote_token: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Get the current role holders
    #[returns(RolesResponse)]
    Roles {},

    /// Get the next nonce that will be handed out
    #[returns(NextAvailableNonceResponse)]
    NextAvailableNonce {},

    /// Whether message emission is paused
    #[returns(PausedResponse)]
    SendingAndReceivingMessagesPaused {},

    /// Whether deposit-for-burn processing is paused
    #[returns(PausedResponse)]
    BurningAndMintingPaused {},

    /// Get the upper bound on message body length
    #[returns(MaxMessageBodySizeResponse)]
    MaxMessageBodySize {},

    /// Get the burn payload codec version
    #[returns(BurnMessageVersionResponse)]
    BurnMessageVersion {},

    /// Get the per-message burn limit of a denomination, if any
    #[returns(PerMessageBurnLimitResponse)]
    PerMessageBurnLimit { denom: String },

    /// List per-message burn limits (paginated)
    #[returns(PerMessageBurnLimitsResponse)]
    PerMessageBurnLimits {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Get the registered token messenger of a remote domain
    #[returns(RemoteTokenMessengerResponse)]
    RemoteTokenMessenger { domain_id: u32 },

    /// List registered remote token messengers (paginated)
    #[returns(RemoteTokenMessengersResponse)]
    RemoteTokenMessengers {
        start_after: Option<u32>,
        limit: Option<u32>,
    },

    /// Get the token pair of a remote domain and token
    #[returns(TokenPairResponse)]
    TokenPair {
        remote_domain: u32,
        remote_token: Binary,
    },

    /// List token pairs (paginated)
    #[returns(TokenPairsResponse)]
    TokenPairs {
        start_after: Option<(u32, Binary)>,
        limit: Option<u32>,
    },
}

/// Migrate message for contract upgrades
#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Execute response data
// ============================================================================

/// Data payload returned by `SendMessage` and `SendMessageWithCaller`
#[cw_serde]
pub struct SendMessageResponse {
    /// Nonce reserved for the emitted message
    pub nonce: u64,
}

/// Data payload returned by `DepositForBurn` and `DepositForBurnWithCaller`
#[cw_serde]
pub struct DepositForBurnResponse {
    /// Nonce reserved for the emitted burn message
    pub nonce: u64,
}

// ============================================================================
// Query response types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub local_domain: u32,
    pub burn_denom: String,
}

#[cw_serde]
pub struct RolesResponse {
    pub owner: Addr,
    pub attester_manager: Addr,
    pub token_controller: Addr,
    pub pending_owner: Option<Addr>,
}

#[cw_serde]
pub struct NextAvailableNonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct PausedResponse {
    pub paused: bool,
}

#[cw_serde]
pub struct MaxMessageBodySizeResponse {
    pub size: u64,
}

#[cw_serde]
pub struct BurnMessageVersionResponse {
    pub version: u32,
}

#[cw_serde]
pub struct PerMessageBurnLimitResponse {
    pub denom: String,
    pub amount: Option<Uint128>,
}

#[cw_serde]
pub struct BurnLimitEntry {
    pub denom: String,
    pub amount: Uint128,
}

#[cw_serde]
pub struct PerMessageBurnLimitsResponse {
    pub limits: Vec<BurnLimitEntry>,
}

#[cw_serde]
pub struct RemoteTokenMessengerResponse {
    pub domain_id: u32,
    pub address: Binary,
}

#[cw_serde]
pub struct RemoteTokenMessengersResponse {
    pub remote_token_messengers: Vec<RemoteTokenMessenger>,
}

#[cw_serde]
pub struct TokenPairResponse {
    pub remote_domain: u32,
    pub remote_token: Binary,
    pub local_token: String,
}

#[cw_serde]
pub struct TokenPairsResponse {
    pub token_pairs: Vec<TokenPair>,
}
