//! State definitions for the token messenger contract
//!
//! Pause flags, the outbound nonce ledger, role holders, and the registries
//! consulted by the burn path all live here as individual storage entries.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration fixed at instantiation
#[cw_serde]
pub struct Config {
    /// Domain identifier of this chain, stamped into every outbound envelope
    pub local_domain: u32,
    /// The single denomination accepted for burning (stored lower-cased)
    pub burn_denom: String,
}

/// Token messenger registered on a remote domain
#[cw_serde]
pub struct RemoteTokenMessenger {
    /// Remote domain identifier
    pub domain_id: u32,
    /// 32-byte address of the messenger on that domain
    pub address: Binary,
}

/// Mapping between a remote token and its local denomination
#[cw_serde]
pub struct TokenPair {
    /// Remote domain identifier
    pub remote_domain: u32,
    /// 32-byte token identifier on the remote domain
    pub remote_token: Binary,
    /// Local denomination (stored lower-cased)
    pub local_token: String,
}

// ============================================================================
// Roles
// ============================================================================

/// Privileged roles; each is held by exactly one address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Owner,
    AttesterManager,
    TokenController,
}

impl Role {
    fn storage(self) -> Item<'static, Addr> {
        match self {
            Role::Owner => OWNER,
            Role::AttesterManager => ATTESTER_MANAGER,
            Role::TokenController => TOKEN_CONTROLLER,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Role::Owner => write!(f, "owner"),
            Role::AttesterManager => write!(f, "attester manager"),
            Role::TokenController => write!(f, "token controller"),
        }
    }
}

/// Check that `caller` holds `role`, by exact address equality
pub fn assert_role(
    storage: &dyn Storage,
    role: Role,
    caller: &Addr,
) -> Result<(), ContractError> {
    let holder = role.storage().load(storage)?;
    if holder != *caller {
        return Err(ContractError::Unauthorized { role });
    }
    Ok(())
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:token-messenger";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = "0.1.0";

/// Max message body size applied when instantiation does not set one
pub const DEFAULT_MAX_MESSAGE_BODY_SIZE: u64 = 8000;

// ============================================================================
// Core State Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Owner role holder
pub const OWNER: Item<Addr> = Item::new("owner");

/// Proposed new owner (if an ownership transfer is in flight)
pub const PENDING_OWNER: Item<Addr> = Item::new("pending_owner");

/// Attester manager role holder
pub const ATTESTER_MANAGER: Item<Addr> = Item::new("attester_manager");

/// Token controller role holder
pub const TOKEN_CONTROLLER: Item<Addr> = Item::new("token_controller");

/// Next nonce to hand out; incremented on every successful emission
pub const NEXT_AVAILABLE_NONCE: Item<u64> = Item::new("next_available_nonce");

/// Halts message emission (and, on the receiving side, acceptance)
pub const SENDING_AND_RECEIVING_PAUSED: Item<bool> = Item::new("sending_and_receiving_paused");

/// Halts deposit-for-burn processing
pub const BURNING_AND_MINTING_PAUSED: Item<bool> = Item::new("burning_and_minting_paused");

/// Upper bound on message body length in bytes
pub const MAX_MESSAGE_BODY_SIZE: Item<u64> = Item::new("max_message_body_size");

/// Per-denomination cap on a single burn
/// Key: lower-cased denomination, Value: max amount per message
pub const PER_MESSAGE_BURN_LIMITS: Map<&str, Uint128> = Map::new("per_message_burn_limits");

/// Registered token messengers on remote domains
/// Key: remote domain id, Value: RemoteTokenMessenger
pub const REMOTE_TOKEN_MESSENGERS: Map<u32, RemoteTokenMessenger> =
    Map::new("remote_token_messengers");

/// Token pairs linking remote tokens to local denominations
/// Key: (remote domain id, 32-byte remote token), Value: TokenPair
pub const TOKEN_PAIRS: Map<(u32, &[u8]), TokenPair> = Map::new("token_pairs");

// ============================================================================
// Nonce Ledger
// ============================================================================

/// Reserve the next outbound nonce.
///
/// Returns the current value and persists the increment in the same
/// execution, so consecutive successful emissions observe consecutive
/// values with no gaps.
pub fn allocate_nonce(storage: &mut dyn Storage) -> StdResult<u64> {
    let nonce = NEXT_AVAILABLE_NONCE.load(storage)?;
    NEXT_AVAILABLE_NONCE.save(storage, &(nonce + 1))?;
    Ok(nonce)
}
