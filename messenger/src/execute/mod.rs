//! Execute message handlers for the token messenger contract
//!
//! Handlers are grouped by concern:
//! - `send` - SendMessage / SendMessageWithCaller and the shared emission core
//! - `burn` - DepositForBurn / DepositForBurnWithCaller orchestration
//! - `admin` - role rotation, pause switches, max body size
//! - `registry` - remote token messengers, token pairs, burn limits

pub mod admin;
pub mod burn;
pub mod registry;
pub mod send;
