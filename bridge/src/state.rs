//! State definitions for the StableBridge transfer contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address for contract management
    pub admin: Addr,
    /// Whether the bridge is currently paused
    pub paused: bool,
    /// Stablecoin under custody (CW20)
    pub stable_token: Addr,
    /// Transport endpoint: outbound dispatch target and the only account
    /// allowed to deliver inbound messages
    pub router: Addr,
    /// Native denom the dispatch fee is paid in
    pub fee_denom: String,
    /// Flat dispatch fee forwarded to the router per outbound message
    pub dispatch_fee: Uint128,
    /// Safety margin (percent) applied on top of a measured destination
    /// execution cost when estimating a gas budget
    pub gas_margin_percent: u64,
    /// Destination execution budget used when a transfer omits one
    pub default_gas_limit: u64,
    /// Whether accepted inbound transfers are routed through the converter
    pub conversion_enabled: bool,
    /// Destination-side asset converter (required when conversion is enabled)
    pub converter: Option<Addr>,
}

/// Pending admin change proposal
#[cw_serde]
pub struct PendingAdmin {
    /// Proposed new admin address
    pub new_address: Addr,
    /// Block time when the change can be executed
    pub execute_after: Timestamp,
}

/// Conversion in flight during the current receipt.
///
/// Written immediately before the converter submessage is dispatched and
/// consumed by the reply handler within the same transaction.
#[cw_serde]
pub struct PendingConversion {
    pub recipient: Addr,
    pub amount: Uint128,
}

/// Bridge statistics
#[cw_serde]
pub struct Stats {
    /// Total number of outbound messages dispatched
    pub total_outgoing_msgs: u64,
    /// Total number of inbound messages accepted
    pub total_incoming_msgs: u64,
    /// Total number of receipts credited raw after a failed conversion
    pub total_fallback_credits: u64,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:stablebridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 7 days in seconds for admin change timelock
pub const ADMIN_TIMELOCK_DURATION: u64 = 604_800;

/// Upper bound for any accepted destination gas limit
pub const MAX_GAS_LIMIT: u64 = 5_000_000;

/// Default safety margin (percent) for gas budget estimation
pub const DEFAULT_GAS_MARGIN_PERCENT: u64 = 10;

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Pending admin proposal (if any)
pub const PENDING_ADMIN: Item<PendingAdmin> = Item::new("pending_admin");

/// Bridge statistics
pub const STATS: Item<Stats> = Item::new("stats");

/// Chains accepted as transfer destinations and message sources.
/// Absent key means not allowed (default deny).
pub const ALLOWED_CHAINS: Map<u64, bool> = Map::new("allowed_chains");

/// Source-chain sender addresses accepted on receipt.
/// Keys are opaque foreign-chain addresses; absent means not allowed.
pub const ALLOWED_SENDERS: Map<&str, bool> = Map::new("allowed_senders");

/// Outgoing message nonce (feeds the message id)
pub const OUTGOING_NONCE: Item<u64> = Item::new("outgoing_nonce");

/// Stablecoin amount held in custody for dispatched outbound transfers
pub const CUSTODY_BALANCE: Item<Uint128> = Item::new("custody_balance");

/// Conversion in flight during the current receipt (reply plumbing)
pub const PENDING_CONVERSION: Item<PendingConversion> = Item::new("pending_conversion");

// ============================================================================
// Guards
// ============================================================================

/// Whether `chain_id` is allowlisted. Unknown chains are not.
pub fn is_chain_allowed(storage: &dyn Storage, chain_id: u64) -> StdResult<bool> {
    Ok(ALLOWED_CHAINS
        .may_load(storage, chain_id)?
        .unwrap_or(false))
}

/// Whether `sender` is allowlisted as a message source. Unknown senders are not.
pub fn is_sender_allowed(storage: &dyn Storage, sender: &str) -> StdResult<bool> {
    Ok(ALLOWED_SENDERS
        .may_load(storage, sender)?
        .unwrap_or(false))
}
