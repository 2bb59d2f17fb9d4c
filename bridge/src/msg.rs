//! Message types for the StableBridge transfer contract.

use common::AssetInfo;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};
use cw20::Cw20ReceiveMsg;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address for contract management
    pub admin: String,
    /// Stablecoin under custody (CW20 contract address)
    pub stable_token: String,
    /// Transport router contract
    pub router: String,
    /// Native denom the dispatch fee is paid in
    pub fee_denom: String,
    /// Flat dispatch fee per outbound message
    pub dispatch_fee: Uint128,
    /// Safety margin (percent) for gas budget estimation; defaults to the
    /// contract policy value when omitted
    pub gas_margin_percent: Option<u64>,
    /// Destination execution budget applied when a transfer omits one
    pub default_gas_limit: u64,
    /// Route accepted inbound transfers through the converter
    pub conversion_enabled: bool,
    /// Asset converter contract (required when conversion is enabled)
    pub converter: Option<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Initiate a cross-chain transfer. Pulls `amount` of the stablecoin
    /// from the caller (requires a prior CW20 approval) and dispatches the
    /// message through the router; the dispatch fee must be attached as
    /// native funds.
    Transfer {
        /// Destination chain (must be allowlisted)
        dest_chain_id: u64,
        /// Final recipient on the destination chain
        recipient: String,
        /// Amount in the stablecoin's smallest unit
        amount: Uint128,
        /// Destination execution budget; `None` selects the configured
        /// default
        gas_limit: Option<u64>,
    },

    /// Inbound message delivery (CW20 receiver interface). Funds arrive
    /// atomically with the message; only the router may deliver.
    Receive(Cw20ReceiveMsg),

    /// Allow or disallow a chain as transfer destination and message source
    ///
    /// Authorization: Admin only
    SetChainAllowed { chain_id: u64, allowed: bool },

    /// Allow or disallow a source-chain sender address
    ///
    /// Authorization: Admin only
    SetSenderAllowed { sender: String, allowed: bool },

    /// Update policy configuration
    ///
    /// Authorization: Admin only
    UpdateConfig {
        dispatch_fee: Option<Uint128>,
        gas_margin_percent: Option<u64>,
        default_gas_limit: Option<u64>,
        conversion_enabled: Option<bool>,
        converter: Option<String>,
        router: Option<String>,
    },

    /// Pause the bridge (stops transfers and receipts)
    ///
    /// Authorization: Admin only
    Pause {},

    /// Resume the bridge
    ///
    /// Authorization: Admin only
    Unpause {},

    /// Propose a new admin (starts the timelock)
    ///
    /// Authorization: Admin only
    ProposeAdmin { new_admin: String },

    /// Accept the pending admin role (after the timelock)
    ///
    /// Authorization: Pending admin only
    AcceptAdmin {},

    /// Cancel the pending admin proposal
    ///
    /// Authorization: Admin only
    CancelAdminProposal {},

    /// Recover stuck assets (emergency, requires paused state)
    ///
    /// Authorization: Admin only
    RecoverAsset {
        asset: AssetInfo,
        amount: Uint128,
        recipient: String,
    },
}

/// Hook payload for a CW20 `Send` into the bridge (inbound delivery)
#[cw_serde]
pub enum ReceiveMsg {
    /// Execute a cross-chain message whose funds were attached by the send
    ExecuteMessage {
        /// Chain the message originates from
        source_chain_id: u64,
        /// Originating sender address on the source chain
        source_sender: String,
        /// Encoded `common::TransferPayload`
        payload: Binary,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the contract configuration
    #[returns(ConfigResponse)]
    Config {},
    /// Returns a status summary
    #[returns(StatusResponse)]
    Status {},
    /// Returns bridge statistics
    #[returns(StatsResponse)]
    Stats {},
    /// Whether a chain is allowlisted (unknown chains are not)
    #[returns(AllowedResponse)]
    IsChainAllowed { chain_id: u64 },
    /// Whether a source sender is allowlisted (unknown senders are not)
    #[returns(AllowedResponse)]
    IsSenderAllowed { sender: String },
    /// Paginated list of chain allowlist entries
    #[returns(AllowedChainsResponse)]
    AllowedChains {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Paginated list of sender allowlist entries
    #[returns(AllowedSendersResponse)]
    AllowedSenders {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Margined gas budget from a measured destination execution cost.
    /// `margin_percent` defaults to the configured policy value.
    #[returns(GasBudgetResponse)]
    EstimateGasBudget {
        measured_gas_used: u64,
        margin_percent: Option<u64>,
    },
    /// Stablecoin amount held in custody for outbound transfers
    #[returns(CustodyBalanceResponse)]
    CustodyBalance {},
    /// Next outgoing message nonce
    #[returns(NonceResponse)]
    CurrentNonce {},
    /// Pending admin proposal (if any)
    #[returns(PendingAdminResponse)]
    PendingAdmin {},
    /// Recompute the deterministic id of an outbound message
    #[returns(MessageIdResponse)]
    ComputeMessageId {
        dest_chain_id: u64,
        sender: String,
        recipient: String,
        amount: Uint128,
        nonce: u64,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: String,
    pub paused: bool,
    pub stable_token: String,
    pub router: String,
    pub fee_denom: String,
    pub dispatch_fee: Uint128,
    pub gas_margin_percent: u64,
    pub default_gas_limit: u64,
    pub conversion_enabled: bool,
    pub converter: Option<String>,
}

#[cw_serde]
pub struct StatusResponse {
    pub paused: bool,
    pub allowed_chains: u32,
    pub allowed_senders: u32,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_outgoing_msgs: u64,
    pub total_incoming_msgs: u64,
    pub total_fallback_credits: u64,
}

#[cw_serde]
pub struct AllowedResponse {
    pub allowed: bool,
}

#[cw_serde]
pub struct AllowedChainEntry {
    pub chain_id: u64,
    pub allowed: bool,
}

#[cw_serde]
pub struct AllowedChainsResponse {
    pub chains: Vec<AllowedChainEntry>,
}

#[cw_serde]
pub struct AllowedSenderEntry {
    pub sender: String,
    pub allowed: bool,
}

#[cw_serde]
pub struct AllowedSendersResponse {
    pub senders: Vec<AllowedSenderEntry>,
}

#[cw_serde]
pub struct GasBudgetResponse {
    /// The margined budget
    pub gas_limit: u64,
    /// The margin actually applied
    pub margin_percent: u64,
}

#[cw_serde]
pub struct CustodyBalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct PendingAdminResponse {
    pub new_admin: Option<String>,
    /// Block time (seconds) after which the proposal can be accepted
    pub execute_after: Option<u64>,
}

#[cw_serde]
pub struct MessageIdResponse {
    pub message_id: Binary,
}

/// Returned in the `Transfer` response data
#[cw_serde]
pub struct TransferResult {
    pub message_id: Binary,
    pub nonce: u64,
}
