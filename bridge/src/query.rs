//! Query handlers for the StableBridge transfer contract.

use cosmwasm_std::{Binary, Deps, Order, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::gas::estimate_budget;
use crate::hash::compute_message_id;
use crate::msg::{
    AllowedChainEntry, AllowedChainsResponse, AllowedResponse, AllowedSenderEntry,
    AllowedSendersResponse, ConfigResponse, CustodyBalanceResponse, GasBudgetResponse,
    MessageIdResponse, NonceResponse, PendingAdminResponse, StatsResponse, StatusResponse,
};
use crate::state::{
    is_chain_allowed, is_sender_allowed, ALLOWED_CHAINS, ALLOWED_SENDERS, CONFIG, CUSTODY_BALANCE,
    OUTGOING_NONCE, PENDING_ADMIN, STATS,
};

// ============================================================================
// Core Queries
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin.to_string(),
        paused: config.paused,
        stable_token: config.stable_token.to_string(),
        router: config.router.to_string(),
        fee_denom: config.fee_denom,
        dispatch_fee: config.dispatch_fee,
        gas_margin_percent: config.gas_margin_percent,
        default_gas_limit: config.default_gas_limit,
        conversion_enabled: config.conversion_enabled,
        converter: config.converter.map(|c| c.to_string()),
    })
}

/// Query contract status summary.
pub fn query_status(deps: Deps) -> StdResult<StatusResponse> {
    let config = CONFIG.load(deps.storage)?;

    let allowed_chains = ALLOWED_CHAINS
        .range(deps.storage, None, None, Order::Ascending)
        .filter_map(|item| item.ok())
        .filter(|(_, allowed)| *allowed)
        .count() as u32;

    let allowed_senders = ALLOWED_SENDERS
        .range(deps.storage, None, None, Order::Ascending)
        .filter_map(|item| item.ok())
        .filter(|(_, allowed)| *allowed)
        .count() as u32;

    Ok(StatusResponse {
        paused: config.paused,
        allowed_chains,
        allowed_senders,
    })
}

/// Query bridge statistics.
pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_outgoing_msgs: stats.total_outgoing_msgs,
        total_incoming_msgs: stats.total_incoming_msgs,
        total_fallback_credits: stats.total_fallback_credits,
    })
}

// ============================================================================
// Allowlist Queries
// ============================================================================

/// Whether a chain is allowlisted (default deny).
pub fn query_is_chain_allowed(deps: Deps, chain_id: u64) -> StdResult<AllowedResponse> {
    Ok(AllowedResponse {
        allowed: is_chain_allowed(deps.storage, chain_id)?,
    })
}

/// Whether a source sender is allowlisted (default deny).
pub fn query_is_sender_allowed(deps: Deps, sender: String) -> StdResult<AllowedResponse> {
    Ok(AllowedResponse {
        allowed: is_sender_allowed(deps.storage, &sender)?,
    })
}

/// Paginated list of chain allowlist entries.
pub fn query_allowed_chains(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<AllowedChainsResponse> {
    let limit = limit.unwrap_or(10).min(50) as usize;
    let start = start_after.map(Bound::exclusive);

    let chains: Vec<AllowedChainEntry> = ALLOWED_CHAINS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (chain_id, allowed) = item?;
            Ok(AllowedChainEntry { chain_id, allowed })
        })
        .collect::<StdResult<_>>()?;

    Ok(AllowedChainsResponse { chains })
}

/// Paginated list of sender allowlist entries.
pub fn query_allowed_senders(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AllowedSendersResponse> {
    let limit = limit.unwrap_or(10).min(50) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let senders: Vec<AllowedSenderEntry> = ALLOWED_SENDERS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (sender, allowed) = item?;
            Ok(AllowedSenderEntry { sender, allowed })
        })
        .collect::<StdResult<_>>()?;

    Ok(AllowedSendersResponse { senders })
}

// ============================================================================
// Gas & Transfer Queries
// ============================================================================

/// Margined gas budget from a measured destination execution cost.
pub fn query_estimate_gas_budget(
    deps: Deps,
    measured_gas_used: u64,
    margin_percent: Option<u64>,
) -> StdResult<GasBudgetResponse> {
    let config = CONFIG.load(deps.storage)?;
    let margin_percent = margin_percent.unwrap_or(config.gas_margin_percent);
    Ok(GasBudgetResponse {
        gas_limit: estimate_budget(measured_gas_used, margin_percent),
        margin_percent,
    })
}

/// Stablecoin held in custody for outbound transfers.
pub fn query_custody_balance(deps: Deps) -> StdResult<CustodyBalanceResponse> {
    let balance = CUSTODY_BALANCE.load(deps.storage)?;
    Ok(CustodyBalanceResponse { balance })
}

/// Next outgoing message nonce.
pub fn query_current_nonce(deps: Deps) -> StdResult<NonceResponse> {
    let nonce = OUTGOING_NONCE.load(deps.storage)?;
    Ok(NonceResponse { nonce })
}

/// Pending admin proposal (if any).
pub fn query_pending_admin(deps: Deps) -> StdResult<PendingAdminResponse> {
    let pending = PENDING_ADMIN.may_load(deps.storage)?;
    Ok(PendingAdminResponse {
        new_admin: pending.as_ref().map(|p| p.new_address.to_string()),
        execute_after: pending.map(|p| p.execute_after.seconds()),
    })
}

/// Recompute the deterministic id of an outbound message.
pub fn query_compute_message_id(
    dest_chain_id: u64,
    sender: String,
    recipient: String,
    amount: Uint128,
    nonce: u64,
) -> StdResult<MessageIdResponse> {
    let id = compute_message_id(dest_chain_id, &sender, &recipient, amount.u128(), nonce);
    Ok(MessageIdResponse {
        message_id: Binary::from(id.to_vec()),
    })
}
