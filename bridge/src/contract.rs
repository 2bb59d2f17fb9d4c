//! StableBridge Transfer Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_accept_admin, execute_cancel_admin_proposal, execute_pause, execute_propose_admin,
    execute_receive, execute_recover_asset, execute_set_chain_allowed, execute_set_sender_allowed,
    execute_transfer, execute_unpause, execute_update_config, handle_convert_reply,
    CONVERT_REPLY_ID,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_allowed_chains, query_allowed_senders, query_compute_message_id, query_config,
    query_current_nonce, query_custody_balance, query_estimate_gas_budget, query_is_chain_allowed,
    query_is_sender_allowed, query_pending_admin, query_stats, query_status,
};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, CUSTODY_BALANCE,
    DEFAULT_GAS_MARGIN_PERCENT, MAX_GAS_LIMIT, OUTGOING_NONCE, STATS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    let stable_token = deps.api.addr_validate(&msg.stable_token)?;
    let router = deps.api.addr_validate(&msg.router)?;
    let converter = msg
        .converter
        .map(|c| deps.api.addr_validate(&c))
        .transpose()?;

    if msg.conversion_enabled && converter.is_none() {
        return Err(ContractError::ConverterNotConfigured);
    }

    if msg.default_gas_limit == 0 || msg.default_gas_limit > MAX_GAS_LIMIT {
        return Err(ContractError::InvalidGasLimit {
            gas_limit: msg.default_gas_limit,
            max: MAX_GAS_LIMIT,
        });
    }

    let config = Config {
        admin,
        paused: false,
        stable_token,
        router,
        fee_denom: msg.fee_denom,
        dispatch_fee: msg.dispatch_fee,
        gas_margin_percent: msg.gas_margin_percent.unwrap_or(DEFAULT_GAS_MARGIN_PERCENT),
        default_gas_limit: msg.default_gas_limit,
        conversion_enabled: msg.conversion_enabled,
        converter,
    };
    CONFIG.save(deps.storage, &config)?;

    STATS.save(
        deps.storage,
        &Stats {
            total_outgoing_msgs: 0,
            total_incoming_msgs: 0,
            total_fallback_credits: 0,
        },
    )?;
    OUTGOING_NONCE.save(deps.storage, &0u64)?;
    CUSTODY_BALANCE.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("stable_token", config.stable_token)
        .add_attribute("router", config.router)
        .add_attribute("gas_margin_percent", config.gas_margin_percent.to_string())
        .add_attribute("default_gas_limit", config.default_gas_limit.to_string())
        .add_attribute("conversion_enabled", config.conversion_enabled.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Client surface
        ExecuteMsg::Transfer {
            dest_chain_id,
            recipient,
            amount,
            gas_limit,
        } => execute_transfer(deps, env, info, dest_chain_id, recipient, amount, gas_limit),

        // Inbound from transport
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),

        // Allowlist registry
        ExecuteMsg::SetChainAllowed { chain_id, allowed } => {
            execute_set_chain_allowed(deps, info, chain_id, allowed)
        }
        ExecuteMsg::SetSenderAllowed { sender, allowed } => {
            execute_set_sender_allowed(deps, info, sender, allowed)
        }

        // Configuration
        ExecuteMsg::UpdateConfig {
            dispatch_fee,
            gas_margin_percent,
            default_gas_limit,
            conversion_enabled,
            converter,
            router,
        } => execute_update_config(
            deps,
            info,
            dispatch_fee,
            gas_margin_percent,
            default_gas_limit,
            conversion_enabled,
            converter,
            router,
        ),

        // Admin operations
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::ProposeAdmin { new_admin } => execute_propose_admin(deps, env, info, new_admin),
        ExecuteMsg::AcceptAdmin {} => execute_accept_admin(deps, env, info),
        ExecuteMsg::CancelAdminProposal {} => execute_cancel_admin_proposal(deps, info),
        ExecuteMsg::RecoverAsset {
            asset,
            amount,
            recipient,
        } => execute_recover_asset(deps, info, asset, amount, recipient),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        CONVERT_REPLY_ID => handle_convert_reply(deps, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Status {} => to_json_binary(&query_status(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
        QueryMsg::IsChainAllowed { chain_id } => {
            to_json_binary(&query_is_chain_allowed(deps, chain_id)?)
        }
        QueryMsg::IsSenderAllowed { sender } => {
            to_json_binary(&query_is_sender_allowed(deps, sender)?)
        }
        QueryMsg::AllowedChains { start_after, limit } => {
            to_json_binary(&query_allowed_chains(deps, start_after, limit)?)
        }
        QueryMsg::AllowedSenders { start_after, limit } => {
            to_json_binary(&query_allowed_senders(deps, start_after, limit)?)
        }
        QueryMsg::EstimateGasBudget {
            measured_gas_used,
            margin_percent,
        } => to_json_binary(&query_estimate_gas_budget(
            deps,
            measured_gas_used,
            margin_percent,
        )?),
        QueryMsg::CustodyBalance {} => to_json_binary(&query_custody_balance(deps)?),
        QueryMsg::CurrentNonce {} => to_json_binary(&query_current_nonce(deps)?),
        QueryMsg::PendingAdmin {} => to_json_binary(&query_pending_admin(deps)?),
        QueryMsg::ComputeMessageId {
            dest_chain_id,
            sender,
            recipient,
            amount,
            nonce,
        } => to_json_binary(&query_compute_message_id(
            dest_chain_id,
            sender,
            recipient,
            amount,
            nonce,
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
