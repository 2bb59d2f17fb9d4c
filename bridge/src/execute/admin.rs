//! Admin operations handlers.
//!
//! This module handles:
//! - Pause/unpause contract
//! - Admin transfer (propose/accept/cancel)
//! - Policy configuration updates
//! - Asset recovery (emergency)

use cosmwasm_std::{BankMsg, Coin, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128};
use cw20::Cw20ExecuteMsg;

use common::AssetInfo;

use crate::error::ContractError;
use crate::state::{
    PendingAdmin, ADMIN_TIMELOCK_DURATION, CONFIG, MAX_GAS_LIMIT, PENDING_ADMIN,
};

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause the contract (stops transfers and receipts).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "pause"))
}

/// Unpause the contract (resumes transfers and receipts).
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "unpause"))
}

// ============================================================================
// Admin Transfer
// ============================================================================

/// Propose a new admin (starts timelock).
pub fn execute_propose_admin(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let new_admin_addr = deps.api.addr_validate(&new_admin)?;
    let pending = PendingAdmin {
        new_address: new_admin_addr.clone(),
        execute_after: env.block.time.plus_seconds(ADMIN_TIMELOCK_DURATION),
    };
    PENDING_ADMIN.save(deps.storage, &pending)?;

    Ok(Response::new()
        .add_attribute("action", "propose_admin")
        .add_attribute("new_admin", new_admin_addr.to_string())
        .add_attribute("execute_after", pending.execute_after.seconds().to_string()))
}

/// Accept pending admin role (after timelock).
pub fn execute_accept_admin(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let pending = PENDING_ADMIN
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingAdmin)?;

    if info.sender != pending.new_address {
        return Err(ContractError::UnauthorizedPendingAdmin);
    }

    if env.block.time < pending.execute_after {
        let remaining = pending.execute_after.seconds() - env.block.time.seconds();
        return Err(ContractError::TimelockNotExpired {
            remaining_seconds: remaining,
        });
    }

    let mut config = CONFIG.load(deps.storage)?;
    config.admin = pending.new_address.clone();
    CONFIG.save(deps.storage, &config)?;
    PENDING_ADMIN.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("action", "accept_admin")
        .add_attribute("new_admin", pending.new_address.to_string()))
}

/// Cancel pending admin proposal.
pub fn execute_cancel_admin_proposal(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    PENDING_ADMIN.remove(deps.storage);

    Ok(Response::new().add_attribute("action", "cancel_admin_proposal"))
}

// ============================================================================
// Configuration
// ============================================================================

/// Update policy configuration (dispatch fee, gas budgeting, conversion).
#[allow(clippy::too_many_arguments)]
pub fn execute_update_config(
    deps: DepsMut,
    info: MessageInfo,
    dispatch_fee: Option<Uint128>,
    gas_margin_percent: Option<u64>,
    default_gas_limit: Option<u64>,
    conversion_enabled: Option<bool>,
    converter: Option<String>,
    router: Option<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    if let Some(fee) = dispatch_fee {
        config.dispatch_fee = fee;
    }
    if let Some(margin) = gas_margin_percent {
        config.gas_margin_percent = margin;
    }
    if let Some(limit) = default_gas_limit {
        if limit == 0 || limit > MAX_GAS_LIMIT {
            return Err(ContractError::InvalidGasLimit {
                gas_limit: limit,
                max: MAX_GAS_LIMIT,
            });
        }
        config.default_gas_limit = limit;
    }
    if let Some(enabled) = conversion_enabled {
        config.conversion_enabled = enabled;
    }
    if let Some(addr) = converter {
        config.converter = Some(deps.api.addr_validate(&addr)?);
    }
    if let Some(addr) = router {
        config.router = deps.api.addr_validate(&addr)?;
    }

    if config.conversion_enabled && config.converter.is_none() {
        return Err(ContractError::ConverterNotConfigured);
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_config")
        .add_attribute("dispatch_fee", config.dispatch_fee.to_string())
        .add_attribute("gas_margin_percent", config.gas_margin_percent.to_string())
        .add_attribute("default_gas_limit", config.default_gas_limit.to_string())
        .add_attribute("conversion_enabled", config.conversion_enabled.to_string()))
}

// ============================================================================
// Asset Recovery
// ============================================================================

/// Recover stuck assets (emergency, requires paused state).
///
/// The custody balance is intentionally not touched here: recovery may move
/// amounts that were never tracked (dust, mistaken sends), and reconciling
/// the custody figure afterwards is the admin's responsibility.
pub fn execute_recover_asset(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
    amount: Uint128,
    recipient: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    if !config.paused {
        return Err(ContractError::RecoveryNotAvailable);
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let messages: Vec<CosmosMsg> = match asset {
        AssetInfo::Native { denom } => {
            vec![CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient_addr.to_string(),
                amount: vec![Coin { denom, amount }],
            })]
        }
        AssetInfo::Cw20 { contract_addr } => {
            vec![CosmosMsg::Wasm(cosmwasm_std::WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: cosmwasm_std::to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient_addr.to_string(),
                    amount,
                })?,
                funds: vec![],
            })]
        }
    };

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "recover_asset")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string()))
}
