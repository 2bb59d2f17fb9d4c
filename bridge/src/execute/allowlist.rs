//! Allowlist registry handlers.
//!
//! The bridge trusts nothing by default: a chain id or source sender absent
//! from the registry is disallowed. Only the admin mutates the registry;
//! writes are overwrite-idempotent and attribute-audited.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{ALLOWED_CHAINS, ALLOWED_SENDERS, CONFIG};

/// Allow or disallow a chain as transfer destination and message source.
pub fn execute_set_chain_allowed(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    allowed: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    ALLOWED_CHAINS.save(deps.storage, chain_id, &allowed)?;

    Ok(Response::new()
        .add_attribute("action", "set_chain_allowed")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("allowed", allowed.to_string()))
}

/// Allow or disallow a source-chain sender address.
///
/// Sender addresses live on foreign chains and are stored as opaque
/// strings; no local address validation applies.
pub fn execute_set_sender_allowed(
    deps: DepsMut,
    info: MessageInfo,
    sender: String,
    allowed: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    ALLOWED_SENDERS.save(deps.storage, &sender, &allowed)?;

    Ok(Response::new()
        .add_attribute("action", "set_sender_allowed")
        .add_attribute("sender", sender)
        .add_attribute("allowed", allowed.to_string()))
}
