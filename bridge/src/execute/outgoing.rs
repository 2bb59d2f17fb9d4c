//! Outbound transfer handler.
//!
//! Pulls the stablecoin into custody and dispatches the cross-chain message
//! through the router, in that order. Both effects commit atomically with
//! the call: a failed pull reverts the dispatch and a failed dispatch
//! reverts the pull, so no message is ever emitted without backing funds.

use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::{AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use common::{RouterExecuteMsg, TransferPayload};

use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, compute_message_id};
use crate::msg::TransferResult;
use crate::state::{is_chain_allowed, CONFIG, CUSTODY_BALANCE, MAX_GAS_LIMIT, OUTGOING_NONCE, STATS};

/// Execute handler for initiating a cross-chain transfer.
pub fn execute_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    dest_chain_id: u64,
    recipient: String,
    amount: Uint128,
    gas_limit: Option<u64>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::BridgePaused);
    }

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "transfer amount must be greater than zero".to_string(),
        });
    }

    let gas_limit = gas_limit.unwrap_or(config.default_gas_limit);
    if gas_limit == 0 || gas_limit > MAX_GAS_LIMIT {
        return Err(ContractError::InvalidGasLimit {
            gas_limit,
            max: MAX_GAS_LIMIT,
        });
    }

    if !is_chain_allowed(deps.storage, dest_chain_id)? {
        return Err(ContractError::ChainNotAllowed {
            chain_id: dest_chain_id,
        });
    }

    // The caller must have pre-approved the pull. Checked up front so the
    // failure carries figures instead of surfacing as an opaque CW20 error,
    // and so nothing at all happens on an underfunded call.
    let allowance: AllowanceResponse = deps.querier.query_wasm_smart(
        config.stable_token.clone(),
        &Cw20QueryMsg::Allowance {
            owner: info.sender.to_string(),
            spender: env.contract.address.to_string(),
        },
    )?;
    if allowance.allowance < amount {
        return Err(ContractError::InsufficientAllowance {
            required: amount,
            available: allowance.allowance,
        });
    }

    let balance: BalanceResponse = deps.querier.query_wasm_smart(
        config.stable_token.clone(),
        &Cw20QueryMsg::Balance {
            address: info.sender.to_string(),
        },
    )?;
    if balance.balance < amount {
        return Err(ContractError::InsufficientBalance {
            required: amount,
            available: balance.balance,
        });
    }

    // Dispatch fee, forwarded to the router in full
    let paid: Uint128 = info
        .funds
        .iter()
        .filter(|c| c.denom == config.fee_denom)
        .map(|c| c.amount)
        .sum();
    if paid < config.dispatch_fee {
        return Err(ContractError::InsufficientFee {
            expected: config.dispatch_fee,
            got: paid,
        });
    }

    // Custody before dispatch
    let custody = CUSTODY_BALANCE.load(deps.storage)?;
    CUSTODY_BALANCE.save(deps.storage, &(custody + amount))?;

    let nonce = OUTGOING_NONCE.load(deps.storage)?;
    OUTGOING_NONCE.save(deps.storage, &(nonce + 1))?;

    let message_id =
        compute_message_id(dest_chain_id, info.sender.as_str(), &recipient, amount.u128(), nonce);

    let payload = TransferPayload {
        recipient: recipient.clone(),
        token_amount: amount,
        token_address: config.stable_token.to_string(),
    };

    let pull = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.stable_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    let dispatch = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.router.to_string(),
        msg: to_json_binary(&RouterExecuteMsg::SendMessage {
            dest_chain_id,
            receiver: recipient.clone(),
            payload: to_json_binary(&payload)?,
            gas_limit,
            message_id: Binary::from(message_id.to_vec()),
        })?,
        funds: info.funds.clone(),
    });

    let mut stats = STATS.load(deps.storage)?;
    stats.total_outgoing_msgs += 1;
    STATS.save(deps.storage, &stats)?;

    Ok(Response::new()
        .add_message(pull)
        .add_message(dispatch)
        .set_data(to_json_binary(&TransferResult {
            message_id: Binary::from(message_id.to_vec()),
            nonce,
        })?)
        .add_attribute("action", "transfer")
        .add_attribute("message_id", bytes32_to_hex(&message_id))
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("dest_chain_id", dest_chain_id.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("gas_limit", gas_limit.to_string()))
}
