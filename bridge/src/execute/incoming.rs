//! Inbound message handlers.
//!
//! Messages arrive as CW20 `Send` hooks from the router, so the funds land
//! in the bridge atomically with execution. Admission is default-deny on
//! both the source chain and the source sender; a rejected message fails
//! the whole delivery, which also returns the attached funds to the
//! transport's escrow. An accepted transfer credits the recipient with
//! exactly the amount named in the payload — never a separately read
//! balance — either directly or through the converter with a raw-credit
//! fallback.

use cosmwasm_std::{
    from_json, to_json_binary, Addr, CosmosMsg, DepsMut, MessageInfo, Reply, Response, SubMsg,
    SubMsgResult, WasmMsg,
};
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};

use common::{ConvertHookMsg, TransferPayload};

use crate::error::ContractError;
use crate::msg::ReceiveMsg;
use crate::state::{
    is_chain_allowed, is_sender_allowed, Config, PendingConversion, CONFIG, PENDING_CONVERSION,
    STATS,
};

/// Reply id for the converter submessage
pub const CONVERT_REPLY_ID: u64 = 1;

/// Execute handler for the CW20 receiver interface (inbound delivery).
pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::BridgePaused);
    }

    // Funds must arrive in the custody stablecoin
    if info.sender != config.stable_token {
        return Err(ContractError::TokenNotSupported {
            token: info.sender.to_string(),
        });
    }

    let msg: ReceiveMsg = from_json(&cw20_msg.msg)?;
    match msg {
        ReceiveMsg::ExecuteMessage {
            source_chain_id,
            source_sender,
            payload,
        } => execute_message(
            deps,
            config,
            cw20_msg,
            source_chain_id,
            source_sender,
            payload,
        ),
    }
}

fn execute_message(
    deps: DepsMut,
    config: Config,
    cw20_msg: Cw20ReceiveMsg,
    source_chain_id: u64,
    source_sender: String,
    payload: cosmwasm_std::Binary,
) -> Result<Response, ContractError> {
    // Only the transport may deliver messages
    if cw20_msg.sender != config.router {
        return Err(ContractError::UnauthorizedSource {
            chain_id: source_chain_id,
            sender: cw20_msg.sender,
        });
    }

    if !is_chain_allowed(deps.storage, source_chain_id)?
        || !is_sender_allowed(deps.storage, &source_sender)?
    {
        return Err(ContractError::UnauthorizedSource {
            chain_id: source_chain_id,
            sender: source_sender,
        });
    }

    let payload: TransferPayload = from_json(&payload)?;

    // The credited amount is the one named in the message
    if cw20_msg.amount != payload.token_amount {
        return Err(ContractError::AmountMismatch {
            expected: payload.token_amount,
            got: cw20_msg.amount,
        });
    }

    let recipient = deps.api.addr_validate(&payload.recipient)?;
    let amount = payload.token_amount;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_incoming_msgs += 1;
    STATS.save(deps.storage, &stats)?;

    let base = Response::new()
        .add_attribute("action", "execute_message")
        .add_attribute("source_chain_id", source_chain_id.to_string())
        .add_attribute("source_sender", source_sender)
        .add_attribute("recipient", recipient.clone())
        .add_attribute("amount", amount.to_string());

    match configured_converter(&config) {
        Some(converter) => {
            // Forward through the converter. A failure there must not fail
            // the receipt, so the forward runs as a submessage and the
            // reply handler falls back to a raw credit.
            PENDING_CONVERSION.save(
                deps.storage,
                &PendingConversion {
                    recipient: recipient.clone(),
                    amount,
                },
            )?;
            let convert = WasmMsg::Execute {
                contract_addr: config.stable_token.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Send {
                    contract: converter.to_string(),
                    amount,
                    msg: to_json_binary(&ConvertHookMsg::Convert {
                        recipient: recipient.to_string(),
                    })?,
                })?,
                funds: vec![],
            };
            Ok(base.add_submessage(SubMsg::reply_always(convert, CONVERT_REPLY_ID)))
        }
        None => {
            let credit = CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: config.stable_token.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            });
            Ok(base.add_message(credit).add_attribute("outcome", "credited"))
        }
    }
}

fn configured_converter(config: &Config) -> Option<&Addr> {
    if config.conversion_enabled {
        config.converter.as_ref()
    } else {
        None
    }
}

/// Reply handler for the converter submessage.
///
/// On success the conversion already credited the recipient; on failure the
/// submessage reverted in full (the tokens never left the bridge), so the
/// recipient is credited the raw stablecoin instead. Either way the receipt
/// itself succeeds.
pub fn handle_convert_reply(deps: DepsMut, reply: Reply) -> Result<Response, ContractError> {
    let pending = PENDING_CONVERSION
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingConversion)?;
    PENDING_CONVERSION.remove(deps.storage);

    match reply.result {
        SubMsgResult::Ok(_) => Ok(Response::new()
            .add_attribute("action", "message_converted")
            .add_attribute("outcome", "converted")
            .add_attribute("recipient", pending.recipient)
            .add_attribute("amount", pending.amount.to_string())),
        SubMsgResult::Err(err) => {
            let config = CONFIG.load(deps.storage)?;

            let mut stats = STATS.load(deps.storage)?;
            stats.total_fallback_credits += 1;
            STATS.save(deps.storage, &stats)?;

            let credit = CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: config.stable_token.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: pending.recipient.to_string(),
                    amount: pending.amount,
                })?,
                funds: vec![],
            });

            Ok(Response::new()
                .add_message(credit)
                .add_attribute("action", "conversion_fallback")
                .add_attribute("outcome", "raw_credited")
                .add_attribute("recipient", pending.recipient)
                .add_attribute("amount", pending.amount.to_string())
                .add_attribute("error", err))
        }
    }
}
