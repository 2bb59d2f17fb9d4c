use cosmwasm_std::{
    entry_point, from_json, to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo,
    Response, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, Cw20ReceiveMsg};

use common::{ConversionResult, ConvertHookMsg};

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, ReserveResponse,
    SimulateConvertResponse,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        admin: deps.api.addr_validate(&msg.admin)?,
        stable_token: deps.api.addr_validate(&msg.stable_token)?,
        yield_token: deps.api.addr_validate(&msg.yield_token)?,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("stable_token", config.stable_token)
        .add_attribute("yield_token", config.yield_token))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, cw20_msg),
        ExecuteMsg::WithdrawFunds {
            token,
            amount,
            recipient,
        } => execute_withdraw_funds(deps, info, token, amount, recipient),
        ExecuteMsg::UpdateConfig {
            admin,
            stable_token,
            yield_token,
        } => execute_update_config(deps, info, admin, stable_token, yield_token),
    }
}

/// CW20 receiver hook. Only the configured stablecoin may deliver funds.
fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.stable_token {
        return Err(ContractError::TokenNotAccepted {
            token: info.sender.to_string(),
        });
    }

    let hook: ConvertHookMsg = from_json(&cw20_msg.msg)?;
    match hook {
        ConvertHookMsg::Convert { recipient } => {
            execute_convert(deps, env, config, cw20_msg.amount, recipient)
        }
    }
}

/// Pay `recipient` the yield-token output for the supplied stablecoin.
///
/// The yield token is a unit-for-unit receipt on the deposited stablecoin,
/// so the output equals the input. The supplied stablecoin stays in this
/// contract as the deposit pool; the output is paid from the reserve.
fn execute_convert(
    deps: DepsMut,
    env: Env,
    config: Config,
    amount_in: Uint128,
    recipient: String,
) -> Result<Response, ContractError> {
    if amount_in.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    let amount_out = amount_in;

    let reserve: BalanceResponse = deps.querier.query_wasm_smart(
        config.yield_token.clone(),
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;
    if reserve.balance < amount_out {
        return Err(ContractError::InsufficientLiquidity {
            required: amount_out,
            available: reserve.balance,
        });
    }

    let payout = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.yield_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient_addr.to_string(),
            amount: amount_out,
        })?,
        funds: vec![],
    });

    let result = ConversionResult {
        supplied_amount: amount_in,
        output_amount: amount_out,
        recipient: recipient_addr.to_string(),
    };

    Ok(Response::new()
        .add_message(payout)
        .set_data(to_json_binary(&result)?)
        .add_attribute("action", "convert")
        .add_attribute("supplied_amount", amount_in.to_string())
        .add_attribute("output_amount", amount_out.to_string())
        .add_attribute("recipient", recipient_addr))
}

fn execute_withdraw_funds(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    amount: Uint128,
    recipient: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let token_addr = deps.api.addr_validate(&token)?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let withdraw = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token_addr.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient_addr.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(withdraw)
        .add_attribute("action", "withdraw_funds")
        .add_attribute("token", token_addr)
        .add_attribute("amount", amount.to_string())
        .add_attribute("recipient", recipient_addr))
}

fn execute_update_config(
    deps: DepsMut,
    info: MessageInfo,
    admin: Option<String>,
    stable_token: Option<String>,
    yield_token: Option<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    if let Some(admin) = admin {
        config.admin = deps.api.addr_validate(&admin)?;
    }
    if let Some(stable_token) = stable_token {
        config.stable_token = deps.api.addr_validate(&stable_token)?;
    }
    if let Some(yield_token) = yield_token {
        config.yield_token = deps.api.addr_validate(&yield_token)?;
    }
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_config")
        .add_attribute("admin", config.admin)
        .add_attribute("stable_token", config.stable_token)
        .add_attribute("yield_token", config.yield_token))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Reserve {} => to_json_binary(&query_reserve(deps, env)?),
        QueryMsg::SimulateConvert { amount_in } => {
            to_json_binary(&query_simulate_convert(amount_in)?)
        }
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin.to_string(),
        stable_token: config.stable_token.to_string(),
        yield_token: config.yield_token.to_string(),
    })
}

fn query_reserve(deps: Deps, env: Env) -> StdResult<ReserveResponse> {
    let config = CONFIG.load(deps.storage)?;
    let reserve: BalanceResponse = deps.querier.query_wasm_smart(
        config.yield_token,
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;
    Ok(ReserveResponse {
        reserve: reserve.balance,
    })
}

fn query_simulate_convert(amount_in: Uint128) -> StdResult<SimulateConvertResponse> {
    Ok(SimulateConvertResponse {
        amount_out: amount_in,
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
