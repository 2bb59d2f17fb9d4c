//! Shared cw-multi-test scaffolding: contract factories, a mock transport
//! router, and a fully wired bridge + stablecoin + converter setup.
//!
//! The mock router stands in for the cross-chain messaging transport. On
//! `SendMessage` it takes the dispatch fee and re-emits the envelope as
//! attributes; `DeliverMessage` simulates an inbound delivery by performing
//! the CW20 `Send` of funds + message into a bridge, exactly the way a real
//! transport endpoint would hand over an authenticated message.

#![allow(dead_code)]

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coins, to_json_binary, Addr, Binary, Coin, CosmosMsg, Deps, DepsMut, Empty, Env, MessageInfo,
    Response, StdError, StdResult, Uint128, WasmMsg,
};
use cw20::{Cw20ExecuteMsg, MinterResponse};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use cw_storage_plus::Item;

use bridge::msg::{InstantiateMsg, ReceiveMsg};
use common::TransferPayload;

pub const FEE_DENOM: &str = "uluna";
pub const DISPATCH_FEE: u128 = 250_000;
pub const DEFAULT_GAS_LIMIT: u64 = 500_000;

/// Source chain / sender used by the inbound tests
pub const SRC_CHAIN: u64 = 7;
pub const SRC_SENDER: &str = "0xfuji1sourcebridge";

/// Destination chain used by the outbound tests
pub const DEST_CHAIN: u64 = 2;

// ============================================================================
// Mock Router
// ============================================================================

#[cw_serde]
pub struct MockRouterInstantiateMsg {
    pub fee_denom: String,
    pub fee: Uint128,
}

#[cw_serde]
pub enum MockRouterExecuteMsg {
    /// Outbound dispatch from the bridge (same wire shape as
    /// `common::RouterExecuteMsg::SendMessage`)
    SendMessage {
        dest_chain_id: u64,
        receiver: String,
        payload: Binary,
        gas_limit: u64,
        message_id: Binary,
    },
    /// Test control: deliver an inbound message into `bridge_addr`,
    /// attaching `amount` of `token` from the router's own balance
    DeliverMessage {
        bridge_addr: String,
        token: String,
        amount: Uint128,
        source_chain_id: u64,
        source_sender: String,
        payload: Binary,
    },
}

const ROUTER_CONFIG: Item<MockRouterInstantiateMsg> = Item::new("router_config");

fn mock_router_instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: MockRouterInstantiateMsg,
) -> StdResult<Response> {
    ROUTER_CONFIG.save(deps.storage, &msg)?;
    Ok(Response::new())
}

fn mock_router_execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: MockRouterExecuteMsg,
) -> StdResult<Response> {
    match msg {
        MockRouterExecuteMsg::SendMessage {
            dest_chain_id,
            receiver,
            payload: _,
            gas_limit,
            message_id,
        } => {
            let config = ROUTER_CONFIG.load(deps.storage)?;
            let paid: Uint128 = info
                .funds
                .iter()
                .filter(|c| c.denom == config.fee_denom)
                .map(|c| c.amount)
                .sum();
            if paid < config.fee {
                return Err(StdError::generic_err("insufficient dispatch fee"));
            }
            Ok(Response::new()
                .add_attribute("action", "send_message")
                .add_attribute("dest_chain_id", dest_chain_id.to_string())
                .add_attribute("receiver", receiver)
                .add_attribute("gas_limit", gas_limit.to_string())
                .add_attribute("message_id", format!("0x{}", hex::encode(&message_id))))
        }
        MockRouterExecuteMsg::DeliverMessage {
            bridge_addr,
            token,
            amount,
            source_chain_id,
            source_sender,
            payload,
        } => {
            let deliver = CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: token,
                msg: to_json_binary(&Cw20ExecuteMsg::Send {
                    contract: bridge_addr,
                    amount,
                    msg: to_json_binary(&ReceiveMsg::ExecuteMessage {
                        source_chain_id,
                        source_sender,
                        payload,
                    })?,
                })?,
                funds: vec![],
            });
            Ok(Response::new()
                .add_message(deliver)
                .add_attribute("action", "deliver_message"))
        }
    }
}

fn mock_router_query(_deps: Deps, _env: Env, _msg: Empty) -> StdResult<Binary> {
    to_json_binary(&Empty {})
}

// ============================================================================
// Contract Factories
// ============================================================================

pub fn contract_bridge() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        bridge::contract::execute,
        bridge::contract::instantiate,
        bridge::contract::query,
    )
    .with_reply(bridge::contract::reply);
    Box::new(contract)
}

pub fn contract_converter() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        converter::contract::execute,
        converter::contract::instantiate,
        converter::contract::query,
    );
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

pub fn contract_mock_router() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        mock_router_execute,
        mock_router_instantiate,
        mock_router_query,
    );
    Box::new(contract)
}

// ============================================================================
// Test Setup
// ============================================================================

pub struct TestEnv {
    pub app: App,
    pub bridge: Addr,
    pub usdc: Addr,
    pub yield_token: Addr,
    pub converter: Addr,
    pub router: Addr,
    pub admin: Addr,
    pub user: Addr,
}

pub fn setup(conversion_enabled: bool) -> TestEnv {
    let mut app = App::default();

    let admin = Addr::unchecked("terra1admin");
    let user = Addr::unchecked("terra1user");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &admin, coins(10_000_000_000, FEE_DENOM))
            .unwrap();
        router
            .bank
            .init_balance(storage, &user, coins(10_000_000_000, FEE_DENOM))
            .unwrap();
    });

    let cw20_code = app.store_code(contract_cw20());
    let router_code = app.store_code(contract_mock_router());
    let converter_code = app.store_code(contract_converter());
    let bridge_code = app.store_code(contract_bridge());

    // Stablecoin under custody; the user starts with 1000.000000 and the
    // admin can mint more (e.g. to fund the router for inbound deliveries)
    let usdc = app
        .instantiate_contract(
            cw20_code,
            admin.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "USD Coin".to_string(),
                symbol: "USDC".to_string(),
                decimals: 6,
                initial_balances: vec![cw20::Cw20Coin {
                    address: user.to_string(),
                    amount: Uint128::from(1_000_000_000u128),
                }],
                mint: Some(MinterResponse {
                    minter: admin.to_string(),
                    cap: None,
                }),
                marketing: None,
            },
            &[],
            "usdc",
            None,
        )
        .unwrap();

    // Yield-bearing receipt token, reserve minted per test as needed
    let yield_token = app
        .instantiate_contract(
            cw20_code,
            admin.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Compounding USDC".to_string(),
                symbol: "CUSDC".to_string(),
                decimals: 6,
                initial_balances: vec![],
                mint: Some(MinterResponse {
                    minter: admin.to_string(),
                    cap: None,
                }),
                marketing: None,
            },
            &[],
            "cusdc",
            None,
        )
        .unwrap();

    let router = app
        .instantiate_contract(
            router_code,
            admin.clone(),
            &MockRouterInstantiateMsg {
                fee_denom: FEE_DENOM.to_string(),
                fee: Uint128::from(DISPATCH_FEE),
            },
            &[],
            "mock-router",
            None,
        )
        .unwrap();

    let converter = app
        .instantiate_contract(
            converter_code,
            admin.clone(),
            &converter::msg::InstantiateMsg {
                admin: admin.to_string(),
                stable_token: usdc.to_string(),
                yield_token: yield_token.to_string(),
            },
            &[],
            "converter",
            Some(admin.to_string()),
        )
        .unwrap();

    let bridge = app
        .instantiate_contract(
            bridge_code,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                stable_token: usdc.to_string(),
                router: router.to_string(),
                fee_denom: FEE_DENOM.to_string(),
                dispatch_fee: Uint128::from(DISPATCH_FEE),
                gas_margin_percent: None,
                default_gas_limit: DEFAULT_GAS_LIMIT,
                conversion_enabled,
                converter: Some(converter.to_string()),
            },
            &[],
            "stablebridge",
            Some(admin.to_string()),
        )
        .unwrap();

    TestEnv {
        app,
        bridge,
        usdc,
        yield_token,
        converter,
        router,
        admin,
        user,
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub fn allow_chain(env: &mut TestEnv, chain_id: u64) {
    env.app
        .execute_contract(
            env.admin.clone(),
            env.bridge.clone(),
            &bridge::msg::ExecuteMsg::SetChainAllowed {
                chain_id,
                allowed: true,
            },
            &[],
        )
        .unwrap();
}

pub fn allow_sender(env: &mut TestEnv, sender: &str) {
    env.app
        .execute_contract(
            env.admin.clone(),
            env.bridge.clone(),
            &bridge::msg::ExecuteMsg::SetSenderAllowed {
                sender: sender.to_string(),
                allowed: true,
            },
            &[],
        )
        .unwrap();
}

/// Approve the bridge to pull `amount` of the user's stablecoin.
pub fn approve_usdc(env: &mut TestEnv, amount: u128) {
    env.app
        .execute_contract(
            env.user.clone(),
            env.usdc.clone(),
            &Cw20ExecuteMsg::IncreaseAllowance {
                spender: env.bridge.to_string(),
                amount: Uint128::from(amount),
                expires: None,
            },
            &[],
        )
        .unwrap();
}

pub fn mint_cw20(env: &mut TestEnv, token: &Addr, to: &Addr, amount: u128) {
    let admin = env.admin.clone();
    env.app
        .execute_contract(
            admin,
            token.clone(),
            &Cw20ExecuteMsg::Mint {
                recipient: to.to_string(),
                amount: Uint128::from(amount),
            },
            &[],
        )
        .unwrap();
}

pub fn cw20_balance(env: &TestEnv, token: &Addr, addr: &Addr) -> u128 {
    let res: cw20::BalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            token,
            &cw20::Cw20QueryMsg::Balance {
                address: addr.to_string(),
            },
        )
        .unwrap();
    res.balance.u128()
}

pub fn custody_balance(env: &TestEnv) -> u128 {
    let res: bridge::msg::CustodyBalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.bridge, &bridge::msg::QueryMsg::CustodyBalance {})
        .unwrap();
    res.balance.u128()
}

pub fn bridge_stats(env: &TestEnv) -> bridge::msg::StatsResponse {
    env.app
        .wrap()
        .query_wasm_smart(&env.bridge, &bridge::msg::QueryMsg::Stats {})
        .unwrap()
}

pub fn transfer_payload(recipient: &str, amount: u128, token: &Addr) -> Binary {
    to_json_binary(&TransferPayload {
        recipient: recipient.to_string(),
        token_amount: Uint128::from(amount),
        token_address: token.to_string(),
    })
    .unwrap()
}

/// Simulate an inbound delivery through the mock router. `attached` is the
/// amount of stablecoin the router actually hands over; `payload_amount` is
/// what the message claims. The router must hold the attached funds.
pub fn deliver_message(
    env: &mut TestEnv,
    source_chain_id: u64,
    source_sender: &str,
    recipient: &str,
    attached: u128,
    payload_amount: u128,
) -> anyhow::Result<AppResponse> {
    let payload = transfer_payload(recipient, payload_amount, &env.usdc);
    let admin = env.admin.clone();
    let router = env.router.clone();
    env.app.execute_contract(
        admin,
        router,
        &MockRouterExecuteMsg::DeliverMessage {
            bridge_addr: env.bridge.to_string(),
            token: env.usdc.to_string(),
            amount: Uint128::from(attached),
            source_chain_id,
            source_sender: source_sender.to_string(),
            payload,
        },
        &[],
    )
}

/// Attach the dispatch fee as native funds.
pub fn fee_funds() -> Vec<Coin> {
    coins(DISPATCH_FEE, FEE_DENOM)
}

/// Find an attribute value anywhere in the response events.
pub fn attr_value(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}
