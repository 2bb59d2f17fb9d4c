use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use cw20::Cw20ReceiveMsg;

#[cw_serde]
pub struct InstantiateMsg {
    /// Admin who manages configuration and sweeps the deposit pool
    pub admin: String,
    /// Stablecoin accepted for conversion (CW20 contract address)
    pub stable_token: String,
    /// Yield-bearing token paid out of the reserve (CW20 contract address)
    pub yield_token: String,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Convert stablecoins delivered via CW20 `Send`
    /// (hook: `common::ConvertHookMsg::Convert`)
    Receive(Cw20ReceiveMsg),

    /// Admin: withdraw accumulated deposits or excess reserve
    WithdrawFunds {
        /// CW20 contract to withdraw from (stable or yield token)
        token: String,
        amount: Uint128,
        recipient: String,
    },

    /// Admin: update configuration
    UpdateConfig {
        admin: Option<String>,
        stable_token: Option<String>,
        yield_token: Option<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the contract configuration
    #[returns(ConfigResponse)]
    Config {},
    /// Returns the yield-token reserve currently available for conversions
    #[returns(ReserveResponse)]
    Reserve {},
    /// Returns the output amount for a hypothetical conversion
    #[returns(SimulateConvertResponse)]
    SimulateConvert { amount_in: Uint128 },
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: String,
    pub stable_token: String,
    pub yield_token: String,
}

#[cw_serde]
pub struct ReserveResponse {
    pub reserve: Uint128,
}

#[cw_serde]
pub struct SimulateConvertResponse {
    pub amount_out: Uint128,
}
