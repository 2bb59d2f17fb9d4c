use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:stablebridge-converter";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin who manages configuration and sweeps the deposit pool
    pub admin: Addr,
    /// Stablecoin accepted for conversion (CW20)
    pub stable_token: Addr,
    /// Yield-bearing token paid out of the reserve (CW20)
    pub yield_token: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");
