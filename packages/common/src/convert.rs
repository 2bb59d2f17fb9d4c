//! Converter hook API shared between the bridge and the converter contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

/// Hook message embedded in a CW20 `Send` to the converter.
#[cw_serde]
pub enum ConvertHookMsg {
    /// Convert the attached stablecoin amount and credit `recipient` with
    /// the output token. All-or-nothing: a failed conversion consumes none
    /// of the attached amount.
    Convert { recipient: String },
}

/// Outcome of a completed conversion.
#[cw_serde]
pub struct ConversionResult {
    pub supplied_amount: Uint128,
    pub output_amount: Uint128,
    pub recipient: String,
}
