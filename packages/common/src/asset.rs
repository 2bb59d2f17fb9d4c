use cosmwasm_schema::cw_serde;

/// Identifies a transferable asset: a native coin denom or a CW20 contract.
#[cw_serde]
pub enum AssetInfo {
    Native { denom: String },
    Cw20 { contract_addr: String },
}
