//! Wire types for the cross-chain message router (the transport endpoint).
//!
//! The router is an external collaborator: the bridge only depends on its
//! execute API for outbound dispatch. Inbound delivery arrives through the
//! CW20 receiver interface instead, with the router as the sending account.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};

/// Application payload carried inside a cross-chain message.
///
/// Serialized to JSON binary at dispatch time and deserialized by the
/// receiving bridge. Fields are unvalidated wire data and must be checked
/// before processing.
#[cw_serde]
pub struct TransferPayload {
    /// Final recipient on the destination chain.
    pub recipient: String,
    /// Amount in the token's smallest unit.
    pub token_amount: Uint128,
    /// Stablecoin contract address on the source chain.
    pub token_address: String,
}

/// Execute API of the message router.
#[cw_serde]
pub enum RouterExecuteMsg {
    /// Dispatch a message to `receiver` on `dest_chain_id`. The dispatch
    /// fee must be attached as native funds; routing beyond the named
    /// receiver is the transport's concern.
    SendMessage {
        dest_chain_id: u64,
        /// Receiving account on the destination chain.
        receiver: String,
        /// Encoded [`TransferPayload`].
        payload: Binary,
        /// Pre-committed destination execution budget.
        gas_limit: u64,
        /// Deterministic 32-byte message identifier assigned by the sender.
        message_id: Binary,
    },
}
