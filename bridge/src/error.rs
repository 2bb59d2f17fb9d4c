//! Error types for the StableBridge transfer contract.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only pending admin can accept")]
    UnauthorizedPendingAdmin,

    #[error("Unauthorized source: chain {chain_id}, sender {sender}")]
    UnauthorizedSource { chain_id: u64, sender: String },

    // ========================================================================
    // Admin Errors
    // ========================================================================

    #[error("No pending admin change")]
    NoPendingAdmin,

    #[error("Timelock not expired: {remaining_seconds} seconds remaining")]
    TimelockNotExpired { remaining_seconds: u64 },

    // ========================================================================
    // Bridge State Errors
    // ========================================================================

    #[error("Bridge is paused")]
    BridgePaused,

    #[error("Chain not allowed: {chain_id}")]
    ChainNotAllowed { chain_id: u64 },

    #[error("Token not supported: {token}")]
    TokenNotSupported { token: String },

    #[error("Conversion enabled but no converter configured")]
    ConverterNotConfigured,

    // ========================================================================
    // Amount & Funds Errors
    // ========================================================================

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Insufficient allowance: required {required}, approved {available}")]
    InsufficientAllowance {
        required: Uint128,
        available: Uint128,
    },

    #[error("Insufficient balance: required {required}, held {available}")]
    InsufficientBalance {
        required: Uint128,
        available: Uint128,
    },

    #[error("Insufficient fee: expected {expected}, got {got}")]
    InsufficientFee { expected: Uint128, got: Uint128 },

    // ========================================================================
    // Gas Budgeting Errors
    // ========================================================================

    #[error("Invalid gas limit: {gas_limit} outside (0, {max}]")]
    InvalidGasLimit { gas_limit: u64, max: u64 },

    // ========================================================================
    // Inbound Message Errors
    // ========================================================================

    #[error("Attached funds mismatch: payload names {expected}, delivered {got}")]
    AmountMismatch { expected: Uint128, got: Uint128 },

    // ========================================================================
    // Conversion Reply Errors
    // ========================================================================

    #[error("No conversion in flight for reply")]
    NoPendingConversion,

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    // ========================================================================
    // Recovery Errors
    // ========================================================================

    #[error("Asset recovery only available when bridge is paused")]
    RecoveryNotAvailable,
}
