use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Token not accepted for conversion: {token}")]
    TokenNotAccepted { token: String },

    #[error("Invalid amount: conversion amount must be greater than zero")]
    ZeroAmount,

    #[error("Insufficient liquidity: reserve {available} is below required output {required}")]
    InsufficientLiquidity {
        required: Uint128,
        available: Uint128,
    },
}
