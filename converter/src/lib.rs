//! StableBridge Converter - Destination-Side Asset Conversion
//!
//! Swaps the bridged stablecoin into a yield-bearing token for the final
//! recipient. The receiving bridge forwards accepted transfers here via a
//! CW20 `Send`; the converter pays the output out of its own reserve and
//! keeps the supplied stablecoin as its deposit pool.
//!
//! Conversion is all-or-nothing. Any failure (unknown token, reserve below
//! the required output) reverts the entire hook call, so the supplied
//! amount is never partially consumed and the caller can fall back to
//! crediting the raw stablecoin.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
