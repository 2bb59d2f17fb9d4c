//! Common - Shared Types for the StableBridge Contracts
//!
//! This package provides the interface types shared across the StableBridge
//! smart contracts: the asset descriptor, the transport (router) wire API,
//! and the converter hook API.

pub mod asset;
pub mod convert;
pub mod transport;

pub use asset::AssetInfo;
pub use convert::{ConversionResult, ConvertHookMsg};
pub use transport::{RouterExecuteMsg, TransferPayload};
