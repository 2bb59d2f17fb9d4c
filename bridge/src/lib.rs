//! StableBridge - Cross-Chain Stablecoin Transfer Contract
//!
//! One bridge instance is deployed per chain. Outbound, it pulls the
//! stablecoin into custody and dispatches a transfer message through the
//! configured router; inbound, it admits router-delivered messages against
//! default-deny allowlists and credits the recipient, optionally swapping
//! the funds into a yield-bearing asset first.
//!
//! # Outbound Flow (Transfer)
//! 1. Caller approves the bridge for the transfer amount
//! 2. `Transfer` pulls the amount into custody, then dispatches the message
//!    through the router (custody strictly before dispatch; both commit or
//!    revert together)
//! 3. The deterministic message id is returned in the response
//!
//! # Inbound Flow (Receive)
//! 1. The router delivers funds and message together via a CW20 `Send`
//! 2. Source chain and source sender are checked against the allowlists
//!    (default deny)
//! 3. The recipient is credited exactly the payload amount — through the
//!    converter when enabled, falling back to the raw stablecoin if the
//!    conversion fails
//!
//! # Security
//! - Default-deny allowlists for chains and source senders
//! - Custody-before-dispatch ordering for outbound transfers
//! - Conversion isolated in a submessage; its failure cannot strand a receipt
//! - Emergency pause and two-step admin handover with timelock

pub mod contract;
pub mod error;
mod execute;
pub mod gas;
pub mod hash;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::gas::estimate_budget;
pub use crate::hash::{compute_message_id, keccak256};
