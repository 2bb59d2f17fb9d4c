//! Destination gas budgeting.
//!
//! Cross-chain execution requires the sender to pre-commit a gas budget for
//! the receipt on the destination chain. Under-budgeting fails the receipt
//! (fatal for that message; the transport decides whether a manual replay is
//! possible), over-budgeting wastes fees. The estimator turns an empirically
//! measured execution cost — from a dry run or a prior receipt of the same
//! shape — into a conservative budget by applying a safety margin.
//!
//! The margin is a policy knob, not a law: the contract default lives in
//! [`crate::state::DEFAULT_GAS_MARGIN_PERCENT`] and is configurable per
//! deployment and per query.

/// Compute a margined gas budget: `floor(measured * (100 + margin) / 100)`.
///
/// The intermediate is widened to 128 bits so the multiply cannot overflow;
/// a budget beyond `u64::MAX` saturates.
pub fn estimate_budget(measured_gas_used: u64, margin_percent: u64) -> u64 {
    let budget = u128::from(measured_gas_used) * (100 + u128::from(margin_percent)) / 100;
    u64::try_from(budget).unwrap_or(u64::MAX)
}
