//! Deterministic message identifiers.
//!
//! Every outbound transfer is assigned a 32-byte keccak256 id over a
//! canonical encoding of its fields, so the same id can be recomputed
//! off-chain (or on the destination chain) to correlate dispatch and
//! receipt without trusting the transport's bookkeeping.
//!
//! # Byte Layout
//! - dest_chain_id: u64, big-endian (8 bytes)
//! - sender length: u64, big-endian (8 bytes), then sender bytes
//! - recipient length: u64, big-endian (8 bytes), then recipient bytes
//! - amount: u128, big-endian (16 bytes)
//! - nonce: u64, big-endian (8 bytes)
//!
//! The variable-length fields are length-prefixed so the encoding is
//! injective: no two distinct transfers encode to the same byte string.

use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Compute the message id for an outbound transfer.
pub fn compute_message_id(
    dest_chain_id: u64,
    sender: &str,
    recipient: &str,
    amount: u128,
    nonce: u64,
) -> [u8; 32] {
    let mut data = Vec::with_capacity(48 + sender.len() + recipient.len());
    data.extend_from_slice(&dest_chain_id.to_be_bytes());
    data.extend_from_slice(&(sender.len() as u64).to_be_bytes());
    data.extend_from_slice(sender.as_bytes());
    data.extend_from_slice(&(recipient.len() as u64).to_be_bytes());
    data.extend_from_slice(recipient.as_bytes());
    data.extend_from_slice(&amount.to_be_bytes());
    data.extend_from_slice(&nonce.to_be_bytes());
    keccak256(&data)
}

/// Render a 32-byte id as a 0x-prefixed hex string (for attributes)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
