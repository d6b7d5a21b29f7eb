// claim-core/src/evm/mod.rs

//! Ethereum Virtual Machine (EVM) Primitives
//!
//! This module provides the cryptographic core of the claim checker:
//!
//! - **Address Derivation**: secp256k1 public key → Keccak-256 → 20-byte address via [`EvmAddress`].
//! - **Signing**: EIP-191 "personal sign" messages with recoverable signatures via [`EvmSigner`].

pub mod address;
pub mod signer;

// Re-exports for cleaner API access
pub use address::EvmAddress;
pub use signer::{eip191_digest, eip191_envelope, EvmSigner};

use tiny_keccak::{Hasher, Keccak};

/// Keccak-256 over `data`, into a stack-allocated 32-byte array.
pub(crate) fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut hash = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut hash);
    hash
}
