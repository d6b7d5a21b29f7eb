// claim-core/src/crypto/mod.rs

//! Key Input Module
//!
//! Parsing and loading of hex-encoded secp256k1 private keys:
//!
//! - **Hex Parsing**: 64-digit key strings with optional `0x` prefix via [`parse_private_key`].
//! - **Key Files**: JSON-array key files (`wallets.json`) via [`load_key_file`].

pub mod keys;

// Re-exports for cleaner API access
pub use keys::{load_key_file, parse_private_key};
