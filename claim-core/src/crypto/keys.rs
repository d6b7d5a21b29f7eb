// claim-core/src/crypto/keys.rs
//
// Private Key Input Handling
// Hex parsing + wallets.json key file loading

use crate::error::{ClaimError, ClaimResult, CryptoError};
use std::path::Path;
use zeroize::Zeroizing;

/// Parse a hex-encoded secp256k1 private key.
///
/// Accepts exactly 64 hex digits, with an optional `0x`/`0X` prefix. The
/// decoded bytes are returned in a [`Zeroizing`] wrapper so they are wiped
/// when the caller drops them. Range validation (nonzero, below the curve
/// order) happens when the key is handed to the curve; this function only
/// enforces the wire shape.
pub fn parse_private_key(priv_key_hex: &str) -> ClaimResult<Zeroizing<[u8; 32]>> {
    let digits = priv_key_hex
        .strip_prefix("0x")
        .or_else(|| priv_key_hex.strip_prefix("0X"))
        .unwrap_or(priv_key_hex);

    if digits.len() != 64 {
        return Err(ClaimError::Crypto(CryptoError::InvalidKey(format!(
            "Expected 64 hex digits, got {}",
            digits.len()
        ))));
    }

    let mut key_bytes = Zeroizing::new([0u8; 32]);
    hex::decode_to_slice(digits, &mut key_bytes[..]).map_err(|e| {
        ClaimError::Crypto(CryptoError::InvalidKey(format!(
            "Key is not valid hex: {}",
            e
        )))
    })?;

    Ok(key_bytes)
}

/// Load an ordered list of private-key strings from a JSON array file
/// (the `wallets.json` shape).
///
/// Elements are returned as-is; each one is validated individually when it
/// reaches [`parse_private_key`], so one malformed entry does not have to
/// poison the whole batch.
pub fn load_key_file(path: impl AsRef<Path>) -> ClaimResult<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    let keys: Vec<String> = serde_json::from_str(&contents)?;
    Ok(keys)
}

// =============================================================================
// TESTS
// =============================================================================
