// claim-core/src/evm/address.rs
//
// EVM Address Module - Address Derivation
// Keccak-256, secp256k1, EIP-55 (Checksum)

use crate::error::{ClaimError, ClaimResult, CryptoError};
use crate::evm::keccak256;
use alloy::primitives::Address;
use k256::{elliptic_curve::sec1::ToEncodedPoint, SecretKey};
use zeroize::{Zeroize, Zeroizing};

/// EVM Address Generator
///
/// # Flow:  Private Key (32B) → Public Key (64B) → Keccak256 → Address (20B)
///
/// # Security
/// - Zeroize: intermediate data (hash, public key bytes) is wiped after use
/// - No Storage: this module never retains the private key
pub struct EvmAddress;

impl EvmAddress {
    // =========================================================================
    // PRIMARY API — Zeroizing (recommended)
    // =========================================================================

    /// Derive the 20-byte address from a **zeroizing private key**.
    ///
    /// This is the **recommended** API — it takes ownership of the key
    /// material wrapped in [`Zeroizing`], guaranteeing the caller's
    /// buffer is zeroed when this function returns.
    ///
    /// # Algorithm (Ethereum Yellow Paper)
    /// 1. `priv_key` (32B) → secp256k1 → `pub_key` (uncompressed, 65B)
    /// 2. Drop prefix byte 0x04 → `pub_key_raw` (64B)
    /// 3. Keccak-256(`pub_key_raw`) → `hash` (32B)
    /// 4. `hash[12..32]` → `address` (20B)
    pub fn derive_bytes(priv_key: Zeroizing<Vec<u8>>) -> ClaimResult<[u8; 20]> {
        Self::derive_bytes_from_slice(&priv_key)
        // `priv_key` dropped & zeroed here
    }

    /// Derive the lowercase `0x`-prefixed hex address from a **zeroizing
    /// private key**. This is the wire form the claim endpoint expects.
    #[inline]
    pub fn derive_hex(priv_key: Zeroizing<Vec<u8>>) -> ClaimResult<String> {
        Self::derive_hex_from_slice(&priv_key)
        // `priv_key` dropped & zeroed here
    }

    // =========================================================================
    // SECONDARY API — Borrowed slice (caller manages zeroing)
    // =========================================================================

    /// Derive the 20-byte address from a **borrowed byte slice**.
    ///
    /// # ⚠ Security Note
    /// The caller is responsible for zeroing `priv_key` after this call.
    /// Prefer [`derive_bytes()`](Self::derive_bytes) with `Zeroizing<Vec<u8>>`.
    pub fn derive_bytes_from_slice(priv_key: &[u8]) -> ClaimResult<[u8; 20]> {
        // Parse & validate private key (zero and out-of-range scalars rejected)
        let secret_key = SecretKey::from_slice(priv_key).map_err(|e| {
            ClaimError::Crypto(CryptoError::InvalidKey(format!(
                "Invalid secp256k1 private key: {}",
                e
            )))
        })?;

        // Derive public key (uncompressed), wrapped in Zeroizing
        let public_key = secret_key.public_key();
        let encoded = Zeroizing::new(public_key.to_encoded_point(false));
        let pub_key_raw = &encoded.as_bytes()[1..]; // Drop 0x04 prefix

        let mut hash = keccak256(pub_key_raw);

        // Extract trailing 20 bytes
        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);

        hash.zeroize();

        Ok(address)
    }

    /// Derive the lowercase `0x`-prefixed hex address from a **borrowed byte slice**.
    ///
    /// # ⚠ Security Note
    /// The caller is responsible for zeroing `priv_key` after this call.
    /// Prefer [`derive_hex()`](Self::derive_hex) with `Zeroizing<Vec<u8>>`.
    #[inline]
    pub fn derive_hex_from_slice(priv_key: &[u8]) -> ClaimResult<String> {
        let bytes = Self::derive_bytes_from_slice(priv_key)?;
        Ok(format!("0x{}", hex::encode(bytes)))
    }

    /// Derive the EIP-55 checksummed address from a **borrowed byte slice**.
    ///
    /// Display form only. The claim endpoint and the signed message text both
    /// use the lowercase wire form from [`derive_hex_from_slice`](Self::derive_hex_from_slice).
    #[inline]
    pub fn derive_checksummed_from_slice(priv_key: &[u8]) -> ClaimResult<String> {
        let bytes = Self::derive_bytes_from_slice(priv_key)?;
        Ok(Address::from_slice(&bytes).to_checksum(None))
    }

    // =========================================================================
    // UTILITIES
    // =========================================================================

    /// Whether the string is a well-formed Ethereum address.
    ///
    /// Checks: `0x` prefix + 40 hex chars + EIP-55 checksum (if mixed case)
    #[inline]
    pub fn is_valid(address: &str) -> bool {
        address.parse::<Address>().is_ok()
    }

    /// Normalize to EIP-55 checksum format.
    ///
    /// `"0xabcd..."` → `"0xAbCd..."` (mixed-case per checksum)
    pub fn to_checksum(address: &str) -> ClaimResult<String> {
        let addr: Address = address.parse().map_err(|_| {
            ClaimError::Crypto(CryptoError::InvalidKey(
                "Invalid Ethereum address format".to_string(),
            ))
        })?;
        Ok(addr.to_checksum(None))
    }

    /// Case-insensitive address comparison, zero-allocation.
    ///
    /// Byte comparison through `alloy::Address` instead of `.to_lowercase()` heap churn.
    #[inline]
    pub fn equals(addr1: &str, addr2: &str) -> bool {
        match (addr1.parse::<Address>(), addr2.parse::<Address>()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
