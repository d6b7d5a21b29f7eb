// claim-core/src/evm/signer.rs
//
// EVM Signer Module - Offline Personal-Message Signing
// EIP-191 (Personal Sign) with legacy recoverable signature encoding

use crate::crypto::keys::parse_private_key;
use crate::error::{ClaimError, ClaimResult, CryptoError};
use crate::evm::keccak256;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};

/// EIP-191 personal-sign prefix. The decimal byte length of the message
/// follows immediately, then the message bytes with no separator.
pub const EIP191_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// Build the personal-sign preimage:
/// `"\x19Ethereum Signed Message:\n" + decimal(len(message)) + message`.
///
/// The length prefix counts raw bytes, not characters, and carries no
/// leading zeros.
pub fn eip191_envelope(message: &[u8]) -> Vec<u8> {
    let len = message.len().to_string();
    let mut envelope = Vec::with_capacity(EIP191_PREFIX.len() + len.len() + message.len());
    envelope.extend_from_slice(EIP191_PREFIX);
    envelope.extend_from_slice(len.as_bytes());
    envelope.extend_from_slice(message);
    envelope
}

/// Keccak-256 of the personal-sign envelope. This is the 32-byte value the
/// curve actually signs.
#[inline]
pub fn eip191_digest(message: &[u8]) -> [u8; 32] {
    keccak256(&eip191_envelope(message))
}

/// EVM Signer - Offline EIP-191 Signing
///
/// # Security
/// - **ZeroizeOnDrop**: `SigningKey` wipes its memory when dropped
/// - **No Debug Leak**: Custom Debug impl never shows the private key
/// - **Cached Address**: the address is derived once at construction
pub struct EvmSigner {
    signing_key: SigningKey,
    address: [u8; 20],
    address_hex: String,
}

// Custom Debug - NEVER show the private key
impl std::fmt::Debug for EvmSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmSigner")
            .field("address", &self.address_hex)
            .finish_non_exhaustive()
    }
}

impl EvmSigner {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Build a signer from a raw 32-byte private key.
    ///
    /// Rejects zero and out-of-range scalars with [`CryptoError::InvalidKey`].
    pub fn new(priv_key: &[u8]) -> ClaimResult<Self> {
        let signing_key = SigningKey::from_slice(priv_key).map_err(|e| {
            ClaimError::Crypto(CryptoError::InvalidKey(format!(
                "Invalid private key (must be a nonzero 32-byte scalar): {}",
                e
            )))
        })?;

        let address = address_from_verifying_key(signing_key.verifying_key());
        let address_hex = format!("0x{}", hex::encode(address));

        Ok(Self {
            signing_key,
            address,
            address_hex,
        })
    }

    /// Build a signer from a 64-hex-digit key string, `0x` prefix optional.
    pub fn from_hex(priv_key_hex: &str) -> ClaimResult<Self> {
        let key_bytes = parse_private_key(priv_key_hex)?;
        Self::new(&key_bytes[..])
        // `key_bytes` dropped & zeroed here
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// The 20-byte account address.
    #[inline]
    pub fn address_bytes(&self) -> [u8; 20] {
        self.address
    }

    /// Lowercase `0x`-prefixed hex address (wire form).
    #[inline]
    pub fn address_hex(&self) -> &str {
        &self.address_hex
    }

    // =========================================================================
    // MESSAGE SIGNING (EIP-191)
    // =========================================================================

    /// Sign a personal message, returning the 65-byte signature `r ‖ s ‖ v`.
    ///
    /// Nonces are deterministic (RFC 6979), so the same (key, message) pair
    /// always produces the same signature. `s` is normalized to the low half
    /// of the curve order and the recovery id is adjusted to match;
    /// `v = recovery_id + 27`, the legacy offset convention expected by
    /// Ethereum-ecosystem verifiers.
    pub fn sign_personal_raw(&self, message: &[u8]) -> ClaimResult<[u8; 65]> {
        let digest = eip191_digest(message);

        let (signature, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(&digest)
            .map_err(|e| ClaimError::Crypto(CryptoError::SigningFailed(e.to_string())))?;

        // Low-s normalization. Negating s flips the parity of the recovered
        // point, so the recovery id's parity bit flips with it.
        let (signature, recovery_id) = match signature.normalize_s() {
            Some(low_s) => {
                let flipped = RecoveryId::from_byte(recovery_id.to_byte() ^ 1).ok_or_else(|| {
                    ClaimError::Crypto(CryptoError::SigningFailed(
                        "recovery id out of range after s-normalization".to_string(),
                    ))
                })?;
                (low_s, flipped)
            }
            None => (signature, recovery_id),
        };

        let mut out = [0u8; 65];
        out[..64].copy_from_slice(&signature.to_bytes());
        out[64] = recovery_id.to_byte() + 27;
        Ok(out)
    }

    /// Sign a personal message and encode the signature as lowercase
    /// `0x`-prefixed hex — the only form that crosses the system boundary.
    pub fn sign_personal(&self, message: &[u8]) -> ClaimResult<String> {
        let signature = self.sign_personal_raw(message)?;
        Ok(format!("0x{}", hex::encode(signature)))
    }

    // =========================================================================
    // SIGNATURE VERIFICATION (ECDSA recovery)
    // =========================================================================

    /// Recover the signing address from a personal message and a hex
    /// signature in the wire form produced by [`sign_personal`](Self::sign_personal).
    pub fn recover_personal(message: &[u8], signature_hex: &str) -> ClaimResult<[u8; 20]> {
        let stripped = signature_hex
            .strip_prefix("0x")
            .unwrap_or(signature_hex);
        let bytes = hex::decode(stripped).map_err(|e| {
            ClaimError::Crypto(CryptoError::InvalidSignature(format!(
                "Signature is not valid hex: {}",
                e
            )))
        })?;
        if bytes.len() != 65 {
            return Err(ClaimError::Crypto(CryptoError::InvalidSignature(format!(
                "Expected 65 signature bytes, got {}",
                bytes.len()
            ))));
        }

        let v = bytes[64];
        if v != 27 && v != 28 {
            return Err(ClaimError::Crypto(CryptoError::InvalidSignature(format!(
                "v byte must be 27 or 28, got {}",
                v
            ))));
        }
        let recovery_id = RecoveryId::from_byte(v - 27).ok_or_else(|| {
            ClaimError::Crypto(CryptoError::InvalidSignature(
                "Invalid recovery id".to_string(),
            ))
        })?;

        let signature = Signature::from_slice(&bytes[..64]).map_err(|e| {
            ClaimError::Crypto(CryptoError::InvalidSignature(format!(
                "Malformed r/s values: {}",
                e
            )))
        })?;

        let digest = eip191_digest(message);
        let verifying_key = VerifyingKey::recover_from_prehash(&digest, &signature, recovery_id)
            .map_err(|e| {
                ClaimError::Crypto(CryptoError::InvalidSignature(format!(
                    "Public key recovery failed: {}",
                    e
                )))
            })?;

        Ok(address_from_verifying_key(&verifying_key))
    }

    /// Verify that a personal-sign signature was produced by this signer.
    pub fn verify_personal(&self, message: &[u8], signature_hex: &str) -> bool {
        Self::recover_personal(message, signature_hex)
            .map(|recovered| recovered == self.address)
            .unwrap_or(false)
    }
}

/// Uncompressed point minus the 0x04 prefix, hashed with Keccak-256;
/// the address is the trailing 20 bytes.
fn address_from_verifying_key(verifying_key: &VerifyingKey) -> [u8; 20] {
    let encoded = verifying_key.to_encoded_point(false);
    let hash = keccak256(&encoded.as_bytes()[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evm::EvmAddress;

    // Anvil/Hardhat account #0
    const TEST_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_ADDRESS: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

    // EIP-155 example key (0x46 * 32)
    const EIP155_PRIVATE_KEY: &str =
        "0x4646464646464646464646464646464646464646464646464646464646464646";

    fn create_test_signer() -> EvmSigner {
        EvmSigner::from_hex(TEST_PRIVATE_KEY).expect("Create signer")
    }

    // ── Envelope Tests ───────────────────────────────────────────────

    #[test]
    fn test_envelope_exactness() {
        assert_eq!(
            eip191_envelope(b"hi"),
            b"\x19Ethereum Signed Message:\n2hi".to_vec()
        );
    }

    #[test]
    fn test_envelope_empty_message() {
        assert_eq!(
            eip191_envelope(b""),
            b"\x19Ethereum Signed Message:\n0".to_vec()
        );
    }

    #[test]
    fn test_envelope_length_is_byte_count() {
        // 5 chars, 7 bytes in UTF-8
        let message = "héllô".as_bytes();
        let envelope = eip191_envelope(message);
        let expected_prefix = format!("\x19Ethereum Signed Message:\n{}", message.len());
        assert!(envelope.starts_with(expected_prefix.as_bytes()));
        assert!(envelope.ends_with(message));
    }

    // ── Signing Tests ────────────────────────────────────────────────

    #[test]
    fn test_address_derivation() {
        let signer = create_test_signer();
        assert_eq!(signer.address_hex(), TEST_ADDRESS);
    }

    #[test]
    fn test_sign_is_deterministic() {
        let signer = create_test_signer();
        let message = b"Hello, Ethereum!";
        let sig1 = signer.sign_personal(message).expect("Sign");
        let sig2 = signer.sign_personal(message).expect("Sign");
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn test_signature_wire_format() {
        let signer = create_test_signer();
        let sig = signer.sign_personal(b"wire format").expect("Sign");
        // 0x + 65 bytes hex
        assert!(sig.starts_with("0x"));
        assert_eq!(sig.len(), 2 + 130);
        assert!(sig[2..].chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(sig, sig.to_lowercase());
    }

    #[test]
    fn test_sign_and_recover() {
        let signer = create_test_signer();
        let message = b"Test recovery";
        let sig = signer.sign_personal(message).expect("Sign");

        let recovered = EvmSigner::recover_personal(message, &sig).expect("Recover");
        assert_eq!(recovered, signer.address_bytes());
        assert!(signer.verify_personal(message, &sig));
    }

    #[test]
    fn test_recovery_matches_address_deriver() {
        let signer = EvmSigner::from_hex(EIP155_PRIVATE_KEY).expect("Create signer");
        let message = b"cross-check against the address deriver";
        let sig = signer.sign_personal(message).expect("Sign");

        let recovered = EvmSigner::recover_personal(message, &sig).expect("Recover");
        let derived = EvmAddress::derive_bytes_from_slice(
            &hex::decode(&EIP155_PRIVATE_KEY[2..]).unwrap(),
        )
        .unwrap();
        assert_eq!(recovered, derived);
    }

    #[test]
    fn test_wrong_message_fails_verification() {
        let signer = create_test_signer();
        let sig = signer.sign_personal(b"signed message").expect("Sign");
        assert!(!signer.verify_personal(b"different message", &sig));
    }

    #[test]
    fn test_v_byte_always_27_or_28() {
        // Deterministic fan-out of (key, message) pairs
        for i in 0u32..100 {
            let key = keccak256(&i.to_be_bytes());
            let signer = EvmSigner::new(&key).expect("Create signer");
            let message = format!("message number {}", i);

            let sig = signer.sign_personal_raw(message.as_bytes()).expect("Sign");
            assert!(
                sig[64] == 27 || sig[64] == 28,
                "v byte out of range for pair {}: {}",
                i,
                sig[64]
            );
        }
    }

    #[test]
    fn test_low_s_normalization() {
        use k256::elliptic_curve::scalar::IsHigh;
        for i in 0u32..100 {
            let key = keccak256(&(1_000_000 + i).to_be_bytes());
            let signer = EvmSigner::new(&key).expect("Create signer");
            let raw = signer
                .sign_personal_raw(format!("low-s {}", i).as_bytes())
                .expect("Sign");
            let sig = Signature::from_slice(&raw[..64]).expect("Parse");
            assert!(!bool::from(sig.s().is_high()), "high s for pair {}", i);
        }
    }

    // ── Error Handling Tests ─────────────────────────────────────────

    #[test]
    fn test_zero_key_rejected() {
        let err = EvmSigner::new(&[0u8; 32]).unwrap_err();
        assert!(matches!(
            err,
            ClaimError::Crypto(CryptoError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_non_hex_key_rejected() {
        let err = EvmSigner::from_hex("0xnothexnothexnothexnothexnothexnothexnothexnothexnothexnothexnot")
            .unwrap_err();
        assert!(matches!(
            err,
            ClaimError::Crypto(CryptoError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_short_key_rejected() {
        assert!(EvmSigner::new(&[0x11u8; 31]).is_err());
        assert!(EvmSigner::from_hex("0xabcdef").is_err());
    }

    #[test]
    fn test_malformed_signature_rejected() {
        let message = b"whatever";
        assert!(EvmSigner::recover_personal(message, "0xzz").is_err());
        assert!(EvmSigner::recover_personal(message, "0x1234").is_err());

        // Right length, bad v byte
        let mut bad_v = [0x11u8; 65];
        bad_v[64] = 5;
        let sig_hex = format!("0x{}", hex::encode(bad_v));
        let err = EvmSigner::recover_personal(message, &sig_hex).unwrap_err();
        assert!(matches!(
            err,
            ClaimError::Crypto(CryptoError::InvalidSignature(_))
        ));
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let signer = create_test_signer();
        let debug_output = format!("{:?}", signer);

        assert!(!debug_output.contains(TEST_PRIVATE_KEY));
        assert!(debug_output.contains("EvmSigner"));
        assert!(debug_output.to_lowercase().contains(TEST_ADDRESS));
    }
}
