// claim-core/src/lib.rs

//! # claim-core
//!
//! Eligibility checker for the Frame Chapter One airdrop.
//!
//! For each private key the crate derives the Ethereum account address,
//! signs the fixed claim-intent message (EIP-191 personal sign, legacy
//! `v = recovery_id + 27` encoding), and submits the (signature, address)
//! pair to the claim-checking endpoint.
//!
//! # Module Map
//! - [`evm`] — the cryptographic core: address derivation and personal-message signing
//! - [`crypto`] — private-key parsing and key file loading
//! - [`network`] — claim endpoint models, capability traits, reqwest client
//! - [`claim`] — the batch runner tying it all together
//! - [`error`] — unified error taxonomy

pub mod claim;
pub mod crypto;
pub mod error;
pub mod evm;
pub mod network;

// Re-exports for cleaner API access
pub use claim::{claim_message, run_claim_batch, ClaimStatus, FailurePolicy, WalletOutcome};
pub use error::{ClaimError, ClaimResult, CryptoError};
pub use evm::{EvmAddress, EvmSigner};
pub use network::{ClaimClient, ClaimConfig, ClaimNotifier, ClaimTransport, UserInfo};
