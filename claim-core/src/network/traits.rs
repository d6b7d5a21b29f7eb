// claim-core/src/network/traits.rs

// Capability Traits - Injected Collaborators for the Batch Runner
//
// The batch runner never talks to the network or the console directly; it is
// handed a transport and a notifier. The real implementations live in
// `network::client` and the CLI binary, and tests substitute their own.

use crate::claim::WalletOutcome;
use crate::error::ClaimResult;
use crate::network::models::UserInfo;
use async_trait::async_trait;

// =============================================================================
// TRANSPORT
// =============================================================================

/// ClaimTransport - the claim-checking endpoint, seen from the core.
///
/// # Design Principles
/// - **Async-First**: the check is a network round trip
/// - **No-allocation meaning**: `Ok(None)` is a valid answer (non-200), not an error
/// - **Error Handling**: transport failures surface as `ClaimError::Http`
#[async_trait]
pub trait ClaimTransport: Send + Sync {
    /// Submit a (signature, address) pair to the claim endpoint.
    ///
    /// # Arguments
    /// * `signature` - 65-byte recoverable signature, `0x` lowercase hex
    /// * `address` - account address, `0x` lowercase hex
    ///
    /// # Returns
    /// `Some(UserInfo)` when the endpoint answered 200 with a parseable body,
    /// `None` when it answered anything else (treated as "no allocation").
    async fn check_claim(&self, signature: &str, address: &str) -> ClaimResult<Option<UserInfo>>;
}

// =============================================================================
// NOTIFIER
// =============================================================================

/// ClaimNotifier - renders each wallet's outcome as the batch progresses.
///
/// Console coloring, log shipping, or silence for tests — all the runner
/// knows is that every outcome is handed over exactly once, in order.
pub trait ClaimNotifier: Send + Sync {
    fn notify(&self, outcome: &WalletOutcome);
}

/// Notifier that discards everything. Useful in tests and when the caller
/// only wants the returned outcome list.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl ClaimNotifier for NullNotifier {
    fn notify(&self, _outcome: &WalletOutcome) {}
}
