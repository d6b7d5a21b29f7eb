// claim-core/src/claim.rs
//
// Claim Batch Runner
//
// Processes an ordered sequence of private keys, one independent unit of work
// per key: derive the address, sign the claim message, ask the endpoint, hand
// the outcome to the notifier. Whether a failing key halts the batch is the
// caller's choice via FailurePolicy, not hard-coded here.

use crate::error::ClaimResult;
use crate::evm::EvmSigner;
use crate::network::models::UserInfo;
use crate::network::traits::{ClaimNotifier, ClaimTransport};

/// Fixed text the claim endpoint expects each wallet to have signed. The
/// lowercase address is appended; casing is byte-exact, the endpoint rejects
/// signatures over any other rendering.
pub const CLAIM_MESSAGE_PREFIX: &str =
    "You are claiming the Frame Chapter One Airdrop with the following address: ";

/// Build the claim intent message for an address.
///
/// The address is lowercased before inclusion, mirroring the wire convention
/// the verification endpoint was built against.
pub fn claim_message(address: &str) -> String {
    format!("{}{}", CLAIM_MESSAGE_PREFIX, address.to_lowercase())
}

// =============================================================================
// OUTCOME TYPES
// =============================================================================

/// What to do when a single wallet fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the batch at the first failing wallet (reference behavior).
    Abort,
    /// Record the failure and continue with the remaining wallets.
    Skip,
}

/// Endpoint verdict for one wallet.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimStatus {
    /// The endpoint knows this wallet and its rank is positive.
    Eligible(UserInfo),
    /// Non-200 answer, or a rank of 0 or below.
    NoAllocation { address: String },
}

/// One wallet's result within a batch, in input order.
#[derive(Debug)]
pub struct WalletOutcome {
    /// Position of the key in the input sequence.
    pub index: usize,
    /// Derived address, if the key parsed far enough to have one.
    pub address: Option<String>,
    pub result: ClaimResult<ClaimStatus>,
}

// =============================================================================
// RUNNER
// =============================================================================

/// Check a single wallet: parse, sign, query.
///
/// Returns the derived address (when the key was at least parseable) together
/// with the result, so failures are still attributable to a wallet.
pub async fn check_wallet<T>(key: &str, transport: &T) -> (Option<String>, ClaimResult<ClaimStatus>)
where
    T: ClaimTransport + ?Sized,
{
    let signer = match EvmSigner::from_hex(key) {
        Ok(signer) => signer,
        Err(e) => return (None, Err(e)),
    };
    let address = signer.address_hex().to_string();

    let message = claim_message(&address);
    let signature = match signer.sign_personal(message.as_bytes()) {
        Ok(signature) => signature,
        Err(e) => return (Some(address), Err(e)),
    };

    match transport.check_claim(&signature, &address).await {
        Ok(Some(info)) if info.is_eligible() => (Some(address), Ok(ClaimStatus::Eligible(info))),
        Ok(_) => (
            Some(address.clone()),
            Ok(ClaimStatus::NoAllocation { address }),
        ),
        Err(e) => (Some(address), Err(e)),
    }
}

/// Run the claim check over an ordered sequence of private-key strings.
///
/// Every processed key yields exactly one [`WalletOutcome`], notified as it
/// is produced and collected in input order. Under
/// [`FailurePolicy::Abort`] the batch stops after the first failed wallet
/// (its outcome is still recorded); under [`FailurePolicy::Skip`] the batch
/// always runs to the end.
pub async fn run_claim_batch<T, N>(
    keys: &[String],
    transport: &T,
    notifier: &N,
    policy: FailurePolicy,
) -> Vec<WalletOutcome>
where
    T: ClaimTransport + ?Sized,
    N: ClaimNotifier + ?Sized,
{
    let mut outcomes = Vec::with_capacity(keys.len());

    for (index, key) in keys.iter().enumerate() {
        let (address, result) = check_wallet(key, transport).await;
        let outcome = WalletOutcome {
            index,
            address,
            result,
        };

        notifier.notify(&outcome);

        let failed = outcome.result.is_err();
        outcomes.push(outcome);

        if failed && policy == FailurePolicy::Abort {
            break;
        }
    }

    outcomes
}

// =============================================================================
// TESTS
// =============================================================================
