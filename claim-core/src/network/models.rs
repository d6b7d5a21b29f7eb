// claim-core/src/network/models.rs
//
// Claim Endpoint Data Models
//
// All structs are:
// - Serialize/Deserialize friendly (JSON wire format, camelCase field names)
// - Free of chain-specific types (addresses travel as plain strings)
// - Clone + Debug for flexibility

use serde::{Deserialize, Serialize};

// =============================================================================
// REQUEST
// =============================================================================

/// Body of the authenticate POST:
/// `{"signature": "<0x hex>", "address": "<0x lowercase hex>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimRequest {
    /// 65-byte recoverable signature, `0x`-prefixed lowercase hex.
    pub signature: String,
    /// Account address, `0x`-prefixed lowercase hex.
    pub address: String,
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Top-level response envelope: `{"userInfo": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub user_info: UserInfo,
}

/// Per-wallet allocation record returned by the claim endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Wallet address as the endpoint renders it.
    pub address: String,
    /// Whether the allocation has already been claimed.
    pub has_claimed_points: bool,
    /// Number of trades counted towards eligibility.
    pub trades_made: i64,
    /// Traded volume (decimal string, endpoint-formatted).
    pub volume_traded: String,
    /// Royalties paid (decimal string, endpoint-formatted).
    pub royalties_paid: String,
    /// Percentile bracket, e.g. 1.5 = top 1.5%.
    pub top_percent: f64,
    /// Leaderboard rank; 0 or below means no allocation.
    pub rank: i64,
    /// Token allocation for this wallet.
    pub total_allocation: i64,
}

impl UserInfo {
    /// A rank of 0 (or below) means the wallet has no allocation.
    #[inline]
    pub fn is_eligible(&self) -> bool {
        self.rank > 0
    }
}

// =============================================================================
// TESTS
// =============================================================================
