// claim-core/src/network/mod.rs
//
// Network Module - Claim Endpoint Boundary
//
// Provides:
// - Models for the authenticate request/response wire format
// - Capability traits the batch runner depends on
// - The reqwest client implementing the real transport

pub mod client;
pub mod models;
pub mod traits;

// Re-export for convenience
pub use client::{ClaimClient, ClaimConfig};
pub use models::{ClaimRequest, ClaimResponse, UserInfo};
pub use traits::{ClaimNotifier, ClaimTransport, NullNotifier};
