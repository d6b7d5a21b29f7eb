// claim-core/src/network/client.rs
//
// Claim Endpoint HTTP Client

use crate::error::ClaimResult;
use crate::network::models::{ClaimRequest, ClaimResponse, UserInfo};
use crate::network::traits::ClaimTransport;
use async_trait::async_trait;
use std::time::Duration;

/// Configuration for a [`ClaimClient`].
#[derive(Debug, Clone)]
pub struct ClaimConfig {
    /// Full URL of the authenticate endpoint.
    pub endpoint_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClaimConfig {
    fn default() -> Self {
        Self {
            endpoint_url: "https://claim.frame-api.xyz/authenticate".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the Frame claim-checking endpoint.
#[derive(Debug, Clone)]
pub struct ClaimClient {
    /// Client configuration.
    config: ClaimConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl ClaimClient {
    /// Create a new claim client with the given configuration.
    pub fn new(config: ClaimConfig) -> ClaimResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    /// POST a (signature, address) pair and parse the allocation record.
    ///
    /// A non-200 status is not an error at this layer: the endpoint answers
    /// that way for wallets it does not know, and the caller treats it as
    /// "no allocation". Transport and decode failures still propagate.
    pub async fn check_claim(
        &self,
        signature: &str,
        address: &str,
    ) -> ClaimResult<Option<UserInfo>> {
        let body = ClaimRequest {
            signature: signature.to_string(),
            address: address.to_string(),
        };

        let resp = self
            .client
            .post(&self.config.endpoint_url)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Ok(None);
        }

        let parsed: ClaimResponse = resp.json().await?;
        Ok(Some(parsed.user_info))
    }
}

#[async_trait]
impl ClaimTransport for ClaimClient {
    async fn check_claim(&self, signature: &str, address: &str) -> ClaimResult<Option<UserInfo>> {
        ClaimClient::check_claim(self, signature, address).await
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(server_url: &str) -> ClaimConfig {
        ClaimConfig {
            endpoint_url: format!("{}/authenticate", server_url),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_default_config_points_at_frame_api() {
        let config = ClaimConfig::default();
        assert_eq!(
            config.endpoint_url,
            "https://claim.frame-api.xyz/authenticate"
        );
    }

    #[tokio::test]
    async fn test_check_claim_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/authenticate"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "signature": "0xsig",
                "address": "0xaddr"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "userInfo": {
                    "address": "0xaddr",
                    "hasClaimedPoints": true,
                    "tradesMade": 7,
                    "volumeTraded": "3.25",
                    "royaltiesPaid": "0.1",
                    "topPercent": 4.2,
                    "rank": 950,
                    "totalAllocation": 1200
                }
            })))
            .mount(&server)
            .await;

        let client = ClaimClient::new(test_config(&server.uri())).unwrap();
        let info = client.check_claim("0xsig", "0xaddr").await.unwrap().unwrap();

        assert_eq!(info.address, "0xaddr");
        assert!(info.has_claimed_points);
        assert_eq!(info.rank, 950);
        assert_eq!(info.total_allocation, 1200);
    }

    #[tokio::test]
    async fn test_check_claim_non_200_means_no_allocation() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/authenticate"))
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .mount(&server)
            .await;

        let client = ClaimClient::new(test_config(&server.uri())).unwrap();
        let result = client.check_claim("0xsig", "0xaddr").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_check_claim_malformed_body_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/authenticate"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = ClaimClient::new(test_config(&server.uri())).unwrap();
        assert!(client.check_claim("0xsig", "0xaddr").await.is_err());
    }
}
