use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::matcher::SpatialQuery;
use crate::models::ProviderCandidate;

/// Errors that can occur when calling the spatial query backend
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    Api(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// RPC body for the nearby-movers procedure
#[derive(Debug, Serialize)]
struct NearbyRpcParams<'a> {
    location: &'a str,
    radius_km: f64,
    min_rating: f64,
}

/// HTTP client for the spatial query backend
///
/// The backend exposes a single remote procedure taking a point-text
/// location, a radius and a minimum rating, and returns provider documents
/// already filtered to the radius and rating server-side. Its radius filter
/// may be approximate but is inclusive; exact distances are recomputed by
/// the matching core.
#[derive(Debug, Clone)]
pub struct SpatialClient {
    base_url: String,
    api_key: String,
    rpc_name: String,
    client: Client,
}

impl SpatialClient {
    pub fn new(base_url: String, api_key: String, rpc_name: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            rpc_name,
            client,
        }
    }

    /// Call the nearby-movers RPC and decode the candidate documents
    async fn call_nearby_rpc(
        &self,
        location: &str,
        radius_km: f64,
        min_rating: f64,
    ) -> Result<Vec<ProviderCandidate>, SpatialError> {
        let url = format!(
            "{}/rpc/{}",
            self.base_url.trim_end_matches('/'),
            self.rpc_name
        );

        tracing::debug!("Querying spatial backend: {} (radius {}km)", url, radius_km);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .json(&NearbyRpcParams {
                location,
                radius_km,
                min_rating,
            })
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(SpatialError::Unauthorized);
            }
            status => {
                return Err(SpatialError::Api(format!(
                    "Spatial query failed: {}",
                    status
                )));
            }
        }

        let json: Value = response.json().await?;

        let documents = json
            .as_array()
            .ok_or_else(|| SpatialError::InvalidResponse("Expected a JSON array".into()))?;

        // Tolerant decode: a single malformed document should not fail the
        // whole search, it is logged and skipped.
        let candidates: Vec<ProviderCandidate> = documents
            .iter()
            .filter_map(|doc| match serde_json::from_value(doc.clone()) {
                Ok(candidate) => Some(candidate),
                Err(e) => {
                    tracing::warn!("Skipping malformed provider document: {}", e);
                    None
                }
            })
            .collect();

        tracing::debug!(
            "Spatial backend returned {} candidates ({} documents)",
            candidates.len(),
            documents.len()
        );

        Ok(candidates)
    }
}

impl SpatialQuery for SpatialClient {
    async fn query_within(
        &self,
        location: &str,
        radius_km: f64,
        min_rating: f64,
    ) -> Result<Vec<ProviderCandidate>, SpatialError> {
        self.call_nearby_rpc(location, radius_km, min_rating).await
    }
}
