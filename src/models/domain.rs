use serde::{Deserialize, Serialize};

use crate::core::geo::Coordinate;

/// Provider record as returned by the spatial query backend
///
/// The backend owns these records; this service never mutates them. The
/// `location` field carries `POINT(<longitude> <latitude>)` text and is
/// decoded on demand by the matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderCandidate {
    #[serde(rename = "providerId", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(rename = "vehicleTypes", default)]
    pub vehicle_types: Vec<String>,
}

/// A nearby-search request as seen by the matching core
///
/// `origin` is always caller-supplied; device geolocation is resolved before
/// a request reaches this service. An empty `vehicle_types` list means no
/// category filtering.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub origin: Coordinate,
    pub radius_km: f64,
    pub vehicle_types: Vec<String>,
}

/// A candidate paired with its recomputed distance from the search origin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub candidate: ProviderCandidate,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
}
