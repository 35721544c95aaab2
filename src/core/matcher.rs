use std::cmp::Ordering;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::time::timeout;

use crate::core::distance::haversine_km;
use crate::core::geo::{Coordinate, GeoError};
use crate::models::{MatchResult, ProviderCandidate, SearchRequest};
use crate::services::SpatialError;

/// Errors surfaced by [`ProximityMatcher::find_nearby`]
#[derive(Debug, Error)]
pub enum MatchError {
    /// Caller bug: malformed coordinate or non-positive radius. Never retried.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Point text failed local validation before dispatch.
    #[error(transparent)]
    Parse(#[from] GeoError),

    /// The spatial backend call failed. Safe for the caller to retry with
    /// its own backoff; the matcher itself never retries.
    #[error("spatial query failed: {0}")]
    Unavailable(#[source] SpatialError),

    /// The query deadline expired before the backend answered. Distinct from
    /// `Unavailable` so callers can abandon quietly instead of alarming.
    #[error("nearby search cancelled: spatial query deadline expired")]
    Cancelled,
}

/// The spatial query seam
///
/// The backend performs the authoritative, index-accelerated radius and
/// minimum-rating pre-filter. Its radius semantics may be approximate (e.g.
/// a bounding-box pre-filter) but must be inclusive; the matcher recomputes
/// exact distances on its side.
pub trait SpatialQuery: Send + Sync {
    fn query_within(
        &self,
        location: &str,
        radius_km: f64,
        min_rating: f64,
    ) -> impl Future<Output = Result<Vec<ProviderCandidate>, SpatialError>> + Send;
}

/// Proximity-based mover discovery
///
/// Pipeline per request:
/// 1. Validate the radius (origin is validated by construction)
/// 2. Encode the origin and make the single backend round-trip
/// 3. Apply the vehicle-type allow-list client-side
/// 4. Recompute every candidate's distance with the haversine formula
/// 5. Sort ascending by distance, tie-break by provider id
///
/// A candidate whose recomputed distance slightly exceeds the radius is kept:
/// the backend's radius model is authoritative for inclusion, the recomputed
/// distance for display and ordering.
#[derive(Debug, Clone)]
pub struct ProximityMatcher<S> {
    spatial: S,
    min_rating: f64,
    query_timeout: Duration,
}

impl<S: SpatialQuery> ProximityMatcher<S> {
    pub fn new(spatial: S, min_rating: f64, query_timeout: Duration) -> Self {
        Self {
            spatial,
            min_rating,
            query_timeout,
        }
    }

    /// Find providers near the requested origin, ordered by distance
    ///
    /// An empty result is a valid success; errors are never masked as empty
    /// results.
    pub async fn find_nearby(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<MatchResult>, MatchError> {
        if !request.radius_km.is_finite() || request.radius_km <= 0.0 {
            return Err(MatchError::InvalidRequest(format!(
                "radius must be a positive number of kilometers, got {}",
                request.radius_km
            )));
        }

        let origin_text = request.origin.to_point_text();

        // Single suspend point: the backend round-trip, bounded by the
        // configured deadline.
        let candidates = match timeout(
            self.query_timeout,
            self.spatial
                .query_within(&origin_text, request.radius_km, self.min_rating),
        )
        .await
        {
            Ok(Ok(candidates)) => candidates,
            Ok(Err(e)) => return Err(MatchError::Unavailable(e)),
            Err(_) => return Err(MatchError::Cancelled),
        };

        let total_candidates = candidates.len();

        let mut matches: Vec<MatchResult> = candidates
            .into_iter()
            .filter(|candidate| matches_vehicle_filter(candidate, &request.vehicle_types))
            .filter_map(|candidate| {
                // The backend pre-filtered by radius, but its distance model
                // may differ from ours; recompute so the distance we show and
                // sort by is self-consistent.
                let location = match Coordinate::parse_point(&candidate.location) {
                    Ok(location) => location,
                    Err(e) => {
                        tracing::warn!(
                            "Dropping candidate {} with bad location {:?}: {}",
                            candidate.id,
                            candidate.location,
                            e
                        );
                        return None;
                    }
                };

                let distance_km = haversine_km(&request.origin, &location);
                Some(MatchResult {
                    candidate,
                    distance_km,
                })
            })
            .collect();

        // Ascending by distance, provider id as the tie-break so paginated
        // and repeated queries come back in the same order.
        matches.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.candidate.id.cmp(&b.candidate.id))
        });

        tracing::debug!(
            "Matched {} of {} candidates within {}km",
            matches.len(),
            total_candidates,
            request.radius_km
        );

        Ok(matches)
    }
}

/// Vehicle-type allow-list check
///
/// An empty filter keeps everything. With a filter active, a candidate is
/// kept only when its declared tags intersect the requested set; a candidate
/// with no declared tags is excluded, since missing data is not a wildcard.
#[inline]
fn matches_vehicle_filter(candidate: &ProviderCandidate, requested: &[String]) -> bool {
    if requested.is_empty() {
        return true;
    }
    candidate
        .vehicle_types
        .iter()
        .any(|tag| requested.contains(tag))
}
