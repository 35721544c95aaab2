//! Mover Match - proximity-based mover discovery service
//!
//! This library implements the location matching core used by the moving
//! marketplace: a point-text coordinate codec, a haversine distance engine,
//! and a proximity matcher that turns an origin, a radius and optional
//! vehicle-type filters into a deterministic, distance-ordered list of
//! candidate movers fetched from an external spatial query backend.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{haversine_km, Coordinate, GeoError, MatchError, ProximityMatcher, SpatialQuery};
pub use crate::models::{FindNearbyRequest, MatchResult, NearbyResponse, ProviderCandidate, SearchRequest};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let nairobi = Coordinate::new(-1.2921, 36.8219).unwrap();
        assert_eq!(haversine_km(&nairobi, &nairobi), 0.0);
    }
}
