// Core algorithm exports
pub mod distance;
pub mod geo;
pub mod matcher;

pub use distance::haversine_km;
pub use geo::{Coordinate, GeoError};
pub use matcher::{MatchError, ProximityMatcher, SpatialQuery};
