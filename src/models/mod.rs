// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{MatchResult, ProviderCandidate, SearchRequest};
pub use requests::FindNearbyRequest;
pub use responses::{ErrorResponse, HealthResponse, NearbyResponse};
