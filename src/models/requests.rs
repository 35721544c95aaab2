use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to find nearby movers
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindNearbyRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    // Positivity is enforced by the matching core so the check cannot be
    // bypassed by other transports.
    #[serde(alias = "radius_km", rename = "radiusKm")]
    pub radius_km: f64,
    #[serde(default)]
    #[serde(alias = "vehicle_types", rename = "vehicleTypes")]
    pub vehicle_types: Vec<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}
