use std::fmt;

use thiserror::Error;

/// Errors produced by coordinate construction and point-text parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("latitude {0} out of range [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} out of range [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("malformed point text: {0:?}")]
    MalformedPoint(String),
}

/// A validated geographic coordinate
///
/// Fields are private so a `Coordinate` can only be obtained through
/// [`Coordinate::new`] or [`Coordinate::parse_point`], both of which enforce
/// the latitude/longitude ranges. Out-of-range input is a construction error,
/// never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, validating ranges
    ///
    /// Latitude must be within [-90, 90] and longitude within [-180, 180].
    /// Non-finite values (NaN, infinities) are rejected by the same checks.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::LongitudeOutOfRange(longitude));
        }
        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Serialize to `POINT(<longitude> <latitude>)` text
    ///
    /// Longitude comes first, matching the well-known-text convention used by
    /// the spatial backend. This is the reverse of the natural
    /// latitude-then-longitude field order and must stay that way.
    pub fn to_point_text(&self) -> String {
        format!("POINT({} {})", self.longitude, self.latitude)
    }

    /// Parse `POINT(<longitude> <latitude>)` text
    ///
    /// Strict inverse of [`Coordinate::to_point_text`]: only the exact
    /// `POINT(<number> <number>)` shape is accepted, and both numbers go
    /// through the same range validation as [`Coordinate::new`], so
    /// `parse_point(c.to_point_text()) == c` for every valid coordinate.
    pub fn parse_point(text: &str) -> Result<Self, GeoError> {
        let malformed = || GeoError::MalformedPoint(text.to_string());

        let inner = text
            .strip_prefix("POINT(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(malformed)?;

        let mut parts = inner.split(' ').filter(|p| !p.is_empty());
        let lon_text = parts.next().ok_or_else(malformed)?;
        let lat_text = parts.next().ok_or_else(malformed)?;
        if parts.next().is_some() {
            return Err(malformed());
        }

        let longitude: f64 = lon_text.parse().map_err(|_| malformed())?;
        let latitude: f64 = lat_text.parse().map_err(|_| malformed())?;
        if !longitude.is_finite() || !latitude.is_finite() {
            return Err(malformed());
        }

        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
