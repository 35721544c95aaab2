use crate::core::geo::Coordinate;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers
///
/// Uses the haversine formula against a fixed spherical Earth radius. Error
/// against a full ellipsoidal model stays under 0.5%, which is plenty for
/// ground-transport radius filtering.
///
/// The intermediate haversine term is clamped to [0, 1] so floating-point
/// round-off on identical or antipodal points can never push `sqrt` out of
/// its domain, and the `atan2` form (rather than `asin`) stays well-behaved
/// near the antipode.
#[inline]
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1_rad = a.latitude().to_radians();
    let lat2_rad = b.latitude().to_radians();
    let delta_lat = (b.latitude() - a.latitude()).to_radians();
    let delta_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_identical_points_are_zero() {
        let nyc = coord(40.7128, -74.0060);
        assert_eq!(haversine_km(&nyc, &nyc), 0.0);
    }

    #[test]
    fn test_london_to_paris() {
        // London to Paris is approximately 344 km
        let london = coord(51.5074, -0.1278);
        let paris = coord(48.8566, 2.3522);

        let distance = haversine_km(&london, &paris);
        assert!(
            (distance - 344.0).abs() < 10.0,
            "Distance should be ~344km, got {}",
            distance
        );
    }

    #[test]
    fn test_nairobi_to_mombasa() {
        // Nairobi to Mombasa is approximately 440 km
        let nairobi = coord(-1.2921, 36.8219);
        let mombasa = coord(-4.0435, 39.6682);

        let distance = haversine_km(&nairobi, &mombasa);
        assert!(
            (distance - 440.0).abs() < 5.0,
            "Distance should be ~440km, got {}",
            distance
        );
    }

    #[test]
    fn test_symmetry() {
        let a = coord(40.7128, -74.0060);
        let b = coord(-4.0435, 39.6682);

        let ab = haversine_km(&a, &b);
        let ba = haversine_km(&b, &a);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_poles_produce_no_nan() {
        let north = coord(90.0, 0.0);
        let south = coord(-90.0, 0.0);
        let equator = coord(0.0, 35.0);

        for (a, b) in [(&north, &south), (&north, &equator), (&north, &north)] {
            let d = haversine_km(a, b);
            assert!(d.is_finite(), "expected finite distance, got {}", d);
            assert!(d >= 0.0);
        }

        // Pole to pole is half the Earth's circumference
        let pole_to_pole = haversine_km(&north, &south);
        assert!((pole_to_pole - std::f64::consts::PI * 6371.0).abs() < 1.0);
    }

    #[test]
    fn test_antipodal_points() {
        let a = coord(0.0, 0.0);
        let b = coord(0.0, 180.0);

        let d = haversine_km(&a, &b);
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * 6371.0).abs() < 1.0);
    }
}
