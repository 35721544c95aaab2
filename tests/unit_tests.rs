// Unit tests for Mover Match core primitives

use mover_match::core::{haversine_km, Coordinate, GeoError};

#[test]
fn test_haversine_distance_zero() {
    let nyc = Coordinate::new(40.7128, -74.0060).unwrap();
    assert_eq!(haversine_km(&nyc, &nyc), 0.0);
}

#[test]
fn test_haversine_distance_manhattan_to_brooklyn() {
    // Manhattan to Brooklyn is approximately 5-10 km
    let manhattan = Coordinate::new(40.7580, -73.9855).unwrap();
    let brooklyn = Coordinate::new(40.6782, -73.9442).unwrap();

    let distance = haversine_km(&manhattan, &brooklyn);
    assert!(distance > 5.0 && distance < 15.0);
}

#[test]
fn test_haversine_nairobi_to_mombasa() {
    let nairobi = Coordinate::new(-1.2921, 36.8219).unwrap();
    let mombasa = Coordinate::new(-4.0435, 39.6682).unwrap();

    let distance = haversine_km(&nairobi, &mombasa);
    assert!(
        (distance - 440.0).abs() < 5.0,
        "Nairobi-Mombasa should be ~440km, got {}",
        distance
    );
}

#[test]
fn test_haversine_symmetry_and_non_negativity() {
    let points = [
        Coordinate::new(0.0, 0.0).unwrap(),
        Coordinate::new(90.0, 0.0).unwrap(),
        Coordinate::new(-90.0, 0.0).unwrap(),
        Coordinate::new(0.0, 180.0).unwrap(),
        Coordinate::new(-1.2921, 36.8219).unwrap(),
        Coordinate::new(51.5074, -0.1278).unwrap(),
    ];

    for a in &points {
        for b in &points {
            let ab = haversine_km(a, b);
            let ba = haversine_km(b, a);
            assert!(ab.is_finite(), "{} -> {} produced {}", a, b, ab);
            assert!(ab >= 0.0);
            assert!((ab - ba).abs() < 1e-9, "asymmetric: {} vs {}", ab, ba);
        }
    }
}

#[test]
fn test_point_text_round_trip() {
    let coords = [
        (40.7128, -74.0060),
        (-1.2921, 36.8219),
        (0.0, 0.0),
        (-90.0, 180.0),
        (89.999999, -179.999999),
    ];

    for (lat, lon) in coords {
        let c = Coordinate::new(lat, lon).unwrap();
        let parsed = Coordinate::parse_point(&c.to_point_text()).unwrap();
        assert!((parsed.latitude() - lat).abs() < 1e-9);
        assert!((parsed.longitude() - lon).abs() < 1e-9);
    }
}

#[test]
fn test_parse_rejections() {
    assert!(Coordinate::parse_point("not a point").is_err());
    assert!(Coordinate::parse_point("").is_err());
    assert_eq!(
        Coordinate::parse_point("POINT(200 10)"),
        Err(GeoError::LongitudeOutOfRange(200.0))
    );
}

#[test]
fn test_construction_rejects_out_of_range() {
    assert!(Coordinate::new(91.0, 0.0).is_err());
    assert!(Coordinate::new(-91.0, 0.0).is_err());
    assert!(Coordinate::new(0.0, 181.0).is_err());
    assert!(Coordinate::new(0.0, -181.0).is_err());
}
