#[cfg(test)]
mod tests {
    use crate::cluster::Point;
    use crate::cluster::distance::{
        EARTH_R, chord_for_distance, haversine_distance, haversine_distance_matrix,
    };
    use quickcheck::quickcheck;

    #[test]
    fn test_same_location() {
        let dist = haversine_distance(37.7749, -122.4194, 37.7749, -122.4194);
        assert!(dist.abs() < 1e-10);
    }

    #[test]
    fn test_known_distances() {
        let sf_la = haversine_distance(37.7749, -122.4194, 34.0522, -118.2437);
        assert!((sf_la - 559.0).abs() < 10.0, "SF-LA was {sf_la}");

        let ny_london = haversine_distance(40.7128, -74.0060, 51.5074, -0.1278);
        assert!((ny_london - 5570.0).abs() < 50.0, "NY-London was {ny_london}");
    }

    #[test]
    fn test_small_distance() {
        let dist = haversine_distance(37.7749, -122.4194, 37.7849, -122.4294);
        assert!(1.0 < dist && dist < 2.0);
    }

    #[test]
    fn test_antipodal_points() {
        let dist = haversine_distance(0.0, 0.0, 0.0, 180.0);
        assert!((dist - EARTH_R * std::f64::consts::PI).abs() < 1e-6);
        assert!(!dist.is_nan());
    }

    #[test]
    fn test_distance_matrix() {
        let points = vec![
            Point::new(37.7749, -122.4194),
            Point::new(34.0522, -118.2437),
            Point::new(40.7128, -74.0060),
        ];
        let matrix = haversine_distance_matrix(&points);

        assert_eq!(matrix.len(), 3);
        for i in 0..3 {
            assert_eq!(matrix.get(i, i), 0.0);
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
                assert_eq!(matrix.get(i, j), matrix.row(i)[j]);
            }
        }
        assert_eq!(matrix.get(0, 1), points[0].distance_to(&points[1]));
        assert!(haversine_distance_matrix(&[]).is_empty());
    }

    #[test]
    fn test_chord_matches_unit_vectors() {
        let a = Point::new(37.7749, -122.4194);
        let b = Point::new(34.0522, -118.2437);
        let (va, vb) = (a.to_unit_vector(), b.to_unit_vector());
        let chord = (0..3).map(|i| (va[i] - vb[i]).powi(2)).sum::<f64>().sqrt();

        assert!((chord - chord_for_distance(a.distance_to(&b))).abs() < 1e-12);
        assert_eq!(chord_for_distance(0.0), 0.0);
        assert_eq!(chord_for_distance(1e9), 2.0);
    }

    // Maps arbitrary integers onto valid coordinates
    fn coord(raw: i32, limit: f64) -> f64 {
        (raw % 1_000_000) as f64 / 1_000_000.0 * limit
    }

    #[test]
    fn prop_symmetry() {
        fn prop(a: i32, b: i32, c: i32, d: i32) -> bool {
            let (lat1, lon1) = (coord(a, 90.0), coord(b, 180.0));
            let (lat2, lon2) = (coord(c, 90.0), coord(d, 180.0));
            let forward = haversine_distance(lat1, lon1, lat2, lon2);
            let backward = haversine_distance(lat2, lon2, lat1, lon1);
            (forward - backward).abs() < 1e-9
        }
        quickcheck(prop as fn(i32, i32, i32, i32) -> bool);
    }

    #[test]
    fn prop_identity() {
        fn prop(a: i32, b: i32) -> bool {
            let (lat, lon) = (coord(a, 90.0), coord(b, 180.0));
            haversine_distance(lat, lon, lat, lon).abs() < 1e-10
        }
        quickcheck(prop as fn(i32, i32) -> bool);
    }
}
