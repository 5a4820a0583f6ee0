#[cfg(test)]
mod tests {
    use crate::cluster::{
        DEFAULT_TOLERANCE, Point, Violation, validate_center_radius_constraint,
        validate_diameter_constraint,
    };

    fn close_pair() -> Vec<Point> {
        vec![Point::new(37.7749, -122.4194), Point::new(37.7849, -122.4094)]
    }

    fn far_pair() -> Vec<Point> {
        // About 111 km apart
        vec![Point::new(37.7749, -122.4194), Point::new(38.7749, -122.4194)]
    }

    #[test]
    fn test_valid_center_radius() {
        let points = close_pair();
        let centers = vec![Point::new(37.7799, -122.4144)];
        let report =
            validate_center_radius_constraint(&points, &[0, 0], &centers, 20.0, DEFAULT_TOLERANCE);

        assert!(report.is_valid());
        assert!(report.messages().is_empty());
        assert_eq!(report.into_parts(), (true, Vec::new()));
    }

    #[test]
    fn test_invalid_center_radius() {
        let points = far_pair();
        let centers = vec![points[0]];
        let report =
            validate_center_radius_constraint(&points, &[0, 0], &centers, 50.0, DEFAULT_TOLERANCE);

        assert!(!report.is_valid());
        assert_eq!(report.violations().len(), 1);
        match &report.violations()[0] {
            Violation::OutsideRadius {
                cluster,
                point,
                distance,
                d,
            } => {
                assert_eq!((*cluster, *point), (0, 1));
                assert!((distance - 111.195).abs() < 0.01);
                assert_eq!(*d, 50.0);
            }
            other => panic!("unexpected violation {other:?}"),
        }
        assert_eq!(
            report.messages(),
            vec!["Cluster 0, point 1: distance 111.195 km > D=50 km".to_string()]
        );
    }

    #[test]
    fn test_tolerance_is_applied() {
        let points = close_pair();
        let d = points[0].distance_to(&points[1]);
        let centers = vec![points[0]];

        let report =
            validate_center_radius_constraint(&points, &[0, 0], &centers, d - 1e-7, 1e-6);
        assert!(report.is_valid());
        let report = validate_center_radius_constraint(&points, &[0, 0], &centers, d - 1e-3, 1e-6);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_malformed_labels_are_reported() {
        let points = close_pair();
        let centers = vec![points[0]];

        let report =
            validate_center_radius_constraint(&points, &[0, 3], &centers, 20.0, DEFAULT_TOLERANCE);
        assert_eq!(
            report.violations(),
            &[Violation::MissingCenter {
                cluster: 3,
                point: 1
            }]
        );

        let report =
            validate_center_radius_constraint(&points, &[0], &centers, 20.0, DEFAULT_TOLERANCE);
        assert_eq!(
            report.violations(),
            &[Violation::LabelCountMismatch {
                labels: 1,
                points: 2
            }]
        );

        let report = validate_diameter_constraint(&points, &[0, 0, 0], 20.0, DEFAULT_TOLERANCE);
        assert!(!report.is_valid());
        assert_eq!(report.messages(), vec!["3 labels given for 2 points".to_string()]);
    }

    #[test]
    fn test_valid_diameter() {
        let report = validate_diameter_constraint(&close_pair(), &[0, 0], 20.0, DEFAULT_TOLERANCE);
        assert!(report.is_valid());
    }

    #[test]
    fn test_invalid_diameter() {
        let report = validate_diameter_constraint(&far_pair(), &[0, 0], 50.0, DEFAULT_TOLERANCE);

        assert!(!report.is_valid());
        assert_eq!(
            report.messages(),
            vec!["Cluster 0, points 0-1: distance 111.195 km > D=50 km".to_string()]
        );
    }

    #[test]
    fn test_diameter_collects_every_pair() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(50.0, 50.0),
        ];
        // Every pair in cluster 0 is more than 100 km apart; cluster 1 is a singleton
        let report = validate_diameter_constraint(&points, &[0, 0, 0, 1], 100.0, DEFAULT_TOLERANCE);

        let pairs: Vec<(usize, usize)> = report
            .violations()
            .iter()
            .filter_map(|v| match v {
                Violation::PairTooFar { first, second, .. } => Some((*first, *second)),
                _ => None,
            })
            .collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_separate_clusters_are_not_compared() {
        let report = validate_diameter_constraint(&far_pair(), &[0, 1], 50.0, DEFAULT_TOLERANCE);
        assert!(report.is_valid());
    }
}
