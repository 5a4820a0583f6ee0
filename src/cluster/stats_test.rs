#[cfg(test)]
mod tests {
    use crate::cluster::{
        ClusterStatistics, Point, cluster_by_center_radius, cluster_by_diameter,
        compute_cluster_statistics,
    };

    #[test]
    fn test_basic_statistics() {
        let points = vec![
            Point::new(37.7749, -122.4194),
            Point::new(37.7849, -122.4094),
            Point::new(37.7649, -122.4294),
        ];
        let centers = vec![Point::new(37.7799, -122.4144), Point::new(37.7649, -122.4294)];
        let stats = compute_cluster_statistics(&points, &[0, 0, 1], &centers);

        assert_eq!(stats.cluster_count, 2);
        assert_eq!(stats.cluster_sizes(), vec![2, 1]);
        assert_eq!(stats.mean_cluster_size, 1.5);
        assert_eq!(stats.max_cluster_size, 2);
        assert_eq!(stats.min_cluster_size, 1);

        let pair = points[0].distance_to(&points[1]);
        assert!((stats.clusters[0].max_diameter - pair).abs() < 1e-12);
        assert!((stats.clusters[0].max_radius - pair / 2.0).abs() < 0.01);
        assert_eq!(stats.clusters[1].max_radius, 0.0);
        assert_eq!(stats.clusters[1].max_diameter, 0.0);
        assert_eq!(stats.max_diameter_overall, stats.clusters[0].max_diameter);
        assert_eq!(stats.max_radius_overall, stats.clusters[0].max_radius);
    }

    #[test]
    fn test_radius_uses_given_centers() {
        let points = vec![
            Point::new(37.0, -122.0),
            Point::new(37.072, -122.0),
            Point::new(36.928, -122.0),
        ];

        let center = cluster_by_center_radius(&points, 10.0).unwrap();
        let stats = compute_cluster_statistics(&points, &center.labels, &center.centers);
        // Seed is in the middle, the diameter is twice the radius
        assert_eq!(stats.cluster_count, 1);
        assert!(stats.max_radius_overall <= 10.0);
        assert!(stats.max_diameter_overall > 10.0);

        let diameter = cluster_by_diameter(&points, 10.0).unwrap();
        let stats = compute_cluster_statistics(&points, &diameter.labels, &diameter.centers);
        assert_eq!(stats.cluster_sizes(), vec![2, 1]);
        assert!(stats.max_diameter_overall <= 10.0);
        // Centroid of the first cluster sits halfway between its members
        let half = points[0].distance_to(&points[1]) / 2.0;
        assert!((stats.clusters[0].max_radius - half).abs() < 0.01);
    }

    #[test]
    fn test_empty_and_orphan_labels() {
        assert_eq!(
            compute_cluster_statistics(&[], &[], &[]),
            ClusterStatistics::default()
        );

        // Label 5 has no center and is skipped; center 1 has no members
        let points = vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0)];
        let centers = vec![points[0], points[1]];
        let stats = compute_cluster_statistics(&points, &[0, 5], &centers);
        assert_eq!(stats.cluster_sizes(), vec![1, 0]);
        assert_eq!(stats.min_cluster_size, 0);
        assert_eq!(stats.mean_cluster_size, 0.5);
    }
}
