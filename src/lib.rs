//! Geographic point clustering under a maximum-distance constraint
//!
//! Two greedy strategies group (latitude, longitude) points so that no
//! cluster exceeds a threshold `D` in kilometers of great-circle distance:
//!
//! - [`cluster_by_center_radius`]: every member within `D` of the cluster's seed point
//! - [`cluster_by_diameter`]: every pair of members within `D` of each other
//!
//! Results can be re-checked from scratch with the validators and summarized
//! with [`compute_cluster_statistics`].
//!
//! ```
//! use geocluster::{DEFAULT_TOLERANCE, Point, cluster_by_center_radius,
//!     validate_center_radius_constraint};
//!
//! let points = [Point::new(37.7749, -122.4194), Point::new(37.8044, -122.2712)];
//! let result = cluster_by_center_radius(&points, 30.0)?;
//! assert_eq!(result.count, 1);
//!
//! let report = validate_center_radius_constraint(
//!     &points, &result.labels, &result.centers, 30.0, DEFAULT_TOLERANCE);
//! assert!(report.is_valid());
//! # Ok::<(), geocluster::ClusterError>(())
//! ```

pub mod cluster;

pub use cluster::{
    ClusterError, ClusterStatistics, ClusterStats, Clustering, DEFAULT_TOLERANCE, DistanceMatrix,
    Method, Point, PointList, ValidationReport, Violation, cluster_by_center_radius,
    cluster_by_diameter, compute_cluster_statistics, haversine_distance,
    haversine_distance_matrix, validate_center_radius_constraint, validate_diameter_constraint,
};
