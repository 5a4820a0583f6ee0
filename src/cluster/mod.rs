//! Distance-bounded clustering of (lat, lon) points by Haversine distance
pub mod center_radius;
pub mod diameter;
pub mod distance;
pub mod error;
pub mod kdtree;
pub mod method;
pub mod point;
pub mod stats;
pub mod validate;

#[cfg(test)]
mod distance_test;
#[cfg(test)]
mod stats_test;
#[cfg(test)]
mod validate_test;

pub use center_radius::cluster_by_center_radius;
pub use diameter::{MATRIX_POINT_LIMIT, cluster_by_diameter};
pub use distance::{
    DEGREE_RAD, DistanceMatrix, EARTH_R, haversine_distance, haversine_distance_matrix,
};
pub use error::ClusterError;
pub use kdtree::{KDTree, new_kd_tree};
pub use method::Method;
pub use point::{Clustering, Point, PointList, centroid};
pub use stats::{ClusterStatistics, ClusterStats, compute_cluster_statistics};
pub use validate::{
    DEFAULT_TOLERANCE, ValidationReport, Violation, validate_center_radius_constraint,
    validate_diameter_constraint,
};
