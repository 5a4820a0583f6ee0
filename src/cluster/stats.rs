use super::point::Point;

/// Descriptive metrics of one cluster
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClusterStats {
    /// Number of member points
    pub size: usize,
    /// Largest distance from a member to the cluster's center, in km
    pub max_radius: f64,
    /// Largest distance between two members, in km
    pub max_diameter: f64,
}

/// Per-cluster and aggregate metrics of a clustering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterStatistics {
    /// One entry per center, indexed by cluster ID
    pub clusters: Vec<ClusterStats>,
    pub cluster_count: usize,
    pub mean_cluster_size: f64,
    pub max_cluster_size: usize,
    pub min_cluster_size: usize,
    pub max_radius_overall: f64,
    pub max_diameter_overall: f64,
}

impl ClusterStatistics {
    pub fn cluster_sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(|c| c.size).collect()
    }
}

/// Computes size, radius and diameter metrics for a clustering
///
/// Radius is measured from the center passed in for each cluster: the seed
/// for center-radius results, the centroid for diameter results. Labels with
/// no matching center are ignored. Constraints are not checked here.
pub fn compute_cluster_statistics(
    points: &[Point],
    labels: &[usize],
    centers: &[Point],
) -> ClusterStatistics {
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); centers.len()];
    for (i, &label) in labels.iter().enumerate().take(points.len()) {
        if let Some(m) = members.get_mut(label) {
            m.push(i);
        }
    }

    let clusters: Vec<ClusterStats> = members
        .iter()
        .zip(centers)
        .map(|(m, center)| {
            let max_radius = m
                .iter()
                .map(|&i| points[i].distance_to(center))
                .fold(0.0, f64::max);
            let mut max_diameter = 0.0_f64;
            for (a, &i) in m.iter().enumerate() {
                for &j in &m[a + 1..] {
                    max_diameter = max_diameter.max(points[i].distance_to(&points[j]));
                }
            }
            ClusterStats {
                size: m.len(),
                max_radius,
                max_diameter,
            }
        })
        .collect();

    if clusters.is_empty() {
        return ClusterStatistics::default();
    }

    let total: usize = clusters.iter().map(|c| c.size).sum();
    ClusterStatistics {
        cluster_count: clusters.len(),
        mean_cluster_size: total as f64 / clusters.len() as f64,
        max_cluster_size: clusters.iter().map(|c| c.size).max().unwrap_or(0),
        min_cluster_size: clusters.iter().map(|c| c.size).min().unwrap_or(0),
        max_radius_overall: clusters.iter().map(|c| c.max_radius).fold(0.0, f64::max),
        max_diameter_overall: clusters.iter().map(|c| c.max_diameter).fold(0.0, f64::max),
        clusters,
    }
}
