//! Points, point lists and clustering results

use super::distance::{DEGREE_RAD, haversine_distance};

/// Point represents a geographic coordinate (latitude, longitude)
///
/// The point is stored as [latitude, longitude] in decimal degrees where:
/// - `[0]` is latitude
/// - `[1]` is longitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(pub [f64; 2]);

/// PointList is a collection of Points
pub type PointList = Vec<Point>;

impl Point {
    /// Creates a point from latitude and longitude in decimal degrees
    pub const fn new(lat: f64, lon: f64) -> Self {
        Point([lat, lon])
    }

    pub fn lat(&self) -> f64 {
        self.0[0]
    }

    pub fn lon(&self) -> f64 {
        self.0[1]
    }

    /// Great-circle distance to another point in kilometers
    pub fn distance_to(&self, other: &Point) -> f64 {
        haversine_distance(self.lat(), self.lon(), other.lat(), other.lon())
    }

    /// Both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.0[0].is_finite() && self.0[1].is_finite()
    }

    /// Position on the unit sphere as `[x, y, z]`
    ///
    /// Chord length between two such vectors grows monotonically with the
    /// great-circle distance, which is what the KD-tree relies on.
    pub fn to_unit_vector(&self) -> [f64; 3] {
        let lat = self.lat() * DEGREE_RAD;
        let lon = self.lon() * DEGREE_RAD;
        [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
    }
}

/// Arithmetic mean of latitude and of longitude over the given point indices
///
/// Returns `None` if `indices` is empty.
pub fn centroid(points: &[Point], indices: &[usize]) -> Option<Point> {
    if indices.is_empty() {
        return None;
    }

    let mut center = Point([0.0, 0.0]);
    for &i in indices {
        for j in 0..2 {
            center.0[j] += points[i].0[j];
        }
    }
    for j in 0..2 {
        center.0[j] /= indices.len() as f64;
    }

    Some(center)
}

/// Clustering represents a result of one clustering run
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    /// Cluster ID for every input point, contiguous from 0
    pub labels: Vec<usize>,
    /// One center per cluster ID
    pub centers: PointList,
    /// Number of clusters
    pub count: usize,
}

impl Clustering {
    /// Indices of points belonging to cluster `k`, in input order
    pub fn members(&self, k: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label == k)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of points in each cluster, indexed by cluster ID
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.count];
        for &label in &self.labels {
            if let Some(size) = sizes.get_mut(label) {
                *size += 1;
            }
        }
        sizes
    }
}
