use std::f64::consts::PI;

use super::point::Point;

/// Coefficient to translate from degrees to radians
pub const DEGREE_RAD: f64 = PI / 180.0;

/// Earth radius in kilometers
pub const EARTH_R: f64 = 6371.0;

/// Calculates great-circle distance between two points with the Haversine formula
///
/// Coordinates are decimal degrees and are not range checked.
///
/// # Returns
///
/// Distance in kilometers
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1 * DEGREE_RAD;
    let lat2 = lat2 * DEGREE_RAD;
    let dlat = lat2 - lat1;
    let dlon = (lon2 - lon1) * DEGREE_RAD;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `a` slightly above 1 for antipodal points
    let c = 2.0 * a.min(1.0).sqrt().asin();

    EARTH_R * c
}

/// Symmetric matrix of pairwise Haversine distances
///
/// Stored row-major in a single buffer. Memory is O(N²), so this is meant for
/// point sets up to roughly a thousand points.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Number of points (rows)
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between points `i` and `j` in kilometers
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Distances from point `i` to every point
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}

/// Computes the full pairwise distance matrix for a point set
///
/// The diagonal is zero and `get(i, j) == get(j, i)`.
pub fn haversine_distance_matrix(points: &[Point]) -> DistanceMatrix {
    let n = points.len();
    let mut data = vec![0.0; n * n];

    for i in 0..n {
        for j in i + 1..n {
            let dist = points[i].distance_to(&points[j]);
            data[i * n + j] = dist;
            data[j * n + i] = dist;
        }
    }

    DistanceMatrix { n, data }
}

/// Chord length on the unit sphere matching a great-circle distance in km
///
/// Distances at or beyond half the circumference map to the diameter, 2.0.
pub fn chord_for_distance(km: f64) -> f64 {
    let angle = km / EARTH_R;
    if angle >= PI {
        2.0
    } else {
        2.0 * (angle / 2.0).sin()
    }
}
