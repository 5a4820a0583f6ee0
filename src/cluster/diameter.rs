use super::distance::haversine_distance_matrix;
use super::error::{ClusterError, check_input};
use super::point::{Clustering, Point, PointList, centroid};
use bitvec::prelude::*;
use tracing::{debug, trace, warn};

/// Point count above which the O(N²) distance matrix gets expensive
pub const MATRIX_POINT_LIMIT: usize = 1000;

/// Clusters points so that every pair of members lies within `d` km of each other
///
/// A cluster is seeded with the lowest-index unassigned point, then the
/// remaining unassigned points are scanned in index order and added only when
/// they are within `d` of every current member. There is no transitive
/// merging: a chain of points each closer than `d` may still be split.
///
/// Centers are centroids (mean latitude, mean longitude) of the members. They
/// summarize the cluster and satisfy no distance bound.
///
/// The full pairwise distance matrix is held for the whole run, so memory is
/// O(N²). Inputs well beyond [`MATRIX_POINT_LIMIT`] points are not a target.
///
/// # Errors
///
/// Returns [`ClusterError`] for an empty point set, a negative or non-finite
/// `d`, or a point with a non-finite coordinate.
pub fn cluster_by_diameter(points: &[Point], d: f64) -> Result<Clustering, ClusterError> {
    check_input(points, d)?;

    let n = points.len();
    if n > MATRIX_POINT_LIMIT {
        warn!(
            points = n,
            limit = MATRIX_POINT_LIMIT,
            "diameter clustering allocates an N x N distance matrix"
        );
    }
    let matrix = haversine_distance_matrix(points);

    let mut labeled = bitvec![0; n];
    let mut labels = vec![0; n];
    let mut centers = PointList::new();
    let mut members = Vec::new();

    while let Some(seed) = labeled.first_zero() {
        let c = centers.len();
        members.clear();
        members.push(seed);
        labeled.set(seed, true);
        labels[seed] = c;

        for candidate in seed + 1..n {
            if labeled[candidate] {
                continue;
            }
            let row = matrix.row(candidate);
            if members.iter().all(|&m| row[m] <= d) {
                members.push(candidate);
                labeled.set(candidate, true);
                labels[candidate] = c;
            }
        }

        // Never empty: the seed is always a member
        centers.extend(centroid(points, &members));
        trace!(cluster = c, seed, size = members.len(), "diameter cluster formed");
    }

    let count = centers.len();
    debug!(points = n, d, clusters = count, "diameter clustering finished");

    Ok(Clustering {
        labels,
        centers,
        count,
    })
}
