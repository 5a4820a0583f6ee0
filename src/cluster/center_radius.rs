use super::error::{ClusterError, check_input};
use super::kdtree::new_kd_tree;
use super::point::{Clustering, Point, PointList};
use bitvec::prelude::*;
use tracing::{debug, trace};

// Greedy center-radius clustering:
//
// clusterByCenterRadius(P, D)
//    k = 0
//    while some point in P is unlabeled
//       S = lowest-index unlabeled point
//       center[k] = S
//       for each unlabeled point Q with distance(S, Q) <= D
//          label[Q] = k
//       k = k + 1
//
// Candidates come from a KD-tree that is built once and queried with lazy
// deletion: labeled points are skipped, and the tree is rebuilt over the
// unlabeled points once they make up less than half of it.

/// Clusters points so that every member lies within `d` km of its cluster center
///
/// The center of each cluster is the input point that seeded it, always the
/// lowest-index point not yet assigned. Results depend on input order but are
/// deterministic for a given order.
///
/// # Arguments
///
/// * `points` - Points to cluster
/// * `d` - Maximum distance from a member to its center, in kilometers
///
/// # Errors
///
/// Returns [`ClusterError`] for an empty point set, a negative or non-finite
/// `d`, or a point with a non-finite coordinate.
pub fn cluster_by_center_radius(points: &[Point], d: f64) -> Result<Clustering, ClusterError> {
    check_input(points, d)?;

    let all: Vec<usize> = (0..points.len()).collect();
    let mut tree = new_kd_tree(points, &all);
    let mut labeled = bitvec![0; points.len()];
    let mut labels = vec![0; points.len()];
    let mut centers = PointList::new();
    let mut remaining = points.len();
    let mut candidates = Vec::new();

    while let Some(seed) = labeled.first_zero() {
        if remaining * 2 < tree.len() {
            let unlabeled: Vec<usize> = labeled.iter_zeros().collect();
            tree = new_kd_tree(points, &unlabeled);
            trace!(size = tree.len(), "rebuilt spatial index");
        }

        let c = centers.len();
        let center = points[seed];
        centers.push(center);

        labeled.set(seed, true);
        labels[seed] = c;
        let mut size = 1;

        candidates.clear();
        candidates = tree.in_range(&center, d, candidates);
        for &i in &candidates {
            if !labeled[i] && center.distance_to(&points[i]) <= d {
                labeled.set(i, true);
                labels[i] = c;
                size += 1;
            }
        }

        remaining -= size;
        trace!(cluster = c, seed, size, "center-radius cluster formed");
    }

    let count = centers.len();
    debug!(
        points = points.len(),
        d,
        clusters = count,
        "center-radius clustering finished"
    );

    Ok(Clustering {
        labels,
        centers,
        count,
    })
}
