//! KD-tree over points on the unit sphere
//!
//! The build strategy (pre-sorting on every dimension, then splitting at the
//! median) follows <https://godoc.org/code.google.com/p/eaburns/kdtree>.
//! Original code is under New BSD License.
//! Author: Ethan Burns <burns.ethan@gmail.com>

use super::distance::chord_for_distance;
use super::point::Point;
use std::cmp::Ordering;

const DIMS: usize = 3;

/// Slack added to the chord radius so that floating point error in the unit
/// vectors never drops a point that is within range by Haversine distance
const CHORD_SLACK: f64 = 1e-12;

type Coords = [f64; DIMS];

/// KD-tree for radius queries by great-circle distance
///
/// Points are stored as unit vectors, separated from nodes. Nodes hold only
/// positions into `coords`; `ids` maps positions back to indices of the
/// caller's point list.
pub struct KDTree {
    coords: Vec<Coords>,
    ids: Vec<usize>,
    root: Option<Box<KDTreeNode>>,
}

/// A node in the K-D tree
struct KDTreeNode {
    /// Position of the point associated with this node
    pos: usize,
    /// Positions of points equal to this node's point
    equal: Vec<usize>,

    split: usize,
    left: Option<Box<KDTreeNode>>,
    right: Option<Box<KDTreeNode>>,
}

impl KDTree {
    /// Number of indexed points
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Finds indexed points that may lie within `dist_km` of `pt`
    ///
    /// The result is a superset of the points within range: the chord radius
    /// carries a tiny slack, so callers decide membership with the exact
    /// Haversine distance. Returned values are indices into the caller's
    /// point list.
    ///
    /// To avoid allocation, the `nodes` vector can be pre-allocated with a larger
    /// capacity and re-used across multiple calls.
    pub fn in_range(&self, pt: &Point, dist_km: f64, mut nodes: Vec<usize>) -> Vec<usize> {
        if dist_km < 0.0 {
            return nodes;
        }
        let r = chord_for_distance(dist_km) + CHORD_SLACK;
        let q = pt.to_unit_vector();
        self.in_range_recursive(self.root.as_deref(), &q, r, &mut nodes);
        nodes
    }

    fn in_range_recursive(
        &self,
        t: Option<&KDTreeNode>,
        q: &Coords,
        r: f64,
        nodes: &mut Vec<usize>,
    ) {
        let t = match t {
            None => return,
            Some(t) => t,
        };

        let diff = q[t.split] - self.coords[t.pos][t.split];

        let (this_side, other_side) = if diff < 0.0 {
            (t.left.as_deref(), t.right.as_deref())
        } else {
            (t.right.as_deref(), t.left.as_deref())
        };

        self.in_range_recursive(this_side, q, r, nodes);
        // Nothing across the splitting plane can be closer than the plane itself
        if diff * diff <= r * r {
            if sq_dist(&self.coords[t.pos], q) <= r * r {
                nodes.push(self.ids[t.pos]);
                nodes.extend(t.equal.iter().map(|&p| self.ids[p]));
            }
            self.in_range_recursive(other_side, q, r, nodes);
        }
    }

    /// Returns the height of the K-D tree
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |r| r.height())
    }
}

impl KDTreeNode {
    fn height(&self) -> usize {
        let ht = self.left.as_ref().map_or(0, |l| l.height());
        let rht = self.right.as_ref().map_or(0, |r| r.height());
        ht.max(rht) + 1
    }
}

fn sq_dist(a: &Coords, b: &Coords) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Creates a new K-D tree over the points of `points` selected by `ids`
pub fn new_kd_tree(points: &[Point], ids: &[usize]) -> KDTree {
    let coords: Vec<Coords> = ids.iter().map(|&i| points[i].to_unit_vector()).collect();
    let mut result = KDTree {
        coords,
        ids: ids.to_vec(),
        root: None,
    };

    if !result.coords.is_empty() {
        result.root = build_tree(0, &pre_sort(&result.coords));
    }

    result
}

/// Builds a tree node by finding the median point and recursively building left and right subtrees
fn build_tree(depth: usize, nodes: &PreSorted<'_>) -> Option<Box<KDTreeNode>> {
    let split = depth % DIMS;
    match nodes.cur[split].len() {
        0 => None,
        1 => Some(Box::new(KDTreeNode {
            pos: nodes.cur[split][0],
            equal: Vec::new(),
            split,
            left: None,
            right: None,
        })),
        _ => {
            let (med, equal, left, right) = nodes.split_med(split);
            Some(Box::new(KDTreeNode {
                pos: med,
                equal,
                split,
                left: build_tree(depth + 1, &left),
                right: build_tree(depth + 1, &right),
            }))
        }
    }
}

/// Holds nodes pre-sorted on each dimension
struct PreSorted<'a> {
    coords: &'a [Coords],
    /// Currently sorted set of positions by dimension
    cur: [Vec<usize>; DIMS],
}

/// Orders on `dim` first, then on every dimension in turn, so that
/// identical points end up next to each other
fn cmp_on(coords: &[Coords], dim: usize, a: usize, b: usize) -> Ordering {
    std::iter::once(dim)
        .chain(0..DIMS)
        .map(|d| {
            coords[a][d]
                .partial_cmp(&coords[b][d])
                .unwrap_or(Ordering::Equal)
        })
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Pre-sorts nodes on each dimension
fn pre_sort(coords: &[Coords]) -> PreSorted<'_> {
    let cur = std::array::from_fn(|dim| {
        let mut order: Vec<usize> = (0..coords.len()).collect();
        order.sort_by(|&a, &b| cmp_on(coords, dim, a, b));
        order
    });
    PreSorted { coords, cur }
}

impl<'a> PreSorted<'a> {
    /// Returns the median node on the split dimension and two PreSorted structs
    /// that contain the nodes (still sorted on each dimension) that are less than
    /// and greater than or equal to the median node value on the given splitting dimension.
    fn split_med(&self, dim: usize) -> (usize, Vec<usize>, PreSorted<'a>, PreSorted<'a>) {
        let cur = &self.cur[dim];
        let mut m = cur.len() / 2;
        while m > 0 && self.coords[cur[m - 1]][dim] == self.coords[cur[m]][dim] {
            m -= 1;
        }
        let mut mh = m;
        while mh < cur.len() - 1 && self.coords[cur[mh + 1]] == self.coords[cur[m]] {
            mh += 1;
        }
        let med = cur[m];
        let equal = cur[m + 1..=mh].to_vec();
        let pivot = self.coords[med][dim];

        let mut left = PreSorted {
            coords: self.coords,
            cur: Default::default(),
        };
        left.cur[dim] = cur[..m].to_vec();

        let mut right = PreSorted {
            coords: self.coords,
            cur: Default::default(),
        };
        right.cur[dim] = cur[mh + 1..].to_vec();

        for d in 0..DIMS {
            if d == dim {
                continue;
            }

            left.cur[d] = Vec::with_capacity(left.cur[dim].len());
            right.cur[d] = Vec::with_capacity(right.cur[dim].len());

            for &n in &self.cur[d] {
                if n == med || equal.contains(&n) {
                    continue;
                }
                if self.coords[n][dim] < pivot {
                    left.cur[d].push(n);
                } else {
                    right.cur[d].push(n);
                }
            }
        }

        (med, equal, left, right)
    }
}
