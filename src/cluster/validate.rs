//! Independent checks that a clustering honours its distance bound
//!
//! Every distance is recomputed from the raw points. Nothing produced by the
//! clusterers is trusted beyond the labels and centers handed in.

use super::point::Point;
use std::collections::BTreeMap;
use std::fmt;

/// Default slack for constraint checks, in kilometers
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// A single broken constraint
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// The label list does not cover the point list one-to-one.
    LabelCountMismatch { labels: usize, points: usize },
    /// A point carries a label with no matching center.
    MissingCenter { cluster: usize, point: usize },
    /// A point is farther than `d` from its cluster center.
    OutsideRadius {
        cluster: usize,
        point: usize,
        distance: f64,
        d: f64,
    },
    /// Two points of one cluster are farther than `d` apart.
    PairTooFar {
        cluster: usize,
        first: usize,
        second: usize,
        distance: f64,
        d: f64,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::LabelCountMismatch { labels, points } => {
                write!(f, "{labels} labels given for {points} points")
            }
            Violation::MissingCenter { cluster, point } => {
                write!(f, "Cluster {cluster}, point {point}: cluster has no center")
            }
            Violation::OutsideRadius {
                cluster,
                point,
                distance,
                d,
            } => write!(
                f,
                "Cluster {cluster}, point {point}: distance {distance:.3} km > D={d} km"
            ),
            Violation::PairTooFar {
                cluster,
                first,
                second,
                distance,
                d,
            } => write!(
                f,
                "Cluster {cluster}, points {first}-{second}: distance {distance:.3} km > D={d} km"
            ),
        }
    }
}

/// Outcome of a constraint check
///
/// All violations are collected, the check never stops at the first one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Human-readable message for every violation
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// Splits the report into `(is_valid, messages)`
    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.is_valid(), self.messages())
    }
}

fn check_label_count(points: &[Point], labels: &[usize], violations: &mut Vec<Violation>) {
    if labels.len() != points.len() {
        violations.push(Violation::LabelCountMismatch {
            labels: labels.len(),
            points: points.len(),
        });
    }
}

/// Checks that every point lies within `d + tolerance` km of its cluster center
///
/// Point indices in the report refer to positions in `points`.
pub fn validate_center_radius_constraint(
    points: &[Point],
    labels: &[usize],
    centers: &[Point],
    d: f64,
    tolerance: f64,
) -> ValidationReport {
    let mut violations = Vec::new();
    check_label_count(points, labels, &mut violations);

    for (point, (p, &cluster)) in points.iter().zip(labels).enumerate() {
        let Some(center) = centers.get(cluster) else {
            violations.push(Violation::MissingCenter { cluster, point });
            continue;
        };
        let distance = p.distance_to(center);
        if distance > d + tolerance {
            violations.push(Violation::OutsideRadius {
                cluster,
                point,
                distance,
                d,
            });
        }
    }

    ValidationReport { violations }
}

/// Checks that every pair of points sharing a cluster lies within `d + tolerance` km
///
/// Point indices in the report refer to positions in `points`.
pub fn validate_diameter_constraint(
    points: &[Point],
    labels: &[usize],
    d: f64,
    tolerance: f64,
) -> ValidationReport {
    let mut violations = Vec::new();
    check_label_count(points, labels, &mut violations);

    let mut clusters: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (i, &cluster) in labels.iter().enumerate().take(points.len()) {
        clusters.entry(cluster).or_default().push(i);
    }

    for (&cluster, members) in &clusters {
        for (a, &first) in members.iter().enumerate() {
            for &second in &members[a + 1..] {
                let distance = points[first].distance_to(&points[second]);
                if distance > d + tolerance {
                    violations.push(Violation::PairTooFar {
                        cluster,
                        first,
                        second,
                        distance,
                        d,
                    });
                }
            }
        }
    }

    ValidationReport { violations }
}
