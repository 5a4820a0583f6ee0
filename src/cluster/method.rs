use super::center_radius::cluster_by_center_radius;
use super::diameter::cluster_by_diameter;
use super::error::ClusterError;
use super::point::{Clustering, Point};
use super::validate::{
    ValidationReport, validate_center_radius_constraint, validate_diameter_constraint,
};
use clap::ValueEnum;
use std::fmt;

/// Clustering strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Every member within D of the cluster's seed point
    CenterRadius,
    /// Every pair of members within D of each other
    Diameter,
}

impl Method {
    /// Clusters `points` with this strategy
    pub fn run(self, points: &[Point], d: f64) -> Result<Clustering, ClusterError> {
        match self {
            Method::CenterRadius => cluster_by_center_radius(points, d),
            Method::Diameter => cluster_by_diameter(points, d),
        }
    }

    /// Checks `clustering` against the bound this strategy guarantees
    pub fn validate(
        self,
        points: &[Point],
        clustering: &Clustering,
        d: f64,
        tolerance: f64,
    ) -> ValidationReport {
        match self {
            Method::CenterRadius => validate_center_radius_constraint(
                points,
                &clustering.labels,
                &clustering.centers,
                d,
                tolerance,
            ),
            Method::Diameter => {
                validate_diameter_constraint(points, &clustering.labels, d, tolerance)
            }
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::CenterRadius => "center-radius",
            Method::Diameter => "diameter",
        })
    }
}
