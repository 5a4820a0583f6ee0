use thiserror::Error;

/// Precondition failures rejected by the clusterers
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClusterError {
    /// No points were given.
    #[error("cannot cluster an empty point set")]
    EmptyInput,
    /// The distance threshold is negative, NaN or infinite.
    #[error("distance threshold must be a finite non-negative number of km, got {d}")]
    InvalidThreshold { d: f64 },
    /// A point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
}

/// Checks the inputs shared by both clustering strategies
pub(crate) fn check_input(points: &[super::Point], d: f64) -> Result<(), ClusterError> {
    if points.is_empty() {
        return Err(ClusterError::EmptyInput);
    }
    if !d.is_finite() || d < 0.0 {
        return Err(ClusterError::InvalidThreshold { d });
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(ClusterError::NonFiniteCoordinate { index });
    }
    Ok(())
}
