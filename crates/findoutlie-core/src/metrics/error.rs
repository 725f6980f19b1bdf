//! Error types for scan metrics.

use thiserror::Error;

/// Precondition violations for metric input. NaN/Inf voxels are not errors;
/// they pass through into the affected timepoints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// Input must be (X, Y, Z, T).
    #[error("expected a 4D volume (x, y, z, time), got {ndim} dimension(s)")]
    NotFourDimensional { ndim: usize },
    /// Fewer than two volumes leaves nothing to difference.
    #[error("need at least 2 timepoints to compute DVARS, got {timepoints}")]
    TooFewTimepoints { timepoints: usize },
    /// One of the spatial axes is empty.
    #[error("volume has no voxels; mean over zero voxels is undefined")]
    NoVoxels,
}
