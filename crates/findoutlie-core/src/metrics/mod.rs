//! Scan outlier metrics.
//!
//! DVARS summarises, per pair of consecutive volumes, how much the signal
//! changed across all voxels: the root of the mean squared voxel difference.
//! Spikes in the sequence usually mean subject motion or a scanner artifact.

mod dvars;
mod error;

pub use dvars::dvars;
pub use error::MetricsError;
