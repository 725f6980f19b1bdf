//! Error types for dataset validation.

use crate::manifest::ManifestError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidateError {
    /// Manifest or data file could not be read.
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    /// The file on disk does not match the recorded digest.
    #[error("hash for {filename} does not match (expected {expected}, got {actual})")]
    HashMismatch {
        filename: String,
        expected: String,
        actual: String,
    },
}
