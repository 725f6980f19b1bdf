//! Checks the files of a downloaded dataset group against its manifest.
//!
//! The manifest lives inside the group directory, but its filenames start
//! with the group directory name, so they are resolved against the group's
//! parent. Validation stops at the first mismatch.

mod error;

use crate::checksum;
use crate::manifest::parse_manifest;
use std::fs;
use std::path::{Path, PathBuf};

pub use error::ValidateError;

/// Files that were hashed and matched, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub checked: Vec<PathBuf>,
}

impl ValidationReport {
    pub fn file_count(&self) -> usize {
        self.checked.len()
    }
}

/// Read `<data_dir>/<manifest_name>` and verify every listed file.
pub fn validate_data(
    data_dir: &Path,
    manifest_name: &str,
) -> Result<ValidationReport, ValidateError> {
    let manifest_path = data_dir.join(manifest_name);
    let text = fs::read_to_string(&manifest_path).map_err(|e| ValidateError::Io {
        path: manifest_path.clone(),
        source: e.into(),
    })?;
    let entries = parse_manifest(&text)?;
    tracing::debug!(
        "manifest {} lists {} file(s)",
        manifest_path.display(),
        entries.len()
    );

    let base = data_dir.parent().unwrap_or_else(|| Path::new(""));
    let mut report = ValidationReport::default();
    for entry in entries {
        let path = base.join(&entry.filename);
        let actual = checksum::digest_path(entry.algorithm, &path).map_err(|source| {
            ValidateError::Io {
                path: path.clone(),
                source,
            }
        })?;
        if actual != entry.digest {
            tracing::warn!("{} mismatch for {}", entry.algorithm, entry.filename);
            return Err(ValidateError::HashMismatch {
                filename: entry.filename,
                expected: entry.digest,
                actual,
            });
        }
        tracing::debug!("ok {}", path.display());
        report.checked.push(path);
    }

    tracing::info!(
        "validated {} file(s) in {}",
        report.file_count(),
        data_dir.display()
    );
    Ok(report)
}
