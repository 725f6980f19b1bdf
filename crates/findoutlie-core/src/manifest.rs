//! Parser for the `hash_list.txt` dataset manifest.
//!
//! One entry per line: a hex digest, whitespace, then a filename relative to
//! the directory that contains the group directory.

use crate::checksum::DigestAlgorithm;
use thiserror::Error;

/// Default manifest file name inside a group directory.
pub const DEFAULT_MANIFEST_NAME: &str = "hash_list.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Lowercase hex digest.
    pub digest: String,
    pub algorithm: DigestAlgorithm,
    pub filename: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManifestError {
    #[error("manifest line {line_no}: expected `<digest> <filename>`, got {line:?}")]
    MalformedLine { line_no: usize, line: String },
    #[error("manifest line {line_no}: {digest:?} is not a SHA-1 or SHA-256 hex digest")]
    BadDigest { line_no: usize, digest: String },
}

/// Parse manifest text into entries, in file order. Blank lines are skipped.
pub fn parse_manifest(text: &str) -> Result<Vec<ManifestEntry>, ManifestError> {
    let mut entries = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (digest, filename) = match (fields.next(), fields.next(), fields.next()) {
            (Some(d), Some(f), None) => (d, f),
            _ => {
                return Err(ManifestError::MalformedLine {
                    line_no,
                    line: line.to_string(),
                })
            }
        };

        let algorithm = DigestAlgorithm::from_hex_len(digest.len())
            .filter(|_| digest.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ManifestError::BadDigest {
                line_no,
                digest: digest.to_string(),
            })?;

        entries.push(ManifestEntry {
            digest: digest.to_ascii_lowercase(),
            algorithm,
            filename: filename.to_string(),
        });
    }
    Ok(entries)
}
