//! `findoutlie checksum` – digest of a single file, `sha1sum`-style output.

use anyhow::Result;
use findoutlie_core::checksum::{self, DigestAlgorithm};
use std::path::Path;

pub fn format_checksum(digest: &str, path: &Path) -> String {
    format!("{}  {}", digest, path.display())
}

pub fn run_checksum(path: &Path, sha256: bool) -> Result<()> {
    let algorithm = if sha256 {
        DigestAlgorithm::Sha256
    } else {
        DigestAlgorithm::Sha1
    };
    let digest = checksum::digest_path(algorithm, path)?;
    println!("{}", format_checksum(&digest, path));
    Ok(())
}
