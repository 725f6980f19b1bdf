//! `findoutlie dvars` – DVARS of a 4D image.

use anyhow::{Context, Result};
use findoutlie_core::volume;
use std::path::Path;

/// One value per line, or a single JSON array.
pub fn format_dvars(values: &[f64], json: bool) -> Result<String> {
    if json {
        return serde_json::to_string(values).context("serialize dvars");
    }
    Ok(values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn run_dvars(image: &Path, json: bool) -> Result<()> {
    let values = volume::dvars_path(image)?;
    tracing::info!("dvars {}: {} value(s)", image.display(), values.len());
    println!("{}", format_dvars(&values.to_vec(), json)?);
    Ok(())
}
