//! `findoutlie validate` – check the downloaded data against its manifest.

use anyhow::Result;
use findoutlie_core::config::FindoutlieConfig;
use findoutlie_core::groups;
use findoutlie_core::validate::{self, ValidationReport};
use std::path::{Path, PathBuf};

pub fn format_validated(report: &ValidationReport, group: &Path) -> String {
    format!(
        "validated {} files in {}",
        report.file_count(),
        group.display()
    )
}

pub fn run_validate(cfg: &FindoutlieConfig, data_dir: Option<PathBuf>) -> Result<()> {
    let root = cfg.data_root(data_dir);
    let group = groups::find_group_dir(&root, &cfg.group_pattern())?;
    tracing::info!("validating group {}", group.display());

    let report = validate::validate_data(&group, &cfg.manifest_name)?;
    println!("{}", format_validated(&report, &group));
    Ok(())
}
