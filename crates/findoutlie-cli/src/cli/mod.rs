//! CLI for findoutlie.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use findoutlie_core::config;
use std::path::PathBuf;

use commands::{run_checksum, run_dvars, run_validate};

/// Top-level CLI for findoutlie.
#[derive(Debug, Parser)]
#[command(name = "findoutlie")]
#[command(about = "findoutlie: DVARS outlier metric and dataset validation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the DVARS sequence of a 4D NIfTI image (.nii or .nii.gz).
    Dvars {
        /// Path to the image.
        image: PathBuf,
        /// Print a JSON array instead of one value per line.
        #[arg(long)]
        json: bool,
    },

    /// Check the downloaded group directory against its hash manifest.
    Validate {
        /// Directory containing the `group-NN` directory (default: config `data_dir`, then ./data).
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,
    },

    /// Compute the digest of a file (SHA-1 by default).
    Checksum {
        /// Path to the file.
        path: PathBuf,
        /// Use SHA-256 instead of SHA-1.
        #[arg(long)]
        sha256: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Dvars { image, json } => run_dvars(&image, json)?,
            CliCommand::Validate { data_dir } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_validate(&cfg, data_dir)?;
            }
            CliCommand::Checksum { path, sha256 } => run_checksum(&path, sha256)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
