use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::groups::GroupPattern;
use crate::manifest::DEFAULT_MANIFEST_NAME;

/// Global configuration loaded from `~/.config/findoutlie/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindoutlieConfig {
    /// Directory holding the `group-NN` dataset directory. If missing, `./data` is used.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Manifest file name inside the group directory.
    #[serde(default = "default_manifest_name")]
    pub manifest_name: String,
    /// Prefix of the group directory name.
    #[serde(default = "default_group_prefix")]
    pub group_prefix: String,
    /// Number of characters after the prefix (2 for `group-01`).
    #[serde(default = "default_group_suffix_len")]
    pub group_suffix_len: usize,
}

fn default_manifest_name() -> String {
    DEFAULT_MANIFEST_NAME.to_string()
}

fn default_group_prefix() -> String {
    GroupPattern::default().prefix
}

fn default_group_suffix_len() -> usize {
    GroupPattern::default().suffix_len
}

impl Default for FindoutlieConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            manifest_name: default_manifest_name(),
            group_prefix: default_group_prefix(),
            group_suffix_len: default_group_suffix_len(),
        }
    }
}

impl FindoutlieConfig {
    pub fn group_pattern(&self) -> GroupPattern {
        GroupPattern {
            prefix: self.group_prefix.clone(),
            suffix_len: self.group_suffix_len,
        }
    }

    /// Data root for validation: an explicit override wins over `data_dir`;
    /// both fall back to `./data`.
    pub fn data_root(&self, override_dir: Option<PathBuf>) -> PathBuf {
        override_dir
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from("data"))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("findoutlie")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FindoutlieConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FindoutlieConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FindoutlieConfig = toml::from_str(&data)?;
    Ok(cfg)
}
