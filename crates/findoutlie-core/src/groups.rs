//! Locates the downloaded dataset group (`group-NN`) under the data root.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name pattern for group directories: a fixed prefix plus a fixed number
/// of trailing characters (`group-??` by default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPattern {
    pub prefix: String,
    pub suffix_len: usize,
}

impl Default for GroupPattern {
    fn default() -> Self {
        Self {
            prefix: "group-".to_string(),
            suffix_len: 2,
        }
    }
}

impl GroupPattern {
    pub fn matches(&self, name: &str) -> bool {
        name.strip_prefix(&self.prefix)
            .is_some_and(|rest| rest.chars().count() == self.suffix_len)
    }
}

#[derive(Debug, Error)]
pub enum GroupError {
    #[error("cannot list data directory {}", root.display())]
    Io {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(
        "no group directory in {}: have you downloaded and unpacked the data?",
        root.display()
    )]
    NoGroup { root: PathBuf },
    #[error("too many group directories in {}: {}", root.display(), join_names(found))]
    TooManyGroups { root: PathBuf, found: Vec<PathBuf> },
}

fn join_names(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Return the single directory under `root` whose name matches `pattern`.
pub fn find_group_dir(root: &Path, pattern: &GroupPattern) -> Result<PathBuf, GroupError> {
    let io_err = |source| GroupError::Io {
        root: root.to_path_buf(),
        source,
    };

    let mut found = Vec::new();
    for entry in fs::read_dir(root).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if pattern.matches(name) && entry.path().is_dir() {
            found.push(entry.path());
        }
    }
    found.sort();

    match found.len() {
        0 => Err(GroupError::NoGroup {
            root: root.to_path_buf(),
        }),
        1 => Ok(found.remove(0)),
        _ => Err(GroupError::TooManyGroups {
            root: root.to_path_buf(),
            found,
        }),
    }
}
