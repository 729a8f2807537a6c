//! Project discovery and the default target alias.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Walks up from `start` until a directory containing `marker` is found.
///
/// # Errors
///
/// Returns [`Error::ProjectNotFound`] if no ancestor contains the marker.
pub fn find_project_root(start: &Path, marker: &str) -> Result<PathBuf> {
    let start = start
        .canonicalize()
        .unwrap_or_else(|_| start.to_path_buf());

    start
        .ancestors()
        .find(|directory| directory.join(marker).exists())
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::ProjectNotFound {
            marker: marker.to_string(),
            start: start.display().to_string(),
        })
}

/// Source of a previously saved default target alias.
pub trait AliasLookup {
    fn default_alias(&self) -> Option<String>;
}

impl<F> AliasLookup for F
where
    F: Fn() -> Option<String>,
{
    fn default_alias(&self) -> Option<String> {
        self()
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct OrgFile {
    #[serde(default)]
    is_default_username: bool,
    alias: Option<String>,
    username: Option<String>,
}

/// Scans a directory of org JSON files for the one flagged as default.
///
/// Best effort: unreadable or malformed files are skipped.
pub struct OrgConfigLookup {
    directory: PathBuf,
}

impl OrgConfigLookup {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn org_files(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(&self.directory) else {
            return Vec::new();
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();
        files
    }
}

impl AliasLookup for OrgConfigLookup {
    fn default_alias(&self) -> Option<String> {
        self.org_files().iter().find_map(|path| {
            let contents = fs::read_to_string(path).ok()?;
            let org: OrgFile = match serde_json::from_str(&contents) {
                Ok(org) => org,
                Err(e) => {
                    debug!("Skipping org file `{}`: {}", path.display(), e);
                    return None;
                }
            };

            if org.is_default_username {
                let present = |value: &String| !value.trim().is_empty();
                org.alias.filter(present).or(org.username.filter(present))
            } else {
                None
            }
        })
    }
}
