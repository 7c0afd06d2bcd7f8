use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::state::{GridSitesState, Site};

const GRID_SITES_FILE: &str = "grid_sites_v1.json";

/// What goes to disk. The removed-site notification is transient UI state.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedGridSites {
    #[serde(default)]
    grid_sites: Vec<Site>,
    #[serde(default)]
    removed_sites: Vec<Site>,
}

#[derive(Debug, Clone)]
pub struct GridSitesStore {
    path: PathBuf,
}

impl GridSitesStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(GRID_SITES_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Initial state for the session. Missing or unreadable data yields an empty grid.
    pub fn load(&self) -> GridSitesState {
        let Some(stored) = read_json::<PersistedGridSites>(&self.path, "[GridSitesStore]") else {
            return GridSitesState::default();
        };
        log::info!(
            "[GridSitesStore] Loaded {} sites ({} removed)",
            stored.grid_sites.len(),
            stored.removed_sites.len()
        );
        GridSitesState {
            grid_sites: stored.grid_sites,
            removed_sites: stored.removed_sites,
            should_show_site_removed_notification: false,
        }
    }

    pub fn save(&self, state: &GridSitesState) -> Result<(), StorageError> {
        let stored = PersistedGridSites {
            grid_sites: state.grid_sites.clone(),
            removed_sites: state.removed_sites.clone(),
        };
        let json = serde_json::to_string_pretty(&stored)?;
        write_atomic(&self.path, &json)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Parses a JSON file. Missing, unreadable or corrupt files give `None`;
/// the last two are logged under `tag`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path, tag: &str) -> Option<T> {
    if !path.exists() {
        return None;
    }
    let json = fs::read_to_string(path)
        .map_err(|e| log::warn!("{} Failed to read {:?}: {}", tag, path, e))
        .ok()?;
    serde_json::from_str(&json)
        .map_err(|e| log::warn!("{} Failed to parse {:?}: {}", tag, path, e))
        .ok()
}

/// Writes to a sibling tmp file, then renames over the target.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<(), StorageError> {
    let parent = path
        .parent()
        .ok_or_else(|| StorageError::NoParent(path.to_path_buf()))?;
    fs::create_dir_all(parent)?;

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
