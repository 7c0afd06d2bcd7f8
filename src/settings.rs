use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::modules::grid_sites_store::{read_json, write_atomic};

const SETTINGS_FILE: &str = "new_tab_settings.json";
pub const CHROME_WEB_STORE_URL: &str = "https://chrome.google.com/webstore";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct NewTabSettings {
    pub show_together: bool,
    pub show_gemini: bool,
    pub show_binance: bool,
    pub show_rewards: bool,
    /// Top sites whose url starts with one of these never reach the grid.
    pub excluded_top_site_prefixes: Vec<String>,
}

impl Default for NewTabSettings {
    fn default() -> Self {
        Self {
            show_together: false,
            show_gemini: false,
            show_binance: false,
            show_rewards: true,
            excluded_top_site_prefixes: vec![CHROME_WEB_STORE_URL.to_string()],
        }
    }
}

impl NewTabSettings {
    pub fn get_path(dir: &Path) -> PathBuf {
        dir.join(SETTINGS_FILE)
    }

    /// Stored settings, or defaults when the file is missing or unreadable.
    pub fn load(dir: &Path) -> Self {
        read_json(&Self::get_path(dir), "[Settings]").unwrap_or_default()
    }

    pub fn save(&self, dir: &Path) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(self)?;
        write_atomic(&Self::get_path(dir), &json)
    }
}
