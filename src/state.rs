// Shared state structs for the new tab page.
// These are plain data; transitions live in modules::grid_sites.

use serde::{Deserialize, Serialize};

/// A raw "most visited" record as handed over by the top sites provider.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopSite {
    pub url: String,
    pub title: String,
}

impl TopSite {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// One tile in the top sites grid.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub url: String, // de-duplication key
    pub title: String,
    pub favicon: String,
    pub letter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    /// Fixed grid position chosen by the user. `None` means the tile is free to move.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_index: Option<usize>,
    #[serde(default, rename = "defaultSRTopSite")]
    pub default_sr_top_site: bool,
}

impl Site {
    pub fn is_pinned(&self) -> bool {
        self.pinned_index.is_some()
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GridSitesState {
    pub grid_sites: Vec<Site>,
    /// Undo log, oldest removal first.
    pub removed_sites: Vec<Site>,
    pub should_show_site_removed_notification: bool,
}

impl GridSitesState {
    pub fn contains_url(&self, url: &str) -> bool {
        self.grid_sites.iter().any(|s| s.url == url)
    }

    pub fn position_of(&self, url: &str) -> Option<usize> {
        self.grid_sites.iter().position(|s| s.url == url)
    }
}
