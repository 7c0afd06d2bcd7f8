// Site properties generator - turns a raw top site record into a grid tile.
// Pure logic apart from the optional clock read for id stamps.

use url::Url;

use crate::state::{Site, TopSite};

const FAVICON_PREFIX: &str = "chrome://favicon/size/64@1x/";

/// Produces a full `Site` for a newly admitted top site record.
pub trait GridSiteProperties {
    fn generate(&self, index: usize, top_site: &TopSite) -> Site;
}

/// Default generator. Ids are `topsite-{index}-{stamp}`.
#[derive(Debug, Clone, Default)]
pub struct DefaultSiteProperties {
    stamp: Option<i64>,
}

impl DefaultSiteProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the id stamp instead of reading the clock.
    pub fn with_stamp(stamp: i64) -> Self {
        Self { stamp: Some(stamp) }
    }

    fn stamp(&self) -> i64 {
        self.stamp
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis())
    }
}

impl GridSiteProperties for DefaultSiteProperties {
    fn generate(&self, index: usize, top_site: &TopSite) -> Site {
        Site {
            id: grid_site_id(index, self.stamp()),
            url: top_site.url.clone(),
            title: top_site.title.clone(),
            favicon: grid_site_favicon(&top_site.url),
            letter: char_for_site(top_site),
            theme_color: None,
            pinned_index: None,
            default_sr_top_site: false,
        }
    }
}

pub fn grid_site_id(index: usize, stamp: i64) -> String {
    format!("topsite-{}-{}", index, stamp)
}

pub fn grid_site_favicon(url: &str) -> String {
    format!("{}{}", FAVICON_PREFIX, url)
}

/// Tile letter: first char of the title, else of the host name, else "?".
pub fn char_for_site(top_site: &TopSite) -> String {
    let host = if top_site.title.is_empty() {
        match Url::parse(&top_site.url) {
            Ok(u) => u.host_str().map(|h| h.to_string()),
            Err(e) => {
                log::warn!("[GridSites] Cannot derive letter from '{}': {}", top_site.url, e);
                None
            }
        }
    } else {
        None
    };

    let name = if !top_site.title.is_empty() {
        top_site.title.as_str()
    } else {
        host.as_deref().filter(|h| !h.is_empty()).unwrap_or("?")
    };

    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}
