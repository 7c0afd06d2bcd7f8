// Live new tab session - holds the current grid snapshot and threads
// dispatched actions through the pure transitions.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::modules::grid_sites::{reduce, GridSitesAction};
use crate::modules::grid_sites_store::GridSitesStore;
use crate::modules::site_properties::{DefaultSiteProperties, GridSiteProperties};
use crate::settings::NewTabSettings;
use crate::state::GridSitesState;

pub struct GridSitesSession {
    // Swapped wholesale; old snapshots stay valid for whoever holds them.
    current: ArcSwap<GridSitesState>,
    generator: Box<dyn GridSiteProperties + Send + Sync>,
    excluded_prefixes: Vec<String>,
    store: Option<GridSitesStore>,
}

impl GridSitesSession {
    pub fn new(initial: GridSitesState) -> Self {
        Self {
            current: ArcSwap::from_pointee(initial),
            generator: Box::new(DefaultSiteProperties::new()),
            excluded_prefixes: Vec::new(),
            store: None,
        }
    }

    /// Session seeded from the store, saving back after every dispatch.
    pub fn open(store: GridSitesStore, settings: &NewTabSettings) -> Self {
        let initial = store.load();
        Self::new(initial)
            .with_excluded_prefixes(settings.excluded_top_site_prefixes.clone())
            .with_store(store)
    }

    pub fn with_generator(mut self, generator: impl GridSiteProperties + Send + Sync + 'static) -> Self {
        self.generator = Box::new(generator);
        self
    }

    pub fn with_excluded_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.excluded_prefixes = prefixes;
        self
    }

    pub fn with_store(mut self, store: GridSitesStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn snapshot(&self) -> Arc<GridSitesState> {
        self.current.load_full()
    }

    /// Applies one action and returns the resulting snapshot.
    ///
    /// A failed save is logged; the in-memory state still advances.
    pub fn dispatch(&self, action: GridSitesAction) -> Arc<GridSitesState> {
        let next = Arc::new(reduce(
            &self.current.load(),
            action,
            self.generator.as_ref(),
            &self.excluded_prefixes,
        ));
        self.current.store(Arc::clone(&next));

        if let Some(store) = &self.store {
            if let Err(e) = store.save(&next) {
                log::warn!("[GridSites] Failed to persist grid sites: {}", e);
            }
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TopSite;
    use tempfile::tempdir;

    fn seeded_session() -> GridSitesSession {
        let session = GridSitesSession::new(GridSitesState::default())
            .with_generator(DefaultSiteProperties::with_stamp(7));
        session.dispatch(GridSitesAction::SetFirstRenderData(vec![
            TopSite::new("https://brave.com", "brave!"),
            TopSite::new("https://clifton.io", "BSC]]"),
        ]));
        session
    }

    #[test]
    fn test_dispatch_advances_snapshot() {
        let session = seeded_session();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.grid_sites.len(), 2);
        assert_eq!(snapshot.grid_sites[0].id, "topsite-0-7");
    }

    #[test]
    fn test_old_snapshot_is_unchanged() {
        let session = seeded_session();
        let before = session.snapshot();
        let site = before.grid_sites[0].clone();

        let after = session.dispatch(GridSitesAction::RemoveSite(site));

        assert_eq!(before.grid_sites.len(), 2);
        assert!(before.removed_sites.is_empty());
        assert_eq!(after.grid_sites.len(), 1);
        assert_eq!(session.snapshot(), after);
    }

    #[test]
    fn test_open_applies_excluded_prefixes() {
        let dir = tempdir().unwrap();
        let session = GridSitesSession::open(GridSitesStore::new(dir.path()), &NewTabSettings::default());

        let state = session.dispatch(GridSitesAction::SetFirstRenderData(vec![
            TopSite::new("https://chrome.google.com/webstore", "Web Store"),
            TopSite::new("https://brave.com", "brave!"),
        ]));

        assert_eq!(state.grid_sites.len(), 1);
        assert_eq!(state.grid_sites[0].url, "https://brave.com");
    }

    #[test]
    fn test_dispatch_persists_to_store() {
        let dir = tempdir().unwrap();
        let store = GridSitesStore::new(dir.path());
        let settings = NewTabSettings::default();

        {
            let session = GridSitesSession::open(store.clone(), &settings);
            let state = session.dispatch(GridSitesAction::SetFirstRenderData(vec![
                TopSite::new("https://brave.com", "brave!"),
                TopSite::new("https://clifton.io", "BSC]]"),
            ]));
            let first = state.grid_sites[0].clone();
            session.dispatch(GridSitesAction::ToggleSitePinned(first));
            session.dispatch(GridSitesAction::ShowSiteRemovedNotification(true));
        }

        let reopened = GridSitesSession::open(store, &settings);
        let state = reopened.snapshot();
        assert_eq!(state.grid_sites.len(), 2);
        assert_eq!(state.grid_sites[0].pinned_index, Some(0));
        assert!(!state.should_show_site_removed_notification);
    }

    #[test]
    fn test_undo_flow_through_session() {
        let session = seeded_session();
        let second = session.snapshot().grid_sites[1].clone();

        session.dispatch(GridSitesAction::RemoveSite(second.clone()));
        session.dispatch(GridSitesAction::ShowSiteRemovedNotification(true));
        let state = session.dispatch(GridSitesAction::UndoRemoveSite);

        assert_eq!(state.grid_sites[1], second);
        assert!(state.removed_sites.is_empty());
        assert!(state.should_show_site_removed_notification);
    }
}
