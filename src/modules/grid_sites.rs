// Grid sites transitions - pure logic, no I/O.
//
// Every transition borrows the current state and returns a new one.
// Invariants kept by all of them:
// 1. `grid_sites` never holds two entries with the same url.
// 2. A site with `pinned_index = Some(k)` sits at position `k` whenever the
//    grid is long enough.
// 3. `removed_sites` only holds entries taken out by `remove_site`.

use std::collections::{HashSet, VecDeque};

use crate::modules::site_properties::GridSiteProperties;
use crate::state::{GridSitesState, Site, TopSite};

/// Payload for `add_site_or_sites`.
#[derive(Clone, Debug, PartialEq)]
pub enum SiteOrSites {
    One(Site),
    Many(Vec<Site>),
}

impl SiteOrSites {
    pub fn into_vec(self) -> Vec<Site> {
        match self {
            Self::One(site) => vec![site],
            Self::Many(sites) => sites,
        }
    }
}

impl From<Site> for SiteOrSites {
    fn from(site: Site) -> Self {
        Self::One(site)
    }
}

impl From<Vec<Site>> for SiteOrSites {
    fn from(sites: Vec<Site>) -> Self {
        Self::Many(sites)
    }
}

/// Every transition the grid accepts, for callers that dispatch by value.
#[derive(Clone, Debug, PartialEq)]
pub enum GridSitesAction {
    SetFirstRenderData(Vec<TopSite>),
    DataUpdated(Vec<Site>),
    ToggleSitePinned(Site),
    RemoveSite(Site),
    UndoRemoveSite,
    UndoRemoveAllSites,
    AddSiteOrSites(SiteOrSites),
    ShowSiteRemovedNotification(bool),
}

pub fn reduce(
    state: &GridSitesState,
    action: GridSitesAction,
    generator: &dyn GridSiteProperties,
    excluded_prefixes: &[String],
) -> GridSitesState {
    match action {
        GridSitesAction::SetFirstRenderData(top_sites) => {
            set_first_render_data(state, &top_sites, excluded_prefixes, generator)
        }
        GridSitesAction::DataUpdated(sites) => data_updated(state, &sites),
        GridSitesAction::ToggleSitePinned(site) => toggle_site_pinned(state, &site),
        GridSitesAction::RemoveSite(site) => remove_site(state, &site),
        GridSitesAction::UndoRemoveSite => undo_remove_site(state),
        GridSitesAction::UndoRemoveAllSites => undo_remove_all_sites(state),
        GridSitesAction::AddSiteOrSites(sites) => add_site_or_sites(state, sites),
        GridSitesAction::ShowSiteRemovedNotification(flag) => {
            show_site_removed_notification(state, flag)
        }
    }
}

fn is_excluded(url: &str, excluded_prefixes: &[String]) -> bool {
    excluded_prefixes
        .iter()
        .any(|prefix| !prefix.is_empty() && url.starts_with(prefix.as_str()))
}

/// Seeds the grid from the provider's first "most visited" list.
///
/// Excluded urls and urls already present (in the grid or earlier in the
/// batch) are skipped. Survivors keep their input order and get ids from
/// the grid position they will occupy.
pub fn set_first_render_data(
    state: &GridSitesState,
    top_sites: &[TopSite],
    excluded_prefixes: &[String],
    generator: &dyn GridSiteProperties,
) -> GridSitesState {
    let mut seen: HashSet<&str> = state.grid_sites.iter().map(|s| s.url.as_str()).collect();
    let mut admitted = Vec::new();

    for top_site in top_sites {
        if is_excluded(&top_site.url, excluded_prefixes) {
            log::debug!("[GridSites] Skipping excluded top site: {}", top_site.url);
            continue;
        }
        if !seen.insert(top_site.url.as_str()) {
            continue;
        }
        let index = state.grid_sites.len() + admitted.len();
        admitted.push(generator.generate(index, top_site));
    }

    log::debug!(
        "[GridSites] First render: {} incoming, {} admitted",
        top_sites.len(),
        admitted.len()
    );

    if admitted.is_empty() {
        return state.clone();
    }
    add_sites(state, admitted)
}

/// Slot-by-slot placement shared by every transition that reshapes the grid.
///
/// `pinned` must be sorted by index. A pinned site goes in as soon as its
/// index is reached, every other slot takes the next filler. Pins pointing
/// past the end are appended in index order.
fn place_pinned(mut pinned: VecDeque<(usize, Site)>, mut fillers: VecDeque<Site>) -> Vec<Site> {
    let mut merged: Vec<Site> = Vec::with_capacity(pinned.len() + fillers.len());
    while !pinned.is_empty() || !fillers.is_empty() {
        let pin_due = pinned.front().is_some_and(|(k, _)| *k <= merged.len());
        let next = if pin_due || fillers.is_empty() {
            pinned.pop_front().map(|(_, s)| s)
        } else {
            fillers.pop_front()
        };
        if let Some(site) = next {
            merged.push(site);
        }
    }
    merged
}

fn split_pinned<'a>(sites: impl IntoIterator<Item = &'a Site>) -> (Vec<(usize, &'a Site)>, Vec<&'a Site>) {
    let mut pinned = Vec::new();
    let mut free = Vec::new();
    for site in sites {
        match site.pinned_index {
            Some(k) => pinned.push((k, site)),
            None => free.push(site),
        }
    }
    // Stable: ties keep grid order.
    pinned.sort_by_key(|(k, _)| *k);
    (pinned, free)
}

/// Puts every pinned site back on its slot, keeping the relative order of the rest.
fn hold_pins(grid_sites: Vec<Site>) -> Vec<Site> {
    let (pinned, free) = split_pinned(&grid_sites);
    let pinned = pinned.into_iter().map(|(k, s)| (k, s.clone())).collect();
    let free = free.into_iter().cloned().collect();
    place_pinned(pinned, free)
}

/// Reconciles the grid with a fresh provider list while holding pinned tiles in place.
///
/// Pins come from the current state. Unpinned slots take the incoming sites
/// whose url is not already claimed, in incoming order.
pub fn data_updated(state: &GridSitesState, sites_data: &[Site]) -> GridSitesState {
    let (pinned, _) = split_pinned(&state.grid_sites);

    let mut claimed: HashSet<&str> = HashSet::new();
    let mut pinned_queue: VecDeque<(usize, Site)> = VecDeque::new();
    for (k, site) in pinned {
        if claimed.insert(site.url.as_str()) {
            pinned_queue.push_back((k, site.clone()));
        }
    }

    let mut fillers: VecDeque<Site> = VecDeque::new();
    for site in sites_data {
        if claimed.insert(site.url.as_str()) {
            fillers.push_back(site.clone());
        }
    }

    let merged = place_pinned(pinned_queue, fillers);

    log::debug!(
        "[GridSites] Data updated: {} incoming, {} in grid",
        sites_data.len(),
        merged.len()
    );

    GridSitesState {
        grid_sites: merged,
        ..state.clone()
    }
}

/// Pins the site at its current index, or unpins it if already pinned.
pub fn toggle_site_pinned(state: &GridSitesState, site: &Site) -> GridSitesState {
    let mut next = state.clone();
    match next.position_of(&site.url) {
        Some(index) => {
            let entry = &mut next.grid_sites[index];
            entry.pinned_index = match entry.pinned_index {
                Some(_) => None,
                None => Some(index),
            };
            log::debug!(
                "[GridSites] Toggled pin for {}: {:?}",
                entry.url,
                entry.pinned_index
            );
        }
        None => log::debug!("[GridSites] Pin toggle ignored, not in grid: {}", site.url),
    }
    next
}

/// Takes the site out of the grid and records it for undo. Other pins stay put.
pub fn remove_site(state: &GridSitesState, site: &Site) -> GridSitesState {
    let Some(index) = state.position_of(&site.url) else {
        log::debug!("[GridSites] Remove ignored, not in grid: {}", site.url);
        return state.clone();
    };

    let mut next = state.clone();
    let removed = next.grid_sites.remove(index);
    next.grid_sites = hold_pins(next.grid_sites);
    log::debug!("[GridSites] Removed {} from position {}", removed.url, index);
    next.removed_sites.push(removed);
    next
}

/// Puts the most recently removed site back, unless its url has reappeared meanwhile.
///
/// The undo entry is consumed either way. Unpinned sites go to the end,
/// pinned ones back to their slot.
pub fn undo_remove_site(state: &GridSitesState) -> GridSitesState {
    let mut next = state.clone();
    let Some(site) = next.removed_sites.pop() else {
        return next;
    };

    if next.contains_url(&site.url) {
        log::debug!("[GridSites] Undo dropped, url already in grid: {}", site.url);
    } else {
        log::debug!("[GridSites] Restored {}", site.url);
        next.grid_sites.push(site);
        next.grid_sites = hold_pins(next.grid_sites);
    }
    next
}

/// Replays the whole undo log, oldest removal first. The log ends up empty.
pub fn undo_remove_all_sites(state: &GridSitesState) -> GridSitesState {
    let mut next = state.clone();
    let removed = std::mem::take(&mut next.removed_sites);
    let total = removed.len();
    let mut restored = 0;

    for site in removed {
        if next.contains_url(&site.url) {
            continue;
        }
        next.grid_sites.push(site);
        restored += 1;
    }
    if restored > 0 {
        next.grid_sites = hold_pins(next.grid_sites);
    }

    log::debug!("[GridSites] Undo all: restored {} of {}", restored, total);
    next
}

/// Appends sites whose url is new to the grid (and to the batch itself).
pub fn add_site_or_sites(state: &GridSitesState, sites: impl Into<SiteOrSites>) -> GridSitesState {
    let mut next = state.clone();
    let mut urls: HashSet<String> = next.grid_sites.iter().map(|s| s.url.clone()).collect();

    for site in sites.into().into_vec() {
        if urls.insert(site.url.clone()) {
            next.grid_sites.push(site);
        }
    }
    next.grid_sites = hold_pins(next.grid_sites);
    next
}

pub fn add_site(state: &GridSitesState, site: Site) -> GridSitesState {
    add_site_or_sites(state, site)
}

pub fn add_sites(state: &GridSitesState, sites: Vec<Site>) -> GridSitesState {
    add_site_or_sites(state, sites)
}

pub fn show_site_removed_notification(state: &GridSitesState, flag: bool) -> GridSitesState {
    GridSitesState {
        should_show_site_removed_notification: flag,
        ..state.clone()
    }
}
