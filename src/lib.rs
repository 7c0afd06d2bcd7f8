// New Tab Sites Library Entry Point
// Top sites grid state, its persistence and the featured cards settings.
// The view layer owns rendering and calls into these modules.

pub mod error;
pub mod settings;

// Shared state
pub mod state;

// Pure logic modules
pub mod modules;

pub use error::StorageError;
pub use modules::grid_sites::{GridSitesAction, SiteOrSites};
pub use modules::session::GridSitesSession;
pub use state::{GridSitesState, Site, TopSite};
