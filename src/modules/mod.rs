// Module exports for pure logic
pub mod grid_sites;          // Grid transitions
pub mod grid_sites_store;    // Persistence layer
pub mod more_cards;          // Featured cards settings model
pub mod session;             // Live snapshot + dispatch
pub mod site_properties;     // Tile record generation
