//! Inventory source adapters.
//!
//! Sources are consulted in order by `InventoryService`; the first one to
//! return a document wins.

mod fixed;
mod listing;
mod yaml;

pub use fixed::StaticSource;
pub use listing::{DEFAULT_LISTING_COMMAND, ListingCommandSource};
pub use yaml::YamlFileSource;
