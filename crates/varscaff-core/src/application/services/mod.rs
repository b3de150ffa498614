//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "load an inventory" or "scaffold vars files".

pub mod inventory_service;
pub mod scaffold_service;

pub use inventory_service::{InventoryService, LoadedInventory};
pub use scaffold_service::{
    DEFAULT_HOST_TEMPLATE, GROUP_VARS_DIR, HOST_VARS_DIR, ScaffoldService,
};
