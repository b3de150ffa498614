//! varscaff Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for varscaff, a tool
//! that scaffolds `group_vars/` and `host_vars/` trees from an Ansible
//! inventory, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          varscaff-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (InventoryService, ScaffoldService)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Source, Filesystem, Templates) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   varscaff-adapters (Infrastructure)    │
//! │ (ListingCommandSource, LocalFilesystem) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (RawInventory, normalize, detect)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use varscaff_core::domain::{RawInventory, detect, normalize};
//!
//! let raw = RawInventory::classify(
//!     json!({"all": {"children": {"prod": {"hosts": {"web1": null}}}}}),
//!     "inventory/hosts.yml",
//! )
//! .unwrap();
//! let inventory = normalize(&raw).unwrap();
//! assert_eq!(detect(&inventory).names(), ["prod"]);
//! ```

// Domain layer (pure inventory logic)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        InventoryService, LoadedInventory, ScaffoldService,
        ports::{Filesystem, InventorySource, TemplateProvider},
    };
    pub use crate::domain::{
        CanonicalInventory, DetectionStrategy, EnvironmentList, GroupRecord, RawInventory,
        ScaffoldOutcome, ScaffoldReport, ScaffoldTarget,
    };
    pub use crate::error::{VarscaffError, VarscaffResult};
}
