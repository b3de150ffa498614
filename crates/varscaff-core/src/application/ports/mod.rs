//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `varscaff-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation, existence checks, writes
//!   - `InventorySource`: listing command or direct file read
//!   - `TemplateProvider`: static template text
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, InventorySource, TemplateProvider};

#[cfg(test)]
pub use output::{MockFilesystem, MockInventorySource, MockTemplateProvider};
