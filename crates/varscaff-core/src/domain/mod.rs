//! Core domain layer for varscaff.
//!
//! Pure inventory logic: shape classification, normalization, environment
//! detection and the scaffold target model. All I/O (running the listing
//! command, reading files, writing vars files) is handled via ports defined
//! in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, process or network calls
//! - **Immutable results**: normalized inventories are built once, then read
//!
pub mod common;
pub mod detect;
pub mod entities;
pub mod error;
pub mod normalize;

pub use common::{
    META_KEY, ROOT_GROUP, UNGROUPED_GROUP, ensure_file_stem, is_reserved, name_list,
};
pub use detect::detect;
pub use entities::{
    CanonicalInventory, DetectionStrategy, EnvironmentList, GroupRecord, RawInventory,
    ScaffoldOutcome, ScaffoldReport, ScaffoldTarget,
};
pub use error::{DomainError, DomainResult};
pub use normalize::{MAX_NESTING_DEPTH, normalize};
