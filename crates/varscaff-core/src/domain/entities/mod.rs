pub mod environment;
pub mod inventory;
pub mod raw;
pub mod scaffold_target;

pub use environment::{DetectionStrategy, EnvironmentList};
pub use inventory::{CanonicalInventory, GroupRecord};
pub use raw::RawInventory;
pub use scaffold_target::{ScaffoldOutcome, ScaffoldReport, ScaffoldTarget};
