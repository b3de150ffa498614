//! Template provider adapters.

mod directory;
mod memory;

pub use directory::{DEFAULT_TEMPLATE_DIR, DirectoryTemplates};
pub use memory::InMemoryTemplates;
