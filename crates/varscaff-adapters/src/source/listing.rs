//! Inventory source that shells out to `ansible-inventory --list`.
//!
//! The listing command resolves plugins, `group_vars` and dynamic scripts,
//! then prints the flat JSON shape. Any reason it cannot do so (not
//! installed, non-zero exit, empty output) makes this source decline, so
//! the next source gets a turn.

use std::{path::Path, process::Command};

use serde_json::Value;
use tracing::{debug, instrument, warn};
use varscaff_core::{
    application::ports::InventorySource, domain::DomainError, error::VarscaffResult,
};

/// Program looked up on `PATH` when none is configured.
pub const DEFAULT_LISTING_COMMAND: &str = "ansible-inventory";

/// Runs `<program> -i <path> --list` and parses its JSON output.
#[derive(Debug, Clone)]
pub struct ListingCommandSource {
    program: String,
}

impl ListingCommandSource {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for ListingCommandSource {
    fn default() -> Self {
        Self::new(DEFAULT_LISTING_COMMAND)
    }
}

impl InventorySource for ListingCommandSource {
    fn name(&self) -> &'static str {
        "listing-command"
    }

    #[instrument(skip_all, fields(program = %self.program, path = %path.display()))]
    fn acquire(&self, path: &Path) -> VarscaffResult<Option<Value>> {
        let program = match which::which(&self.program) {
            Ok(program) => program,
            Err(e) => {
                debug!(error = %e, "Listing command not found");
                return Ok(None);
            }
        };

        let output = match Command::new(&program)
            .arg("-i")
            .arg(path)
            .arg("--list")
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                warn!(error = %e, "Listing command could not be started");
                return Ok(None);
            }
        };

        if !output.status.success() {
            debug!(
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "Listing command failed"
            );
            return Ok(None);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.trim().is_empty() {
            debug!("Listing command printed nothing");
            return Ok(None);
        }

        let document = serde_json::from_str(&stdout).map_err(|e| {
            DomainError::invalid_structure(
                format!("{} -i {} --list", program.display(), path.display()),
                format!("output is not valid JSON: {e}"),
            )
        })?;
        Ok(Some(document))
    }
}
