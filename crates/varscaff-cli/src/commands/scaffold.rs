//! Default command: scaffold `group_vars/` and `host_vars/` from an inventory.
//!
//! Responsibility: merge CLI flags over the loaded config, wire the adapters
//! into the core services and print what happened. No inventory logic lives
//! here.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use varscaff_adapters::{DirectoryTemplates, ListingCommandSource, LocalFilesystem, YamlFileSource};
use varscaff_core::{
    application::{InventoryService, ScaffoldService, ports::InventorySource},
    domain::ScaffoldOutcome,
};

use crate::{
    cli::ScaffoldArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Effective settings for one run, CLI flags taking precedence over config.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldSettings {
    pub inventory: PathBuf,
    pub output_root: PathBuf,
    pub template_dir: PathBuf,
    pub host_template: String,
    /// `None` when the listing command is disabled.
    pub listing_command: Option<String>,
}

impl ScaffoldSettings {
    pub fn resolve(args: ScaffoldArgs, config: AppConfig) -> CliResult<Self> {
        let listing_command = if args.no_listing {
            None
        } else if let Some(program) = args.listing_command {
            Some(program)
        } else if config.inventory.use_listing {
            Some(config.inventory.listing_command)
        } else {
            None
        };

        if listing_command
            .as_deref()
            .is_some_and(|program| program.trim().is_empty())
        {
            return Err(CliError::InvalidInput {
                message: "the inventory listing command must not be empty".into(),
                source: None,
            });
        }

        Ok(Self {
            inventory: args.inventory.unwrap_or(config.inventory.path),
            output_root: args.output_root.unwrap_or(config.output.root),
            template_dir: args.template_dir.unwrap_or(config.templates.dir),
            host_template: config.templates.host_template,
            listing_command,
        })
    }

    /// Sources in the order they are consulted.
    fn sources(&self) -> Vec<Box<dyn InventorySource>> {
        let mut sources: Vec<Box<dyn InventorySource>> = Vec::with_capacity(2);
        if let Some(program) = &self.listing_command {
            sources.push(Box::new(ListingCommandSource::new(program.clone())));
        }
        sources.push(Box::new(YamlFileSource::new()));
        sources
    }
}

/// Execute a scaffold run.
///
/// Dispatch sequence:
/// 1. Resolve settings from flags and config
/// 2. Load the inventory through the source chain and detect environments
/// 3. Scaffold group vars, then host vars
/// 4. Report every file created or skipped as it happens
#[instrument(skip_all)]
pub fn execute(args: ScaffoldArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let settings = ScaffoldSettings::resolve(args, config)?;
    debug!(?settings, "Settings resolved");

    let loaded = InventoryService::new(settings.sources()).load(&settings.inventory)?;
    info!(source = loaded.source, "Inventory source used");

    if loaded.environments.is_empty() {
        output.warning("No environments detected in inventory")?;
    } else {
        output.info(&format!("Detected environments: {}", loaded.environments))?;
    }

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(DirectoryTemplates::new(&settings.template_dir)),
        &settings.output_root,
    )
    .with_host_template(&settings.host_template);

    // Lines go out as each target is handled, so a failure midway still
    // reports what was already written.
    let mut print_error = None;
    let report = service.scaffold_with_progress(
        &loaded.inventory,
        &loaded.environments,
        |path, outcome| {
            if print_error.is_none() {
                print_error = print_outcome(&output, path, outcome).err();
            }
        },
    )?;
    if let Some(err) = print_error {
        return Err(err.into());
    }

    info!(
        created = report.created_count(),
        skipped = report.skipped_count(),
        "Scaffold finished"
    );
    output.success(&format!(
        "Scaffold completed based on {}",
        settings.inventory.display()
    ))?;

    Ok(())
}

fn print_outcome(output: &OutputManager, path: &Path, outcome: ScaffoldOutcome) -> io::Result<()> {
    match outcome {
        ScaffoldOutcome::Created => output.created(path),
        ScaffoldOutcome::Skipped => output.skipped(path),
    }
}
