//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `VARSCAFF_<SECTION>__<KEY>`, e.g.
//!    `VARSCAFF_OUTPUT__ROOT=./ansible`
//! 3. Config file: `--config <FILE>`, otherwise the platform config file
//!    and then `.varscaff.toml` in the current directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use varscaff_adapters::{DEFAULT_LISTING_COMMAND, DEFAULT_TEMPLATE_DIR};
use varscaff_core::application::DEFAULT_HOST_TEMPLATE;

/// File name of the per-project config file.
pub const LOCAL_CONFIG_FILE: &str = ".varscaff.toml";

const ENV_PREFIX: &str = "VARSCAFF";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the inventory comes from.
    pub inventory: InventoryConfig,
    /// Where scaffolded files go.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Inventory used when none is given on the command line.
    pub path: PathBuf,
    /// Program run as `<program> -i <path> --list`.
    pub listing_command: String,
    /// Whether to try the listing command before reading the file.
    pub use_listing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving `group_vars/` and `host_vars/`.
    pub root: PathBuf,
    pub no_color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub dir: PathBuf,
    /// Template file (inside `dir`) copied into every new host vars file.
    pub host_template: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            inventory: InventoryConfig {
                path: PathBuf::from("inventory/hosts.yml"),
                listing_command: DEFAULT_LISTING_COMMAND.into(),
                use_listing: true,
            },
            output: OutputConfig {
                root: PathBuf::from("."),
                no_color: false,
            },
            templates: TemplateConfig {
                dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
                host_template: DEFAULT_HOST_TEMPLATE.into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the default locations are consulted and silently
    /// skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode default configuration")?;

        let mut builder = Config::builder().add_source(defaults);
        builder = match config_file {
            Some(path) => builder.add_source(toml_file(path).required(true)),
            None => builder
                .add_source(toml_file(&Self::config_path()).required(false))
                .add_source(toml_file(Path::new(LOCAL_CONFIG_FILE)).required(false)),
        };

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.varscaff.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "varscaff", "varscaff")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_conventional_layout() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.inventory.path, PathBuf::from("inventory/hosts.yml"));
        assert_eq!(cfg.inventory.listing_command, "ansible-inventory");
        assert!(cfg.inventory.use_listing);
        assert_eq!(
            cfg.templates.dir,
            PathBuf::from("scripts/templates/scaffolding")
        );
        assert_eq!(cfg.templates.host_template, "host_vars_item.yml");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        std::fs::write(
            &path,
            "[output]\nroot = \"./ansible\"\n\n[inventory]\nuse_listing = false\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.output.root, PathBuf::from("./ansible"));
        assert!(!cfg.inventory.use_listing);
        // Untouched keys keep their defaults.
        assert_eq!(cfg.inventory.listing_command, "ansible-inventory");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
