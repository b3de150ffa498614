//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand the CLI scaffolds from the given inventory.
#[derive(Debug, Parser)]
#[command(
    name    = "varscaff",
    bin_name = "varscaff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold group_vars and host_vars from an Ansible inventory",
    long_about = "varscaff reads an Ansible inventory, detects its top-level \
                  environment groups and creates a placeholder vars file for \
                  every child group and host that does not have one yet. \
                  Existing files are never touched.",
    after_help = "EXAMPLES:\n\
        \x20 varscaff\n\
        \x20 varscaff inventory/staging.yml -o ./ansible\n\
        \x20 varscaff --no-listing --template-dir ./templates\n\
        \x20 varscaff completions bash > /usr/share/bash-completion/completions/varscaff",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Arguments for the default scaffold run.
    #[command(flatten)]
    pub scaffold: ScaffoldArgs,

    /// Subcommand to execute instead of scaffolding.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialise a varscaff configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 varscaff init           # platform config directory\n\
            \x20 varscaff init --local   # .varscaff.toml in CWD\n\
            \x20 varscaff init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 varscaff completions bash > ~/.local/share/bash-completion/completions/varscaff\n\
            \x20 varscaff completions zsh  > ~/.zfunc/_varscaff\n\
            \x20 varscaff completions fish > ~/.config/fish/completions/varscaff.fish"
    )]
    Completions(CompletionsArgs),
}

// ── scaffold ──────────────────────────────────────────────────────────────────

/// Arguments for the default scaffold run.
///
/// Every option falls back to the loaded configuration when omitted.
#[derive(Debug, Default, Args)]
pub struct ScaffoldArgs {
    /// Inventory file or directory handed to the listing command.
    #[arg(
        value_name = "INVENTORY",
        help = "Inventory path [default: inventory/hosts.yml]"
    )]
    pub inventory: Option<PathBuf>,

    /// Directory that receives `group_vars/` and `host_vars/`.
    #[arg(
        short = 'o',
        long = "output-root",
        value_name = "DIR",
        help = "Directory to create group_vars/ and host_vars/ in [default: .]"
    )]
    pub output_root: Option<PathBuf>,

    /// Directory holding `host_vars_item.yml`.
    #[arg(
        long = "template-dir",
        value_name = "DIR",
        help = "Template directory [default: scripts/templates/scaffolding]"
    )]
    pub template_dir: Option<PathBuf>,

    /// Program used to list the inventory as JSON.
    #[arg(
        long = "listing-command",
        value_name = "PROGRAM",
        conflicts_with = "no_listing",
        help = "Inventory listing program [default: ansible-inventory]"
    )]
    pub listing_command: Option<String>,

    /// Read the inventory file directly, never running the listing command.
    #[arg(long = "no-listing", help = "Skip the inventory listing command")]
    pub no_listing: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `varscaff init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.varscaff.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `varscaff completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_scaffolds_with_defaults() {
        let cli = Cli::parse_from(["varscaff"]);
        assert!(cli.command.is_none());
        assert!(cli.scaffold.inventory.is_none());
        assert!(!cli.scaffold.no_listing);
    }

    #[test]
    fn positional_inventory_and_options() {
        let cli = Cli::parse_from([
            "varscaff",
            "inventory/prod.yml",
            "-o",
            "out",
            "--template-dir",
            "tpl",
            "--no-listing",
        ]);
        assert_eq!(
            cli.scaffold.inventory.as_deref(),
            Some(std::path::Path::new("inventory/prod.yml"))
        );
        assert_eq!(cli.scaffold.output_root, Some(PathBuf::from("out")));
        assert_eq!(cli.scaffold.template_dir, Some(PathBuf::from("tpl")));
        assert!(cli.scaffold.no_listing);
    }

    #[test]
    fn init_is_a_subcommand() {
        let cli = Cli::parse_from(["varscaff", "init", "--force"]);
        assert!(matches!(cli.command, Some(Commands::Init(InitArgs { force: true, .. }))));
    }

    #[test]
    fn global_flags_reach_subcommands() {
        let cli = Cli::parse_from(["varscaff", "completions", "zsh", "-vv"]);
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn listing_command_conflicts_with_no_listing() {
        let result = Cli::try_parse_from([
            "varscaff",
            "--listing-command",
            "my-inventory",
            "--no-listing",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["varscaff", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }
}
