//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// Colour is also dropped when stdout is piped or redirected.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let no_color = args.no_color || config.output.no_color || !io::stdout().is_terminal();
        Self::with_settings(args.quiet, no_color)
    }

    fn with_settings(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `Created <path>`.
    pub fn created(&self, path: &Path) -> io::Result<()> {
        let line = if self.no_color {
            format!("Created {}", path.display())
        } else {
            format!("{} {}", "Created".green(), path.display())
        };
        self.print(&line)
    }

    /// `<path> exists, skipping`.
    pub fn skipped(&self, path: &Path) -> io::Result<()> {
        let line = format!("{} exists, skipping", path.display());
        if self.no_color {
            self.print(&line)
        } else {
            self.print(&line.dimmed().to_string())
        }
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_suppresses_print() {
        let out = OutputManager::with_settings(true, true);
        assert!(out.quiet);
        assert!(out.print("hello").is_ok());
        assert!(out.created(Path::new("group_vars/prod/web.yml")).is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        assert!(!OutputManager::with_settings(false, false).no_color);
        assert!(OutputManager::with_settings(false, true).no_color);
    }

    #[test]
    fn no_color_flag_wins_over_terminal() {
        let args = GlobalArgs {
            no_color: true,
            ..GlobalArgs::default()
        };
        let out = OutputManager::new(&args, &AppConfig::default());
        assert!(out.no_color);
    }

    #[test]
    fn config_can_disable_color() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&GlobalArgs::default(), &config);
        assert!(out.no_color);
    }
}
