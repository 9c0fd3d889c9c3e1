//! Output formatting and progress indicators
//!
//! This module sets up logging and provides helpers for spinners and
//! status messages.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// How much the tool prints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Suppress all output except errors
    pub quiet: bool,
    /// Print the result as JSON on stdout
    pub json: bool,
    /// Verbosity level (0 = warnings, 1 = info, 2+ = debug)
    pub verbose: u8,
}

impl OutputConfig {
    /// Create an output configuration from CLI flags
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Most verbose level enabled by default
    ///
    /// `RUST_LOG` directives are applied on top of this.
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }

    /// Whether human-readable progress and summaries should be shown
    pub fn is_interactive(&self) -> bool {
        !self.quiet && !self.json
    }

    /// Initialize the global tracing subscriber
    ///
    /// Logs go to stderr so stdout stays clean for `--json`.
    pub fn init_tracing(&self) {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive(self.log_level().into()))
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

/// Create a spinner for operations with unknown duration
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_follows_flags() {
        assert_eq!(OutputConfig::new(false, false, 0).log_level(), Level::WARN);
        assert_eq!(OutputConfig::new(false, false, 1).log_level(), Level::INFO);
        assert_eq!(OutputConfig::new(false, false, 3).log_level(), Level::DEBUG);
        assert_eq!(OutputConfig::new(true, false, 2).log_level(), Level::ERROR);
    }

    #[test]
    fn test_interactive_only_without_quiet_or_json() {
        assert!(OutputConfig::default().is_interactive());
        assert!(!OutputConfig::new(true, false, 0).is_interactive());
        assert!(!OutputConfig::new(false, true, 0).is_interactive());
    }
}
