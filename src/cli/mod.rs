//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod fetch;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use output::OutputConfig;

/// mvnfetch - Fetch a Maven artifact and copy it into place
///
/// Looks the artifact up in the local Maven repository, downloads it with
/// `mvn` if it is missing, and copies it to the destination path.
#[derive(Parser, Debug)]
#[command(name = "mvnfetch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Remote repository base URL [default: Maven Central]
    #[arg(long, env = "MVNFETCH_REPOSITORY", value_name = "URL")]
    pub repository: Option<String>,

    /// Artifact coordinate: package:target:version[:component]
    #[arg(long, value_name = "COORDINATE")]
    pub artifact: String,

    /// Destination file path
    #[arg(long, value_name = "PATH")]
    pub dest: PathBuf,

    /// Source directory (reserved, currently unused)
    #[arg(long, value_name = "DIR")]
    pub src: Option<PathBuf>,

    /// Local repository root [default: ~/.m2/repository]
    #[arg(long, value_name = "DIR")]
    pub local_repository: Option<PathBuf>,

    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,

    /// Output the result as JSON for scripting
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Output settings derived from the flags
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new(self.quiet, self.json, self.verbose)
    }

    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let output = self.output_config();
        fetch::execute(&self, &output)
    }
}
