//! CLI implementation for fetching a single artifact
//!
//! Resolves settings from flags, environment and the global config file,
//! then hands off to [`crate::core::ensure::ensure`].

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::output::{create_spinner, status, OutputConfig};
use crate::cli::Cli;
use crate::core::ensure::{ensure, EnsureOptions, EnsureOutcome};
use crate::core::global_config::GlobalConfig;
use crate::core::resolver::LocalRepository;
use crate::infra::dirs::MvnfetchDirs;
use crate::infra::process::SystemRunner;

/// Settings resolved once at startup and fixed for the rest of the run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Local repository the artifact is cached in
    pub repository: LocalRepository,
    /// Fetch options
    pub options: EnsureOptions,
}

impl Settings {
    /// Resolve settings with precedence flag > environment > config file > default
    pub fn resolve(cli: &Cli, dirs: &MvnfetchDirs, config: &GlobalConfig) -> Self {
        let root: PathBuf = cli
            .local_repository
            .clone()
            .or_else(|| dirs.local_repository_override())
            .or_else(|| config.local_repository.clone())
            .unwrap_or_else(MvnfetchDirs::default_local_repository);

        // MVNFETCH_REPOSITORY is folded into the flag by clap
        let repository_url = cli
            .repository
            .clone()
            .unwrap_or_else(|| config.repository_url().to_string());

        Self {
            repository: LocalRepository::new(root),
            options: EnsureOptions {
                repository_url,
                maven_command: config.maven_command().to_string(),
            },
        }
    }
}

/// Execute the fetch
pub fn execute(cli: &Cli, output: &OutputConfig) -> Result<()> {
    let dirs = MvnfetchDirs::new();
    let config = GlobalConfig::load(&dirs).context("Failed to load global configuration")?;
    let settings = Settings::resolve(cli, &dirs, &config);

    if let Some(src) = &cli.src {
        tracing::debug!("Ignoring --src {} (reserved)", src.display());
    }
    tracing::debug!(
        "Local repository: {}",
        settings.repository.root().display()
    );

    let spinner = output
        .is_interactive()
        .then(|| create_spinner(&format!("Resolving {}", cli.artifact)));

    let result = ensure(
        &settings.repository,
        &SystemRunner::new(),
        &settings.options,
        &cli.artifact,
        &cli.dest,
    );

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let outcome = result.with_context(|| format!("Failed to fetch artifact '{}'", cli.artifact))?;
    report(&outcome, output)
}

fn report(outcome: &EnsureOutcome, output: &OutputConfig) -> Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }
    if output.quiet {
        return Ok(());
    }

    let source = if outcome.fetched { "fetched" } else { "cached" };
    println!(
        "{} {} ({source}) -> {}",
        status::SUCCESS,
        outcome.coordinate,
        outcome.destination.display()
    );
    Ok(())
}
