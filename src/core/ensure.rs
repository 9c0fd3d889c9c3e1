//! Artifact fetch orchestration
//!
//! Makes an artifact available at a destination path in three steps:
//!
//! 1. **Check** - resolve the cache path; a cached file skips straight to copy
//! 2. **Fetch** - run Maven's dependency plugin, then verify the file landed
//! 3. **Copy** - create the destination's parent directory and copy the file
//!
//! Nothing is retried and nothing is cleaned up on failure. A copy failure
//! after a successful fetch leaves the cached file in place for next time.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::defaults::{COPY_COMMAND, DEPENDENCY_PLUGIN, MAVEN_COMMAND};
use crate::config::urls::MAVEN_CENTRAL;
use crate::core::coordinate::Coordinate;
use crate::core::resolver::LocalRepository;
use crate::error::EnsureError;
use crate::infra::filesystem;
use crate::infra::process::CommandRunner;

/// Options for [`ensure`]
#[derive(Debug, Clone)]
pub struct EnsureOptions {
    /// Remote repository base URL passed to the fetch command
    pub repository_url: String,
    /// Executable that performs the fetch
    pub maven_command: String,
}

impl Default for EnsureOptions {
    fn default() -> Self {
        Self {
            repository_url: MAVEN_CENTRAL.to_string(),
            maven_command: MAVEN_COMMAND.to_string(),
        }
    }
}

/// Result of a successful [`ensure`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnsureOutcome {
    /// The coordinate that was requested
    pub coordinate: Coordinate,
    /// Where the artifact lives in the local repository
    pub cache_path: PathBuf,
    /// Where the artifact was copied to
    pub destination: PathBuf,
    /// Whether the fetch command ran (false on a cache hit)
    pub fetched: bool,
}

/// Make the artifact named by `coordinate` available at `destination`
pub fn ensure(
    repository: &LocalRepository,
    runner: &dyn CommandRunner,
    options: &EnsureOptions,
    coordinate: &str,
    destination: &Path,
) -> Result<EnsureOutcome, EnsureError> {
    let coordinate = Coordinate::parse(coordinate)?;
    let cache_path = repository.path_for(&coordinate);

    let fetched = if filesystem::file_exists(&cache_path) {
        tracing::debug!("Cache hit for {coordinate}: {}", cache_path.display());
        if coordinate.is_snapshot() {
            tracing::debug!("{coordinate} is a SNAPSHOT; using the cached copy without refreshing");
        }
        false
    } else {
        fetch(repository, runner, options, &coordinate, &cache_path)?;
        true
    };

    copy(runner, &cache_path, destination)?;

    Ok(EnsureOutcome {
        coordinate,
        cache_path,
        destination: destination.to_path_buf(),
        fetched,
    })
}

/// Arguments for the Maven dependency plugin's `get` goal
pub fn fetch_args(
    repository: &LocalRepository,
    repository_url: &str,
    coordinate: &Coordinate,
) -> Vec<OsString> {
    // The root is appended as raw OS bytes so Maven writes where we look
    let mut repo_local = OsString::from("-Dmaven.repo.local=");
    repo_local.push(repository.root());

    vec![
        OsString::from("-B"),
        OsString::from(format!("{DEPENDENCY_PLUGIN}:get")),
        OsString::from(format!("-DremoteRepositories={repository_url}")),
        OsString::from(format!("-Dartifact={}", coordinate.maven_artifact())),
        repo_local,
    ]
}

fn fetch(
    repository: &LocalRepository,
    runner: &dyn CommandRunner,
    options: &EnsureOptions,
    coordinate: &Coordinate,
    cache_path: &Path,
) -> Result<(), EnsureError> {
    tracing::info!("Fetching {coordinate} from {}", options.repository_url);

    let args = fetch_args(repository, &options.repository_url, coordinate);
    runner
        .run(&options.maven_command, &args)
        .map_err(|source| EnsureError::FetchCommand {
            coordinate: coordinate.to_string(),
            repository: options.repository_url.clone(),
            source,
        })?;

    if !filesystem::file_exists(cache_path) {
        return Err(EnsureError::FetchVerification {
            coordinate: coordinate.to_string(),
            path: cache_path.to_path_buf(),
        });
    }

    tracing::debug!("Fetched {}", cache_path.display());
    Ok(())
}

fn copy(runner: &dyn CommandRunner, from: &Path, to: &Path) -> Result<(), EnsureError> {
    if filesystem::ensure_parent_dir(to).map_err(|source| EnsureError::CreateDestinationDir {
        destination: to.to_path_buf(),
        source,
    })? {
        tracing::debug!("Created parent directory for {}", to.display());
    }

    tracing::info!("Copying {} to {}", from.display(), to.display());

    // `--` keeps paths starting with `-` from being read as options
    let args = vec![
        OsString::from("--"),
        from.as_os_str().to_owned(),
        to.as_os_str().to_owned(),
    ];
    runner
        .run(COPY_COMMAND, &args)
        .map_err(|source| EnsureError::CopyCommand {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })?;

    Ok(())
}
