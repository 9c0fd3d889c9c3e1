//! Error types for mvnfetch
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

use crate::infra::process::ProcessError;

/// Artifact coordinate errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// Coordinate does not split into 3 or 4 colon-delimited fields
    #[error(
        "Invalid artifact coordinate '{coordinate}': expected 3 or 4 ':'-separated fields \
         (package:target:version[:component]), got {count}"
    )]
    InvalidFieldCount { coordinate: String, count: usize },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },
}

/// Errors raised while making an artifact available at its destination
///
/// Every variant is fatal: nothing is retried and nothing already written
/// to disk is cleaned up.
#[derive(Error, Debug)]
pub enum EnsureError {
    /// Coordinate could not be parsed; raised before any I/O
    #[error(transparent)]
    InvalidCoordinate(#[from] CoordinateError),

    /// The fetch command failed to run or exited non-zero
    #[error("Failed to fetch '{coordinate}' from {repository}")]
    FetchCommand {
        coordinate: String,
        repository: String,
        #[source]
        source: ProcessError,
    },

    /// The fetch command succeeded but the artifact is still missing
    #[error("Fetch of '{coordinate}' reported success but '{path}' does not exist")]
    FetchVerification { coordinate: String, path: PathBuf },

    /// The destination's parent directory could not be created
    #[error("Failed to prepare destination '{destination}'")]
    CreateDestinationDir {
        destination: PathBuf,
        #[source]
        source: FilesystemError,
    },

    /// The copy command failed to run or exited non-zero
    #[error("Failed to copy '{from}' to '{to}'")]
    CopyCommand {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: ProcessError,
    },
}
