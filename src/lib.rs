//! mvnfetch - Fetch a Maven artifact and copy it into place
//!
//! Resolves an artifact coordinate to its file in the local Maven
//! repository, runs `mvn` to download it when missing, and copies the
//! cached file to a destination.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Coordinate parsing, path resolution and fetch orchestration
//! - [`infra`] - Infrastructure layer (filesystem, processes, directories)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
