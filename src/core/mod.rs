//! Core business logic module
//!
//! Side effects go through [`crate::infra`]; path computation here is pure.
//!
//! # Submodules
//!
//! - [`coordinate`] - Artifact coordinate parsing
//! - [`resolver`] - Local repository path resolution
//! - [`ensure`] - Check, fetch and copy orchestration
//! - [`global_config`] - Global configuration management

pub mod coordinate;
pub mod ensure;
pub mod global_config;
pub mod resolver;
