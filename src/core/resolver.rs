//! Local repository path resolution
//!
//! Maps an artifact coordinate to the file it occupies in the local Maven
//! repository:
//!
//! ```text
//! {root}/{package-segments...}/{target}/{version}/{target}-{normalizedVersion}[-{component}].jar
//! ```
//!
//! Pure path computation; nothing here touches the filesystem.

use std::path::{Path, PathBuf};

use crate::core::coordinate::Coordinate;
use crate::error::CoordinateError;

/// The local repository root, fixed for the lifetime of the process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRepository {
    root: PathBuf,
}

impl LocalRepository {
    /// Create a resolver rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The repository root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a coordinate string to its cache file path
    pub fn resolve(&self, coordinate: &str) -> Result<PathBuf, CoordinateError> {
        let coordinate = Coordinate::parse(coordinate)?;
        Ok(self.path_for(&coordinate))
    }

    /// Cache file path for an already parsed coordinate
    pub fn path_for(&self, coordinate: &Coordinate) -> PathBuf {
        self.root.join(coordinate.relative_path())
    }
}
