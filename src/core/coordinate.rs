//! Artifact coordinates
//!
//! A coordinate names one jar in a Maven repository:
//! `package:target:version[:component]`, e.g. `org.apache.foo:bar:1.0:sources`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use crate::config::defaults::{PACKAGING, SNAPSHOT_SUFFIX};
use crate::error::CoordinateError;

/// A parsed artifact coordinate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinate {
    /// Dot-delimited namespace (Maven group id)
    pub package: String,
    /// Artifact name
    pub target: String,
    /// Version, possibly ending in `-SNAPSHOT`
    pub version: String,
    /// Optional classifier such as `sources` or `javadoc`
    pub component: Option<String>,
}

impl Coordinate {
    /// Parse a coordinate string
    ///
    /// Only the field count is validated: the string must split on `:` into
    /// exactly 3 or 4 fields.
    pub fn parse(input: &str) -> Result<Self, CoordinateError> {
        let fields: Vec<&str> = input.split(':').collect();

        match fields.as_slice() {
            [package, target, version] => Ok(Self::new(package, target, version, None)),
            [package, target, version, component] => {
                Ok(Self::new(package, target, version, Some(component)))
            }
            _ => Err(CoordinateError::InvalidFieldCount {
                coordinate: input.to_string(),
                count: fields.len(),
            }),
        }
    }

    fn new(package: &str, target: &str, version: &str, component: Option<&str>) -> Self {
        Self {
            package: package.to_string(),
            target: target.to_string(),
            version: version.to_string(),
            component: component.map(str::to_string),
        }
    }

    /// Version used in the file name
    ///
    /// Everything before the first `-SNAPSHOT`, or the whole version.
    pub fn normalized_version(&self) -> &str {
        match self.version.find(SNAPSHOT_SUFFIX) {
            Some(idx) => &self.version[..idx],
            None => &self.version,
        }
    }

    /// Whether this is a SNAPSHOT (pre-release) version
    pub fn is_snapshot(&self) -> bool {
        self.version.contains(SNAPSHOT_SUFFIX)
    }

    /// Jar file name: `{target}-{normalizedVersion}[-{component}].jar`
    pub fn file_name(&self) -> String {
        match &self.component {
            Some(component) => format!(
                "{}-{}-{component}.{PACKAGING}",
                self.target,
                self.normalized_version()
            ),
            None => format!("{}-{}.{PACKAGING}", self.target, self.normalized_version()),
        }
    }

    /// Directory relative to the repository root:
    /// `{package-segments...}/{target}/{version}`
    ///
    /// Uses the original version, SNAPSHOT suffix included.
    pub fn relative_dir(&self) -> PathBuf {
        let mut dir: PathBuf = self.package.split('.').collect();
        dir.push(&self.target);
        dir.push(&self.version);
        dir
    }

    /// File path relative to the repository root
    pub fn relative_path(&self) -> PathBuf {
        self.relative_dir().join(self.file_name())
    }

    /// Coordinate in the syntax the Maven dependency plugin expects
    ///
    /// The plugin reads a fourth field as packaging, so a component is passed
    /// as `package:target:version:jar:component`.
    pub fn maven_artifact(&self) -> String {
        match &self.component {
            Some(component) => format!(
                "{}:{}:{}:{PACKAGING}:{component}",
                self.package, self.target, self.version
            ),
            None => format!("{}:{}:{}", self.package, self.target, self.version),
        }
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.package, self.target, self.version)?;
        if let Some(component) = &self.component {
            write!(f, ":{component}")?;
        }
        Ok(())
    }
}
