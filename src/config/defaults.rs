//! Default configuration values

/// Executable used to fetch artifacts into the local repository
pub const MAVEN_COMMAND: &str = "mvn";

/// Plugin goal prefix passed to Maven for single-artifact downloads
pub const DEPENDENCY_PLUGIN: &str = "org.apache.maven.plugins:maven-dependency-plugin:2.10";

/// Executable used to copy the cached artifact to its destination
pub const COPY_COMMAND: &str = "cp";

/// Packaging type of every artifact this tool resolves
pub const PACKAGING: &str = "jar";

/// Version suffix that marks a mutable pre-release build
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Local repository location relative to the user's home directory
pub const LOCAL_REPOSITORY_SUBDIR: &[&str] = &[".m2", "repository"];
