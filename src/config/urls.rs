//! Remote repository URLs

/// Maven Central, used when no repository is given on the command line,
/// in the environment, or in the global config file
pub const MAVEN_CENTRAL: &str = "https://repo.maven.apache.org/maven2";
