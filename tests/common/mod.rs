//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use assert_fs::prelude::*;
use assert_fs::TempDir;

/// Fake `mvn` that records its arguments and optionally writes a jar
///
/// - `FAKE_MVN_LOG` - file the arguments are appended to
/// - `FAKE_MVN_OUTPUT` - file to create, simulating a download
/// - `FAKE_MVN_EXIT` - exit status (default 0)
const FAKE_MVN: &str = r#"#!/bin/sh
echo "$@" >> "$FAKE_MVN_LOG"
if [ -n "$FAKE_MVN_OUTPUT" ]; then
    mkdir -p "$(dirname "$FAKE_MVN_OUTPUT")"
    echo "fetched jar" > "$FAKE_MVN_OUTPUT"
fi
if [ -n "$FAKE_MVN_EXIT" ]; then
    echo "[ERROR] Failed to execute goal"
    exit "$FAKE_MVN_EXIT"
fi
exit 0
"#;

/// Test workspace context
///
/// A temporary directory holding a local repository, a config directory,
/// and a `bin/` directory with a fake `mvn` placed first on PATH.
pub struct TestWorkspace {
    /// Temporary directory for the test
    pub dir: TempDir,
}

impl TestWorkspace {
    /// Create a new workspace with the fake `mvn` installed
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        dir.child("bin/mvn")
            .write_str(FAKE_MVN)
            .expect("Failed to write fake mvn");
        make_executable(&dir.path().join("bin").join("mvn"));
        dir.child("config")
            .create_dir_all()
            .expect("Failed to create config dir");
        Self { dir }
    }

    /// Get the path to the workspace directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Local repository root used by every invocation
    pub fn repository(&self) -> PathBuf {
        self.dir.path().join("repository")
    }

    /// File the fake `mvn` logs its arguments to
    pub fn mvn_log(&self) -> PathBuf {
        self.dir.path().join("mvn.log")
    }

    /// Whether the fake `mvn` was invoked at all
    pub fn mvn_invoked(&self) -> bool {
        self.mvn_log().exists()
    }

    /// Arguments of the fake `mvn` invocations, one line each
    pub fn mvn_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.mvn_log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Pre-populate the local repository with a jar
    pub fn seed(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.repository().join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create cache dir");
        std::fs::write(&path, content).expect("Failed to seed cache");
        path
    }

    /// Write the global config file
    pub fn write_config(&self, content: &str) {
        self.dir
            .child("config/config.toml")
            .write_str(content)
            .expect("Failed to write config");
    }

    /// Build a `mvnfetch` command isolated to this workspace
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_mvnfetch"));
        cmd.current_dir(self.dir.path());
        cmd.env("PATH", self.search_path());
        cmd.env("MVNFETCH_CONFIG_DIR", self.dir.path().join("config"));
        cmd.env("MVNFETCH_LOCAL_REPOSITORY", self.repository());
        cmd.env("FAKE_MVN_LOG", self.mvn_log());
        cmd.env_remove("MVNFETCH_REPOSITORY");
        cmd.env_remove("FAKE_MVN_OUTPUT");
        cmd.env_remove("FAKE_MVN_EXIT");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Run `mvnfetch` with arguments
    pub fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .output()
            .expect("Failed to execute mvnfetch")
    }

    fn search_path(&self) -> OsString {
        let mut paths = vec![self.dir.path().join("bin")];
        if let Some(existing) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        std::env::join_paths(paths).expect("Failed to build PATH")
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = std::fs::metadata(path)
        .expect("Failed to stat fake mvn")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).expect("Failed to chmod fake mvn");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}

/// Decode stdout
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Decode stderr
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
