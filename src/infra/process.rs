//! External process execution
//!
//! Everything that spawns a program goes through [`CommandRunner`], so the
//! orchestration logic can be driven by [`RecordingRunner`] in tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

/// Process execution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    /// Program is not on PATH
    #[error("Command '{program}' not found in PATH")]
    NotFound { program: String },

    /// Program exists but could not be started
    #[error("Failed to run '{program}': {error}")]
    Spawn { program: String, error: String },

    /// Program ran and exited non-zero (or was killed by a signal)
    #[error("'{program}' exited with {}: {}", describe_code(.code), .stderr.trim())]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn describe_code(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Captured output of a successful command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output, lossily decoded
    pub stdout: String,
    /// Standard error, lossily decoded
    pub stderr: String,
}

/// Runs external programs to completion
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits
    ///
    /// Arguments are passed to the program byte for byte, so paths that
    /// are not valid UTF-8 survive. Returns [`ProcessError::Failed`] when
    /// the program exits non-zero.
    fn run(&self, program: &str, args: &[OsString]) -> Result<CommandOutput, ProcessError>;
}

/// Runs programs on the host with [`std::process::Command`]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner
    pub fn new() -> Self {
        Self
    }

    /// Resolve a program name to an executable path
    fn locate(program: &str) -> Result<PathBuf, ProcessError> {
        which::which(program).map_err(|_| ProcessError::NotFound {
            program: program.to_string(),
        })
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<CommandOutput, ProcessError> {
        let executable = Self::locate(program)?;
        tracing::debug!(
            "Running {} {}",
            executable.display(),
            args.iter()
                .map(|arg| arg.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let output = Command::new(&executable)
            .args(args)
            .output()
            .map_err(|e| ProcessError::Spawn {
                program: program.to_string(),
                error: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            // Maven reports most failures on stdout, so fall back to it
            let detail = if stderr.trim().is_empty() {
                failure_detail(&stdout)
            } else {
                stderr
            };
            return Err(ProcessError::Failed {
                program: program.to_string(),
                code: output.status.code(),
                stderr: detail,
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

/// Lines of stdout kept when a failing command printed no `[ERROR]` line
const FAILURE_TAIL_LINES: usize = 10;

/// Reduce a failing command's stdout to Maven's `[ERROR]` lines, or to its
/// last few lines when there are none
fn failure_detail(stdout: &str) -> String {
    let errors: Vec<&str> = stdout
        .lines()
        .filter(|line| line.contains("[ERROR]"))
        .collect();
    if !errors.is_empty() {
        return errors.join("\n");
    }

    let lines: Vec<&str> = stdout.lines().collect();
    lines[lines.len().saturating_sub(FAILURE_TAIL_LINES)..].join("\n")
}

/// A single invocation seen by [`RecordingRunner`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name as passed to [`CommandRunner::run`]
    pub program: String,
    /// Arguments as passed to [`CommandRunner::run`]
    pub args: Vec<OsString>,
}

type Responder = Box<dyn Fn(&Invocation) -> Result<CommandOutput, ProcessError>>;

/// Test double that records invocations and replays scripted responses
///
/// Responses are consumed in order. Once the script is exhausted every
/// invocation succeeds with empty output.
#[derive(Default)]
pub struct RecordingRunner {
    invocations: RefCell<Vec<Invocation>>,
    responses: RefCell<VecDeque<Responder>>,
}

impl RecordingRunner {
    /// Create a runner where every command succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    #[must_use]
    pub fn then_succeed(self) -> Self {
        self.then(|_| Ok(CommandOutput::default()))
    }

    /// Queue a non-zero exit for the next invocation
    #[must_use]
    pub fn then_fail(self, code: i32, stderr: &str) -> Self {
        let stderr = stderr.to_string();
        self.then(move |inv| {
            Err(ProcessError::Failed {
                program: inv.program.clone(),
                code: Some(code),
                stderr: stderr.clone(),
            })
        })
    }

    /// Queue a custom response, e.g. one that writes the fetched file
    #[must_use]
    pub fn then<F>(self, respond: F) -> Self
    where
        F: Fn(&Invocation) -> Result<CommandOutput, ProcessError> + 'static,
    {
        self.responses.borrow_mut().push_back(Box::new(respond));
        self
    }

    /// All invocations so far, in order
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// Program names invoked so far, in order
    pub fn programs(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(|inv| inv.program.clone())
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<CommandOutput, ProcessError> {
        let invocation = Invocation {
            program: program.to_string(),
            args: args.to_vec(),
        };
        self.invocations.borrow_mut().push(invocation.clone());

        let next = self.responses.borrow_mut().pop_front();
        match next {
            Some(respond) => respond(&invocation),
            None => Ok(CommandOutput::default()),
        }
    }
}

impl std::fmt::Debug for RecordingRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingRunner")
            .field("invocations", &self.invocations.borrow())
            .field("pending_responses", &self.responses.borrow().len())
            .finish()
    }
}
