use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{GateError, Result};

use super::command::CheckerRequest;

/// Captured result of one checker run. A non-zero exit status means
/// "diagnostics present", not a process failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerOutput {
    pub clean: bool,
    pub stdout: String,
}

/// Runs assembled checker requests.
pub trait CheckerInvoker {
    /// Run the checker synchronously and capture its stdout.
    ///
    /// # Errors
    /// Returns an error only when the process cannot be spawned or its
    /// output cannot be collected, never for a non-zero exit status.
    fn invoke(&self, request: &CheckerRequest) -> Result<CheckerOutput>;
}

/// Invoker that spawns the checker as a subprocess.
pub struct SystemChecker {
    program: String,
}

impl SystemChecker {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for SystemChecker {
    fn default() -> Self {
        Self::new(super::command::DEFAULT_PROGRAM)
    }
}

impl CheckerInvoker for SystemChecker {
    fn invoke(&self, request: &CheckerRequest) -> Result<CheckerOutput> {
        let spawn_error = |source| GateError::Checker {
            program: self.program.clone(),
            source,
        };

        let mut command = Command::new(&self.program);
        command.args(&request.args).stdout(Stdio::piped());
        if request.stdin.is_some() {
            command.stdin(Stdio::piped());
        } else {
            command.stdin(Stdio::null());
        }

        let mut child = command.spawn().map_err(spawn_error)?;

        if let Some(patch) = &request.stdin {
            // Dropping the handle closes the pipe so the checker sees EOF.
            let mut stdin = child.stdin.take().ok_or_else(|| {
                spawn_error(std::io::Error::other("stdin pipe not available"))
            })?;
            stdin.write_all(patch.as_bytes()).map_err(spawn_error)?;
        }

        let output = child.wait_with_output().map_err(spawn_error)?;

        Ok(CheckerOutput {
            clean: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
