//! Blocking execution of external programs.
//!
//! The orchestrator never calls [`std::process::Command`] directly; it goes
//! through a [`CommandRunner`], so tests can substitute a runner that records
//! invocations and returns chosen exit codes.

use std::{
    ffi::OsString,
    path::Path,
    process::{Command, Stdio},
};

use tracing::debug;

use crate::error::IndexError;

/// Outcome of one external program run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolStatus {
    /// Exit code, or `None` when the process was killed by a signal.
    pub code: Option<i32>,
    /// Captured standard error, lossily decoded.
    pub stderr: String,
}

impl ToolStatus {
    /// A successful run with no diagnostic output.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            code: Some(0),
            stderr: String::new(),
        }
    }

    /// A run that exited with `code`.
    #[must_use]
    pub fn exited(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stderr: stderr.into(),
        }
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

/// Runs an external program to completion.
pub trait CommandRunner {
    /// Runs `program` with `args`, blocking until it exits.
    ///
    /// `tool` names the program's role for error messages. An error is
    /// returned only when the program could not be started; a non-zero exit
    /// is reported through the returned [`ToolStatus`].
    fn run(
        &self,
        tool: &'static str,
        program: &Path,
        args: &[OsString],
    ) -> Result<ToolStatus, IndexError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(
        &self,
        tool: &'static str,
        program: &Path,
        args: &[OsString],
    ) -> Result<ToolStatus, IndexError> {
        (**self).run(tool, program, args)
    }
}

/// Runs programs as real child processes. No timeout is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        tool: &'static str,
        program: &Path,
        args: &[OsString],
    ) -> Result<ToolStatus, IndexError> {
        debug!(tool, program = ?program, args = ?args, "Launching external tool");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| IndexError::ToolSpawn {
                source,
                tool,
                program: program.to_path_buf(),
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !stderr.is_empty() {
            debug!(tool, stderr = %stderr, "External tool diagnostics");
        }

        Ok(ToolStatus {
            code: output.status.code(),
            stderr,
        })
    }
}
