//! Test helpers for hello-sum integration tests.
//!
//! Runs the compiled binary with a clean logging environment and captures
//! its output.

use std::process::{Command, Output};

/// Captured result of one binary run.
pub struct RunResult {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

impl RunResult {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<Output> for RunResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        }
    }
}

/// Run `hello-sum` with `args`.
///
/// `HELLO_SUM_LOG` is removed so a developer's shell setting cannot leak
/// log lines into assertions on stderr.
pub fn run_bin(args: &[&str]) -> anyhow::Result<RunResult> {
    run_bin_with_env(args, &[])
}

/// Run `hello-sum` with `args` and extra environment variables.
///
/// Any inherited `HELLO_SUM_LOG` is removed before `envs` are applied.
pub fn run_bin_with_env(args: &[&str], envs: &[(&str, &str)]) -> anyhow::Result<RunResult> {
    let output = Command::new(env!("CARGO_BIN_EXE_hello-sum"))
        .args(args)
        .env_remove("HELLO_SUM_LOG")
        .envs(envs.iter().copied())
        .output()?;
    Ok(output.into())
}
