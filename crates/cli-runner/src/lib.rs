//! Entrypoint for running commands.
//!
//! Every `op` invocation runs exactly one command to completion on a
//! current-thread runtime. There is no background work and no cancellation
//! path: the command either returns or the process is killed.

use std::{
    future::Future,
    time::{Duration, Instant},
};

use tracing::debug;

/// Executes CLI commands.
#[derive(Debug)]
pub struct CliRunner {
    tokio_runtime: tokio::runtime::Runtime,
}

impl CliRunner {
    /// Creates a new runner backed by a fresh current-thread runtime.
    pub fn try_default_runtime() -> Result<Self, std::io::Error> {
        Ok(Self { tokio_runtime: tokio_runtime()? })
    }

    /// Executes the given _async_ command on the tokio runtime until the command future
    /// resolves.
    pub fn run_command_until_exit<F, E>(
        self,
        command: impl FnOnce(CliContext) -> F,
    ) -> Result<(), E>
    where
        F: Future<Output = Result<(), E>>,
    {
        let ctx = CliContext::new();
        let started_at = ctx.started_at;
        let result = self.tokio_runtime.block_on(command(ctx));
        debug!(target: "op::cli", elapsed = ?started_at.elapsed(), ok = result.is_ok(), "command finished");
        result
    }
}

/// Additional context provided by the [`CliRunner`] when executing commands.
#[derive(Debug, Clone, Copy)]
pub struct CliContext {
    started_at: Instant,
}

impl CliContext {
    fn new() -> Self {
        Self { started_at: Instant::now() }
    }

    /// Time since the runner handed this context to the command.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Creates a new current-thread tokio runtime with IO and timers enabled.
pub fn tokio_runtime() -> Result<tokio::runtime::Runtime, std::io::Error> {
    tokio::runtime::Builder::new_current_thread().enable_all().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_command_to_completion() {
        let runner = CliRunner::try_default_runtime().unwrap();
        let result: Result<(), String> = runner.run_command_until_exit(|ctx| async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            assert!(ctx.elapsed() >= Duration::from_millis(5));
            Ok(())
        });
        assert!(result.is_ok());
    }

    #[test]
    fn propagates_command_error() {
        let runner = CliRunner::try_default_runtime().unwrap();
        let result: Result<(), String> =
            runner.run_command_until_exit(|_| async { Err("boom".to_string()) });
        assert_eq!(result.unwrap_err(), "boom");
    }
}
