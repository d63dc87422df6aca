//! Diagnostic logging. Logs go to stderr so stdout only carries command output.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use std::io;

/// The verbosity level.
pub type Verbosity = u8;

/// Level used when `RUST_LOG` is not set.
pub fn default_level(verbosity: Verbosity, debug: bool) -> LevelFilter {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if debug {
        level.max(LevelFilter::DEBUG)
    } else {
        level
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the flags.
pub fn init_tracing(verbosity: Verbosity, debug: bool) -> eyre::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbosity, debug).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|err| eyre::eyre!("failed to initialize logging: {err}"))
}
