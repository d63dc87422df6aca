use clap::{value_parser, Parser, ValueEnum};
use op_registry::{Registry, RegistryError, Superchains};
use tracing::debug;

use std::{path::PathBuf, time::Duration};

use consts::{DEFAULT_RPC_TIMEOUT, REGISTRY_PATH_ENV, RPC_TIMEOUT_ENV};

pub mod consts;

/// How command results are written to stdout.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    #[default]
    Table,
}

#[derive(Debug, Parser, Clone)]
pub struct ChainIdArgs {
    #[arg(
        short = 'c',
        long = "chain-id",
        value_name = "CHAIN_ID",
        help = "The chain id of the rollup. 0 is the same as leaving it out."
    )]
    chain_id: Option<u64>,
}

impl ChainIdArgs {
    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id.filter(|chain_id| *chain_id != 0)
    }
}

#[derive(Debug, Parser, Clone)]
pub struct RegistryArgs {
    #[arg(
        long = "registry",
        global = true,
        env = REGISTRY_PATH_ENV,
        value_name = "PATH",
        value_parser = value_parser!(PathBuf),
        help = "Read the superchain registry from a JSON file instead of the built-in one."
    )]
    registry_path: Option<PathBuf>,
}

impl RegistryArgs {
    /// Builds the registry from the selected source.
    pub fn load(&self) -> Result<Registry, RegistryError> {
        let source = match &self.registry_path {
            Some(path) => {
                debug!(target: "op::cli", path = %path.display(), "loading registry file");
                Superchains::from_path(path)?
            }
            None => Superchains::embedded()?,
        };
        Ok(Registry::from_source(&source))
    }
}

#[derive(Debug, Parser, Clone)]
pub struct RpcArgs {
    #[arg(
        long,
        env = RPC_TIMEOUT_ENV,
        value_name = "DURATION",
        default_value = DEFAULT_RPC_TIMEOUT,
        value_parser = parse_rpc_timeout,
        help = "Upper bound for every request sent to the L1 node, e.g. 10s or 1m."
    )]
    rpc_timeout: humantime::Duration,
}

impl RpcArgs {
    pub fn timeout(&self) -> Duration {
        *self.rpc_timeout
    }
}

/// Parse a non-zero humantime duration
fn parse_rpc_timeout(value: &str) -> Result<humantime::Duration, String> {
    let timeout: humantime::Duration =
        value.parse().map_err(|err: humantime::DurationError| err.to_string())?;
    if timeout.is_zero() {
        return Err("the RPC timeout must be greater than zero".into());
    }
    Ok(timeout)
}
