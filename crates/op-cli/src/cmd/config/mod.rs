use addresses::AddressesCommand;
use clap::Subcommand;
use networks::NetworksCommand;
use op_cli_runner::CliContext;
use op_registry::Registry;
use rollups::RollupsCommand;

use crate::common::OutputFormat;

mod addresses;
mod networks;
mod rollups;

pub use addresses::{address_records, AddressRecord};
pub use rollups::{rollup_records, RollupRecord};

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    #[command(name = "networks")]
    Networks(NetworksCommand),

    #[command(name = "rollups")]
    Rollups(RollupsCommand),

    #[command(name = "addresses")]
    Addresses(AddressesCommand),
}

impl ConfigCommands {
    pub async fn execute(
        self,
        ctx: CliContext,
        registry: &Registry,
        fmt: OutputFormat,
    ) -> eyre::Result<()> {
        match self {
            ConfigCommands::Networks(networks) => networks.execute(ctx, registry, fmt).await,
            ConfigCommands::Rollups(rollups) => rollups.execute(ctx, registry, fmt).await,
            ConfigCommands::Addresses(addresses) => addresses.execute(ctx, registry, fmt).await,
        }
    }
}
