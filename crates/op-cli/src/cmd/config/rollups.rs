use clap::Parser;
use op_cli_runner::CliContext;
use op_registry::{OpStackChain, Registry};
use prettytable::{row, Row};
use serde::Serialize;

use crate::{
    common::OutputFormat,
    output::{print_output, TableRecord},
};

#[derive(Debug, Parser)]
#[clap(about = "List every rollup with the network it belongs to.")]
pub struct RollupsCommand {}

impl RollupsCommand {
    pub async fn execute(
        self,
        _ctx: CliContext,
        registry: &Registry,
        fmt: OutputFormat,
    ) -> eyre::Result<()> {
        print_output(&rollup_records(registry), fmt)
    }
}

/// A rollup and the network it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct RollupRecord<'a> {
    pub network: &'a str,
    #[serde(flatten)]
    pub chain: &'a OpStackChain,
}

/// One record per rollup, in registry order.
pub fn rollup_records(registry: &Registry) -> Vec<RollupRecord<'_>> {
    registry
        .networks()
        .iter()
        .flat_map(|network| {
            network.chains.iter().map(move |chain| RollupRecord { network: &network.name, chain })
        })
        .collect()
}

impl TableRecord for RollupRecord<'_> {
    fn header() -> Row {
        row![b -> "Network", b -> "Name", b -> "ID", b -> "RPC"]
    }

    fn row(&self) -> Row {
        row![self.network, self.chain.name, self.chain.chain_id, self.chain.rpc_url]
    }
}
