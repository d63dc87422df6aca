use clap::Parser;
use op_cli_runner::CliContext;
use op_registry::Registry;
use prettytable::{row, Row};
use tracing::info;

use crate::{
    common::{ChainIdArgs, OutputFormat, RpcArgs},
    output::{print_output, TableRecord},
    owners::{connect, resolve_ownership, OwnerRecord},
};

#[derive(Debug, Parser)]
#[clap(about = "Resolve the owners of a rollup's L1 contracts.")]
pub struct OwnersCommand {
    #[clap(flatten)]
    chain: ChainIdArgs,

    #[clap(flatten)]
    rpc: RpcArgs,
}

impl OwnersCommand {
    pub async fn execute(
        self,
        ctx: CliContext,
        registry: &Registry,
        fmt: OutputFormat,
    ) -> eyre::Result<()> {
        let Self { chain, rpc } = self;

        let chain = registry.select_one(chain.chain_id())?;
        let rpc_url = registry.l1_rpc_url(chain)?;
        let reader = connect(rpc_url, rpc.timeout(), chain.l1_chain_id).await?;

        let owners = resolve_ownership(&reader, chain).await?;
        info!(
            target: "op::owners",
            chain_id = chain.chain_id,
            contracts = owners.len(),
            elapsed = ?ctx.elapsed(),
            "resolved ownership"
        );

        print_output(&owners, fmt)
    }
}

impl TableRecord for OwnerRecord {
    fn header() -> Row {
        row![b -> "Name", b -> "Owner", b -> "Type"]
    }

    fn row(&self) -> Row {
        row![self.name, self.owner, self.kind]
    }
}
