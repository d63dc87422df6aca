use clap::Parser;
use op_cli_runner::CliContext;
use op_registry::{Network, Registry};
use prettytable::{row, Row};

use crate::{
    common::OutputFormat,
    output::{print_output, TableRecord},
};

#[derive(Debug, Parser)]
#[clap(about = "List the known networks and their rollups.")]
pub struct NetworksCommand {}

impl NetworksCommand {
    pub async fn execute(
        self,
        _ctx: CliContext,
        registry: &Registry,
        fmt: OutputFormat,
    ) -> eyre::Result<()> {
        print_output(registry.networks(), fmt)
    }
}

impl TableRecord for Network {
    fn header() -> Row {
        row![b -> "Name", b -> "Chains"]
    }

    fn row(&self) -> Row {
        let chains = self
            .chains
            .iter()
            .map(|chain| format!("{} ({})", chain.name, chain.chain_id))
            .collect::<Vec<_>>()
            .join(", ");
        row![self.name, chains]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::write_output;
    use op_registry::test_utils;

    #[test]
    fn test_network_row_lists_chains() {
        let registry = op_registry::Registry::from_source(&test_utils::source(vec![
            test_utils::superchain("mainnet", 1, "https://l1.example", &[10, 8453]),
        ]));
        let row = registry.networks()[0].row();
        assert_eq!(row.get_cell(0).unwrap().get_content(), "mainnet");
        assert_eq!(row.get_cell(1).unwrap().get_content(), "Rollup 10 (10), Rollup 8453 (8453)");
    }

    #[test]
    fn test_networks_json_in_registry_order() {
        let registry = test_utils::two_network_registry();
        let mut out = Vec::new();
        write_output(registry.networks(), OutputFormat::Json, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json[0]["name"], "N");
        assert_eq!(json[0]["chains"][0]["chain_id"], 10);
        assert_eq!(json[1]["name"], "M");
        assert_eq!(json[1]["chains"][0]["l1_chain_id"], 2);
    }
}
