use alloy_primitives::Address;
use clap::Parser;
use op_cli_runner::CliContext;
use op_registry::{L1Contract, Registry, RegistryError};
use prettytable::{row, Row};
use serde::Serialize;

use crate::{
    common::{ChainIdArgs, OutputFormat},
    output::{print_output, TableRecord},
};

#[derive(Debug, Parser)]
#[clap(about = "List the L1 contract addresses of one rollup, or of every rollup.")]
pub struct AddressesCommand {
    #[clap(flatten)]
    chain: ChainIdArgs,
}

impl AddressesCommand {
    pub async fn execute(
        self,
        _ctx: CliContext,
        registry: &Registry,
        fmt: OutputFormat,
    ) -> eyre::Result<()> {
        let records = address_records(registry, self.chain.chain_id())?;
        print_output(&records, fmt)
    }
}

/// One L1 contract of one rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressRecord<'a> {
    pub rollup: &'a str,
    pub chain_id: u64,
    pub contract: L1Contract,
    pub address: Address,
}

/// Address rows for the selected rollups: registry order, then the fixed
/// contract order.
pub fn address_records(
    registry: &Registry,
    chain_id: Option<u64>,
) -> Result<Vec<AddressRecord<'_>>, RegistryError> {
    let records = registry
        .select_many(chain_id)?
        .into_iter()
        .flat_map(|chain| {
            chain.l1_addresses.iter().map(move |(contract, address)| AddressRecord {
                rollup: &chain.name,
                chain_id: chain.chain_id,
                contract,
                address,
            })
        })
        .collect();
    Ok(records)
}

impl TableRecord for AddressRecord<'_> {
    fn header() -> Row {
        row![b -> "Rollup", b -> "Contract", b -> "Address"]
    }

    fn row(&self) -> Row {
        row![self.rollup, self.contract, self.address]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use op_registry::test_utils::{self, numbered_address};
    use strum::IntoEnumIterator;

    #[test]
    fn test_addresses_for_every_rollup() {
        let registry = test_utils::two_network_registry();
        let records = address_records(&registry, None).unwrap();
        assert_eq!(records.len(), 20);

        let contracts: Vec<L1Contract> = L1Contract::iter().collect();
        for (chunk, chain_id) in records.chunks(10).zip([10u64, 20]) {
            assert!(chunk.iter().all(|r| r.chain_id == chain_id));
            assert_eq!(chunk.iter().map(|r| r.contract).collect::<Vec<_>>(), contracts);
            for (n, record) in chunk.iter().enumerate() {
                assert_eq!(record.address, numbered_address(chain_id * 100 + n as u64));
            }
        }
    }

    #[test]
    fn test_addresses_for_one_rollup() {
        let registry = test_utils::two_network_registry();
        let records = address_records(&registry, Some(20)).unwrap();
        assert_eq!(records.len(), 10);
        assert_eq!(records[0].rollup, "Rollup 20");
        assert_eq!(records[9].contract, L1Contract::BatchInbox);
    }

    #[test]
    fn test_addresses_for_unknown_rollup() {
        let registry = test_utils::two_network_registry();
        assert!(matches!(
            address_records(&registry, Some(99)),
            Err(RegistryError::ChainNotFound(99))
        ));
    }

    #[test]
    fn test_address_row() {
        let registry = test_utils::single_network_registry();
        let records = address_records(&registry, Some(10)).unwrap();
        let row = records[7].row();
        assert_eq!(row.get_cell(1).unwrap().get_content(), "Proxy Admin");
        assert_eq!(row.get_cell(2).unwrap().get_content(), numbered_address(1007).to_string());
    }
}
