//! Fixture registries for tests.

use alloy_primitives::Address;

use crate::{
    source::{AddressList, RollupConfig, Superchain, SuperchainConfig, SuperchainL1Info, Superchains},
    Chain, Registry,
};

/// A superchain anchored on `l1_chain_id` with one rollup per entry of
/// `chain_ids`, named `Rollup <id>`.
///
/// Each rollup's addresses are distinct and non-zero: the n-th field (in
/// declaration order, batch inbox last) holds `chain_id * 100 + n`.
pub fn superchain(name: &str, l1_chain_id: u64, l1_rpc: &str, chain_ids: &[u64]) -> Superchain {
    Superchain {
        name: name.to_string(),
        config: SuperchainConfig {
            name: name.to_string(),
            l1: SuperchainL1Info {
                chain_id: l1_chain_id,
                public_rpc: l1_rpc.to_string(),
                explorer: format!("https://explorer.{name}.example"),
            },
        },
        chains: chain_ids.iter().copied().map(rollup).collect(),
    }
}

pub fn source(superchains: Vec<Superchain>) -> Superchains {
    Superchains { superchains }
}

/// A numbered test address, `n` in the low bytes.
pub fn numbered_address(n: u64) -> Address {
    let mut bytes = [0u8; 20];
    bytes[12..].copy_from_slice(&n.to_be_bytes());
    Address::from(bytes)
}

fn rollup(chain_id: u64) -> RollupConfig {
    let at = |n: u64| numbered_address(chain_id * 100 + n);
    RollupConfig {
        name: format!("Rollup {chain_id}"),
        chain_id,
        public_rpc: format!("https://rollup-{chain_id}.example"),
        sequencer_rpc: format!("https://sequencer-{chain_id}.example"),
        explorer: format!("https://explorer-{chain_id}.example"),
        batch_inbox_addr: at(9),
        addresses: AddressList {
            address_manager: at(0),
            l1_cross_domain_messenger_proxy: at(1),
            l1_erc721_bridge_proxy: at(2),
            l1_standard_bridge_proxy: at(3),
            l2_output_oracle_proxy: at(4),
            optimism_mintable_erc20_factory_proxy: at(5),
            optimism_portal_proxy: at(6),
            proxy_admin: at(7),
            system_config_proxy: at(8),
        },
    }
}

/// One network `N` with rollup 10 settling on L1 1 at `https://l1.example`.
pub fn single_network_source() -> Superchains {
    source(vec![superchain("N", 1, "https://l1.example", &[10])])
}

pub fn single_network_registry() -> Registry {
    Registry::from_source(&single_network_source())
}

/// Networks `N` (rollup 10 on L1 1) and `M` (rollup 20 on L1 2 at
/// `https://l1-m.example`).
pub fn two_network_source() -> Superchains {
    source(vec![
        superchain("N", 1, "https://l1.example", &[10]),
        superchain("M", 2, "https://l1-m.example", &[20]),
    ])
}

pub fn two_network_registry() -> Registry {
    Registry::from_source(&two_network_source())
}

/// Rollup 10 settles on L1 1, which is registered; rollup 30 claims L1 3,
/// which is not.
pub fn dangling_l1_registry() -> Registry {
    let built = Registry::from_source(&source(vec![
        superchain("N", 1, "https://l1.example", &[10]),
        superchain("D", 3, "https://l1-d.example", &[30]),
    ]));
    let l1_chains: Vec<Chain> =
        built.l1_chains().iter().filter(|l1| l1.chain_id != 3).cloned().collect();
    Registry::new(built.networks().to_vec(), l1_chains)
}
