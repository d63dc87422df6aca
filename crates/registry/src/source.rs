//! The authoritative superchain document the [`Registry`](crate::Registry) is built from.
//!
//! The layout follows the hydrated superchain config export: one entry per
//! superchain with its L1 anchor information and the rollups settling on it.
//! Fields the registry does not use are ignored.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use std::path::Path;

use crate::RegistryError;

/// A list of superchains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Superchains {
    pub superchains: Vec<Superchain>,
}

/// A superchain and the rollups that belong to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Superchain {
    /// Superchain identifier, without capitalization or display changes.
    pub name: String,
    pub config: SuperchainConfig,
    #[serde(default)]
    pub chains: Vec<RollupConfig>,
}

/// A superchain configuration file format
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SuperchainConfig {
    /// Superchain name (e.g. "Mainnet")
    pub name: String,
    #[serde(rename = "L1")]
    pub l1: SuperchainL1Info,
}

/// Superchain L1 anchor information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SuperchainL1Info {
    #[serde(rename = "ChainID")]
    pub chain_id: u64,
    #[serde(rename = "PublicRPC")]
    pub public_rpc: String,
    pub explorer: String,
}

/// A single rollup as described by the superchain registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupConfig {
    pub name: String,
    pub chain_id: u64,
    pub public_rpc: String,
    #[serde(default)]
    pub sequencer_rpc: String,
    #[serde(default)]
    pub explorer: String,
    #[serde(default)]
    pub batch_inbox_addr: Address,
    #[serde(default)]
    pub addresses: AddressList,
}

/// The L1 addresses published for a rollup. Missing entries default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AddressList {
    pub address_manager: Address,
    pub l1_cross_domain_messenger_proxy: Address,
    #[serde(rename = "L1ERC721BridgeProxy", alias = "L1Erc721BridgeProxy")]
    pub l1_erc721_bridge_proxy: Address,
    pub l1_standard_bridge_proxy: Address,
    pub l2_output_oracle_proxy: Address,
    #[serde(
        rename = "OptimismMintableERC20FactoryProxy",
        alias = "OptimismMintableErc20FactoryProxy"
    )]
    pub optimism_mintable_erc20_factory_proxy: Address,
    pub optimism_portal_proxy: Address,
    pub proxy_admin: Address,
    pub system_config_proxy: Address,
}

impl Superchains {
    /// The superchain document compiled into the binary.
    pub fn embedded() -> Result<Self, RegistryError> {
        Self::from_json(include_str!("../etc/superchains.json"))
    }

    /// Reads a superchain document from disk.
    pub fn from_path(path: &Path) -> Result<Self, RegistryError> {
        let json = std::fs::read_to_string(path).map_err(|source| {
            RegistryError::SourceUnreadable { path: path.to_path_buf(), source }
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_read_embedded_superchains() {
        let source = Superchains::embedded().unwrap();
        let mainnet = &source.superchains[0];
        assert_eq!(mainnet.name, "mainnet");
        assert_eq!(mainnet.config.l1.chain_id, 1);

        let base = mainnet.chains.iter().find(|c| c.chain_id == 8453).unwrap();
        assert_eq!(base.name, "Base");
        assert_eq!(base.batch_inbox_addr, address!("ff00000000000000000000000000000000008453"));
        assert_eq!(
            base.addresses.l1_erc721_bridge_proxy,
            address!("608d94945A64503E642E6370Ec598e519a2C1E53")
        );
        assert_eq!(
            base.addresses.system_config_proxy,
            address!("73a79Fab69143498Ed3712e519A88a918e1f4072")
        );
    }

    #[test]
    fn test_missing_addresses_default_to_zero() {
        let raw = r#"
        {
            "superchains": [{
                "name": "sepolia",
                "config": { "Name": "Sepolia", "L1": { "ChainID": 11155111, "PublicRPC": "https://l1.example", "Explorer": "" } },
                "chains": [{
                    "name": "Devnet",
                    "chain_id": 901,
                    "public_rpc": "https://l2.example",
                    "addresses": { "ProxyAdmin": "0x0000000000000000000000000000000000000005", "unknown_field": "unknown" }
                }]
            }]
        }
        "#;

        let source = Superchains::from_json(raw).unwrap();
        let chain = &source.superchains[0].chains[0];
        assert_eq!(chain.addresses.proxy_admin, address!("0000000000000000000000000000000000000005"));
        assert_eq!(chain.addresses.address_manager, Address::ZERO);
        assert_eq!(chain.batch_inbox_addr, Address::ZERO);
        assert_eq!(chain.sequencer_rpc, "");
    }

    #[test]
    fn test_address_list_accepts_camel_acronyms() {
        let raw = r#"{ "L1Erc721BridgeProxy": "0x0000000000000000000000000000000000000001",
                       "OptimismMintableErc20FactoryProxy": "0x0000000000000000000000000000000000000002" }"#;
        let list: AddressList = serde_json::from_str(raw).unwrap();
        assert_eq!(list.l1_erc721_bridge_proxy, address!("0000000000000000000000000000000000000001"));
        assert_eq!(
            list.optimism_mintable_erc20_factory_proxy,
            address!("0000000000000000000000000000000000000002")
        );
    }

    #[test]
    fn test_invalid_source_is_reported() {
        let err = Superchains::from_json("{ \"superchains\": 3 }").unwrap_err();
        assert!(matches!(err, RegistryError::SourceInvalid(_)));

        let err = Superchains::from_path(Path::new("/nonexistent/superchains.json")).unwrap_err();
        assert!(matches!(err, RegistryError::SourceUnreadable { .. }));
    }
}
