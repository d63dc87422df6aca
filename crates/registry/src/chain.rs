//! Chain, rollup and network records held by the registry.

use alloy_primitives::Address;
use serde::{Serialize, Serializer};
use strum::{Display, EnumIter, IntoEnumIterator};

use std::ops::Deref;

/// Identity of an EVM chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chain {
    pub chain_id: u64,
    pub name: String,
    pub rpc_url: String,
    pub block_explorer: String,
}

/// An OP Stack rollup together with its settlement layer contracts.
///
/// The settlement layer is referenced by chain id only and resolved through
/// [`Registry::l1_rpc_url`](crate::Registry::l1_rpc_url).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpStackChain {
    #[serde(flatten)]
    pub chain: Chain,
    pub l1_chain_id: u64,
    pub sequencer_url: String,
    pub l1_addresses: L1Addresses,
}

impl Deref for OpStackChain {
    type Target = Chain;

    fn deref(&self) -> &Self::Target {
        &self.chain
    }
}

/// A superchain: a named group of rollups sharing one settlement layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Network {
    pub name: String,
    pub chains: Vec<OpStackChain>,
}

/// The L1 contracts of a rollup, in their fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum L1Contract {
    #[strum(to_string = "Address Manager")]
    AddressManager,
    #[strum(to_string = "Cross Domain Messenger Proxy")]
    L1CrossDomainMessengerProxy,
    #[strum(to_string = "L1 ERC721 Bridge Proxy")]
    L1Erc721BridgeProxy,
    #[strum(to_string = "L1 Standard Bridge Proxy")]
    L1StandardBridgeProxy,
    #[strum(to_string = "L2 Output Oracle Proxy")]
    L2OutputOracleProxy,
    #[strum(to_string = "Mintable ERC20 Factory Proxy")]
    OptimismMintableErc20FactoryProxy,
    #[strum(to_string = "Portal Proxy")]
    OptimismPortalProxy,
    #[strum(to_string = "Proxy Admin")]
    ProxyAdmin,
    #[strum(to_string = "System Config")]
    SystemConfig,
    #[strum(to_string = "Batch Inbox")]
    BatchInbox,
}

impl Serialize for L1Contract {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Addresses a rollup deployed on its settlement layer.
///
/// Any of them may be [`Address::ZERO`] when the source omits it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct L1Addresses {
    pub address_manager: Address,
    pub l1_cross_domain_messenger_proxy: Address,
    pub l1_erc721_bridge_proxy: Address,
    pub l1_standard_bridge_proxy: Address,
    pub l2_output_oracle_proxy: Address,
    pub optimism_mintable_erc20_factory_proxy: Address,
    pub optimism_portal_proxy: Address,
    pub proxy_admin: Address,
    pub system_config: Address,
    pub batch_inbox: Address,
}

impl L1Addresses {
    pub fn get(&self, contract: L1Contract) -> Address {
        match contract {
            L1Contract::AddressManager => self.address_manager,
            L1Contract::L1CrossDomainMessengerProxy => self.l1_cross_domain_messenger_proxy,
            L1Contract::L1Erc721BridgeProxy => self.l1_erc721_bridge_proxy,
            L1Contract::L1StandardBridgeProxy => self.l1_standard_bridge_proxy,
            L1Contract::L2OutputOracleProxy => self.l2_output_oracle_proxy,
            L1Contract::OptimismMintableErc20FactoryProxy => {
                self.optimism_mintable_erc20_factory_proxy
            }
            L1Contract::OptimismPortalProxy => self.optimism_portal_proxy,
            L1Contract::ProxyAdmin => self.proxy_admin,
            L1Contract::SystemConfig => self.system_config,
            L1Contract::BatchInbox => self.batch_inbox,
        }
    }

    /// Iterates `(contract, address)` pairs in [`L1Contract`] declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (L1Contract, Address)> + '_ {
        L1Contract::iter().map(move |contract| (contract, self.get(contract)))
    }
}
