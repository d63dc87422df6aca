//! The process-wide table of networks and settlement layers.

use tracing::{debug, trace};

use crate::{
    chain::{Chain, L1Addresses, Network, OpStackChain},
    source::{RollupConfig, Superchain, Superchains},
    RegistryError,
};

/// The registry containing all networks, their rollups and the settlement
/// layers those rollups anchor to.
///
/// Built once from a [`Superchains`] document and never mutated afterwards.
/// Lookups are linear scans; the tables hold tens of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    networks: Vec<Network>,
    l1_chains: Vec<Chain>,
}

impl Registry {
    /// Assembles a registry from already built networks and settlement layers.
    pub fn new(networks: Vec<Network>, l1_chains: Vec<Chain>) -> Self {
        Self { networks, l1_chains }
    }

    /// Builds the registry from a superchain document.
    ///
    /// Every rollup takes the chain id of its superchain's L1 as its settlement
    /// layer. Construction never fails; inconsistent data surfaces later as
    /// [`RegistryError::L1EndpointNotFound`].
    pub fn from_source(source: &Superchains) -> Self {
        let mut networks = Vec::with_capacity(source.superchains.len());
        let mut l1_chains = Vec::with_capacity(source.superchains.len());

        for superchain in &source.superchains {
            let Superchain { name, config, chains } = superchain;
            let l1 = &config.l1;
            l1_chains.push(Chain {
                chain_id: l1.chain_id,
                name: name.clone(),
                rpc_url: l1.public_rpc.clone(),
                block_explorer: l1.explorer.clone(),
            });

            let chains = chains.iter().map(|rollup| build_rollup(rollup, l1.chain_id)).collect();
            networks.push(Network { name: name.clone(), chains });
        }

        let registry = Self::new(networks, l1_chains);
        debug!(
            target: "op::registry",
            networks = registry.networks.len(),
            chains = registry.chains().len(),
            "built registry"
        );
        registry
    }

    /// All networks in source order.
    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    /// The settlement layers, one per superchain.
    pub fn l1_chains(&self) -> &[Chain] {
        &self.l1_chains
    }

    /// Every rollup of every network, network order first, then chain order.
    pub fn chains(&self) -> Vec<&OpStackChain> {
        self.networks.iter().flat_map(|network| network.chains.iter()).collect()
    }

    /// Returns the first rollup carrying `chain_id`.
    pub fn chain_by_id(&self, chain_id: u64) -> Result<&OpStackChain, RegistryError> {
        self.chains()
            .into_iter()
            .find(|chain| chain.chain_id == chain_id)
            .ok_or(RegistryError::ChainNotFound(chain_id))
    }

    /// Returns the public RPC url of the rollup's settlement layer.
    ///
    /// This is a lookup only, no connection is made.
    pub fn l1_rpc_url(&self, chain: &OpStackChain) -> Result<&str, RegistryError> {
        let l1 = self
            .l1_chains
            .iter()
            .find(|l1| l1.chain_id == chain.l1_chain_id)
            .ok_or(RegistryError::L1EndpointNotFound {
                chain_id: chain.chain_id,
                l1_chain_id: chain.l1_chain_id,
            })?;
        trace!(target: "op::registry", chain_id = chain.chain_id, l1 = %l1.name, url = %l1.rpc_url, "resolved L1 endpoint");
        Ok(&l1.rpc_url)
    }
}

fn build_rollup(rollup: &RollupConfig, l1_chain_id: u64) -> OpStackChain {
    let addresses = &rollup.addresses;
    OpStackChain {
        chain: Chain {
            chain_id: rollup.chain_id,
            name: rollup.name.clone(),
            rpc_url: rollup.public_rpc.clone(),
            block_explorer: rollup.explorer.clone(),
        },
        l1_chain_id,
        sequencer_url: rollup.sequencer_rpc.clone(),
        l1_addresses: L1Addresses {
            address_manager: addresses.address_manager,
            l1_cross_domain_messenger_proxy: addresses.l1_cross_domain_messenger_proxy,
            l1_erc721_bridge_proxy: addresses.l1_erc721_bridge_proxy,
            l1_standard_bridge_proxy: addresses.l1_standard_bridge_proxy,
            l2_output_oracle_proxy: addresses.l2_output_oracle_proxy,
            optimism_mintable_erc20_factory_proxy: addresses.optimism_mintable_erc20_factory_proxy,
            optimism_portal_proxy: addresses.optimism_portal_proxy,
            proxy_admin: addresses.proxy_admin,
            system_config: addresses.system_config_proxy,
            batch_inbox: rollup.batch_inbox_addr,
        },
    }
}
