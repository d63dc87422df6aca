//! Maps a user supplied chain id to the rollups a command operates on.

use tracing::debug;

use crate::{OpStackChain, Registry, RegistryError};

impl Registry {
    /// Selects the single rollup an operation needs.
    ///
    /// Fails with [`RegistryError::NoChainSelected`] when no id was given.
    pub fn select_one(&self, chain_id: Option<u64>) -> Result<&OpStackChain, RegistryError> {
        let chain_id = chain_id.ok_or(RegistryError::NoChainSelected)?;
        let chain = self.chain_by_id(chain_id)?;
        debug!(target: "op::registry", chain_id, name = %chain.name, "selected rollup");
        Ok(chain)
    }

    /// Selects the given rollup, or every rollup in registry order when no id
    /// was given.
    pub fn select_many(&self, chain_id: Option<u64>) -> Result<Vec<&OpStackChain>, RegistryError> {
        match chain_id {
            Some(chain_id) => Ok(vec![self.chain_by_id(chain_id)?]),
            None => Ok(self.chains()),
        }
    }
}
