use std::{io, path::PathBuf};

/// Errors raised while loading or querying the [`Registry`](crate::Registry).
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A chain id was supplied that no registered rollup carries.
    #[error("unknown rollup id {0}")]
    ChainNotFound(u64),

    /// The operation works on exactly one rollup but none was selected.
    #[error("must select a rollup")]
    NoChainSelected,

    /// The rollup's settlement layer is not in the registry's L1 list.
    #[error("unable to resolve L1 RPC for chain {chain_id}: no L1 with chain id {l1_chain_id}")]
    L1EndpointNotFound { chain_id: u64, l1_chain_id: u64 },

    /// The source document could not be read from disk.
    #[error("failed to read registry source {path:?}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source document is not valid superchain JSON.
    #[error("invalid registry source: {0}")]
    SourceInvalid(#[from] serde_json::Error),
}
