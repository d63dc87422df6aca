use alloy_primitives::Address;

/// Failures talking to the settlement layer while resolving owners.
#[derive(Debug, thiserror::Error)]
pub enum OwnersError {
    /// The L1 endpoint could not be reached.
    #[error("failed to connect to {url}: {reason}")]
    RpcConnectionFailed { url: String, reason: String },

    /// A storage read or `owner()` call failed, or the target is not a contract.
    #[error("failed to fetch data for {address}: {reason}")]
    RpcReadFailed { address: Address, reason: String },
}
