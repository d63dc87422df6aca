/// Environment fallbacks for the global flags.
pub const REGISTRY_PATH_ENV: &str = "OP_REGISTRY_PATH";
pub const RPC_TIMEOUT_ENV: &str = "OP_RPC_TIMEOUT";

pub const DEFAULT_RPC_TIMEOUT: &str = "30s";
