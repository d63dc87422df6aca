//! Curated registry of OP Stack networks, their rollups and the L1 contracts
//! each rollup deploys on its settlement layer.
//!
//! The [`Registry`] is built once from a [`Superchains`] source document and
//! is read-only afterwards.

pub mod chain;
pub use chain::{Chain, L1Addresses, L1Contract, Network, OpStackChain};

mod error;
pub use error::RegistryError;

mod registry;
pub use registry::Registry;

mod selector;

pub mod source;
pub use source::Superchains;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
