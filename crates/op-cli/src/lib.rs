//! Inspect OP Stack rollups: the registry of networks and their L1
//! contracts, and who owns those contracts on L1.

pub mod cmd;
pub mod common;
pub mod logs;
pub mod output;
pub mod owners;
