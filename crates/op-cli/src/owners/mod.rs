//! Ownership resolution for a rollup's L1 contracts.
//!
//! Each contract's owner is read with the convention fixed for its role in
//! [`OWNERSHIP_CHECKS`]: the EIP-1967 admin slot for proxies, `owner()` for
//! ownable contracts, and nothing at all for the batch inbox, which is not a
//! contract. There is no fallback between conventions.

use alloy_primitives::{Address, B256};
use op_registry::{L1Contract, OpStackChain};
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use std::fmt;

pub mod calls;
pub mod consts;
mod contracts;
mod error;

pub use calls::{connect, OwnershipReader, RpcOwnershipReader};
pub use consts::{EIP1967_ADMIN_SLOT, OWNERSHIP_CHECKS};
pub use error::OwnersError;

/// How the owner of a contract is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipCheck {
    /// The owner is the low 20 bytes of a storage word.
    StorageSlot { slot: B256 },
    /// The owner is returned by `owner()`.
    ContractCall,
    /// The address is not a contract and has no owner.
    NotApplicable,
}

impl OwnershipCheck {
    pub fn label(&self) -> &'static str {
        match self {
            Self::StorageSlot { slot } if *slot == EIP1967_ADMIN_SLOT => "EIP-1967",
            Self::StorageSlot { .. } => "Storage Slot",
            Self::ContractCall => "Ownable",
            Self::NotApplicable => "EOA",
        }
    }
}

/// A contract whose owner should be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerTarget {
    pub contract: L1Contract,
    pub address: Address,
    pub check: OwnershipCheck,
}

impl OwnerTarget {
    /// The registry carries no address for this contract.
    pub fn is_unset(&self) -> bool {
        self.address.is_zero()
    }
}

/// The owners targets of a rollup, in [`OWNERSHIP_CHECKS`] order.
pub fn ownership_targets(chain: &OpStackChain) -> Vec<OwnerTarget> {
    OWNERSHIP_CHECKS
        .iter()
        .map(|&(contract, check)| OwnerTarget {
            contract,
            address: chain.l1_addresses.get(contract),
            check,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Address(Address),
    NotApplicable,
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(address) => write!(f, "{address}"),
            Self::NotApplicable => f.write_str("N/A"),
        }
    }
}

impl Serialize for Owner {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Resolved owner of one contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerRecord {
    pub name: L1Contract,
    pub owner: Owner,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Resolves the owner of a single contract.
pub async fn resolve_owner<R>(reader: &R, target: &OwnerTarget) -> Result<OwnerRecord, OwnersError>
where
    R: OwnershipReader + ?Sized,
{
    if target.is_unset() {
        warn!(
            target: "op::owners",
            contract = %target.contract,
            "no L1 address registered, the resolved owner is meaningless"
        );
    }

    let owner = match target.check {
        OwnershipCheck::StorageSlot { slot } => {
            let word = reader.storage_at(target.address, slot).await?;
            Owner::Address(Address::from_word(word))
        }
        OwnershipCheck::ContractCall => Owner::Address(reader.owner_of(target.address).await?),
        OwnershipCheck::NotApplicable => Owner::NotApplicable,
    };

    debug!(
        target: "op::owners",
        contract = %target.contract,
        address = %target.address,
        check = target.check.label(),
        %owner,
        "resolved owner"
    );

    Ok(OwnerRecord { name: target.contract, owner, kind: target.check.label() })
}

/// Resolves the owners of all of a rollup's L1 contracts, one request at a time.
///
/// The first failure aborts the whole batch.
pub async fn resolve_ownership<R>(
    reader: &R,
    chain: &OpStackChain,
) -> Result<Vec<OwnerRecord>, OwnersError>
where
    R: OwnershipReader + ?Sized,
{
    let mut owners = Vec::with_capacity(OWNERSHIP_CHECKS.len());
    for target in ownership_targets(chain) {
        owners.push(resolve_owner(reader, &target).await?);
    }
    Ok(owners)
}
