use alloy_primitives::{b256, B256};
use op_registry::L1Contract;

use super::OwnershipCheck;

/// `bytes32(uint256(keccak256("eip1967.proxy.admin")) - 1)`
pub const EIP1967_ADMIN_SLOT: B256 =
    b256!("b53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d6103");

/// How the owner of each L1 contract is read, in output order.
///
/// The L1 cross domain messenger is resolved through the address manager and
/// has no owner of its own, so it is not listed.
pub const OWNERSHIP_CHECKS: [(L1Contract, OwnershipCheck); 9] = [
    (L1Contract::AddressManager, OwnershipCheck::ContractCall),
    (L1Contract::ProxyAdmin, OwnershipCheck::ContractCall),
    (L1Contract::L1Erc721BridgeProxy, OwnershipCheck::StorageSlot { slot: EIP1967_ADMIN_SLOT }),
    (L1Contract::L1StandardBridgeProxy, OwnershipCheck::StorageSlot { slot: EIP1967_ADMIN_SLOT }),
    (L1Contract::L2OutputOracleProxy, OwnershipCheck::StorageSlot { slot: EIP1967_ADMIN_SLOT }),
    (
        L1Contract::OptimismMintableErc20FactoryProxy,
        OwnershipCheck::StorageSlot { slot: EIP1967_ADMIN_SLOT },
    ),
    (L1Contract::OptimismPortalProxy, OwnershipCheck::StorageSlot { slot: EIP1967_ADMIN_SLOT }),
    (L1Contract::SystemConfig, OwnershipCheck::StorageSlot { slot: EIP1967_ADMIN_SLOT }),
    (L1Contract::BatchInbox, OwnershipCheck::NotApplicable),
];
