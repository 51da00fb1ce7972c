//! Contract registry
//!
//! Logical contract roles, the bytecode artifacts that can fill them, and the
//! canonical addresses they are predeployed at.
//!
//! Upgradeable system contracts come in pairs: the implementation lives at a
//! `*_V1` address and a generic proxy at the public address forwards to it.
//! The pairing is the static proxy-implementation table.

use std::collections::BTreeMap;
use std::fmt;

use shared_types::{low_address, Address};

/// Canonical system contract addresses.
pub mod addresses {
    use super::*;

    pub const STATE_RECEIVER: Address = low_address(0x1001);
    pub const BLS: Address = low_address(0x1002);
    pub const MERKLE: Address = low_address(0x1003);
    pub const CHILD_ERC20_PREDICATE: Address = low_address(0x1004);
    pub const CHILD_ERC721_PREDICATE: Address = low_address(0x1005);
    pub const CHILD_ERC1155_PREDICATE: Address = low_address(0x1006);
    pub const L2_STATE_SENDER: Address = low_address(0x1007);
    pub const EPOCH_MANAGER: Address = low_address(0x1008);
    pub const STAKE_MANAGER: Address = low_address(0x1009);
    pub const NATIVE_ERC20_TOKEN: Address = low_address(0x1010);
    pub const NETWORK_PARAMS: Address = low_address(0x1011);
    pub const FORK_PARAMS: Address = low_address(0x1012);
    pub const CHILD_GOVERNOR: Address = low_address(0x1013);
    pub const CHILD_TIMELOCK: Address = low_address(0x1014);
    pub const ROOT_MINTABLE_ERC20_PREDICATE: Address = low_address(0x1015);
    pub const ROOT_MINTABLE_ERC721_PREDICATE: Address = low_address(0x1016);
    pub const ROOT_MINTABLE_ERC1155_PREDICATE: Address = low_address(0x1017);
    pub const REWARD_TOKEN: Address = low_address(0x1018);

    // Child token templates are cloned, never proxied
    pub const CHILD_ERC20: Address = low_address(0x1020);
    pub const CHILD_ERC721: Address = low_address(0x1021);
    pub const CHILD_ERC1155: Address = low_address(0x1022);

    pub const STATE_RECEIVER_V1: Address = low_address(0x1101);
    pub const BLS_V1: Address = low_address(0x1102);
    pub const MERKLE_V1: Address = low_address(0x1103);
    pub const CHILD_ERC20_PREDICATE_V1: Address = low_address(0x1104);
    pub const CHILD_ERC721_PREDICATE_V1: Address = low_address(0x1105);
    pub const CHILD_ERC1155_PREDICATE_V1: Address = low_address(0x1106);
    pub const L2_STATE_SENDER_V1: Address = low_address(0x1107);
    pub const EPOCH_MANAGER_V1: Address = low_address(0x1108);
    pub const STAKE_MANAGER_V1: Address = low_address(0x1109);
    pub const NATIVE_ERC20_TOKEN_V1: Address = low_address(0x1110);
    pub const NETWORK_PARAMS_V1: Address = low_address(0x1111);
    pub const FORK_PARAMS_V1: Address = low_address(0x1112);
    pub const CHILD_GOVERNOR_V1: Address = low_address(0x1113);
    pub const CHILD_TIMELOCK_V1: Address = low_address(0x1114);
    pub const ROOT_MINTABLE_ERC20_PREDICATE_V1: Address = low_address(0x1115);
    pub const ROOT_MINTABLE_ERC721_PREDICATE_V1: Address = low_address(0x1116);
    pub const ROOT_MINTABLE_ERC1155_PREDICATE_V1: Address = low_address(0x1117);
    pub const REWARD_TOKEN_V1: Address = low_address(0x1118);
}

/// Precompiled bytecode artifacts, keyed by logical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Artifact {
    StateReceiver,
    ChildErc20,
    ChildErc721,
    ChildErc1155,
    Bls,
    Merkle,
    L2StateSender,
    EpochManager,
    StakeManager,
    NetworkParams,
    ForkParams,
    ChildGovernor,
    ChildTimelock,
    NativeErc20,
    NativeErc20Mintable,
    Eip1559Burn,
    ChildErc20Predicate,
    ChildErc721Predicate,
    ChildErc1155Predicate,
    RootMintableErc20Predicate,
    RootMintableErc721Predicate,
    RootMintableErc1155Predicate,
    ChildErc20PredicateAcl,
    ChildErc721PredicateAcl,
    ChildErc1155PredicateAcl,
    RootMintableErc20PredicateAcl,
    RootMintableErc721PredicateAcl,
    RootMintableErc1155PredicateAcl,
    GenesisProxy,
}

impl Artifact {
    pub const ALL: [Artifact; 29] = [
        Artifact::StateReceiver,
        Artifact::ChildErc20,
        Artifact::ChildErc721,
        Artifact::ChildErc1155,
        Artifact::Bls,
        Artifact::Merkle,
        Artifact::L2StateSender,
        Artifact::EpochManager,
        Artifact::StakeManager,
        Artifact::NetworkParams,
        Artifact::ForkParams,
        Artifact::ChildGovernor,
        Artifact::ChildTimelock,
        Artifact::NativeErc20,
        Artifact::NativeErc20Mintable,
        Artifact::Eip1559Burn,
        Artifact::ChildErc20Predicate,
        Artifact::ChildErc721Predicate,
        Artifact::ChildErc1155Predicate,
        Artifact::RootMintableErc20Predicate,
        Artifact::RootMintableErc721Predicate,
        Artifact::RootMintableErc1155Predicate,
        Artifact::ChildErc20PredicateAcl,
        Artifact::ChildErc721PredicateAcl,
        Artifact::ChildErc1155PredicateAcl,
        Artifact::RootMintableErc20PredicateAcl,
        Artifact::RootMintableErc721PredicateAcl,
        Artifact::RootMintableErc1155PredicateAcl,
        Artifact::GenesisProxy,
    ];

    /// Artifact name, as used for on-disk artifact files.
    pub fn name(&self) -> &'static str {
        match self {
            Artifact::StateReceiver => "StateReceiver",
            Artifact::ChildErc20 => "ChildERC20",
            Artifact::ChildErc721 => "ChildERC721",
            Artifact::ChildErc1155 => "ChildERC1155",
            Artifact::Bls => "BLS",
            Artifact::Merkle => "Merkle",
            Artifact::L2StateSender => "L2StateSender",
            Artifact::EpochManager => "EpochManager",
            Artifact::StakeManager => "StakeManager",
            Artifact::NetworkParams => "NetworkParams",
            Artifact::ForkParams => "ForkParams",
            Artifact::ChildGovernor => "ChildGovernor",
            Artifact::ChildTimelock => "ChildTimelock",
            Artifact::NativeErc20 => "NativeERC20",
            Artifact::NativeErc20Mintable => "NativeERC20Mintable",
            Artifact::Eip1559Burn => "EIP1559Burn",
            Artifact::ChildErc20Predicate => "ChildERC20Predicate",
            Artifact::ChildErc721Predicate => "ChildERC721Predicate",
            Artifact::ChildErc1155Predicate => "ChildERC1155Predicate",
            Artifact::RootMintableErc20Predicate => "RootMintableERC20Predicate",
            Artifact::RootMintableErc721Predicate => "RootMintableERC721Predicate",
            Artifact::RootMintableErc1155Predicate => "RootMintableERC1155Predicate",
            Artifact::ChildErc20PredicateAcl => "ChildERC20PredicateACL",
            Artifact::ChildErc721PredicateAcl => "ChildERC721PredicateACL",
            Artifact::ChildErc1155PredicateAcl => "ChildERC1155PredicateACL",
            Artifact::RootMintableErc20PredicateAcl => "RootMintableERC20PredicateACL",
            Artifact::RootMintableErc721PredicateAcl => "RootMintableERC721PredicateACL",
            Artifact::RootMintableErc1155PredicateAcl => "RootMintableERC1155PredicateACL",
            Artifact::GenesisProxy => "GenesisProxy",
        }
    }

    /// Bridge predicate variants gated by the bridge allow/block lists.
    pub fn is_access_controlled(&self) -> bool {
        matches!(
            self,
            Artifact::ChildErc20PredicateAcl
                | Artifact::ChildErc721PredicateAcl
                | Artifact::ChildErc1155PredicateAcl
                | Artifact::RootMintableErc20PredicateAcl
                | Artifact::RootMintableErc721PredicateAcl
                | Artifact::RootMintableErc1155PredicateAcl
        )
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Proxy address → implementation address for every upgradeable system contract.
pub const PROXY_IMPLEMENTATIONS: [(Address, Address); 17] = [
    (addresses::STATE_RECEIVER, addresses::STATE_RECEIVER_V1),
    (addresses::BLS, addresses::BLS_V1),
    (addresses::MERKLE, addresses::MERKLE_V1),
    (addresses::L2_STATE_SENDER, addresses::L2_STATE_SENDER_V1),
    (addresses::EPOCH_MANAGER, addresses::EPOCH_MANAGER_V1),
    (addresses::STAKE_MANAGER, addresses::STAKE_MANAGER_V1),
    (addresses::NATIVE_ERC20_TOKEN, addresses::NATIVE_ERC20_TOKEN_V1),
    (addresses::NETWORK_PARAMS, addresses::NETWORK_PARAMS_V1),
    (addresses::FORK_PARAMS, addresses::FORK_PARAMS_V1),
    (addresses::CHILD_GOVERNOR, addresses::CHILD_GOVERNOR_V1),
    (addresses::CHILD_TIMELOCK, addresses::CHILD_TIMELOCK_V1),
    (addresses::CHILD_ERC20_PREDICATE, addresses::CHILD_ERC20_PREDICATE_V1),
    (addresses::CHILD_ERC721_PREDICATE, addresses::CHILD_ERC721_PREDICATE_V1),
    (addresses::CHILD_ERC1155_PREDICATE, addresses::CHILD_ERC1155_PREDICATE_V1),
    (
        addresses::ROOT_MINTABLE_ERC20_PREDICATE,
        addresses::ROOT_MINTABLE_ERC20_PREDICATE_V1,
    ),
    (
        addresses::ROOT_MINTABLE_ERC721_PREDICATE,
        addresses::ROOT_MINTABLE_ERC721_PREDICATE_V1,
    ),
    (
        addresses::ROOT_MINTABLE_ERC1155_PREDICATE,
        addresses::ROOT_MINTABLE_ERC1155_PREDICATE_V1,
    ),
];

/// The static proxy-implementation table as an ordered map.
pub fn proxy_implementation_table() -> BTreeMap<Address, Address> {
    PROXY_IMPLEMENTATIONS.into_iter().collect()
}

/// Whether `stake_token` is the chain's native token.
pub fn is_native_stake_token(stake_token: &Address) -> bool {
    *stake_token == addresses::NATIVE_ERC20_TOKEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_artifact_names_unique() {
        let names: BTreeSet<&str> = Artifact::ALL.iter().map(Artifact::name).collect();
        assert_eq!(names.len(), Artifact::ALL.len());
    }

    #[test]
    fn test_proxy_table_covers_all_predicates() {
        let table = proxy_implementation_table();
        assert_eq!(table.len(), 17);
        assert_eq!(
            table.get(&addresses::ROOT_MINTABLE_ERC1155_PREDICATE),
            Some(&addresses::ROOT_MINTABLE_ERC1155_PREDICATE_V1)
        );
    }

    #[test]
    fn test_proxy_and_implementation_addresses_disjoint() {
        let table = proxy_implementation_table();
        let impls: BTreeSet<Address> = table.values().copied().collect();
        assert!(table.keys().all(|proxy| !impls.contains(proxy)));
    }

    #[test]
    fn test_access_controlled_variants() {
        let acl = Artifact::ALL
            .iter()
            .filter(|a| a.is_access_controlled())
            .count();
        assert_eq!(acl, 6);
    }
}
