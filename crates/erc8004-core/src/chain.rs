//! Registry contract addresses per chain.
//!
//! Only Ethereum Sepolia has deployed registries. Every other chain id
//! resolves to the zero address, which callers treat as "unsupported".

use crate::address::Address;
use tracing::warn;

pub const ETHEREUM_SEPOLIA: u64 = 11_155_111;

const SUPPORTED_CHAINS: [u64; 1] = [ETHEREUM_SEPOLIA];

// Network name -> chain id, as reported by the indexing host.
const NETWORKS: [(&str, u64); 9] = [
    ("mainnet", 1),
    ("sepolia", ETHEREUM_SEPOLIA),
    ("goerli", 5),
    ("polygon", 137),
    ("arbitrum-one", 42_161),
    ("optimism", 10),
    ("base", 8_453),
    ("bsc", 56),
    ("avalanche", 43_114),
];

const SEPOLIA_IDENTITY_REGISTRY: Address = Address::from_bytes([
    0x80, 0x04, 0xa6, 0x09, 0x0c, 0xd1, 0x0a, 0x72, 0x88, 0x09, 0x24, 0x83, 0x04, 0x7b, 0x09,
    0x72, 0x95, 0xfb, 0x88, 0x47,
]);
const SEPOLIA_REPUTATION_REGISTRY: Address = Address::from_bytes([
    0x80, 0x04, 0xb8, 0xfd, 0x1a, 0x36, 0x3a, 0xa0, 0x2f, 0xdc, 0x07, 0x63, 0x5c, 0x0c, 0x5f,
    0x94, 0xf6, 0xaf, 0x5b, 0x7e,
]);
const SEPOLIA_VALIDATION_REGISTRY: Address = Address::from_bytes([
    0x80, 0x04, 0xcb, 0x39, 0xf2, 0x9c, 0x09, 0x14, 0x5f, 0x24, 0xad, 0x9d, 0xde, 0x2a, 0x10,
    0x8c, 0x1a, 0x2c, 0xdf, 0xc5,
]);

/// The three ERC-8004 registries deployed on one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAddresses {
    pub identity_registry: Address,
    pub reputation_registry: Address,
    pub validation_registry: Address,
}

impl ContractAddresses {
    pub const UNSUPPORTED: ContractAddresses = ContractAddresses {
        identity_registry: Address::ZERO,
        reputation_registry: Address::ZERO,
        validation_registry: Address::ZERO,
    };

    /// True when none of the registries is the zero sentinel.
    pub fn is_valid(&self) -> bool {
        !self.identity_registry.is_zero()
            && !self.reputation_registry.is_zero()
            && !self.validation_registry.is_zero()
    }
}

pub fn resolve_addresses(chain_id: u64) -> ContractAddresses {
    match chain_id {
        ETHEREUM_SEPOLIA => ContractAddresses {
            identity_registry: SEPOLIA_IDENTITY_REGISTRY,
            reputation_registry: SEPOLIA_REPUTATION_REGISTRY,
            validation_registry: SEPOLIA_VALIDATION_REGISTRY,
        },
        _ => ContractAddresses::UNSUPPORTED,
    }
}

pub fn is_supported_chain(chain_id: u64) -> bool {
    resolve_addresses(chain_id).is_valid()
}

pub fn chain_name(chain_id: u64) -> String {
    match chain_id {
        ETHEREUM_SEPOLIA => "Ethereum Sepolia".to_string(),
        other => format!("Unsupported Chain {}", other),
    }
}

pub fn supported_chains() -> &'static [u64] {
    &SUPPORTED_CHAINS
}

/// Map an indexer network name to its chain id. Unknown names map to 0.
pub fn chain_id_for_network(network: &str) -> u64 {
    match NETWORKS.iter().find(|(name, _)| *name == network) {
        Some((_, chain_id)) => *chain_id,
        None => {
            warn!(network, "Unknown network, using chain ID 0");
            0
        }
    }
}
