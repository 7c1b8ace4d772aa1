//! Wallet references carried by `agentWallet` endpoints.
//!
//! Two forms are accepted: a CAIP-10 style `eip155:<chainId>:<address>`
//! string, or a bare `0x` address. Anything else is ignored.

use crate::vocabulary::wallet::{EIP155_NAMESPACE, HEX_PREFIX, SEPARATOR};
use erc8004_core::address::{Address, ADDRESS_HEX_LEN};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletReference {
    pub address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

/// Decode a wallet endpoint value. Never fails loudly: malformed input yields `None`.
pub fn parse_wallet_reference(value: &str) -> Option<WalletReference> {
    if let Some(rest) = value
        .strip_prefix(EIP155_NAMESPACE)
        .and_then(|rest| rest.strip_prefix(SEPARATOR))
    {
        return parse_eip155(rest);
    }
    parse_address(value).map(|address| WalletReference {
        address,
        chain_id: None,
    })
}

// `rest` is everything after `eip155:`. Components past the address are ignored.
fn parse_eip155(rest: &str) -> Option<WalletReference> {
    let mut parts = rest.split(SEPARATOR);
    let chain_part = parts.next()?;
    let address_part = parts.next()?;
    let address = parse_address(address_part)?;
    let chain_id = parse_chain_id(chain_part)?;
    Some(WalletReference {
        address,
        chain_id: Some(chain_id),
    })
}

fn parse_address(value: &str) -> Option<Address> {
    if !value.starts_with(HEX_PREFIX) || value.len() != ADDRESS_HEX_LEN {
        return None;
    }
    Address::parse_hex(value).ok()
}

fn parse_chain_id(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
