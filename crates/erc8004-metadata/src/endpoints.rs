//! The `endpoints` array of a registration document.
//!
//! Each entry is dispatched on its `name` discriminant into one of five
//! shapes and folded into the record in array order. Entries with a
//! missing or unknown discriminant, and entries that are not objects, are
//! skipped.
//!
//! Folding is last-entry-wins per field: a second `MCP` entry overwrites
//! every field it supplies and leaves the others as the first entry set
//! them. Producers are expected to publish one entry per protocol.

use crate::extract::FieldReader;
use crate::records::RegistrationRecord;
use crate::vocabulary::{endpoint, endpoint_names};
use crate::wallet::{parse_wallet_reference, WalletReference};
use erc8004_core::ContentKey;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    Mcp,
    A2a,
    AgentWallet,
    Ens,
    Did,
}

const ENDPOINT_KINDS: [(&str, EndpointKind); 5] = [
    (endpoint_names::MCP, EndpointKind::Mcp),
    (endpoint_names::A2A, EndpointKind::A2a),
    (endpoint_names::AGENT_WALLET, EndpointKind::AgentWallet),
    (endpoint_names::ENS, EndpointKind::Ens),
    (endpoint_names::DID, EndpointKind::Did),
];

impl EndpointKind {
    /// Exact, case-sensitive lookup of a discriminant.
    pub fn from_name(name: &str) -> Option<Self> {
        ENDPOINT_KINDS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, kind)| *kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointKind::Mcp => endpoint_names::MCP,
            EndpointKind::A2a => endpoint_names::A2A,
            EndpointKind::AgentWallet => endpoint_names::AGENT_WALLET,
            EndpointKind::Ens => endpoint_names::ENS,
            EndpointKind::Did => endpoint_names::DID,
        }
    }
}

/// One decoded endpoint entry. `None` payload fields leave the record untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointEntry {
    Mcp {
        endpoint: Option<String>,
        version: Option<String>,
        tools: Option<Vec<String>>,
        prompts: Option<Vec<String>>,
        resources: Option<Vec<String>>,
    },
    A2a {
        endpoint: Option<String>,
        version: Option<String>,
        skills: Option<Vec<String>>,
    },
    AgentWallet(Option<WalletReference>),
    Ens(Option<String>),
    Did(Option<String>),
}

impl EndpointEntry {
    pub fn parse(value: &Value, key: &ContentKey) -> Option<Self> {
        let Value::Object(object) = value else {
            debug!(%key, "Skipping endpoint entry that is not an object");
            return None;
        };
        let reader = FieldReader::new(object, key);
        let name = reader.string(endpoint::NAME)?;
        let Some(kind) = EndpointKind::from_name(&name) else {
            debug!(%key, endpoint_name = %name, "Skipping unknown endpoint");
            return None;
        };
        Some(Self::read(kind, &reader, key))
    }

    fn read(kind: EndpointKind, reader: &FieldReader<'_>, key: &ContentKey) -> Self {
        match kind {
            EndpointKind::Mcp => EndpointEntry::Mcp {
                endpoint: reader.string(endpoint::ENDPOINT),
                version: reader.string(endpoint::VERSION),
                tools: reader.strings(endpoint::MCP_TOOLS),
                prompts: reader.strings(endpoint::MCP_PROMPTS),
                resources: reader.strings(endpoint::MCP_RESOURCES),
            },
            EndpointKind::A2a => EndpointEntry::A2a {
                endpoint: reader.string(endpoint::ENDPOINT),
                version: reader.string(endpoint::VERSION),
                skills: reader.strings(endpoint::A2A_SKILLS),
            },
            EndpointKind::AgentWallet => {
                let wallet = reader.string(endpoint::ENDPOINT).and_then(|raw| {
                    let parsed = parse_wallet_reference(&raw);
                    if parsed.is_none() {
                        debug!(%key, value = %raw, "Ignoring unrecognized agentWallet value");
                    }
                    parsed
                });
                EndpointEntry::AgentWallet(wallet)
            }
            EndpointKind::Ens => EndpointEntry::Ens(reader.string(endpoint::ENDPOINT)),
            EndpointKind::Did => EndpointEntry::Did(reader.string(endpoint::ENDPOINT)),
        }
    }

    pub fn kind(&self) -> EndpointKind {
        match self {
            EndpointEntry::Mcp { .. } => EndpointKind::Mcp,
            EndpointEntry::A2a { .. } => EndpointKind::A2a,
            EndpointEntry::AgentWallet(_) => EndpointKind::AgentWallet,
            EndpointEntry::Ens(_) => EndpointKind::Ens,
            EndpointEntry::Did(_) => EndpointKind::Did,
        }
    }

    pub fn fold_into(self, record: &mut RegistrationRecord) {
        match self {
            EndpointEntry::Mcp {
                endpoint,
                version,
                tools,
                prompts,
                resources,
            } => {
                overwrite(&mut record.mcp_endpoint, endpoint);
                overwrite(&mut record.mcp_version, version);
                replace(&mut record.mcp_tools, tools);
                replace(&mut record.mcp_prompts, prompts);
                replace(&mut record.mcp_resources, resources);
            }
            EndpointEntry::A2a {
                endpoint,
                version,
                skills,
            } => {
                overwrite(&mut record.a2a_endpoint, endpoint);
                overwrite(&mut record.a2a_version, version);
                replace(&mut record.a2a_skills, skills);
            }
            EndpointEntry::AgentWallet(Some(wallet)) => {
                record.agent_wallet = Some(wallet.address);
                // The chain id is only written alongside an eip155 reference.
                if wallet.chain_id.is_some() {
                    record.agent_wallet_chain_id = wallet.chain_id;
                }
            }
            EndpointEntry::AgentWallet(None) => {}
            EndpointEntry::Ens(ens) => overwrite(&mut record.ens, ens),
            EndpointEntry::Did(did) => overwrite(&mut record.did, did),
        }
    }
}

fn overwrite<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

fn replace(slot: &mut Vec<String>, value: Option<Vec<String>>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Fold every recognized entry of an `endpoints` array into `record`, in order.
pub fn apply_endpoints(entries: &[Value], key: &ContentKey, record: &mut RegistrationRecord) {
    for entry in entries.iter().filter_map(|value| EndpointEntry::parse(value, key)) {
        debug!(%key, endpoint = entry.kind().as_str(), "Applying endpoint entry");
        entry.fold_into(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::ParseStatus;
    use erc8004_core::{Address, AgentId};
    use serde_json::json;
    use tracing_test::traced_test;

    fn key() -> ContentKey {
        ContentKey::parse("QmEndpoints").unwrap()
    }

    fn empty_record() -> RegistrationRecord {
        RegistrationRecord::stub(key(), AgentId::new("1"), 0, ParseStatus::Parsed)
    }

    fn apply(entries: Value) -> RegistrationRecord {
        let mut record = empty_record();
        let entries = entries.as_array().cloned().unwrap_or_default();
        apply_endpoints(&entries, &key(), &mut record);
        record
    }

    #[test]
    fn discriminants_are_case_sensitive() {
        assert_eq!(EndpointKind::from_name("MCP"), Some(EndpointKind::Mcp));
        assert_eq!(EndpointKind::from_name("agentWallet"), Some(EndpointKind::AgentWallet));
        assert_eq!(EndpointKind::from_name("mcp"), None);
        assert_eq!(EndpointKind::from_name("AgentWallet"), None);
        for (name, kind) in ENDPOINT_KINDS {
            assert_eq!(kind.as_str(), name);
        }
    }

    #[test]
    fn each_kind_fills_its_own_fields() {
        let record = apply(json!([
            {
                "name": "MCP",
                "endpoint": "https://mcp.example.com",
                "version": "2025-06-18",
                "mcpTools": ["search", "fetch"],
                "mcpPrompts": ["summarize"],
                "mcpResources": ["docs://index"]
            },
            {
                "name": "A2A",
                "endpoint": "https://a2a.example.com/.well-known/agent-card.json",
                "version": "0.3.0",
                "a2aSkills": ["translate"]
            },
            {
                "name": "agentWallet",
                "endpoint": "eip155:11155111:0x3333333333333333333333333333333333333333"
            },
            { "name": "ENS", "endpoint": "agent.eth" },
            { "name": "DID", "endpoint": "did:web:agent.example.com" }
        ]));
        assert_eq!(record.mcp_endpoint.as_deref(), Some("https://mcp.example.com"));
        assert_eq!(record.mcp_version.as_deref(), Some("2025-06-18"));
        assert_eq!(record.mcp_tools, vec!["search", "fetch"]);
        assert_eq!(record.mcp_prompts, vec!["summarize"]);
        assert_eq!(record.mcp_resources, vec!["docs://index"]);
        assert_eq!(record.a2a_version.as_deref(), Some("0.3.0"));
        assert_eq!(record.a2a_skills, vec!["translate"]);
        assert_eq!(
            record.agent_wallet,
            Some(Address::parse_hex("0x3333333333333333333333333333333333333333").unwrap())
        );
        assert_eq!(record.agent_wallet_chain_id, Some(11155111));
        assert_eq!(record.ens.as_deref(), Some("agent.eth"));
        assert_eq!(record.did.as_deref(), Some("did:web:agent.example.com"));
    }

    #[test]
    fn later_mcp_entry_overwrites_only_the_fields_it_supplies() {
        let record = apply(json!([
            {
                "name": "MCP",
                "endpoint": "https://first",
                "version": "1",
                "mcpTools": ["a"],
                "mcpPrompts": ["p"]
            },
            { "name": "MCP", "endpoint": "https://second", "mcpTools": ["b", "c"] }
        ]));
        assert_eq!(record.mcp_endpoint.as_deref(), Some("https://second"));
        assert_eq!(record.mcp_version.as_deref(), Some("1"));
        assert_eq!(record.mcp_tools, vec!["b", "c"]);
        assert_eq!(record.mcp_prompts, vec!["p"]);
    }

    #[test]
    fn unknown_missing_and_non_object_entries_are_skipped() {
        let record = apply(json!([
            "MCP",
            42,
            null,
            { "endpoint": "https://nameless" },
            { "name": null, "endpoint": "https://null-name" },
            { "name": 5, "endpoint": "https://numeric-name" },
            { "name": "OASF", "endpoint": "https://oasf" },
            { "name": "ENS", "endpoint": "kept.eth" }
        ]));
        assert_eq!(record.ens.as_deref(), Some("kept.eth"));
        assert_eq!(record.mcp_endpoint, None);
        assert_eq!(record.a2a_endpoint, None);
    }

    #[test]
    fn invalid_list_leaves_default_and_keeps_siblings() {
        let record = apply(json!([
            { "name": "MCP", "endpoint": "https://mcp", "mcpTools": "search", "mcpPrompts": ["p"] }
        ]));
        assert!(record.mcp_tools.is_empty());
        assert_eq!(record.mcp_prompts, vec!["p"]);
        assert_eq!(record.mcp_endpoint.as_deref(), Some("https://mcp"));
    }

    #[test]
    fn malformed_wallet_is_ignored() {
        let record = apply(json!([
            { "name": "agentWallet", "endpoint": "not-a-wallet" },
            { "name": "agentWallet", "endpoint": 12 },
            { "name": "DID", "endpoint": "did:key:z6Mk" }
        ]));
        assert_eq!(record.agent_wallet, None);
        assert_eq!(record.agent_wallet_chain_id, None);
        assert_eq!(record.did.as_deref(), Some("did:key:z6Mk"));
    }

    #[test]
    fn bare_wallet_keeps_earlier_chain_id() {
        let record = apply(json!([
            {
                "name": "agentWallet",
                "endpoint": "eip155:1:0x1111111111111111111111111111111111111111"
            },
            { "name": "agentWallet", "endpoint": "0x2222222222222222222222222222222222222222" }
        ]));
        assert_eq!(
            record.agent_wallet,
            Some(Address::parse_hex("0x2222222222222222222222222222222222222222").unwrap())
        );
        assert_eq!(record.agent_wallet_chain_id, Some(1));
    }

    #[test]
    fn null_fields_behave_like_absent_ones() {
        let record = apply(json!([
            { "name": "A2A", "endpoint": "https://a2a", "version": "1", "a2aSkills": ["s"] },
            { "name": "A2A", "endpoint": null, "version": null, "a2aSkills": null }
        ]));
        assert_eq!(record.a2a_endpoint.as_deref(), Some("https://a2a"));
        assert_eq!(record.a2a_version.as_deref(), Some("1"));
        assert_eq!(record.a2a_skills, vec!["s"]);
    }

    #[test]
    fn entry_kind_matches_discriminant() {
        let entry = EndpointEntry::parse(&json!({ "name": "ENS", "endpoint": "x.eth" }), &key())
            .expect("ens entry");
        assert_eq!(entry.kind(), EndpointKind::Ens);
        assert_eq!(entry, EndpointEntry::Ens(Some("x.eth".to_string())));
    }

    #[test]
    #[traced_test]
    fn applied_entries_are_logged_by_kind() {
        let record = apply(json!([
            { "name": "MCP", "endpoint": "https://mcp" },
            { "name": "Unknown", "endpoint": "https://other" }
        ]));
        assert_eq!(record.mcp_endpoint.as_deref(), Some("https://mcp"));
        assert!(logs_contain("Applying endpoint entry"));
        assert!(logs_contain("MCP"));
    }
}
