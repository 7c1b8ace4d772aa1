use crate::vocabulary::record_kinds;
use erc8004_core::{Address, AgentId, ContentKey, FeedbackId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Outcome of decoding a document's bytes, kept on the record so stubs are queryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStatus {
    Parsed,
    InvalidJson,
    NotAnObject,
}

impl ParseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseStatus::Parsed => "parsed",
            ParseStatus::InvalidJson => "invalid_json",
            ParseStatus::NotAnObject => "not_an_object",
        }
    }

    pub fn is_stub(&self) -> bool {
        !matches!(self, ParseStatus::Parsed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Registration,
    Feedback,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Registration => record_kinds::REGISTRATION,
            RecordKind::Feedback => record_kinds::FEEDBACK,
        }
    }
}

/// A write-once record keyed by the content key of its source document.
pub trait MetadataRecord: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: RecordKind;

    fn key(&self) -> &ContentKey;
    fn parse_status(&self) -> ParseStatus;
}

/// Normalized agent registration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub key: ContentKey,
    pub agent_id: AgentId,
    pub created_at: u64,
    pub parse_status: ParseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x402support: Option<bool>,
    #[serde(default)]
    pub supported_trusts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcp_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcp_version: Option<String>,
    #[serde(default)]
    pub mcp_tools: Vec<String>,
    #[serde(default)]
    pub mcp_prompts: Vec<String>,
    #[serde(default)]
    pub mcp_resources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a2a_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a2a_version: Option<String>,
    #[serde(default)]
    pub a2a_skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_wallet: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_wallet_chain_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ens: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did: Option<String>,
}

impl RegistrationRecord {
    /// Record carrying only the contextual fields.
    pub fn stub(key: ContentKey, agent_id: AgentId, created_at: u64, status: ParseStatus) -> Self {
        Self {
            key,
            agent_id,
            created_at,
            parse_status: status,
            name: None,
            description: None,
            image: None,
            active: None,
            x402support: None,
            supported_trusts: Vec::new(),
            mcp_endpoint: None,
            mcp_version: None,
            mcp_tools: Vec::new(),
            mcp_prompts: Vec::new(),
            mcp_resources: Vec::new(),
            a2a_endpoint: None,
            a2a_version: None,
            a2a_skills: Vec::new(),
            agent_wallet: None,
            agent_wallet_chain_id: None,
            ens: None,
            did: None,
        }
    }
}

impl MetadataRecord for RegistrationRecord {
    const KIND: RecordKind = RecordKind::Registration;

    fn key(&self) -> &ContentKey {
        &self.key
    }

    fn parse_status(&self) -> ParseStatus {
        self.parse_status
    }
}

/// Normalized feedback document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub key: ContentKey,
    pub feedback_id: FeedbackId,
    pub created_at: u64,
    pub parse_status: ParseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_of_payment_from_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_of_payment_to_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_of_payment_chain_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_of_payment_tx_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag2: Option<String>,
}

impl FeedbackRecord {
    pub fn stub(
        key: ContentKey,
        feedback_id: FeedbackId,
        created_at: u64,
        status: ParseStatus,
    ) -> Self {
        Self {
            key,
            feedback_id,
            created_at,
            parse_status: status,
            text: None,
            capability: None,
            name: None,
            skill: None,
            task: None,
            context: None,
            proof_of_payment_from_address: None,
            proof_of_payment_to_address: None,
            proof_of_payment_chain_id: None,
            proof_of_payment_tx_hash: None,
            tag1: None,
            tag2: None,
        }
    }
}

impl MetadataRecord for FeedbackRecord {
    const KIND: RecordKind = RecordKind::Feedback;

    fn key(&self) -> &ContentKey {
        &self.key
    }

    fn parse_status(&self) -> ParseStatus {
        self.parse_status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_status_serializes_as_its_label() {
        for status in [ParseStatus::Parsed, ParseStatus::InvalidJson, ParseStatus::NotAnObject] {
            assert_eq!(serde_json::to_value(status).unwrap(), json!(status.as_str()));
        }
        assert!(!ParseStatus::Parsed.is_stub());
        assert!(ParseStatus::InvalidJson.is_stub());
    }

    #[test]
    fn stub_record_omits_document_fields() {
        let key = ContentKey::parse("QmStub").unwrap();
        let stub = RegistrationRecord::stub(key, AgentId::new("1:1"), 5, ParseStatus::NotAnObject);
        let value = serde_json::to_value(&stub).unwrap();
        assert_eq!(value["parseStatus"], "not_an_object");
        assert!(value.get("name").is_none());
        assert!(value.get("agentWallet").is_none());

        let back: RegistrationRecord = serde_json::from_value(json!({
            "key": "QmStub",
            "agentId": "1:1",
            "createdAt": 5,
            "parseStatus": "not_an_object"
        }))
        .unwrap();
        assert_eq!(back, stub);
    }
}
