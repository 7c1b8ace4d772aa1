//! Agent registration documents.

use crate::endpoints::apply_endpoints;
use crate::error::Result;
use crate::extract::FieldReader;
use crate::normalizer::{decode_object, index_document, DocumentContext, IndexOutcome};
use crate::records::{ParseStatus, RegistrationRecord};
use crate::store::RecordStore;
use crate::vocabulary::{record_kinds, registration};
use erc8004_core::{AgentId, ContentKey};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationContext {
    pub key: ContentKey,
    pub agent_id: AgentId,
    pub created_at: u64,
}

impl RegistrationContext {
    pub fn new(key: ContentKey, agent_id: AgentId, created_at: u64) -> Self {
        Self {
            key,
            agent_id,
            created_at,
        }
    }
}

impl DocumentContext for RegistrationContext {
    type Record = RegistrationRecord;

    fn key(&self) -> &ContentKey {
        &self.key
    }

    fn owner(&self) -> &str {
        self.agent_id.as_str()
    }

    fn normalize(&self, content: &[u8]) -> RegistrationRecord {
        parse_registration(self, content)
    }
}

/// Normalize a registration document without touching any store.
pub fn parse_registration(context: &RegistrationContext, content: &[u8]) -> RegistrationRecord {
    let key = &context.key;
    let object = match decode_object(content, key, record_kinds::REGISTRATION) {
        Ok(object) => object,
        Err(status) => {
            return RegistrationRecord::stub(
                key.clone(),
                context.agent_id.clone(),
                context.created_at,
                status,
            );
        }
    };

    let mut record = RegistrationRecord::stub(
        key.clone(),
        context.agent_id.clone(),
        context.created_at,
        ParseStatus::Parsed,
    );
    let reader = FieldReader::new(&object, key);

    record.name = reader.string(registration::NAME);
    record.description = reader.string(registration::DESCRIPTION);
    record.image = reader.string(registration::IMAGE);
    record.active = reader.bool(registration::ACTIVE);
    record.x402support = reader.bool(registration::X402_SUPPORT);

    let trusts_field = if reader.has(registration::SUPPORTED_TRUSTS) {
        registration::SUPPORTED_TRUSTS
    } else {
        registration::SUPPORTED_TRUST
    };
    if let Some(trusts) = reader.strings(trusts_field) {
        record.supported_trusts = trusts;
    }

    if let Some(endpoints) = reader.array(registration::ENDPOINTS) {
        apply_endpoints(endpoints, key, &mut record);
    }

    info!(
        %key,
        name = record.name.as_deref().unwrap_or("null"),
        description = record.description.as_deref().unwrap_or("null"),
        "Successfully parsed registration file"
    );
    record
}

/// Normalize and persist a registration document once per content key.
pub fn index_registration<S>(
    store: &S,
    context: &RegistrationContext,
    content: &[u8],
) -> Result<IndexOutcome>
where
    S: RecordStore<RegistrationRecord> + ?Sized,
{
    index_document(store, context, content)
}
