//! Feedback documents.
//!
//! `tag1`/`tag2` in the document only fill gaps: when the feedback event
//! already carried a tag on-chain, the document value is ignored.

use crate::error::Result;
use crate::extract::FieldReader;
use crate::normalizer::{decode_object, index_document, DocumentContext, IndexOutcome};
use crate::records::{FeedbackRecord, ParseStatus};
use crate::store::RecordStore;
use crate::vocabulary::{feedback, proof_of_payment, record_kinds};
use erc8004_core::{ContentKey, FeedbackId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackContext {
    pub key: ContentKey,
    pub feedback_id: FeedbackId,
    pub created_at: u64,
    /// Tag values from the feedback event; empty means unset.
    pub tag1_on_chain: String,
    pub tag2_on_chain: String,
}

impl FeedbackContext {
    pub fn new(key: ContentKey, feedback_id: FeedbackId, created_at: u64) -> Self {
        Self {
            key,
            feedback_id,
            created_at,
            tag1_on_chain: String::new(),
            tag2_on_chain: String::new(),
        }
    }

    pub fn with_on_chain_tags(mut self, tag1: impl Into<String>, tag2: impl Into<String>) -> Self {
        self.tag1_on_chain = tag1.into();
        self.tag2_on_chain = tag2.into();
        self
    }
}

impl DocumentContext for FeedbackContext {
    type Record = FeedbackRecord;

    fn key(&self) -> &ContentKey {
        &self.key
    }

    fn owner(&self) -> &str {
        self.feedback_id.as_str()
    }

    fn normalize(&self, content: &[u8]) -> FeedbackRecord {
        parse_feedback(self, content)
    }
}

pub fn parse_feedback(context: &FeedbackContext, content: &[u8]) -> FeedbackRecord {
    let key = &context.key;
    let object = match decode_object(content, key, record_kinds::FEEDBACK) {
        Ok(object) => object,
        Err(status) => {
            return FeedbackRecord::stub(
                key.clone(),
                context.feedback_id.clone(),
                context.created_at,
                status,
            );
        }
    };

    let mut record = FeedbackRecord::stub(
        key.clone(),
        context.feedback_id.clone(),
        context.created_at,
        ParseStatus::Parsed,
    );
    let reader = FieldReader::new(&object, key);

    record.text = reader.string(feedback::TEXT);
    record.capability = reader.string(feedback::CAPABILITY);
    record.name = reader.string(feedback::NAME);
    record.skill = reader.string(feedback::SKILL);
    record.task = reader.string(feedback::TASK);
    record.context = reader.string(feedback::CONTEXT);

    if let Some(proof) = reader.nested(feedback::PROOF_OF_PAYMENT) {
        record.proof_of_payment_from_address = proof.string(proof_of_payment::FROM_ADDRESS);
        record.proof_of_payment_to_address = proof.string(proof_of_payment::TO_ADDRESS);
        record.proof_of_payment_chain_id = proof.string(proof_of_payment::CHAIN_ID);
        record.proof_of_payment_tx_hash = proof.string(proof_of_payment::TX_HASH);
    }

    if context.tag1_on_chain.is_empty() {
        record.tag1 = reader.string(feedback::TAG1);
    }
    if context.tag2_on_chain.is_empty() {
        record.tag2 = reader.string(feedback::TAG2);
    }

    record
}

/// Normalize and persist a feedback document once per content key.
pub fn index_feedback<S>(
    store: &S,
    context: &FeedbackContext,
    content: &[u8],
) -> Result<IndexOutcome>
where
    S: RecordStore<FeedbackRecord> + ?Sized,
{
    index_document(store, context, content)
}
