use erc8004_metadata::{
    index_feedback, parse_feedback, FeedbackRecord, IndexOutcome, InMemoryMetadataStore,
    ParseStatus,
};
use serde_json::json;
use test_support::common::fixtures::{bytes, feedback_context, full_feedback};

#[test]
fn full_feedback_document_is_extracted() {
    let record = parse_feedback(&feedback_context("bafyfeedback"), &bytes(&full_feedback()));
    assert_eq!(record.parse_status, ParseStatus::Parsed);
    assert_eq!(record.feedback_id.as_str(), "11155111:42:0x9999:1");
    assert_eq!(record.text.as_deref(), Some("Accurate and fast"));
    assert_eq!(record.capability.as_deref(), Some("tools"));
    assert_eq!(record.name.as_deref(), Some("get_forecast"));
    assert_eq!(record.skill.as_deref(), Some("forecast"));
    assert_eq!(record.task.as_deref(), Some("weekly outlook"));
    assert_eq!(record.context.as_deref(), Some("{\"region\":\"EU\"}"));
    assert_eq!(
        record.proof_of_payment_from_address.as_deref(),
        Some("0x2222222222222222222222222222222222222222")
    );
    assert_eq!(
        record.proof_of_payment_to_address.as_deref(),
        Some("0x1111111111111111111111111111111111111111")
    );
    assert_eq!(record.proof_of_payment_chain_id.as_deref(), Some("11155111"));
    assert_eq!(record.proof_of_payment_tx_hash.as_deref(), Some("0xabc123"));
    assert_eq!(record.tag1.as_deref(), Some("accuracy"));
    assert_eq!(record.tag2.as_deref(), Some("latency"));
}

#[test]
fn document_tag_fills_empty_on_chain_tag() {
    let context = feedback_context("bafytags").with_on_chain_tags("", "");
    let record = parse_feedback(&context, &bytes(&json!({ "tag1": "good" })));
    assert_eq!(record.tag1.as_deref(), Some("good"));
    assert_eq!(record.tag2, None);
}

#[test]
fn on_chain_tag_takes_precedence() {
    let context = feedback_context("bafytags").with_on_chain_tags("existing", "");
    let record = parse_feedback(&context, &bytes(&json!({ "tag1": "good", "tag2": "fast" })));
    assert_eq!(record.tag1, None);
    assert_eq!(record.tag2.as_deref(), Some("fast"));

    let context = feedback_context("bafytags").with_on_chain_tags("a", "b");
    let record = parse_feedback(&context, &bytes(&full_feedback()));
    assert_eq!(record.tag1, None);
    assert_eq!(record.tag2, None);
}

#[test]
fn proof_of_payment_fields_are_independent() {
    let record = parse_feedback(
        &feedback_context("bafyproof"),
        &bytes(&json!({ "proof_of_payment": { "txHash": "0xdef", "chainId": null } })),
    );
    assert_eq!(record.proof_of_payment_tx_hash.as_deref(), Some("0xdef"));
    assert_eq!(record.proof_of_payment_chain_id, None);
    assert_eq!(record.proof_of_payment_from_address, None);
    assert_eq!(record.proof_of_payment_to_address, None);
}

#[test]
fn non_object_proof_of_payment_is_ignored() {
    let record = parse_feedback(
        &feedback_context("bafyproof"),
        &bytes(&json!({ "text": "ok", "proof_of_payment": "0xdef" })),
    );
    assert_eq!(record.text.as_deref(), Some("ok"));
    assert_eq!(record.proof_of_payment_tx_hash, None);
}

#[test]
fn wrong_typed_text_fields_are_isolated() {
    let record = parse_feedback(
        &feedback_context("bafytyped"),
        &bytes(&json!({ "text": ["not", "text"], "skill": "forecast", "task": 3 })),
    );
    assert_eq!(record.text, None);
    assert_eq!(record.task, None);
    assert_eq!(record.skill.as_deref(), Some("forecast"));
}

#[test]
fn feedback_is_indexed_once_and_stubs_on_bad_json() {
    let store = InMemoryMetadataStore::new();
    let context = feedback_context("bafyfeedbackstub");

    let outcome = index_feedback(&store, &context, b"not json at all").expect("index");
    assert_eq!(outcome, IndexOutcome::Persisted(ParseStatus::InvalidJson));

    let outcome = index_feedback(&store, &context, &bytes(&full_feedback())).expect("index");
    assert_eq!(outcome, IndexOutcome::AlreadyIndexed);

    let records = store.feedback().expect("snapshot");
    assert_eq!(
        records,
        vec![FeedbackRecord::stub(
            context.key.clone(),
            context.feedback_id.clone(),
            context.created_at,
            ParseStatus::InvalidJson,
        )]
    );
    assert!(store.registrations().expect("snapshot").is_empty());
}
