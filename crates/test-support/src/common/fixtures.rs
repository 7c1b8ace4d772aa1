//! Sample metadata documents as published by agent operators.

use erc8004_core::{AgentId, ContentKey, FeedbackId};
use erc8004_metadata::{FeedbackContext, RegistrationContext};
use serde_json::{json, Value};

pub const CREATED_AT: u64 = 1_727_000_000;

pub fn key(raw: &str) -> ContentKey {
    ContentKey::parse(raw).expect("fixture content key")
}

pub fn registration_context(raw_key: &str) -> RegistrationContext {
    RegistrationContext::new(key(raw_key), AgentId::new("11155111:42"), CREATED_AT)
}

pub fn feedback_context(raw_key: &str) -> FeedbackContext {
    FeedbackContext::new(key(raw_key), FeedbackId::new("11155111:42:0x9999:1"), CREATED_AT)
}

/// A registration document exercising every recognized field.
pub fn full_registration() -> Value {
    json!({
        "type": "https://eips.ethereum.org/EIPS/eip-8004#registration-v1",
        "name": "Forecast Agent",
        "description": "Answers weather questions",
        "image": "ipfs://bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi",
        "active": true,
        "x402support": true,
        "supportedTrusts": ["reputation", "crypto-economic"],
        "endpoints": [
            {
                "name": "MCP",
                "endpoint": "https://mcp.forecast.example/",
                "version": "2025-06-18",
                "mcpTools": ["get_forecast", "get_alerts"],
                "mcpPrompts": ["daily_briefing"],
                "mcpResources": ["forecast://regions"]
            },
            {
                "name": "A2A",
                "endpoint": "https://forecast.example/.well-known/agent-card.json",
                "version": "0.3.0",
                "a2aSkills": ["forecast", "alerts"]
            },
            {
                "name": "agentWallet",
                "endpoint": "eip155:11155111:0x1111111111111111111111111111111111111111"
            },
            { "name": "ENS", "endpoint": "forecast.eth" },
            { "name": "DID", "endpoint": "did:web:forecast.example" }
        ]
    })
}

/// A feedback document with every recognized field.
pub fn full_feedback() -> Value {
    json!({
        "text": "Accurate and fast",
        "capability": "tools",
        "name": "get_forecast",
        "skill": "forecast",
        "task": "weekly outlook",
        "context": "{\"region\":\"EU\"}",
        "tag1": "accuracy",
        "tag2": "latency",
        "proof_of_payment": {
            "fromAddress": "0x2222222222222222222222222222222222222222",
            "toAddress": "0x1111111111111111111111111111111111111111",
            "chainId": "11155111",
            "txHash": "0xabc123"
        }
    })
}

pub fn bytes(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).expect("serialize fixture")
}
