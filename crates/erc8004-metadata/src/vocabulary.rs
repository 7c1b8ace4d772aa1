//! Metadata document vocabulary.
//!
//! JSON field names are case-sensitive and must match what agent
//! registration and feedback producers publish.

// Registration document top-level fields
pub mod registration {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const IMAGE: &str = "image";
    pub const ACTIVE: &str = "active";
    pub const X402_SUPPORT: &str = "x402support";
    pub const SUPPORTED_TRUSTS: &str = "supportedTrusts";
    // Singular alias emitted by some producers.
    pub const SUPPORTED_TRUST: &str = "supportedTrust";
    pub const ENDPOINTS: &str = "endpoints";
}

// Fields of one entry in the `endpoints` array
pub mod endpoint {
    pub const NAME: &str = "name";
    pub const ENDPOINT: &str = "endpoint";
    pub const VERSION: &str = "version";
    pub const MCP_TOOLS: &str = "mcpTools";
    pub const MCP_PROMPTS: &str = "mcpPrompts";
    pub const MCP_RESOURCES: &str = "mcpResources";
    pub const A2A_SKILLS: &str = "a2aSkills";
}

// Values of the endpoint `name` discriminant
pub mod endpoint_names {
    pub const MCP: &str = "MCP";
    pub const A2A: &str = "A2A";
    pub const AGENT_WALLET: &str = "agentWallet";
    pub const ENS: &str = "ENS";
    pub const DID: &str = "DID";
}

// Feedback document fields
pub mod feedback {
    pub const TEXT: &str = "text";
    pub const CAPABILITY: &str = "capability";
    pub const NAME: &str = "name";
    pub const SKILL: &str = "skill";
    pub const TASK: &str = "task";
    pub const CONTEXT: &str = "context";
    pub const PROOF_OF_PAYMENT: &str = "proof_of_payment";
    pub const TAG1: &str = "tag1";
    pub const TAG2: &str = "tag2";
}

pub mod proof_of_payment {
    pub const FROM_ADDRESS: &str = "fromAddress";
    pub const TO_ADDRESS: &str = "toAddress";
    pub const CHAIN_ID: &str = "chainId";
    pub const TX_HASH: &str = "txHash";
}

// Wallet reference grammar
pub mod wallet {
    pub const EIP155_NAMESPACE: &str = "eip155";
    pub const SEPARATOR: char = ':';
    pub const HEX_PREFIX: &str = "0x";
}

// Record kinds, used as store partitions and span labels
pub mod record_kinds {
    pub const REGISTRATION: &str = "registration";
    pub const FEEDBACK: &str = "feedback";
}
