//! ERC-8004 metadata indexer
//!
//! Normalizes registration and feedback documents that were already
//! fetched to disk, persists them once per content key, and prints the
//! stored record as JSON. Also exposes the registry address table.

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand, ValueEnum};
use erc8004_core::chain;
use erc8004_core::{AgentId, ContentKey, FeedbackId};
use erc8004_metadata::{
    index_feedback, index_registration, FeedbackContext, FeedbackRecord, FileMetadataStore,
    FileMetadataStoreConfig, InMemoryMetadataStore, IndexOutcome, MetadataStore, RecordStore,
    RegistrationContext, RegistrationRecord,
};
use erc8004_observability::{spans, tracing_setup};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
enum StoreKind {
    Memory,
    File { root: PathBuf },
}

#[derive(Debug, Clone)]
enum Action {
    Registration {
        file: PathBuf,
        context: RegistrationContext,
    },
    Feedback {
        file: PathBuf,
        context: FeedbackContext,
    },
    Show { kind: RecordChoice, key: ContentKey },
    Chain { chain_id: u64 },
}

#[derive(Debug, Clone)]
struct IndexerConfig {
    store: StoreKind,
    action: Action,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StoreChoice {
    Memory,
    File,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RecordChoice {
    Registration,
    Feedback,
}

impl RecordChoice {
    fn as_str(self) -> &'static str {
        match self {
            RecordChoice::Registration => "registration",
            RecordChoice::Feedback => "feedback",
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "erc8004-indexer")]
#[command(
    about = "Normalize ERC-8004 metadata documents into write-once records",
    long_about = None
)]
struct Cli {
    /// Record storage backend.
    #[arg(long, value_enum, default_value_t = StoreChoice::File, global = true)]
    store: StoreChoice,

    /// Root directory of the file store.
    #[arg(long, default_value = ".erc8004-store", global = true)]
    store_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Index an agent registration document.
    Registration {
        /// Path to the raw document bytes.
        file: PathBuf,
        /// Content key (CID) of the document.
        #[arg(long)]
        key: String,
        /// Owning agent id.
        #[arg(long)]
        agent_id: String,
        /// Creation timestamp of the owning event.
        #[arg(long)]
        timestamp: u64,
    },
    /// Index a feedback document.
    Feedback {
        /// Path to the raw document bytes.
        file: PathBuf,
        /// Content key (CID) of the document.
        #[arg(long)]
        key: String,
        /// Owning feedback id.
        #[arg(long)]
        feedback_id: String,
        /// Creation timestamp of the owning event.
        #[arg(long)]
        timestamp: u64,
        /// tag1 as emitted on-chain; the document tag1 is only used when empty.
        #[arg(long, default_value = "")]
        tag1_on_chain: String,
        /// tag2 as emitted on-chain; the document tag2 is only used when empty.
        #[arg(long, default_value = "")]
        tag2_on_chain: String,
    },
    /// Print a stored record.
    Show {
        #[arg(value_enum)]
        kind: RecordChoice,
        #[arg(long)]
        key: String,
    },
    /// Print the registry addresses for a chain.
    Chain {
        #[arg(long, conflicts_with = "network", required_unless_present = "network")]
        chain_id: Option<u64>,
        /// Indexer network name, e.g. `sepolia`.
        #[arg(long)]
        network: Option<String>,
    },
}

fn parse_key(raw: String) -> anyhow::Result<ContentKey> {
    ContentKey::parse(raw).context("Invalid --key")
}

impl Cli {
    fn into_config(self) -> anyhow::Result<IndexerConfig> {
        let store = match self.store {
            StoreChoice::Memory => StoreKind::Memory,
            StoreChoice::File => StoreKind::File {
                root: self.store_dir,
            },
        };

        let action = match self.command {
            Command::Registration {
                file,
                key,
                agent_id,
                timestamp,
            } => {
                let key = parse_key(key)?;
                let context = RegistrationContext::new(key, AgentId::new(agent_id), timestamp);
                Action::Registration { file, context }
            }
            Command::Feedback {
                file,
                key,
                feedback_id,
                timestamp,
                tag1_on_chain,
                tag2_on_chain,
            } => {
                let key = parse_key(key)?;
                let context = FeedbackContext::new(key, FeedbackId::new(feedback_id), timestamp)
                    .with_on_chain_tags(tag1_on_chain, tag2_on_chain);
                Action::Feedback { file, context }
            }
            Command::Show { kind, key } => Action::Show {
                kind,
                key: parse_key(key)?,
            },
            Command::Chain { chain_id, network } => {
                let chain_id = match (chain_id, network) {
                    (Some(chain_id), _) => chain_id,
                    (None, Some(network)) => chain::chain_id_for_network(&network),
                    (None, None) => return Err(anyhow!("--chain-id or --network is required")),
                };
                Action::Chain { chain_id }
            }
        };

        Ok(IndexerConfig { store, action })
    }
}

fn build_store(kind: &StoreKind) -> Arc<dyn MetadataStore> {
    match kind {
        StoreKind::Memory => Arc::new(InMemoryMetadataStore::new()),
        StoreKind::File { root } => {
            Arc::new(FileMetadataStore::new(FileMetadataStoreConfig::new(root.clone())))
        }
    }
}

fn read_document(path: &Path) -> anyhow::Result<Vec<u8>> {
    let span = spans::load_document(path);
    let _guard = span.enter();
    std::fs::read(path).with_context(|| format!("Failed to read document {}", path.display()))
}

fn outcome_json<R: Serialize>(outcome: IndexOutcome, record: Option<R>) -> anyhow::Result<Value> {
    let (label, status) = match outcome {
        IndexOutcome::Persisted(status) => ("persisted", Some(status.as_str())),
        IndexOutcome::AlreadyIndexed => ("already_indexed", None),
    };
    Ok(json!({
        "outcome": label,
        "parseStatus": status,
        "record": serde_json::to_value(record)?,
    }))
}

fn run(config: IndexerConfig) -> anyhow::Result<Value> {
    let store = build_store(&config.store);
    match config.action {
        Action::Registration { file, context } => {
            let content = read_document(&file)?;
            let outcome = index_registration(&store, &context, &content)?;
            let record = RecordStore::<RegistrationRecord>::load(&store, &context.key)?;
            outcome_json(outcome, record)
        }
        Action::Feedback { file, context } => {
            let content = read_document(&file)?;
            let outcome = index_feedback(&store, &context, &content)?;
            let record = RecordStore::<FeedbackRecord>::load(&store, &context.key)?;
            outcome_json(outcome, record)
        }
        Action::Show { kind, key } => {
            let record = match kind {
                RecordChoice::Registration => {
                    RecordStore::<RegistrationRecord>::load(&store, &key)?
                        .map(serde_json::to_value)
                        .transpose()?
                }
                RecordChoice::Feedback => RecordStore::<FeedbackRecord>::load(&store, &key)?
                    .map(serde_json::to_value)
                    .transpose()?,
            };
            record.ok_or_else(|| anyhow!("No {} record stored for key {}", kind.as_str(), key))
        }
        Action::Chain { chain_id } => Ok(json!({
            "chainId": chain_id,
            "chainName": chain::chain_name(chain_id),
            "supported": chain::is_supported_chain(chain_id),
            "addresses": chain::resolve_addresses(chain_id),
        })),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_setup::init_tracing();

    let config = Cli::parse().into_config().context("Failed to parse arguments")?;
    info!(store = ?config.store, "ERC-8004 indexer starting");

    let output = run(config)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
