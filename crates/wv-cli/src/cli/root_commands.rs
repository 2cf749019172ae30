use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Gate a full insight (JSON) down to what the level may see.
    Gate(GateArgs),
    /// Ask the AI layer about a pool or the platform.
    Chat(ChatArgs),
    /// Structured intel for one pool.
    Insight(InsightArgs),
    /// Draft a user-hosted wager from a prompt.
    Draft(DraftArgs),
    /// Perks of the current level and what the next one unlocks.
    Perks,
    /// AI voice and wager-creation eligibility for the level.
    Tone,
    /// Print a contract JSON Schema, or list them.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct GateArgs {
    /// Read the insight from a file instead of stdin.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Fail on inconsistent insight data instead of warning.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    pub message: String,
    /// Category the conversation is scoped to (e.g. Crypto).
    #[arg(long)]
    pub category: Option<String>,
    /// Pools currently on screen; repeatable.
    #[arg(long = "pool")]
    pub pools: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct InsightArgs {
    pub pool_id: String,
}

#[derive(Clone, Debug, Args)]
pub struct DraftArgs {
    pub prompt: String,
    /// Wager duration, e.g. 30m or 4h.
    #[arg(long)]
    pub duration: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name; omit to list all.
    pub name: Option<String>,
}
