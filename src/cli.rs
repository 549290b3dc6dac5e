use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "airoom", version, about = "Terminal client for an AI chat room service")]
pub struct Cli {
    /// Base URL of the chat room service
    #[arg(long)]
    pub endpoint: Option<String>,
    /// Path to a configuration file
    #[arg(long)]
    pub config: Option<String>,
    /// Path to the history file
    #[arg(long)]
    pub history: Option<String>,
    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
    /// Keep the transcript in memory only
    #[arg(long)]
    pub ephemeral: bool,
    #[arg(long, value_enum, default_value_t = RunMode::Tui)]
    pub mode: RunMode,
    /// Prompt for `--mode once`
    #[arg()]
    pub prompt: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    /// Interactive chat screen
    Tui,
    /// Send one prompt and print the reply as JSON
    Once,
}
