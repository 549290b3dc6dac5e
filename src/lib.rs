pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod tui;

pub use application::conversation::Conversation;
pub use cli::{Cli, RunMode};
pub use config::AppConfig;
pub use domain::types::Message;
pub use infrastructure::{backend, history};

use backend::RoomApiClient;
use history::JsonHistory;
use serde_json::json;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use tui::screens::chat::run_chat;

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    // The chat screen owns the terminal; logs would tear it up.
    let quiet_mode = matches!(cli.mode, RunMode::Tui);
    init_tracing(quiet_mode);
    info!("Starting airoom");
    debug!(mode = ?cli.mode, config = ?cli.config, endpoint = ?cli.endpoint, "CLI arguments parsed");

    let config_path = cli.config.as_deref().map(Path::new);
    let mut config = AppConfig::load(config_path)?;
    if let Some(path) = config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration from default path or defaults");
    }
    apply_cli_overrides(&cli, &mut config);

    let backend = Arc::new(RoomApiClient::new(
        config.endpoint.clone(),
        Duration::from_secs(config.timeout_secs),
    )?);

    let mut conversation = if cli.ephemeral {
        info!("Running ephemeral, transcript will not be persisted");
        Conversation::ephemeral()
    } else {
        debug!(path = %config.history_path.display(), "Using history file");
        Conversation::hydrate(Box::new(JsonHistory::new(config.history_path.clone())))
    };

    info!(mode = ?cli.mode, endpoint = %config.endpoint, "Running client in selected mode");
    match cli.mode {
        RunMode::Tui => {
            run_chat(backend, conversation, &config.endpoint).await?;
        }
        RunMode::Once => {
            let prompt = cli.prompt.join(" ");
            if prompt.trim().is_empty() {
                return Err("prompt required for --mode once".into());
            }
            match conversation.exchange(backend.as_ref(), &prompt).await {
                Some(reply) => {
                    let output = json!({ "content": reply.content.clone() });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                None => warn!("Submission was rejected, nothing sent"),
            }
        }
    }
    info!("Client execution finished");
    Ok(())
}

fn init_tracing(quiet: bool) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = if quiet {
            EnvFilter::new("off")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}

fn apply_cli_overrides(cli: &Cli, config: &mut AppConfig) {
    if let Some(endpoint) = &cli.endpoint {
        if *endpoint != config.endpoint {
            info!(endpoint = endpoint.as_str(), "Overriding endpoint from CLI flag");
        }
        config.endpoint = endpoint.clone();
    }
    if let Some(history) = &cli.history {
        config.history_path = config::loader::expand_path(history);
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.timeout_secs = timeout_secs;
    }
}
