//! Assistant Bot - Main entry point
//!
//! Starts an interactive session on stdin/stdout. Logs go to stderr so they
//! never interleave with the conversation.

use anyhow::Result;
use assistant_bot::{Config, JsonFileStorage, Session};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to keep stdout for the user)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(path = %config.book_path.display(), "Opening address book");
    let storage = JsonFileStorage::new(&config.book_path);
    let mut session = Session::open(storage, &config);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let end = session.run(stdin, &mut stdout).await?;

    info!(?end, "Session finished");
    Ok(())
}
