//! Contact Book - Main entry point
//!
//! Runs an interactive assistant session on stdin/stdout.

use anyhow::Result;
use contact_book::{run_session, Assistant, Config};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they never mix with the conversation on stdout
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(today = ?config.today, "Configuration loaded");

    let mut assistant = Assistant::from_config(&config);
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    run_session(&mut assistant, stdin, stdout, &config.prompt).await?;

    info!(contacts = assistant.book().len(), "Session finished");
    Ok(())
}
