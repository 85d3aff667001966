//! Vision CLI
//!
//! Command-line interface for submitting image jobs to the Vision backend
//! and waiting for their results.

mod commands;
mod config;
mod notifier;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "vision")]
#[command(about = "Vision image generation CLI", long_about = None)]
struct Cli {
    /// Backend URL
    #[arg(long, env = "VISION_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    /// Session token forwarded to the backend
    #[arg(long, env = "VISION_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Header the session token is sent in
    #[arg(long, env = "VISION_TOKEN_HEADER", default_value = vision_client::DEFAULT_TOKEN_HEADER)]
    token_header: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Notices go to stdout; diagnostics stay on stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vision_cli=info,vision_client=warn,vision_poller=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        token: cli.token,
        token_header: cli.token_header,
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
