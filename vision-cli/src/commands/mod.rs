//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod fusion;
mod image;

pub use fusion::FusionCommands;
pub use image::ImageToImageArgs;

use anyhow::Result;
use clap::{Args, Subcommand};
use std::time::Duration;
use vision_poller::PollConfig;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Image fusion jobs
    Fusion {
        #[command(subcommand)]
        command: FusionCommands,
    },
    /// Generate images from a source image and a prompt
    ImageToImage(ImageToImageArgs),
}

/// Overrides for the poll budget
///
/// Unset values come from `VISION_POLL_MAX_ATTEMPTS` and
/// `VISION_POLL_INTERVAL_MS`, then from the built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct PollArgs {
    /// Maximum number of result queries
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Milliseconds to wait between two queries
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

impl PollArgs {
    pub fn to_config(&self) -> Result<PollConfig> {
        let mut config = PollConfig::from_env();
        if let Some(max_attempts) = self.max_attempts {
            config = config.with_max_attempts(max_attempts);
        }
        if let Some(interval_ms) = self.interval_ms {
            config = config.with_interval(Duration::from_millis(interval_ms));
        }
        config.validate()?;
        Ok(config)
    }
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Fusion { command } => fusion::handle_fusion_command(command, config).await,
        Commands::ImageToImage(args) => image::handle_image_to_image(args, config).await,
    }
}
