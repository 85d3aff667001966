//! Fusion command handlers
//!
//! Submits image fusion jobs and waits for their results.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use colored::*;
use tracing::{debug, info};
use vision_client::ImageClient;
use vision_core::domain::fusion::FusionResult;
use vision_core::dto::fusion::{Dimensions, FusionMode, ImageFusionRequest};
use vision_core::{JobId, JobPayload, SubmittedJob};
use vision_poller::{CancellationToken, JobPoller, Notifier, PollConfig};

use super::PollArgs;
use crate::config::Config;
use crate::notifier::ConsoleNotifier;

/// Fusion subcommands
#[derive(Subcommand)]
pub enum FusionCommands {
    /// Submit a fusion job and print its id
    Submit(FusionArgs),
    /// Query a job's result once
    Result {
        /// Job ID returned on submission
        job_id: String,
    },
    /// Wait for a submitted job to finish
    Wait {
        /// Job ID returned on submission
        job_id: String,

        #[command(flatten)]
        poll: PollArgs,
    },
    /// Submit a fusion job and wait for its result
    Run {
        #[command(flatten)]
        fusion: FusionArgs,

        #[command(flatten)]
        poll: PollArgs,
    },
}

/// Fusion request options
#[derive(Args, Debug, Clone)]
pub struct FusionArgs {
    /// Image URL to fuse (repeat for each image)
    #[arg(short, long = "image", required = true)]
    images: Vec<String>,

    /// Design feature guiding the fusion
    #[arg(short, long)]
    feature: Option<String>,

    /// Output aspect
    #[arg(long, value_enum, default_value_t = DimensionsArg::Square)]
    dimensions: DimensionsArg,

    /// Generation speed tier
    #[arg(long, value_enum, default_value_t = ModeArg::Relax)]
    mode: ModeArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum DimensionsArg {
    Portrait,
    Square,
    Landscape,
}

impl From<DimensionsArg> for Dimensions {
    fn from(arg: DimensionsArg) -> Self {
        match arg {
            DimensionsArg::Portrait => Dimensions::Portrait,
            DimensionsArg::Square => Dimensions::Square,
            DimensionsArg::Landscape => Dimensions::Landscape,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ModeArg {
    Relax,
    Fast,
    Turbo,
}

impl From<ModeArg> for FusionMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Relax => FusionMode::Relax,
            ModeArg::Fast => FusionMode::Fast,
            ModeArg::Turbo => FusionMode::Turbo,
        }
    }
}

impl FusionArgs {
    fn to_request(&self) -> ImageFusionRequest {
        let request = ImageFusionRequest::new(self.images.clone())
            .with_dimensions(self.dimensions.into())
            .with_mode(self.mode.into());

        match &self.feature {
            Some(feature) => request.with_text_feature(feature),
            None => request,
        }
    }
}

/// Handle fusion commands
///
/// # Arguments
/// * `command` - The fusion command to execute
/// * `config` - The CLI configuration
pub async fn handle_fusion_command(command: FusionCommands, config: &Config) -> Result<()> {
    let client = Arc::new(config.client());
    let notifier = Arc::new(ConsoleNotifier);

    match command {
        FusionCommands::Submit(fusion) => {
            let job = submit(&client, &fusion, notifier.as_ref()).await?;
            println!("  Job ID: {}", job.job_id.to_string().cyan());
            Ok(())
        }
        FusionCommands::Result { job_id } => show_result(&client, &job_id).await,
        FusionCommands::Wait { job_id, poll } => {
            wait_for_result(client, &job_id, poll.to_config()?, notifier).await
        }
        FusionCommands::Run { fusion, poll } => {
            let poll = poll.to_config()?;
            let job = submit(&client, &fusion, notifier.as_ref()).await?;
            wait_for_result(client, job.job_id.as_str(), poll, notifier).await
        }
    }
}

/// Submit a fusion job, echoing the backend's message
async fn submit(
    client: &ImageClient,
    fusion: &FusionArgs,
    notifier: &dyn Notifier,
) -> Result<SubmittedJob> {
    match client.submit_fusion(&fusion.to_request()).await {
        Ok(job) => {
            let message = job
                .message
                .clone()
                .unwrap_or_else(|| "Fusion job submitted".to_string());
            notifier.success(&message);
            Ok(job)
        }
        Err(e) => {
            notifier.error(&e.to_string());
            Err(e).context("Failed to submit fusion job")
        }
    }
}

/// Query a job once and report where it stands
async fn show_result(client: &ImageClient, job_id: &str) -> Result<()> {
    let job_id = JobId::new(job_id).context("Job ID cannot be empty")?;

    match client.fetch_fusion_result(&job_id).await {
        Ok(Some(result)) if result.is_ready() => print_fusion_result(&job_id, &result),
        Ok(_) => println!("{}", format!("Job {} is still processing.", job_id).yellow()),
        Err(e) if e.is_queue_pending() => {
            println!("{}", format!("Job {} is queued.", job_id).yellow())
        }
        Err(e) => return Err(e).context("Failed to fetch fusion result"),
    }

    Ok(())
}

/// Poll a job until it resolves, times out, or the user presses Ctrl-C
async fn wait_for_result(
    client: Arc<ImageClient>,
    job_id: &str,
    poll: PollConfig,
    notifier: Arc<ConsoleNotifier>,
) -> Result<()> {
    debug!(
        "Waiting for job {} ({} attempts, {:?} apart)",
        job_id, poll.max_attempts, poll.interval
    );
    let poller = JobPoller::new(client, poll).with_notifier(notifier.clone());

    let cancel = CancellationToken::new();
    let ctrl_c = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Interrupted, cancelling poll session");
                cancel.cancel();
            }
        })
    };

    let outcome = poller.resolve_with_cancel(job_id, &cancel).await;
    ctrl_c.abort();

    report_outcome(job_id, outcome, notifier.as_ref())
}

/// Prints a finished job, or turns a failed or abandoned session into an error
///
/// A cancelled wait is an error too, so the process exits non-zero.
fn report_outcome(
    job_id: &str,
    outcome: vision_poller::Result<FusionResult>,
    notifier: &dyn Notifier,
) -> Result<()> {
    match outcome {
        Ok(result) => {
            if let Ok(job_id) = JobId::new(job_id) {
                print_fusion_result(&job_id, &result);
            }
            Ok(())
        }
        Err(e) if e.is_cancelled() => {
            Err(e).context("Stopped waiting; the job keeps running on the backend")
        }
        Err(e) => {
            notifier.error(&e.to_string());
            Err(e).context("Fusion job did not produce a result")
        }
    }
}

/// Print the images of a finished job
fn print_fusion_result(job_id: &JobId, result: &FusionResult) {
    println!("{}", format!("Fusion result for job {}:", job_id).bold());
    for (i, image) in result.images.iter().enumerate() {
        println!(
            "  {} {}",
            format!("[{}]", i + 1).dimmed(),
            image.to_string().cyan()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use vision_core::domain::fusion::FusionImage;
    use vision_poller::PollError;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: FusionCommands,
    }

    #[test]
    fn test_run_args_build_request() {
        let cli = TestCli::parse_from([
            "vision",
            "run",
            "--image",
            "https://oss/a.png",
            "-i",
            "https://oss/b.png",
            "--feature",
            "pleated skirt",
            "--dimensions",
            "portrait",
            "--max-attempts",
            "10",
        ]);

        let FusionCommands::Run { fusion, poll } = cli.command else {
            panic!("expected run command");
        };

        let request = fusion.to_request();
        assert_eq!(request.image_url_list, vec!["https://oss/a.png", "https://oss/b.png"]);
        assert_eq!(request.dimensions, Dimensions::Portrait);
        assert_eq!(request.mode, FusionMode::Relax);
        assert_eq!(request.text_feature.as_deref(), Some("pleated skirt"));
        assert_eq!(poll.max_attempts, Some(10));
        assert_eq!(poll.interval_ms, None);
    }

    #[test]
    fn test_submit_requires_an_image() {
        assert!(TestCli::try_parse_from(["vision", "submit"]).is_err());
    }

    #[test]
    fn test_cancelled_wait_is_an_error() {
        let notifier = vision_poller::BufferedNotifier::new();
        let outcome = Err(PollError::Cancelled {
            job_id: "job-9".into(),
            attempts: 2,
        });

        let err = report_outcome("job-9", outcome, &notifier).unwrap_err();

        assert!(err.to_string().contains("Stopped waiting"));
        assert!(err.chain().any(|cause| cause.to_string().contains("job-9")));
        assert!(notifier.drain().is_empty());
    }

    #[test]
    fn test_timed_out_wait_is_reported() {
        let notifier = vision_poller::BufferedNotifier::new();
        let outcome = Err(PollError::TimedOut {
            job_id: "job-9".into(),
            attempts: 3,
            cause: Some("boom".into()),
        });

        assert!(report_outcome("job-9", outcome, &notifier).is_err());
        assert_eq!(notifier.drain().len(), 1);
    }

    #[test]
    fn test_resolved_wait_succeeds() {
        let notifier = vision_poller::BufferedNotifier::new();
        let result = FusionResult {
            images: vec![FusionImage::Url("https://oss/a.png".into())],
            ..Default::default()
        };

        assert!(report_outcome("job-9", Ok(result), &notifier).is_ok());
    }
}
