//! Image-to-image command handler

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use vision_core::dto::image::ImageToImageRequest;

use crate::config::Config;

/// Image-to-image generation options
#[derive(Args, Debug, Clone)]
pub struct ImageToImageArgs {
    /// URL of the source image
    #[arg(short, long)]
    source: String,

    /// Prompt describing the wanted result
    #[arg(short, long)]
    prompt: String,

    /// What the result should avoid
    #[arg(long)]
    negative_prompt: Option<String>,

    /// How much of the source image survives (0.0 to 1.0)
    #[arg(long, default_value_t = 0.35)]
    strength: f32,

    #[arg(long, default_value_t = 7.0)]
    cfg_scale: f32,

    /// Number of images to generate
    #[arg(long, default_value_t = 1)]
    samples: u32,

    #[arg(long, default_value_t = 30)]
    steps: u32,

    #[arg(long)]
    seed: Option<u64>,

    /// Provider style preset, e.g. "photographic"
    #[arg(long)]
    style: Option<String>,
}

impl ImageToImageArgs {
    fn to_request(&self) -> Result<ImageToImageRequest> {
        if !(0.0..=1.0).contains(&self.strength) {
            anyhow::bail!("strength must be between 0.0 and 1.0");
        }

        let mut request = ImageToImageRequest::new(&self.source, &self.prompt);
        request.negative_prompt = self.negative_prompt.clone();
        request.image_strength = self.strength;
        request.cfg_scale = self.cfg_scale;
        request.samples = self.samples;
        request.steps = self.steps;
        request.seed = self.seed;
        request.style = self.style.clone();
        Ok(request)
    }
}

/// Handle the image-to-image command
pub async fn handle_image_to_image(args: ImageToImageArgs, config: &Config) -> Result<()> {
    let request = args.to_request()?;
    let client = config.client();

    let images = client
        .image_to_image(&request)
        .await
        .context("Failed to generate images")?;

    if images.is_empty() {
        println!("{}", "No images returned.".yellow());
        return Ok(());
    }

    println!("{}", format!("Generated {} image(s):", images.len()).bold());
    for (i, image) in images.iter().enumerate() {
        println!("  {} {}", format!("[{}]", i + 1).dimmed(), image.cyan());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ImageToImageArgs,
    }

    #[test]
    fn test_defaults_match_request_defaults() {
        let cli = TestCli::parse_from(["vision", "-s", "https://oss/src.png", "-p", "linen shirt"]);
        let request = cli.args.to_request().unwrap();
        assert_eq!(request, ImageToImageRequest::new("https://oss/src.png", "linen shirt"));
    }

    #[test]
    fn test_out_of_range_strength_is_rejected() {
        let cli = TestCli::parse_from([
            "vision",
            "--source",
            "https://oss/src.png",
            "--prompt",
            "linen shirt",
            "--strength",
            "1.5",
        ]);
        assert!(cli.args.to_request().is_err());
    }
}
