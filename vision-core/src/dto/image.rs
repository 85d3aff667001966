//! Image-to-image DTOs

use serde::{Deserialize, Serialize};

/// Request to restyle a source image from a prompt
///
/// The backend answers synchronously with the URLs of the generated images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageToImageRequest {
    pub source_image_url: String,
    pub prompt: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,

    /// How much of the source image survives, 0.0 to 1.0
    pub image_strength: f32,
    pub cfg_scale: f32,
    pub samples: u32,
    pub steps: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Provider style preset, e.g. "photographic"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl ImageToImageRequest {
    pub fn new(source_image_url: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            source_image_url: source_image_url.into(),
            prompt: prompt.into(),
            negative_prompt: None,
            image_strength: 0.35,
            cfg_scale: 7.0,
            samples: 1,
            steps: 30,
            seed: None,
            style: None,
        }
    }
}
