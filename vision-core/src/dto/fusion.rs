//! Image fusion DTOs

use serde::{Deserialize, Serialize};

/// Aspect of the fused output image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Dimensions {
    Portrait,
    #[default]
    Square,
    Landscape,
}

/// Generation speed tier requested from the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FusionMode {
    #[default]
    Relax,
    Fast,
    Turbo,
}

/// Request to start an image fusion job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFusionRequest {
    /// URLs of the images to fuse
    pub image_url_list: Vec<String>,
    pub dimensions: Dimensions,
    pub mode: FusionMode,
    /// Callback URL; empty disables the callback
    pub hook_url: String,
    /// Free-text design feature guiding the fusion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_feature: Option<String>,
}

impl ImageFusionRequest {
    /// Creates a request with the default dimensions and mode and no callback
    pub fn new(image_url_list: Vec<String>) -> Self {
        Self {
            image_url_list,
            dimensions: Dimensions::default(),
            mode: FusionMode::default(),
            hook_url: String::new(),
            text_feature: None,
        }
    }

    pub fn with_text_feature(mut self, feature: impl Into<String>) -> Self {
        self.text_feature = Some(feature.into());
        self
    }

    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_mode(mut self, mode: FusionMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Job handle returned when a fusion request is accepted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FusionJob {
    #[serde(default)]
    pub job_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
