//! Image fusion domain types

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::fetch::JobPayload;

/// Result of an image fusion job as reported by the backend
///
/// The backend answers with the same shape while the job is still running,
/// just without images, so an empty `images` list means "not done yet".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FusionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Generated images
    #[serde(default)]
    pub images: Vec<FusionImage>,
}

impl FusionResult {
    /// URLs of the images that carry one
    pub fn image_urls(&self) -> Vec<&str> {
        self.images.iter().filter_map(FusionImage::url).collect()
    }
}

impl JobPayload for FusionResult {
    fn is_ready(&self) -> bool {
        !self.images.is_empty()
    }
}

/// One generated image
///
/// Depending on the provider the backend lists images either as bare URLs or
/// as stored image records. Anything else is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FusionImage {
    Url(String),
    Stored {
        #[serde(rename = "imageUrl", alias = "url")]
        image_url: String,

        #[serde(rename = "imageId", default, skip_serializing_if = "Option::is_none")]
        image_id: Option<JsonValue>,
    },
    Other(JsonValue),
}

impl FusionImage {
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) | Self::Stored { image_url: url, .. } => Some(url),
            Self::Other(_) => None,
        }
    }
}

impl std::fmt::Display for FusionImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) | Self::Stored { image_url: url, .. } => write!(f, "{}", url),
            Self::Other(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fusion_result_readiness() {
        assert!(!FusionResult::default().is_ready());

        let done: FusionResult =
            serde_json::from_str(r#"{"jobId":"j1","images":["a.png"]}"#).unwrap();
        assert!(done.is_ready());
        assert_eq!(done.job_id.as_deref(), Some("j1"));
        assert_eq!(done.image_urls(), vec!["a.png"]);
    }

    #[test]
    fn test_fusion_result_tolerates_missing_fields() {
        let pending: FusionResult = serde_json::from_str(r#"{"status":"ON_QUEUE"}"#).unwrap();
        assert!(pending.images.is_empty());
        assert!(!pending.is_ready());
    }

    #[test]
    fn test_fusion_result_accepts_image_records() {
        let done: FusionResult = serde_json::from_value(json!({
            "jobId": "j1",
            "status": "SUCCESS",
            "images": [
                { "imageId": 17, "imageUrl": "https://oss/a.png" },
                { "url": "https://oss/b.png" },
                "https://oss/c.png",
                { "width": 1024 },
            ],
        }))
        .unwrap();

        assert!(done.is_ready());
        assert_eq!(
            done.images[0],
            FusionImage::Stored {
                image_url: "https://oss/a.png".into(),
                image_id: Some(json!(17)),
            }
        );
        assert_eq!(
            done.image_urls(),
            vec!["https://oss/a.png", "https://oss/b.png", "https://oss/c.png"]
        );
        assert_eq!(done.images[3], FusionImage::Other(json!({ "width": 1024 })));
        assert_eq!(done.images[3].to_string(), r#"{"width":1024}"#);
    }
}
