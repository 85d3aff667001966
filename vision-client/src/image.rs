//! Image generation API endpoints

use vision_core::dto::image::ImageToImageRequest;

use crate::ImageClient;
use crate::error::{ClientError, Result};

impl ImageClient {
    /// Generate images from a source image and a prompt
    ///
    /// Unlike fusion this call is synchronous: the backend only answers once
    /// the images exist.
    ///
    /// # Returns
    /// URLs of the generated images
    pub async fn image_to_image(&self, req: &ImageToImageRequest) -> Result<Vec<String>> {
        if req.source_image_url.is_empty() {
            return Err(ClientError::InvalidRequest(
                "source image URL cannot be empty".to_string(),
            ));
        }

        let response = self
            .post("/api/image/doubao/image-to-image")
            .json(req)
            .send()
            .await?;

        let envelope = self.handle_response::<Vec<String>>(response).await?;
        Ok(envelope.data.unwrap_or_default())
    }
}
