//! Image fusion API endpoints

use serde_json::Value as JsonValue;
use tracing::debug;
use vision_core::domain::fusion::FusionResult;
use vision_core::dto::fusion::{FusionJob, ImageFusionRequest};
use vision_core::{JobId, JobPayload, SubmittedJob};

use crate::ImageClient;
use crate::error::{ClientError, Result};

impl ImageClient {
    // =============================================================================
    // Image Fusion
    // =============================================================================

    /// Submit an image fusion job
    ///
    /// The backend accepts the job and answers right away with its id; the
    /// fused images have to be fetched later with
    /// [`fetch_fusion_result`](Self::fetch_fusion_result).
    ///
    /// # Arguments
    /// * `req` - The fusion request; needs at least one image URL
    ///
    /// # Returns
    /// The accepted job and the backend's acceptance message
    pub async fn submit_fusion(&self, req: &ImageFusionRequest) -> Result<SubmittedJob> {
        if req.image_url_list.is_empty() {
            return Err(ClientError::InvalidRequest(
                "image fusion needs at least one image URL".to_string(),
            ));
        }

        let response = self
            .post("/api/image/image-fusion")
            .json(req)
            .send()
            .await?;

        let envelope = self.handle_response::<FusionJob>(response).await?;
        let job = envelope
            .data
            .ok_or_else(|| ClientError::ParseError("response carries no job".to_string()))?;

        let job_id = JobId::new(job.job_id)
            .map_err(|_| ClientError::ParseError("response carries an empty job id".to_string()))?;

        debug!("Fusion job {} accepted", job_id);

        Ok(SubmittedJob {
            job_id,
            message: envelope.msg,
        })
    }

    /// Fetch the result of a fusion job once
    ///
    /// # Arguments
    /// * `job_id` - The job to query
    ///
    /// # Returns
    /// `Some(result)` when the backend returned a non-empty payload, `None`
    /// when it answered without one. A job that is still queued usually
    /// surfaces as a [`ClientError::Rejected`] whose message
    /// [`is_queue_pending`](ClientError::is_queue_pending).
    pub async fn fetch_fusion_result(&self, job_id: &JobId) -> Result<Option<FusionResult>> {
        let response = self
            .get("/api/image/image-fusion/result")
            .query(&[("jobId", job_id.as_str())])
            .send()
            .await?;

        let envelope = self.handle_response::<JsonValue>(response).await?;

        match envelope.data {
            Some(data) if data.is_ready() => serde_json::from_value(data)
                .map(Some)
                .map_err(|e| ClientError::ParseError(format!("Invalid fusion result: {}", e))),
            _ => Ok(None),
        }
    }
}
