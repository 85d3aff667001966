//! Result fetching for the job poller
//!
//! Maps the outcome of one fusion-result query onto a [`FetchOutcome`].

use async_trait::async_trait;
use tracing::debug;
use vision_core::domain::fusion::FusionResult;
use vision_core::{FetchOutcome, JobId, ResultFetcher};

use crate::ImageClient;

#[async_trait]
impl ResultFetcher for ImageClient {
    type Output = FusionResult;

    async fn fetch(&self, job_id: &JobId) -> FetchOutcome<FusionResult> {
        match self.fetch_fusion_result(job_id).await {
            Ok(Some(result)) => FetchOutcome::Done(result),
            Ok(None) => FetchOutcome::Pending,
            Err(e) if e.is_queue_pending() => {
                debug!("Job {} still queued: {}", job_id, e);
                FetchOutcome::Pending
            }
            Err(e) => FetchOutcome::Failed(e.to_string()),
        }
    }
}
