//! Job poller
//!
//! Queries the backend for one job's result until it resolves, the attempt
//! budget runs out, or the caller cancels. Each call to
//! [`JobPoller::resolve`] is its own session; sessions share nothing but the
//! fetcher, so resolving several jobs at once is fine.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use vision_core::{JobId, ResultFetcher};

use crate::attempt::{PollAttempt, PollOutcome};
use crate::config::PollConfig;
use crate::error::{PollError, Result};
use crate::notify::{Notifier, TracingNotifier};

/// Attempts between two progress notices
const PROGRESS_EVERY: u32 = 5;

/// Resolves backend jobs to a terminal result
pub struct JobPoller<F: ResultFetcher> {
    fetcher: Arc<F>,
    notifier: Arc<dyn Notifier>,
    config: PollConfig,
}

impl<F: ResultFetcher> Clone for JobPoller<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            notifier: Arc::clone(&self.notifier),
            config: self.config,
        }
    }
}

impl<F: ResultFetcher> JobPoller<F> {
    /// Creates a poller that reports through [`TracingNotifier`]
    pub fn new(fetcher: Arc<F>, config: PollConfig) -> Self {
        Self {
            fetcher,
            notifier: Arc::new(TracingNotifier),
            config,
        }
    }

    /// Replaces the notification sink
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    /// Polls until the job resolves or the attempt budget is exhausted
    ///
    /// Runs to completion; use [`resolve_with_cancel`](Self::resolve_with_cancel)
    /// to be able to abandon the session.
    pub async fn resolve(&self, job_id: &str) -> Result<F::Output> {
        self.resolve_with_cancel(job_id, &CancellationToken::new()).await
    }

    /// Polls until the job resolves, the budget is exhausted, or `cancel` fires
    ///
    /// # Errors
    /// - [`PollError::InvalidJobId`] for an empty id, before any fetch
    /// - [`PollError::InvalidConfig`] for a zero attempt budget
    /// - [`PollError::TimedOut`] when no attempt produced a ready payload
    /// - [`PollError::Cancelled`] when `cancel` fired first
    pub async fn resolve_with_cancel(
        &self,
        job_id: &str,
        cancel: &CancellationToken,
    ) -> Result<F::Output> {
        let job_id = JobId::new(job_id)?;
        self.config.validate()?;

        info!(
            "Polling for job {} (max attempts: {}, interval: {:?})",
            job_id, self.config.max_attempts, self.config.interval
        );

        match self.poll(&job_id, cancel).await? {
            PollOutcome::Resolved(payload) => {
                info!("Job {} resolved", job_id);
                self.notifier.success(&format!("Job {} finished!", job_id));
                Ok(payload)
            }
            PollOutcome::TimedOut(cause) => Err(self.timed_out(&job_id, cause)),
            outcome => unreachable!("poll session ended on a {} attempt", outcome.kind()),
        }
    }

    /// Runs the attempt loop
    ///
    /// Only ever returns [`PollOutcome::Resolved`] or [`PollOutcome::TimedOut`].
    async fn poll(
        &self,
        job_id: &JobId,
        cancel: &CancellationToken,
    ) -> Result<PollOutcome<F::Output>> {
        let max_attempts = self.config.max_attempts;
        let mut last_error: Option<String> = None;

        for index in 0..max_attempts {
            if announces_progress(index) {
                self.notifier
                    .info(&progress_message(job_id, index, max_attempts));
            }

            let fetched = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(cancelled(job_id, index)),
                fetched = self.fetcher.fetch(job_id) => fetched,
            };

            let attempt = PollAttempt::new(index, fetched);
            debug!(
                job_id = %job_id,
                attempt = attempt.index + 1,
                max_attempts,
                outcome = attempt.outcome.kind(),
                at = %attempt.at,
                "Poll attempt finished"
            );

            match attempt.outcome {
                // A single attempt never times out
                PollOutcome::Pending | PollOutcome::TimedOut(_) => {}
                // Retried until the budget runs out; the latest one becomes
                // the timeout cause.
                PollOutcome::FatalError(message) => {
                    warn!(
                        "Attempt {}/{} for job {} failed: {}",
                        index + 1,
                        max_attempts,
                        job_id,
                        message
                    );
                    last_error = Some(message);
                }
                resolved @ PollOutcome::Resolved(_) => return Ok(resolved),
            }

            if index + 1 < max_attempts {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return Err(cancelled(job_id, index + 1)),
                    _ = tokio::time::sleep(self.config.interval) => {}
                }
            }
        }

        Ok(PollOutcome::TimedOut(last_error))
    }

    fn timed_out(&self, job_id: &JobId, cause: Option<String>) -> PollError {
        warn!(
            "Job {} timed out after {} attempt(s)",
            job_id, self.config.max_attempts
        );

        PollError::TimedOut {
            job_id: job_id.to_string(),
            attempts: self.config.max_attempts,
            cause,
        }
    }
}

/// Progress is announced on the first attempt and every fifth one after it
fn announces_progress(index: u32) -> bool {
    index % PROGRESS_EVERY == 0
}

fn progress_message(job_id: &JobId, index: u32, max_attempts: u32) -> String {
    if index == 0 {
        format!("Job {} submitted, waiting for the result...", job_id)
    } else {
        format!(
            "Still waiting for job {} ({}/{})...",
            job_id,
            index + 1,
            max_attempts
        )
    }
}

fn cancelled(job_id: &JobId, attempts: u32) -> PollError {
    info!("Polling for job {} cancelled", job_id);
    PollError::Cancelled {
        job_id: job_id.to_string(),
        attempts,
    }
}
