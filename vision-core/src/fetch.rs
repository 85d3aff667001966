//! Result-fetch seam between a backend client and the job poller
//!
//! A fetcher queries the backend once for a job and translates whatever came
//! back (payload, transport error, backend error message) into a
//! [`FetchOutcome`]. Backend-specific error formats stop here; the poller
//! only ever sees the tagged outcome.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::domain::job::JobId;

/// Classified result of a single fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    /// The job exists but has not finished yet
    Pending,
    /// The backend returned a payload
    Done(T),
    /// Something went wrong that is not a "still queued" signal
    Failed(String),
}

/// A payload that can tell whether it carries a finished result
///
/// A response arriving is not the same as the job being done: empty arrays,
/// empty objects and similar placeholders must not end a poll session.
pub trait JobPayload {
    fn is_ready(&self) -> bool;
}

impl JobPayload for JsonValue {
    fn is_ready(&self) -> bool {
        match self {
            JsonValue::Null => false,
            JsonValue::Bool(b) => *b,
            JsonValue::Number(n) => n.as_f64() != Some(0.0),
            JsonValue::String(s) => !s.is_empty(),
            JsonValue::Array(items) => !items.is_empty(),
            JsonValue::Object(map) => !map.is_empty(),
        }
    }
}

impl<T> JobPayload for Vec<T> {
    fn is_ready(&self) -> bool {
        !self.is_empty()
    }
}

impl JobPayload for String {
    fn is_ready(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: JobPayload> JobPayload for Option<T> {
    fn is_ready(&self) -> bool {
        self.as_ref().is_some_and(JobPayload::is_ready)
    }
}

/// Queries the backend for the result of one job
#[async_trait]
pub trait ResultFetcher: Send + Sync {
    /// Payload produced by a finished job
    type Output: JobPayload + Send;

    /// Performs exactly one query for `job_id`
    async fn fetch(&self, job_id: &JobId) -> FetchOutcome<Self::Output>;
}
