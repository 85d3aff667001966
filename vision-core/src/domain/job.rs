//! Job domain types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a job identifier is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid job identifier")]
pub struct InvalidJobId;

/// Opaque identifier of a backend job
///
/// Handed out by the submission endpoint. It is never empty or blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobId(String);

impl JobId {
    /// Creates a job identifier, rejecting empty or whitespace-only input
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidJobId> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(InvalidJobId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for JobId {
    type Error = InvalidJobId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for JobId {
    type Error = InvalidJobId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JobId> for String {
    fn from(id: JobId) -> Self {
        id.0
    }
}

/// A job accepted by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedJob {
    /// Identifier to poll for the result
    pub job_id: JobId,

    /// Message the backend attached to the acceptance, if any
    pub message: Option<String>,
}
