//! Error types for poll sessions
//!
//! Only terminal conditions live here. "Still queued" answers and individual
//! failed attempts never reach the caller as errors; the last failed attempt
//! survives as the `cause` of [`PollError::TimedOut`].

use thiserror::Error;

/// Result type alias for poll operations
pub type Result<T> = std::result::Result<T, PollError>;

/// Errors a poll session can end with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollError {
    /// The job id was empty; no attempt was made
    #[error("Invalid job identifier")]
    InvalidJobId,

    /// The poll configuration cannot run a session
    #[error("Invalid poll configuration: {0}")]
    InvalidConfig(String),

    /// The attempt budget ran out without a result
    #[error("Job {job_id} timed out after {attempts} attempt(s){}", cause_suffix(.cause))]
    TimedOut {
        job_id: String,
        attempts: u32,
        /// Error observed on the last failed attempt, if any
        cause: Option<String>,
    },

    /// The caller abandoned the session
    #[error("Polling for job {job_id} cancelled after {attempts} attempt(s)")]
    Cancelled { job_id: String, attempts: u32 },
}

fn cause_suffix(cause: &Option<String>) -> String {
    match cause {
        Some(cause) => format!(": {}", cause),
        None => String::new(),
    }
}

impl PollError {
    /// Underlying error of a timeout, if one was recorded
    pub fn cause(&self) -> Option<&str> {
        match self {
            Self::TimedOut { cause, .. } => cause.as_deref(),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::TimedOut { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

impl From<vision_core::InvalidJobId> for PollError {
    fn from(_: vision_core::InvalidJobId) -> Self {
        Self::InvalidJobId
    }
}
