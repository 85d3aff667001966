//! Per-attempt records and outcomes

use chrono::{DateTime, Utc};
use vision_core::{FetchOutcome, JobPayload};

/// Outcome of one poll attempt, or of a whole session
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome<T> {
    /// The job finished and produced this payload
    Resolved(T),
    /// The job exists but is not finished
    Pending,
    /// The fetch failed for a reason other than "still queued"
    FatalError(String),
    /// The attempt budget ran out, carrying the last fatal error if any
    TimedOut(Option<String>),
}

impl<T: JobPayload> PollOutcome<T> {
    /// Classifies the result of a single fetch
    ///
    /// A payload only resolves the job when it is ready; an empty payload
    /// means the backend answered but has nothing to show yet.
    pub fn classify(fetched: FetchOutcome<T>) -> Self {
        match fetched {
            FetchOutcome::Done(payload) if payload.is_ready() => Self::Resolved(payload),
            FetchOutcome::Done(_) | FetchOutcome::Pending => Self::Pending,
            FetchOutcome::Failed(message) => Self::FatalError(message),
        }
    }
}

impl<T> PollOutcome<T> {
    /// Short label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Resolved(_) => "resolved",
            Self::Pending => "pending",
            Self::FatalError(_) => "fatal_error",
            Self::TimedOut(_) => "timed_out",
        }
    }
}

/// Record of a single query against the backend
///
/// Lives only as long as the attempt it describes.
#[derive(Debug, Clone)]
pub struct PollAttempt<T> {
    /// Zero-based attempt index
    pub index: u32,
    /// When the fetch completed
    pub at: DateTime<Utc>,
    pub outcome: PollOutcome<T>,
}

impl<T: JobPayload> PollAttempt<T> {
    pub fn new(index: u32, fetched: FetchOutcome<T>) -> Self {
        Self {
            index,
            at: Utc::now(),
            outcome: PollOutcome::classify(fetched),
        }
    }
}
