//! Vision Poller
//!
//! Resolves an asynchronous backend job to exactly one terminal outcome.
//!
//! Submitting an image fusion job only yields a job id. [`JobPoller`] then
//! queries the result through a [`vision_core::ResultFetcher`] at a fixed
//! interval, treats "still queued" answers as progress rather than failure,
//! and gives up after a bounded number of attempts:
//!
//! ```text
//!   resolve(job_id) ──→ fetch ──→ Done(payload) ──────────────→ Ok(payload)
//!                        │  ↑
//!                        │  └── Pending / Failed, wait interval
//!                        │
//!                        └──→ budget exhausted ──→ Err(TimedOut { cause })
//! ```
//!
//! Progress and success notices go to an injected [`Notifier`]; presenting
//! the final error is left to the caller.

pub mod attempt;
pub mod config;
pub mod error;
pub mod notify;
pub mod poller;

pub use attempt::{PollAttempt, PollOutcome};
pub use config::PollConfig;
pub use error::{PollError, Result};
pub use notify::{BufferedNotifier, Notifier, TracingNotifier};
pub use poller::JobPoller;
pub use tokio_util::sync::CancellationToken;
