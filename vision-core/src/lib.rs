//! Vision Core
//!
//! Core types and abstractions shared by the Vision client, poller and CLI.
//!
//! This crate contains:
//! - Domain types: job identifiers, fusion results, user notices
//! - DTOs: request bodies and the response envelope of the image backend
//! - The result-fetch seam ([`fetch::ResultFetcher`]) the poller consumes

pub mod domain;
pub mod dto;
pub mod fetch;

pub use domain::job::{InvalidJobId, JobId, SubmittedJob};
pub use fetch::{FetchOutcome, JobPayload, ResultFetcher};
