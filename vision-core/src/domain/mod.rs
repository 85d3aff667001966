//! Core domain types
//!
//! These types represent the entities a client deals with when talking to
//! the image backend: jobs it submitted, the results those jobs produce, and
//! the notices shown to the user while waiting.

pub mod fusion;
pub mod job;
pub mod notice;
