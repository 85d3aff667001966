//! Data Transfer Objects for the image backend API
//!
//! Request bodies and response shapes exactly as they travel over the wire.
//! Field names follow the backend's camelCase JSON.

pub mod envelope;
pub mod fusion;
pub mod image;
