//! Domain core for the video catalogue service.
//!
//! Holds the `Video` record, the resolution enum, request payload types and
//! the pure validation logic that turns raw JSON bodies into typed payloads.
//! Nothing in this crate performs I/O.

pub mod error;
pub mod resolution;
pub mod timestamp;
pub mod types;
pub mod validation;
pub mod video;
