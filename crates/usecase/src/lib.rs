//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: the submit action (analyze, persist, read back)
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{SubmitError, Submission};
pub use orchestrator::SubmitCleaning;
