//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: where the raw text comes from (file, stdin, ...)
//! - [`sink`]: where the cleaned lines are persisted and read back for display
//!
//! These ports keep the use case independent of concrete I/O.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod sink;
pub mod source;

pub use sink::CleanedSink;
pub use source::TextSource;
