//! # Domain
//!
//! The comment-stripping pipeline and the statistics computed over its output.
//!
//! - [`pipeline`]: line normalizer and comment stripper passes
//! - [`analytics`]: per-line character counts and summary statistics
//! - [`analysis`]: the composed `normalize -> strip -> aggregate` run
//! - [`report`]: the fixed-order text report
//!
//! Nothing in this crate performs I/O.

#![allow(clippy::multiple_crate_versions)]

pub mod analysis;
pub mod analytics;
pub mod config;
pub mod model;
pub mod pipeline;
pub mod report;

pub use analysis::analyze;
pub use analytics::Statistics;
pub use config::CommentSyntax;
pub use model::{Analysis, CharCounts, CleanedLines};
