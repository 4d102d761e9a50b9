// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod source;
pub mod watch;

pub use persistence::{FileReader, FileSink, FileWriter};
pub use source::{FileSource, StdinSource};
pub use watch::WatchService;
