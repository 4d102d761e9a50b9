pub mod analysis;
pub mod lines;

pub use analysis::Analysis;
pub use lines::{CharCounts, CleanedLines};
