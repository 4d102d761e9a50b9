pub mod number_format;
pub mod stats_report;

pub use number_format::{group_thousands, group_thousands_f64};
pub use stats_report::StatsReport;
