use std::fmt;

use super::{group_thousands, group_thousands_f64};
use crate::analytics::Statistics;

/// Fixed-order text rendering of [`Statistics`].
///
/// ```text
/// Lines of code: 3
/// Total chars: 7
/// Chars per line: 2
/// Mean: 2
/// Median: 2
/// PStDev: 1
/// Min: 1
/// Max: 4
/// ```
pub struct StatsReport<'a> {
    stats: &'a Statistics,
}

impl<'a> StatsReport<'a> {
    pub const fn new(stats: &'a Statistics) -> Self {
        Self { stats }
    }

    /// Label/value pairs in display order.
    pub fn fields(&self) -> [(&'static str, String); 8] {
        let s = self.stats;
        [
            ("Lines of code", group_thousands(s.lines.value())),
            ("Total chars", group_thousands(s.total_chars.value())),
            ("Chars per line", group_thousands(s.chars_per_line.value())),
            ("Mean", group_thousands_f64(s.mean)),
            ("Median", group_thousands_f64(s.median)),
            ("PStDev", group_thousands_f64(s.pstdev)),
            ("Min", group_thousands(s.min.value())),
            ("Max", group_thousands(s.max.value())),
        ]
    }
}

impl fmt::Display for StatsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, value)) in self.fields().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}
