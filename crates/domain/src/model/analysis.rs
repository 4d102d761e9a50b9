use serde::Serialize;

use super::{CharCounts, CleanedLines};
use crate::analytics::Statistics;

/// Everything one pipeline run produces. Built all at once or not at all.
///
/// `char_counts.len() == cleaned.len() == statistics.lines >= 1`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    statistics: Statistics,
    char_counts: CharCounts,
    cleaned: CleanedLines,
}

impl Analysis {
    pub(crate) fn new(cleaned: CleanedLines, char_counts: CharCounts, statistics: Statistics) -> Self {
        debug_assert_eq!(cleaned.len(), char_counts.len());
        debug_assert_eq!(statistics.lines.value(), cleaned.len());
        Self { statistics, char_counts, cleaned }
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn char_counts(&self) -> &CharCounts {
        &self.char_counts
    }

    pub fn cleaned(&self) -> &CleanedLines {
        &self.cleaned
    }

    /// Text handed to a sink or a display: cleaned lines joined by `\n`.
    pub fn cleaned_text(&self) -> String {
        self.cleaned.joined()
    }
}
