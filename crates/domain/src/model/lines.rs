use code_counter_shared_kernel::CharCount;
use serde::Serialize;

/// Final, comment-free, non-empty lines in their original relative order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct CleanedLines(Vec<String>);

impl CleanedLines {
    pub fn new(lines: Vec<String>) -> Self {
        Self(lines)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Lines joined by `\n`, without a trailing terminator.
    pub fn joined(&self) -> String {
        self.0.join("\n")
    }
}

impl<'a> IntoIterator for &'a CleanedLines {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Per-line character counts, parallel-indexed with [`CleanedLines`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct CharCounts(Vec<CharCount>);

impl CharCounts {
    pub fn of(lines: &CleanedLines) -> Self {
        Self(lines.iter().map(|line| CharCount::of(line)).collect())
    }

    pub fn as_slice(&self) -> &[CharCount] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CharCount> {
        self.0.iter()
    }

    /// Plain `usize` values, e.g. for a histogram or plot consumer.
    pub fn values(&self) -> Vec<usize> {
        self.0.iter().map(|c| c.value()).collect()
    }
}
