use code_counter_shared_kernel::{CharCount, DomainError, DomainResult, LineCount};
use serde::Serialize;

use crate::model::{CharCounts, CleanedLines};

/// Summary statistics over the character counts of the cleaned lines.
///
/// `pstdev` is the population standard deviation (divisor `n`, not `n - 1`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub lines: LineCount,
    pub total_chars: CharCount,
    /// `total_chars / lines`, floored.
    pub chars_per_line: CharCount,
    pub mean: f64,
    pub median: f64,
    pub pstdev: f64,
    pub min: CharCount,
    pub max: CharCount,
}

impl Statistics {
    /// Compute the per-line counts and the statistics over them.
    ///
    /// # Errors
    ///
    /// [`DomainError::EmptyResult`] when `lines` is empty; nothing is divided.
    pub fn from_lines(lines: &CleanedLines) -> DomainResult<(CharCounts, Self)> {
        let counts = CharCounts::of(lines);
        let stats = Self::from_counts(&counts)?;
        Ok((counts, stats))
    }

    /// # Errors
    ///
    /// [`DomainError::EmptyResult`] when `counts` is empty.
    pub fn from_counts(counts: &CharCounts) -> DomainResult<Self> {
        let values = counts.values();
        let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
            return Err(DomainError::EmptyResult);
        };

        let n = values.len();
        let total: usize = values.iter().sum();
        let mean = total as f64 / n as f64;
        let variance = values
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n as f64;

        Ok(Self {
            lines: LineCount::new(n),
            total_chars: CharCount::new(total),
            chars_per_line: CharCount::new(total / n),
            mean,
            median: median(&values),
            pstdev: variance.sqrt(),
            min: CharCount::new(min),
            max: CharCount::new(max),
        })
    }
}

/// Middle value, or the mean of the two middle values for an even count.
/// `values` must be non-empty.
fn median(values: &[usize]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid] as f64
    } else {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    }
}
