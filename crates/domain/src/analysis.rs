use code_counter_shared_kernel::{DomainError, DomainResult};

use crate::{
    analytics::Statistics,
    config::CommentSyntax,
    model::{Analysis, CleanedLines},
    pipeline::{normalize, strip},
};

/// Run the whole pipeline over `raw`.
///
/// # Errors
///
/// - [`DomainError::EmptyInput`] if no non-blank line was entered.
/// - [`DomainError::EmptyResult`] if every line was a comment.
pub fn analyze(raw: &str, syntax: &CommentSyntax) -> DomainResult<Analysis> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Err(DomainError::EmptyInput);
    }
    let input_lines = normalized.len();

    let cleaned = CleanedLines::new(strip(normalized, syntax));
    if cleaned.is_empty() {
        return Err(DomainError::EmptyResult);
    }
    log::debug!("kept {} of {input_lines} non-blank lines", cleaned.len());

    let (char_counts, statistics) = Statistics::from_lines(&cleaned)?;
    Ok(Analysis::new(cleaned, char_counts, statistics))
}
