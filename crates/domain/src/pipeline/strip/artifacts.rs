//! 仕上げフィルタ

use crate::config::CommentSyntax;

/// Drop lines that are empty or consist solely of a delimiter leftover.
pub fn drop_artifacts(lines: Vec<String>, syntax: &CommentSyntax) -> Vec<String> {
    let artifacts: Vec<&str> = syntax.artifacts().collect();
    lines
        .into_iter()
        .filter(|line| !line.is_empty() && !artifacts.contains(&line.as_str()))
        .collect()
}
