//! コメント構文の定義
//!
//! 単一行マーカー (`#`) と、順番に適用される複数行デリミタ (`"""`, `'''`) を保持します。

use code_counter_shared_kernel::{DomainError, DomainResult};
use serde::Serialize;

/// Default single-line marker.
pub const DEFAULT_LINE_MARKER: char = '#';

/// Default multi-line delimiters, applied in this order.
pub const DEFAULT_BLOCK_DELIMITERS: [&str; 2] = ["\"\"\"", "'''"];

/// コメント構文
///
/// `block_delimiters` の順序がそのままパスの適用順序になります。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentSyntax {
    line_marker: char,
    block_delimiters: Vec<String>,
}

impl CommentSyntax {
    /// Build a validated syntax.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSyntax`] when no block delimiter is given,
    /// when a delimiter is shorter than two characters, or when a delimiter
    /// contains the single-line marker (pass 1 would already have cut it).
    pub fn new<I, S>(line_marker: char, block_delimiters: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let block_delimiters: Vec<String> = block_delimiters.into_iter().map(Into::into).collect();

        if block_delimiters.is_empty() {
            return Err(DomainError::InvalidSyntax {
                reason: "at least one block delimiter is required".to_string(),
            });
        }
        if line_marker.is_whitespace() {
            return Err(DomainError::InvalidSyntax {
                reason: "line marker must not be whitespace".to_string(),
            });
        }
        for delimiter in &block_delimiters {
            if delimiter.chars().count() < 2 {
                return Err(DomainError::InvalidSyntax {
                    reason: format!("block delimiter '{delimiter}' must be at least two characters"),
                });
            }
            if delimiter.contains(line_marker) {
                return Err(DomainError::InvalidSyntax {
                    reason: format!("block delimiter '{delimiter}' contains the line marker '{line_marker}'"),
                });
            }
        }

        Ok(Self { line_marker, block_delimiters })
    }

    pub const fn line_marker(&self) -> char {
        self.line_marker
    }

    pub fn block_delimiters(&self) -> &[String] {
        &self.block_delimiters
    }

    /// Leftovers a delimiter can leave behind at a line boundary: the
    /// delimiter without its first character (`""` for `"""`).
    pub fn artifacts(&self) -> impl Iterator<Item = &str> {
        self.block_delimiters.iter().filter_map(|d| {
            let mut chars = d.char_indices();
            chars.next();
            chars.next().map(|(idx, _)| &d[idx..])
        })
    }
}

impl Default for CommentSyntax {
    fn default() -> Self {
        Self {
            line_marker: DEFAULT_LINE_MARKER,
            block_delimiters: DEFAULT_BLOCK_DELIMITERS.iter().map(|d| (*d).to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_python_like() {
        let syntax = CommentSyntax::default();
        assert_eq!(syntax.line_marker(), '#');
        assert_eq!(syntax.block_delimiters(), ["\"\"\"", "'''"]);
    }

    #[test]
    fn artifacts_drop_first_char() {
        let syntax = CommentSyntax::default();
        let artifacts: Vec<&str> = syntax.artifacts().collect();
        assert_eq!(artifacts, vec!["\"\"", "''"]);
    }

    #[test]
    fn rejects_empty_delimiter_list() {
        let err = CommentSyntax::new('#', Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidSyntax { .. }));
    }

    #[test]
    fn rejects_single_char_delimiter() {
        assert!(CommentSyntax::new('#', ["*"]).is_err());
    }

    #[test]
    fn rejects_delimiter_containing_marker() {
        assert!(CommentSyntax::new('#', ["#=#"]).is_err());
    }

    #[test]
    fn accepts_custom_syntax() {
        let syntax = CommentSyntax::new(';', ["#|", "|#"]).expect("valid syntax");
        assert_eq!(syntax.line_marker(), ';');
        assert_eq!(syntax.artifacts().collect::<Vec<_>>(), vec!["|", "#"]);
    }
}
