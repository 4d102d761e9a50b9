//! コメント除去パスの共通インターフェース
//!
//! 各パスは `Vec<String> -> Vec<String>` の純粋関数として振る舞い、
//! 前段の出力全体を受け取って次段へ渡します。
//!
//! [`super::strip`] は [`StripPass::plan`] の結果を順に畳み込みます。

use super::{drop_artifacts, strip_block, strip_line_marker};
use crate::config::CommentSyntax;

/// One stage of the stripper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripPass {
    /// Truncate at the first single-line marker.
    LineMarker(char),
    /// Remove regions delimited by one multi-line delimiter.
    Block(String),
    /// Drop empty lines and delimiter leftovers.
    Artifacts(CommentSyntax),
}

impl StripPass {
    /// The passes for `syntax`, in the order they must run.
    pub fn plan(syntax: &CommentSyntax) -> Vec<Self> {
        let mut passes = Vec::with_capacity(syntax.block_delimiters().len() + 2);
        passes.push(Self::LineMarker(syntax.line_marker()));
        passes.extend(syntax.block_delimiters().iter().cloned().map(Self::Block));
        passes.push(Self::Artifacts(syntax.clone()));
        passes
    }

    pub fn apply(&self, lines: Vec<String>) -> Vec<String> {
        match self {
            Self::LineMarker(marker) => strip_line_marker(lines, *marker),
            Self::Block(delimiter) => strip_block(lines, delimiter),
            Self::Artifacts(syntax) => drop_artifacts(lines, syntax),
        }
    }

    /// Short label for diagnostics.
    pub fn name(&self) -> String {
        match self {
            Self::LineMarker(marker) => format!("line marker {marker}"),
            Self::Block(delimiter) => format!("block {delimiter}"),
            Self::Artifacts(_) => "artifacts".to_string(),
        }
    }
}
