//! コメント除去
//!
//! 3 種類のパスを固定順序で合成します。
//!
//! 1. 単一行マーカー (`#`): 最初のマーカー以降を切り捨て
//! 2. 複数行デリミタ (`"""`, `'''` の順): デリミタごとに独立した状態機械で 1 パス
//! 3. 仕上げ: 空行とデリミタの残骸 (`""`, `''`) を除去

pub mod artifacts;
pub mod block;
pub mod line_marker;
pub mod pass;

pub use artifacts::drop_artifacts;
pub use block::{BlockState, strip_block};
pub use line_marker::strip_line_marker;
pub use pass::StripPass;

use crate::config::CommentSyntax;

/// Run every stripping pass over normalized `lines`, in [`StripPass::plan`] order.
pub fn strip(lines: Vec<String>, syntax: &CommentSyntax) -> Vec<String> {
    StripPass::plan(syntax).iter().fold(lines, |lines, pass| {
        let lines = pass.apply(lines);
        log::debug!("{} pass: {} lines", pass.name(), lines.len());
        lines
    })
}
