//! 行の正規化とコメント除去のパイプライン
//!
//! `raw text -> normalize -> strip (line marker, block delimiters..., artifacts)`
//! の順に一方向へ流れ、途中で前段に戻ることはありません。

pub mod normalize;
pub mod strip;

pub use normalize::normalize;
pub use strip::{BlockState, StripPass, drop_artifacts, strip, strip_block, strip_line_marker};
