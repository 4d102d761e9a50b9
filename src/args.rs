// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "code_counter",
    version = crate::VERSION,
    about = "ソースコードからコメントを除去し、行ごとの文字数統計を表示するツール"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 入力ファイル（省略または `-` で標準入力）
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// クリーン済みコードの保存先
    #[arg(short, long, default_value = "output.txt", value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: PathBuf,

    /// 保存先へ書き出さない（表示はメモリ上の結果から行う）
    #[arg(long, conflicts_with = "output", help_heading = "出力")]
    pub no_save: bool,

    /// 一時ファイル経由で保存する
    #[arg(long, help_heading = "出力")]
    pub atomic: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,

    /// 行ごとの文字数列も表示する（text フォーマット）
    #[arg(long, help_heading = "出力")]
    pub show_counts: bool,

    /// 統計のみ表示し、クリーン済みコードは表示しない（text フォーマット）
    #[arg(long, help_heading = "出力")]
    pub stats_only: bool,

    /// 単一行コメントのマーカー
    #[arg(long, default_value_t = '#', help_heading = "コメント構文")]
    pub line_marker: char,

    /// 複数行コメントのデリミタ（指定順に適用、複数可。指定時は既定値を置き換え）
    #[arg(long = "block-delimiter", help_heading = "コメント構文")]
    pub block_delimiters: Vec<String>,

    /// 入力ファイルの変更を監視して再実行
    #[arg(long, requires = "input", help_heading = "動作")]
    pub watch: bool,

    /// 監視時の再実行間隔（秒）
    #[arg(long, requires = "watch", help_heading = "動作")]
    pub watch_interval: Option<u64>,

    /// 警告を抑制
    #[arg(short, long, conflicts_with = "verbose", help_heading = "動作")]
    pub quiet: bool,

    /// 詳細ログ（-vv でさらに詳細）
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,
}
