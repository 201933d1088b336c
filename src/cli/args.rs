use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::CliCompositionMode;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "doxygen_filter",
    version = crate::VERSION,
    about = "Doxygen 用入力フィルタ: PI_ マクロ定義を除去し、末尾 _ 付き関数名を公開名に書き換えます",
    long_about = None
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 入力ヘッダファイル（省略または `-` で標準入力）
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// 出力ファイル（省略時は標準出力）。一時ファイル経由で原子的に書き込みます
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// フィルタ処理の統計を標準エラーに表示
    #[arg(long, help_heading = "出力")]
    pub stats: bool,

    /// 設定ファイル（.json / .yaml / .yml）
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "フィルタ")]
    pub config: Option<PathBuf>,

    /// 内部 API を示すプレフィックス（設定ファイルより優先）
    #[arg(long, help_heading = "フィルタ")]
    pub prefix: Option<String>,

    /// マクロ定義の除去を無効化
    #[arg(long, help_heading = "フィルタ")]
    pub no_suppress: bool,

    /// 末尾アンダースコアの除去を無効化
    #[arg(long, help_heading = "フィルタ")]
    pub no_rename: bool,

    /// 段の合成方法
    #[arg(long, value_enum, default_value = "streaming", help_heading = "フィルタ")]
    pub mode: CliCompositionMode,

    /// ログを詳細化（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count, help_heading = "ログ")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long, help_heading = "ログ")]
    pub quiet: bool,
}
