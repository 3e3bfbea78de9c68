//! jmterm 辞書コンパイラのメインエントリーポイント
//!
//! このモジュールは、JMdictのソースから検索データベースを構築するための
//! サブコマンドを提供します。

mod jmdict;
mod tags;

use clap::Parser;
use thiserror::Error;

use crate::{jmdict::JmdictError, tags::TagsError};

/// コマンドライン引数の構造体
///
/// `clap`を使用してコマンドライン引数をパースします。
#[derive(Parser, Debug)]
#[clap(name = "compile", version)]
struct Cli {
    /// 実行するサブコマンド
    #[clap(subcommand)]
    command: Command,
}

/// 利用可能なサブコマンド
#[derive(Parser, Debug)]
enum Command {
    /// JMdictのソースから検索データベースを構築します
    ///
    /// 語の展開、重複の除去、タグメタデータの構築を行い、JSONのバンクファイルを出力します。
    Jmdict(jmdict::Args),

    /// JMdictのソースからタグメタデータを出力します
    Tags(tags::Args),
}

/// コンパイラの実行中に発生する可能性のあるエラー
///
/// 各サブコマンドで発生したエラーをラップします。
#[derive(Debug, Error)]
pub enum CompileError {
    /// データベース構築中のエラー
    #[error(transparent)]
    Jmdict(#[from] JmdictError),
    /// タグメタデータ出力中のエラー
    #[error(transparent)]
    Tags(#[from] TagsError),
}

/// メイン関数
///
/// コマンドライン引数をパースし、指定されたサブコマンドを実行します。
///
/// # エラー
///
/// 各サブコマンドの実行中にエラーが発生した場合、そのエラーが返されます。
fn main() -> Result<(), CompileError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Jmdict(args) => Ok(jmdict::run(args)?),
        Command::Tags(args) => Ok(tags::run(args)?),
    }
}
