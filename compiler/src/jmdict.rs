//! 検索データベースの構築モジュール
//!
//! JMdictのソースファイルを読み込み、語のバンクファイルと `index.json` を出力します。

use std::path::PathBuf;

use clap::Parser;
use jmterm::errors::JmtermError;
use jmterm::export::DEFAULT_TITLE;
use jmterm::{export_jmdict_db, open_jmdict_source, ExportOptions, JsonBankWriter};

/// 構築コマンドの引数
#[derive(Parser, Debug)]
#[clap(
    name = "jmdict",
    about = "A program to build a term database from JMdict."
)]
pub struct Args {
    /// JMdict source file (JMdict_e.xml, or zstd-compressed *.zst).
    #[clap(short = 'i', long)]
    input: PathBuf,

    /// Directory to which the term banks and index.json are output.
    #[clap(short = 'o', long, value_name = "OUTPUT_DIR")]
    out_dir: PathBuf,

    /// Title of the dictionary written to index.json.
    #[clap(short = 't', long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Outputs indented JSON.
    #[clap(long)]
    pretty: bool,

    /// Maximum number of records in a single bank file.
    #[clap(long, default_value = "50000")]
    bank_size: usize,
}

/// 構築処理中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum JmdictError {
    /// ソースの読み込みまたは出力の書き込みエラー
    #[error("Database building failed: {0}")]
    Jmterm(#[from] JmtermError),
}

/// 構築コマンドを実行する
///
/// # エラー
///
/// ソースの読み込みや出力の書き込みに失敗した場合、`JmdictError`を返します。
pub fn run(args: Args) -> Result<(), JmdictError> {
    eprintln!("Loading the JMdict source...");
    let rdr = open_jmdict_source(&args.input)?;

    let options = ExportOptions::new().title(args.title).pretty(args.pretty);
    let writer = JsonBankWriter::new().bank_size(args.bank_size);

    eprintln!("Building the term database...");
    export_jmdict_db(&args.out_dir, rdr, &options, &writer)?;

    println!("Successfully built the database to {}", args.out_dir.display());
    Ok(())
}
