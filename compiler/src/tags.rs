//! タグメタデータの出力モジュール

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use jmterm::errors::JmtermError;
use jmterm::jmdict::load_jmdict_no_transform;
use jmterm::open_jmdict_source;
use jmterm::tag_meta::compute_jmdict_tag_meta;

/// タグメタデータ出力コマンドの引数
#[derive(Parser, Debug)]
#[clap(
    name = "tags",
    about = "Prints tag metadata derived from the JMdict entity declarations."
)]
pub struct Args {
    /// JMdict source file (JMdict_e.xml, or zstd-compressed *.zst).
    #[clap(short = 'i', long)]
    input: PathBuf,

    /// Outputs indented JSON.
    #[clap(long)]
    pretty: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TagsError {
    #[error("Loading the source failed: {0}")]
    Jmterm(#[from] JmtermError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// タグメタデータをJSONとして標準出力に書き出す
pub fn run(args: Args) -> Result<(), TagsError> {
    eprintln!("Loading the JMdict source...");
    let (_, entities) = load_jmdict_no_transform(open_jmdict_source(&args.input)?)?;
    let tag_meta = compute_jmdict_tag_meta(&entities);

    let out = io::stdout();
    let mut out = out.lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut out, &tag_meta)?;
    } else {
        serde_json::to_writer(&mut out, &tag_meta)?;
    }
    out.write_all(b"\n")?;
    Ok(())
}
