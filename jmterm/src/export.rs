//! JMdictから検索データベースへの変換パイプライン
//!
//! ソースの読み込み、語の展開、重複の除去、タグメタデータの構築を順に行い、
//! 結果を [`DbWriter`] に一度だけ渡します。

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::db::DbWriter;
use crate::errors::Result;
use crate::extract::extract_jmdict_terms;
use crate::jmdict::{load_jmdict_no_transform, Jmdict};
use crate::tag_meta::compute_jmdict_tag_meta;
use crate::term::TermList;

/// 出力辞書の既定の表示名
pub const DEFAULT_TITLE: &str = "JMdict";

/// 変換の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    title: String,
    pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            pretty: false,
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 出力辞書の表示名を設定します。
    pub fn title<S>(mut self, title: S) -> Self
    where
        S: Into<String>,
    {
        self.title = title.into();
        self
    }

    /// 出力を整形するかどうかを設定します。
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

/// 辞書のすべてのエントリを文書順に語へ展開します。
pub fn extract_terms(dict: &Jmdict) -> TermList {
    let mut terms = TermList::new();
    for entry in &dict.entries {
        terms.extend(extract_jmdict_terms(entry));
    }
    terms
}

/// JMdict XMLを読み込み、検索データベースとして書き出します。
///
/// # 引数
///
/// * `output_dir` - 出力ディレクトリ
/// * `rdr` - JMdict XMLのリーダー
/// * `options` - 変換の設定
/// * `writer` - 書き出し先
///
/// # エラー
///
/// ソースの読み込みに失敗した場合は、語の展開を行う前にエラーを返します。
/// 書き出しのエラーはそのまま返されます。
pub fn export_jmdict_db<R, W>(
    output_dir: &Path,
    rdr: R,
    options: &ExportOptions,
    writer: &W,
) -> Result<()>
where
    R: BufRead,
    W: DbWriter + ?Sized,
{
    log::info!("Loading the JMdict source...");
    let (dict, entities) = load_jmdict_no_transform(rdr)?;

    log::info!("Extracting terms from {} entries...", dict.entries.len());
    let terms = extract_terms(&dict);
    let num_terms = terms.len();
    let records = terms.crush();
    log::info!("Extracted {} terms ({} unique)", num_terms, records.len());

    let tag_meta = compute_jmdict_tag_meta(&entities);

    writer.write_db(
        output_dir,
        &options.title,
        &records,
        &[],
        &tag_meta,
        options.pretty,
    )
}

/// JMdictソースファイルを開きます。
///
/// 拡張子が `.zst` の場合は zstd で展開しながら読み込みます。
///
/// # エラー
///
/// ファイルを開けない場合や、zstd デコーダーの初期化に失敗した場合にエラーを返します。
pub fn open_jmdict_source<P>(path: P) -> Result<Box<dyn BufRead>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)?;
    let is_zstd = path.extension().is_some_and(|ext| ext == "zst");
    if is_zstd {
        Ok(Box::new(BufReader::new(zstd::Decoder::new(file)?)))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
