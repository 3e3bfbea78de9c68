//! 検索データベースの書き出し
//!
//! このモジュールは、語レコードとタグメタデータを出力先に永続化する
//! [`DbWriter`] と、その標準実装であるJSONバンク形式の [`JsonBankWriter`] を提供します。
//!
//! JSONバンク形式の出力ディレクトリは次のファイルで構成されます。
//!
//! - `index.json`: タイトル、形式バージョン、タグメタデータ、バンク数
//! - `term_bank_{N}.json`: 語レコードの配列 (N は 1 から)
//! - `kanji_bank_{N}.json`: 追加レコードの配列 (N は 1 から)

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::errors::Result;
use crate::tag_meta::TagMetaMap;
use crate::term::DbRecord;

/// 出力形式のバージョン
pub const DB_VERSION: u32 = 1;

/// 一つのバンクファイルに含めるレコード数の既定値
pub const DEFAULT_BANK_SIZE: usize = 50000;

/// 語レコードとタグメタデータの書き出し先
pub trait DbWriter {
    /// データベースを書き出します。
    ///
    /// # 引数
    ///
    /// * `output_dir` - 出力ディレクトリ
    /// * `title` - 辞書の表示名
    /// * `terms` - 語レコード
    /// * `extra` - 追加レコード (JMdictからは常に空)
    /// * `tag_meta` - タグメタデータ
    /// * `pretty` - 整形して出力するかどうか
    ///
    /// # エラー
    ///
    /// 書き込みに失敗した場合にエラーを返します。
    fn write_db(
        &self,
        output_dir: &Path,
        title: &str,
        terms: &[DbRecord],
        extra: &[DbRecord],
        tag_meta: &TagMetaMap,
        pretty: bool,
    ) -> Result<()>;
}

/// JSONバンク形式の書き出し
#[derive(Debug, Clone)]
pub struct JsonBankWriter {
    bank_size: usize,
}

impl Default for JsonBankWriter {
    fn default() -> Self {
        Self {
            bank_size: DEFAULT_BANK_SIZE,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DbIndex<'a> {
    title: &'a str,
    version: u32,
    tag_meta: &'a TagMetaMap,
    term_banks: usize,
    kanji_banks: usize,
}

impl JsonBankWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// バンクあたりのレコード数を設定します。0 は 1 として扱います。
    pub fn bank_size(mut self, bank_size: usize) -> Self {
        self.bank_size = bank_size.max(1);
        self
    }

    /// レコードをバンクに分割して書き出します。
    ///
    /// # 戻り値
    ///
    /// 書き出したバンクの数
    fn write_banks(
        &self,
        output_dir: &Path,
        prefix: &str,
        records: &[DbRecord],
        pretty: bool,
    ) -> Result<usize> {
        let mut num_banks = 0;
        for (i, bank) in records.chunks(self.bank_size).enumerate() {
            let path = output_dir.join(format!("{}_bank_{}.json", prefix, i + 1));
            write_json(&path, bank, pretty)?;
            num_banks += 1;
        }
        Ok(num_banks)
    }
}

impl DbWriter for JsonBankWriter {
    fn write_db(
        &self,
        output_dir: &Path,
        title: &str,
        terms: &[DbRecord],
        extra: &[DbRecord],
        tag_meta: &TagMetaMap,
        pretty: bool,
    ) -> Result<()> {
        fs::create_dir_all(output_dir)?;

        let term_banks = self.write_banks(output_dir, "term", terms, pretty)?;
        let kanji_banks = self.write_banks(output_dir, "kanji", extra, pretty)?;
        log::info!(
            "Wrote {} term records in {} banks to {}",
            terms.len(),
            term_banks,
            output_dir.display(),
        );

        let index = DbIndex {
            title,
            version: DB_VERSION,
            tag_meta,
            term_banks,
            kanji_banks,
        };
        write_json(&output_dir.join("index.json"), &index, pretty)
    }
}

fn write_json<T>(path: &Path, value: &T, pretty: bool) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let mut wtr = BufWriter::new(File::create(path)?);
    if pretty {
        serde_json::to_writer_pretty(&mut wtr, value)?;
    } else {
        serde_json::to_writer(&mut wtr, value)?;
    }
    wtr.flush()?;
    Ok(())
}
