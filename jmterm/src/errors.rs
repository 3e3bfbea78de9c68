//! エラー型の定義
//!
//! このモジュールは、jmtermライブラリで使用されるすべてのエラー型を定義します。

use std::error::Error;
use std::fmt;

/// jmterm専用のResult型
///
/// エラー型としてデフォルトで[`JmtermError`]を使用します。
pub type Result<T, E = JmtermError> = std::result::Result<T, E>;

/// jmtermのエラー型
///
/// 抽出処理そのものは失敗しません。ここに現れるのは辞書ソースの読み込みと
/// 出力ファイルの書き込みで発生するエラーです。
#[derive(Debug, thiserror::Error)]
pub enum JmtermError {
    /// 無効なフォーマットエラー
    ///
    /// [`InvalidFormatError`]のエラーバリアント。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// XMLパースエラー
    ///
    /// [`quick_xml::Error`]のエラーバリアント。
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    /// UTF-8エンコーディングエラー
    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),

    /// JSONシリアライゼーションエラー
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// I/Oエラー
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl JmtermError {
    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - フォーマット名
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }
}

/// 入力フォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// フォーマットの名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}
