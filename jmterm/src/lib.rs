//! # jmterm
//!
//! JMdict形式の和英辞書を、検索用にフラット化した語のレコード集合へ変換するライブラリです。
//!
//! ## 概要
//!
//! 一つの見出し語は、漢字表記・読み・語義の階層構造を持ちます。このライブラリは
//! 各エントリを有効な (表記, 読み, 語義) の組ごとの語に展開し、タグ、活用規則、
//! 関連度スコアを付与したうえで、JSONのバンクファイルとして書き出します。
//!
//! ## 主な機能
//!
//! - **ストリーミング読み込み**: quick-xmlによるJMdict XMLの読み込み
//! - **制限付き展開**: `re_restr`、`stagk`、`stagr` による組み合わせの絞り込み
//! - **活用規則とスコア**: 品詞タグと頻度タグからの自動付与
//! - **タグメタデータ**: DOCTYPEのエンティティ定義からの表示情報の構築
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use jmterm::extract::extract_jmdict_terms;
//! use jmterm::jmdict::load_jmdict_no_transform;
//!
//! let xml = r#"<!DOCTYPE JMdict [
//! <!ENTITY v1 "Ichidan verb">
//! ]>
//! <JMdict>
//! <entry>
//! <ent_seq>1259290</ent_seq>
//! <k_ele><keb>見る</keb><ke_pri>ichi1</ke_pri><ke_pri>news1</ke_pri></k_ele>
//! <r_ele><reb>みる</reb><re_pri>ichi1</re_pri></r_ele>
//! <sense><pos>&v1;</pos><gloss>to see</gloss><gloss>to look</gloss></sense>
//! </entry>
//! </JMdict>"#;
//!
//! let (dict, entities) = load_jmdict_no_transform(xml.as_bytes())?;
//! assert_eq!(entities["v1"], "Ichidan verb");
//!
//! let terms = extract_jmdict_terms(&dict.entries[0]);
//! assert_eq!(terms.len(), 1);
//! assert_eq!(terms[0].expression, "見る");
//! assert_eq!(terms[0].reading, "みる");
//! assert_eq!(terms[0].tags.join(), "ichi1 v1");
//! assert_eq!(terms[0].rules.join(), "v1");
//! assert_eq!(terms[0].score, 5);
//! assert_eq!(terms[0].glossary, ["to see", "to look"]);
//! # Ok(())
//! # }
//! ```

/// 検索データベースの書き出し
pub mod db;

/// エラー型の定義
pub mod errors;

/// 変換パイプライン
pub mod export;

/// 見出し語から語への展開
pub mod extract;

/// JMdictのデータモデルとローダー
pub mod jmdict;

/// 活用規則の分類
pub mod rules;

/// 関連度スコアの計算
pub mod score;

/// タグメタデータ
pub mod tag_meta;

/// 語とレコード
pub mod term;


// Re-exports
pub use db::{DbWriter, JsonBankWriter};
pub use export::{export_jmdict_db, open_jmdict_source, ExportOptions};
pub use term::{Term, TermList};

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
