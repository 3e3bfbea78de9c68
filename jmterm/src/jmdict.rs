//! JMdict辞書ソースのデータモデル
//!
//! このモジュールは、JMdict XMLから読み込まれた見出し語の構造
//! (漢字表記、読み、語義)を表現する型と、そのローダーを提供します。

pub mod entities;
mod parser;

pub use parser::load_jmdict_no_transform;

/// タグコードから説明文へのマッピング
///
/// 文書型宣言内の `<!ENTITY name "text">` から構築されます。
pub type Entities = hashbrown::HashMap<String, String>;

/// 読み込まれたJMdict辞書
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Jmdict {
    /// 文書順の見出し語エントリ
    pub entries: Vec<JmdictEntry>,
}

/// 一つの見出し語のレコード
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JmdictEntry {
    /// エントリのシーケンス番号 (`ent_seq`)
    pub sequence: u64,

    /// 漢字表記 (`k_ele`)。かなのみの語では空です。
    pub kanji: Vec<JmdictKanji>,

    /// 読み (`r_ele`)
    pub readings: Vec<JmdictReading>,

    /// 語義 (`sense`)
    pub senses: Vec<JmdictSense>,
}

/// 漢字表記
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JmdictKanji {
    /// 表記文字列 (`keb`)
    pub expression: String,

    /// 情報タグ (`ke_inf`)
    pub information: Vec<String>,

    /// 頻度タグ (`ke_pri`)
    pub priorities: Vec<String>,
}

/// 読み
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JmdictReading {
    /// 読み文字列 (`reb`)
    pub reading: String,

    /// 漢字表記の正しい読みではないことを示すフラグ (`re_nokanji`)
    pub no_kanji: bool,

    /// この読みが適用される漢字表記 (`re_restr`)
    ///
    /// 空の場合はすべての漢字表記に適用されます。
    pub restrictions: Vec<String>,

    /// 情報タグ (`re_inf`)
    pub information: Vec<String>,

    /// 頻度タグ (`re_pri`)
    pub priorities: Vec<String>,
}

/// 語義
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JmdictSense {
    /// この語義が適用される漢字表記 (`stagk`)。空の場合は制限なし。
    pub restricted_kanji: Vec<String>,

    /// この語義が適用される読み (`stagr`)。空の場合は制限なし。
    pub restricted_readings: Vec<String>,

    /// 相互参照 (`xref`)
    pub references: Vec<String>,

    /// 反意語 (`ant`)
    pub antonyms: Vec<String>,

    /// 品詞タグ (`pos`)
    pub parts_of_speech: Vec<String>,

    /// 分野タグ (`field`)
    pub fields: Vec<String>,

    /// その他のタグ (`misc`)
    pub misc: Vec<String>,

    /// 語義に関する補足情報 (`s_inf`)
    pub information: Vec<String>,

    /// 借用元の言語 (`lsource`)
    pub source_languages: Vec<JmdictSource>,

    /// 方言タグ (`dial`)
    pub dialects: Vec<String>,

    /// 訳語 (`gloss`)
    pub glossary: Vec<JmdictGlossary>,
}

/// 訳語
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JmdictGlossary {
    pub content: String,

    /// ISO 639-2 の言語コード。属性がない場合は `eng` です。
    pub language: String,

    pub gender: Option<String>,
}

/// 借用元の言語情報
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JmdictSource {
    pub content: String,
    pub language: String,
    pub partial: bool,
    pub wasei: bool,
}
