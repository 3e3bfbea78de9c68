//! 検索用の語レコード
//!
//! このモジュールは、見出し語から展開された語 ([`Term`]) と、
//! その集まり ([`TermList`]) を出力用のフラットなレコード ([`DbRecord`]) に
//! 変換する処理を提供します。

use std::ops::Deref;

use hashbrown::HashSet;
use serde::Serialize;
use serde_json::Value;

/// 挿入順を保持し、重複を抑止するタグコードの集合
///
/// 同じコードを二度追加しても何も起こりません。
/// 出力を決定的にするため、反復順は最初に追加された順です。
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// 空の集合を作成します。
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// コードが未登録の場合のみ末尾に追加します。
    ///
    /// # 戻り値
    ///
    /// 新たに追加された場合は `true`
    pub fn insert<S>(&mut self, code: S) -> bool
    where
        S: AsRef<str>,
    {
        let code = code.as_ref();
        if self.contains(code) {
            return false;
        }
        self.0.push(code.to_string());
        true
    }

    /// 複数のコードを順に追加します。
    pub fn extend<I, S>(&mut self, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for code in codes {
            self.insert(code);
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.iter().any(|c| c == code)
    }

    /// 空白区切りの文字列に連結します。
    pub fn join(&self) -> String {
        self.0.join(" ")
    }
}

impl Deref for TagSet {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromIterator<S> for TagSet
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// 表記・読み・語義の組を一つにまとめた語
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    /// 表記。漢字表記がない語では読みの文字列になります。
    pub expression: String,

    /// 読み。かなのみの語では空です。
    pub reading: String,

    /// 文法・用法・頻度のタグ
    pub tags: TagSet,

    /// 活用規則
    pub rules: TagSet,

    /// 関連度スコア
    pub score: i32,

    /// 訳語
    pub glossary: Vec<String>,
}

impl Term {
    /// 出力用のフラットなレコードに変換します。
    ///
    /// レコードの並びは `[表記, 読み, "タグ ...", "規則 ...", スコア, 訳語...]` です。
    pub fn to_record(&self) -> DbRecord {
        let mut values = Vec::with_capacity(5 + self.glossary.len());
        values.push(Value::from(self.expression.as_str()));
        values.push(Value::from(self.reading.as_str()));
        values.push(Value::from(self.tags.join()));
        values.push(Value::from(self.rules.join()));
        values.push(Value::from(self.score));
        values.extend(self.glossary.iter().map(|g| Value::from(g.as_str())));
        DbRecord(values)
    }
}

/// 出力データベースの一レコード
///
/// JSON配列としてシリアライズされます。
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DbRecord(pub Vec<Value>);

/// 抽出された語のリスト
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TermList(Vec<Term>);

impl TermList {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, term: Term) {
        self.0.push(term);
    }

    /// 語をレコードに変換し、完全に同一のレコードを除去します。
    ///
    /// 最初に現れたレコードの位置が保たれます。異なるレコード同士は統合しません。
    pub fn crush(self) -> Vec<DbRecord> {
        let mut seen = HashSet::with_capacity(self.0.len());
        let mut records = Vec::with_capacity(self.0.len());
        for term in &self.0 {
            if seen.insert(term) {
                records.push(term.to_record());
            }
        }
        let dropped = self.0.len() - records.len();
        if dropped != 0 {
            log::debug!("Crushed {} duplicate term records", dropped);
        }
        records
    }
}

impl Deref for TermList {
    type Target = [Term];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Extend<Term> for TermList {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<Term> for TermList {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TermList {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
