//! タグメタデータの構築
//!
//! タグコードごとに、表示用の説明・分類・並び順をまとめます。

use std::collections::BTreeMap;

use serde::Serialize;

use crate::jmdict::Entities;

/// タグコードからメタデータへのマッピング
///
/// 出力を安定させるため、キー順に並ぶマップを使います。
pub type TagMetaMap = BTreeMap<String, TagMeta>;

/// 一つのタグの表示用メタデータ
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct TagMeta {
    /// 分類名。分類のないタグでは空です。
    #[serde(skip_serializing_if = "String::is_empty")]
    pub category: String,

    /// 説明文
    pub notes: String,

    /// 並び順。小さいほど先に表示されます。
    #[serde(skip_serializing_if = "is_zero")]
    pub order: i32,
}

impl TagMeta {
    fn new(notes: &str, category: &str, order: i32) -> Self {
        Self {
            category: category.to_string(),
            notes: notes.to_string(),
            order,
        }
    }
}

fn is_zero(order: &i32) -> bool {
    *order == 0
}

/// 頻度タグの既定値: (コード, 説明, 分類)
///
/// 並び順はすべて 3 です。
const BASELINE_TAGS: [(&str, &str, &str); 8] = [
    ("news1", "appears frequently in Mainichi Shimbun (top listing)", "frequent"),
    ("ichi1", "listed as common in Ichimango Goi Bunruishuu (top listing)", "frequent"),
    ("spec1", "common words not included in frequency lists (top listing)", "frequent"),
    ("gai1", "common loanword (top listing)", "frequent"),
    ("news2", "appears frequently in Mainichi Shimbun (bottom listing)", ""),
    ("ichi2", "listed as common in Ichimango Goi Bunruishuu (bottom listing)", ""),
    ("spec2", "common words not included in frequency lists (bottom listing)", ""),
    ("gai2", "common loanword (bottom listing)", ""),
];

const BASELINE_ORDER: i32 = 3;

/// エンティティ定義のタグを分類します。
///
/// # 戻り値
///
/// (分類, 並び順)
fn classify(code: &str) -> (&'static str, i32) {
    match code {
        "gai1" | "ichi1" | "news1" | "spec1" => ("frequent", 1),
        "exp" | "id" => ("expression", 2),
        "arch" | "iK" => ("archaism", 2),
        _ => ("", 0),
    }
}

/// 既定の頻度タグとエンティティ定義からタグメタデータを構築します。
///
/// エンティティ定義は同じコードの既定値を上書きします。このため、
/// エンティティとして定義された上位の頻度タグは並び順 1 になり、
/// 定義がない場合は既定値の 3 のままです。
///
/// # 引数
///
/// * `entities` - タグコードから説明文へのマッピング
///
/// # 戻り値
///
/// タグコードからメタデータへのマッピング
pub fn compute_jmdict_tag_meta(entities: &Entities) -> TagMetaMap {
    let mut tags: TagMetaMap = BASELINE_TAGS
        .iter()
        .map(|&(code, notes, category)| {
            (code.to_string(), TagMeta::new(notes, category, BASELINE_ORDER))
        })
        .collect();

    for (name, value) in entities {
        let (category, order) = classify(name);
        tags.insert(name.clone(), TagMeta::new(value, category, order));
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(pairs: &[(&str, &str)]) -> Entities {
        pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_baseline_only() {
        let tags = compute_jmdict_tag_meta(&Entities::new());
        assert_eq!(tags.len(), 8);
        assert_eq!(
            tags["news1"],
            TagMeta::new(
                "appears frequently in Mainichi Shimbun (top listing)",
                "frequent",
                3
            )
        );
        assert_eq!(tags["gai2"], TagMeta::new("common loanword (bottom listing)", "", 3));
    }

    #[test]
    fn test_entity_overrides_baseline() {
        let tags = compute_jmdict_tag_meta(&entities(&[("news1", "Mainichi top")]));
        assert_eq!(tags["news1"], TagMeta::new("Mainichi top", "frequent", 1));
        assert_eq!(tags["ichi1"].order, 3);
    }

    #[test]
    fn test_entity_classification() {
        let tags = compute_jmdict_tag_meta(&entities(&[
            ("exp", "expressions (phrases, clauses, etc.)"),
            ("id", "idiomatic expression"),
            ("arch", "archaism"),
            ("iK", "word containing irregular kanji usage"),
            ("n", "noun (common) (futsuumeishi)"),
            ("news2", "bottom listing"),
        ]));
        assert_eq!(tags.len(), 13);
        assert_eq!((tags["exp"].category.as_str(), tags["exp"].order), ("expression", 2));
        assert_eq!((tags["id"].category.as_str(), tags["id"].order), ("expression", 2));
        assert_eq!((tags["arch"].category.as_str(), tags["arch"].order), ("archaism", 2));
        assert_eq!((tags["iK"].category.as_str(), tags["iK"].order), ("archaism", 2));
        assert_eq!(tags["n"], TagMeta::new("noun (common) (futsuumeishi)", "", 0));
        assert_eq!(tags["news2"], TagMeta::new("bottom listing", "", 0));
    }

    #[test]
    fn test_serialize_omits_defaults() {
        let tags = compute_jmdict_tag_meta(&entities(&[("n", "noun")]));
        assert_eq!(
            serde_json::to_value(&tags["n"]).unwrap(),
            serde_json::json!({"notes": "noun"})
        );
        assert_eq!(
            serde_json::to_value(&tags["spec1"]).unwrap(),
            serde_json::json!({
                "category": "frequent",
                "notes": "common words not included in frequency lists (top listing)",
                "order": 3,
            })
        );
    }
}
