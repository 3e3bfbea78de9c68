//! 文書型宣言からのエンティティ定義の抽出

use std::sync::LazyLock;

use regex::Regex;

use crate::jmdict::Entities;

static ENTITY_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<!ENTITY\s+([^\s%"]+)\s+"([^"]*)"\s*>"#).unwrap()
});

/// DOCTYPE の内部サブセットから `<!ENTITY name "text">` 宣言を収集します。
///
/// パラメータエンティティ (`<!ENTITY % ...>`) は対象外です。
/// 同じ名前が複数回宣言された場合は、XMLの規則に従い最初の宣言が有効です。
///
/// # 引数
///
/// * `doctype` - DOCTYPE宣言の本文
///
/// # 戻り値
///
/// エンティティ名から説明文へのマッピング
pub fn parse_entities(doctype: &str) -> Entities {
    let mut entities = Entities::new();
    for caps in ENTITY_DECL.captures_iter(doctype) {
        entities
            .entry(caps[1].to_string())
            .or_insert_with(|| caps[2].to_string());
    }
    entities
}
