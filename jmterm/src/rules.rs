//! 活用規則の分類

use crate::term::Term;

/// タグそのものが活用規則となる品詞
const DIRECT_RULES: [&str; 4] = ["adj-i", "v1", "vk", "vs"];

/// 五段動詞の品詞タグの接頭辞。すべての下位分類は `v5` 一つに正規化されます。
const GODAN_PREFIX: &str = "v5";

/// 語のタグから活用規則を求め、`rules` に追加します。
///
/// 既に登録済みの規則を追加しても変化しないため、何度呼び出しても結果は同じです。
pub fn compute_jmdict_rules(term: &mut Term) {
    for tag in term.tags.iter() {
        if DIRECT_RULES.contains(&tag.as_str()) {
            term.rules.insert(tag);
        } else if tag.starts_with(GODAN_PREFIX) {
            term.rules.insert(GODAN_PREFIX);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::term::TagSet;

    fn rules_of(tags: &[&str]) -> TagSet {
        let mut term = Term {
            tags: tags.iter().collect(),
            ..Default::default()
        };
        compute_jmdict_rules(&mut term);
        term.rules
    }

    #[test]
    fn test_direct_rules() {
        assert_eq!(&*rules_of(&["adj-i"]), ["adj-i"]);
        assert_eq!(&*rules_of(&["vk", "vs"]), ["vk", "vs"]);
    }

    #[test]
    fn test_godan_collapses_to_v5() {
        assert_eq!(&*rules_of(&["v1", "v5s"]), ["v1", "v5"]);
        assert_eq!(&*rules_of(&["v5k-s", "v5r", "v5u"]), ["v5"]);
    }

    #[test]
    fn test_unrelated_tags() {
        assert!(rules_of(&["exp"]).is_empty());
        assert!(rules_of(&["n", "vs-i", "adj-na", "v2a-s"]).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let mut term = Term {
            tags: ["v1", "v5m"].iter().collect(),
            ..Default::default()
        };
        compute_jmdict_rules(&mut term);
        compute_jmdict_rules(&mut term);
        assert_eq!(&*term.rules, ["v1", "v5"]);
    }
}
