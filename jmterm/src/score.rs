//! 関連度スコアの計算

use crate::term::Term;

/// 頻出語の上位区分を示すタグ
const FREQUENT_TAGS: [&str; 4] = ["gai1", "ichi1", "news1", "spec1"];

/// 古語・不規則な漢字使用を示すタグ
const DEMOTED_TAGS: [&str; 2] = ["arch", "iK"];

/// 語のタグからスコアを計算し、`score` を上書きします。
///
/// 頻出タグごとに +5、古語・不規則漢字タグごとに -1 を加算します。
pub fn compute_jmdict_score(term: &mut Term) {
    term.score = term
        .tags
        .iter()
        .map(|tag| match tag.as_str() {
            t if FREQUENT_TAGS.contains(&t) => 5,
            t if DEMOTED_TAGS.contains(&t) => -1,
            _ => 0,
        })
        .sum();
}
