//! 見出し語から語への展開
//!
//! 一つのJMdictエントリを、有効な (表記, 読み, 語義) の組ごとの [`Term`] に展開します。
//! 組み合わせは次の三つの制限で独立に絞り込まれます。
//!
//! - 読みの `re_restr`: 読みが適用される漢字表記
//! - 語義の `stagr`: 語義が適用される読み
//! - 語義の `stagk`: 語義が適用される漢字表記
//!
//! いずれかの制限に外れた組み合わせだけが除かれ、エントリ全体は除かれません。

use crate::jmdict::{JmdictEntry, JmdictKanji, JmdictReading};
use crate::rules::compute_jmdict_rules;
use crate::score::compute_jmdict_score;
use crate::term::{TagSet, Term};

/// 空の制限リストは「制限なし」を意味します。
fn is_allowed(value: &str, restrictions: &[String]) -> bool {
    restrictions.is_empty() || restrictions.iter().any(|r| r == value)
}

/// 語義を割り当てる前の、表記と読みの組
struct TermBase<'a> {
    kanji: Option<&'a JmdictKanji>,
    reading: &'a JmdictReading,
    tags: TagSet,
}

impl<'a> TermBase<'a> {
    /// 読みと漢字表記の組から語の基底を作成します。
    ///
    /// 読みが漢字表記に適用されない場合は `None` を返します。
    fn new(reading: &'a JmdictReading, kanji: Option<&'a JmdictKanji>) -> Option<Self> {
        let mut tags = TagSet::new();
        tags.extend(&reading.information);

        match kanji {
            None => tags.extend(&reading.priorities),
            Some(kanji) => {
                if !is_allowed(&kanji.expression, &reading.restrictions) {
                    return None;
                }
                tags.extend(&kanji.information);
                // 頻度タグは漢字表記と読みの両方に付いている場合のみ残す
                tags.extend(
                    kanji
                        .priorities
                        .iter()
                        .filter(|p| reading.priorities.contains(*p)),
                );
            }
        }

        Some(Self {
            kanji,
            reading,
            tags,
        })
    }

    fn expression(&self) -> &str {
        match self.kanji {
            Some(kanji) => &kanji.expression,
            None => &self.reading.reading,
        }
    }

    fn reading(&self) -> &str {
        match self.kanji {
            Some(_) => &self.reading.reading,
            None => "",
        }
    }

    /// エントリの各語義を適用して語を生成します。
    fn expand(&self, entry: &JmdictEntry, terms: &mut Vec<Term>) {
        for sense in &entry.senses {
            if !is_allowed(&self.reading.reading, &sense.restricted_readings) {
                continue;
            }
            if let Some(kanji) = self.kanji {
                if !is_allowed(&kanji.expression, &sense.restricted_kanji) {
                    continue;
                }
            }

            let mut term = Term {
                expression: self.expression().to_string(),
                reading: self.reading().to_string(),
                tags: self.tags.clone(),
                glossary: sense.glossary.iter().map(|g| g.content.clone()).collect(),
                ..Default::default()
            };
            term.tags.extend(&sense.parts_of_speech);
            term.tags.extend(&sense.fields);
            term.tags.extend(&sense.misc);
            term.tags.extend(&sense.dialects);

            compute_jmdict_rules(&mut term);
            compute_jmdict_score(&mut term);

            terms.push(term);
        }
    }
}

/// 一つのエントリを語のリストに展開します。
///
/// 漢字表記がある場合は (漢字表記 × 読み) のすべての組を、ない場合は各読みを
/// かなのみの語として扱います。各語には活用規則とスコアが付与済みです。
///
/// # 引数
///
/// * `entry` - JMdictのエントリ
///
/// # 戻り値
///
/// 生成された語。すべての組み合わせが制限で除かれた場合は空です。
pub fn extract_jmdict_terms(entry: &JmdictEntry) -> Vec<Term> {
    let mut terms = vec![];

    let bases: Vec<TermBase> = if entry.kanji.is_empty() {
        entry
            .readings
            .iter()
            .filter_map(|reading| TermBase::new(reading, None))
            .collect()
    } else {
        entry
            .kanji
            .iter()
            .flat_map(|kanji| {
                entry
                    .readings
                    .iter()
                    .filter_map(move |reading| TermBase::new(reading, Some(kanji)))
            })
            .collect()
    };

    for base in &bases {
        base.expand(entry, &mut terms);
    }

    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::jmdict::{JmdictGlossary, JmdictSense};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn kanji(expression: &str, priorities: &[&str]) -> JmdictKanji {
        JmdictKanji {
            expression: expression.to_string(),
            priorities: strings(priorities),
            ..Default::default()
        }
    }

    fn reading(text: &str, priorities: &[&str], restrictions: &[&str]) -> JmdictReading {
        JmdictReading {
            reading: text.to_string(),
            priorities: strings(priorities),
            restrictions: strings(restrictions),
            ..Default::default()
        }
    }

    fn sense(pos: &[&str], glossary: &[&str]) -> JmdictSense {
        JmdictSense {
            parts_of_speech: strings(pos),
            glossary: glossary
                .iter()
                .map(|g| JmdictGlossary {
                    content: g.to_string(),
                    language: "eng".to_string(),
                    gender: None,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_kana_only_entry() {
        let entry = JmdictEntry {
            readings: vec![reading("ヽ", &["spec1"], &[]), reading("くりかえし", &[], &[])],
            senses: vec![sense(&["unc"], &["repetition mark"])],
            ..Default::default()
        };
        let terms = extract_jmdict_terms(&entry);
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].expression, "ヽ");
        assert_eq!(terms[0].reading, "");
        assert_eq!(&*terms[0].tags, ["spec1", "unc"]);
        assert_eq!(terms[0].score, 5);
        assert_eq!(terms[1].expression, "くりかえし");
        assert_eq!(terms[1].reading, "");
        assert_eq!(terms[1].score, 0);
    }

    #[test]
    fn test_kana_only_ignores_reading_restrictions() {
        let entry = JmdictEntry {
            readings: vec![reading("みる", &[], &["見る"])],
            senses: vec![sense(&["v1"], &["to see"])],
            ..Default::default()
        };
        assert_eq!(extract_jmdict_terms(&entry).len(), 1);
    }

    #[test]
    fn test_priority_intersection() {
        let entry = JmdictEntry {
            kanji: vec![kanji("見る", &["news1", "ichi1"])],
            readings: vec![reading("みる", &["ichi1"], &[])],
            senses: vec![sense(&["v1", "vt"], &["to see", "to look"])],
            ..Default::default()
        };
        let terms = extract_jmdict_terms(&entry);
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].expression, "見る");
        assert_eq!(terms[0].reading, "みる");
        assert_eq!(&*terms[0].tags, ["ichi1", "v1", "vt"]);
        assert_eq!(&*terms[0].rules, ["v1"]);
        assert_eq!(terms[0].score, 5);
        assert_eq!(terms[0].glossary, ["to see", "to look"]);
    }

    #[test]
    fn test_reading_restriction() {
        let entry = JmdictEntry {
            kanji: vec![kanji("見る", &[]), kanji("観る", &[])],
            readings: vec![reading("みる", &[], &["見る"])],
            senses: vec![sense(&["v1"], &["to see"])],
            ..Default::default()
        };
        let terms = extract_jmdict_terms(&entry);
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].expression, "見る");
        assert_eq!(terms[0].reading, "みる");
    }

    #[test]
    fn test_sense_restrictions() {
        let mut only_miru = sense(&["v1"], &["to see"]);
        only_miru.restricted_readings = strings(&["みる"]);
        let mut only_kanji = sense(&["n"], &["eye"]);
        only_kanji.restricted_kanji = strings(&["目"]);
        let entry = JmdictEntry {
            kanji: vec![kanji("見る", &[]), kanji("目", &[])],
            readings: vec![reading("みる", &[], &[]), reading("める", &[], &[])],
            senses: vec![only_miru, only_kanji],
            ..Default::default()
        };
        let terms = extract_jmdict_terms(&entry);
        let pairs: Vec<_> = terms
            .iter()
            .map(|t| (t.expression.as_str(), t.reading.as_str(), t.glossary[0].as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("見る", "みる", "to see"),
                ("目", "みる", "to see"),
                ("目", "みる", "eye"),
                ("目", "める", "eye"),
            ]
        );
        assert!(terms.iter().all(|t| t.reading != "める" || t.glossary[0] != "to see"));
    }

    #[test]
    fn test_sense_kanji_restriction_ignored_for_kana_only() {
        let mut restricted = sense(&["n"], &["thing"]);
        restricted.restricted_kanji = strings(&["物"]);
        let entry = JmdictEntry {
            readings: vec![reading("もの", &[], &[])],
            senses: vec![restricted],
            ..Default::default()
        };
        assert_eq!(extract_jmdict_terms(&entry).len(), 1);
    }

    #[test]
    fn test_all_filtered_out() {
        let mut restricted = sense(&["n"], &["eye"]);
        restricted.restricted_readings = strings(&["まなこ"]);
        let entry = JmdictEntry {
            kanji: vec![kanji("目", &[])],
            readings: vec![reading("め", &[], &[])],
            senses: vec![restricted],
            ..Default::default()
        };
        assert!(extract_jmdict_terms(&entry).is_empty());
    }

    #[test]
    fn test_tags_are_deduplicated_across_categories() {
        let mut s = sense(&["n", "uk"], &["thing"]);
        s.misc = strings(&["uk", "arch"]);
        s.fields = strings(&["ling"]);
        s.dialects = strings(&["ksb"]);
        let mut k = kanji("物", &["news1"]);
        k.information = strings(&["iK"]);
        let mut r = reading("もの", &["news1"], &[]);
        r.information = strings(&["ok"]);
        let entry = JmdictEntry {
            kanji: vec![k],
            readings: vec![r],
            senses: vec![s],
            ..Default::default()
        };
        let terms = extract_jmdict_terms(&entry);
        assert_eq!(
            &*terms[0].tags,
            ["ok", "iK", "news1", "n", "uk", "ling", "arch", "ksb"]
        );
        assert_eq!(terms[0].score, 5 - 1 - 1);
    }
}
