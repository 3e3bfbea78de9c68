//! JMdict XMLのストリーミングローダー

use std::io::BufRead;
use std::mem;

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::errors::{JmtermError, Result};
use crate::jmdict::entities::parse_entities;
use crate::jmdict::{
    Entities, Jmdict, JmdictEntry, JmdictGlossary, JmdictKanji, JmdictReading, JmdictSense,
    JmdictSource,
};

const DEFAULT_LANGUAGE: &str = "eng";

/// JMdict XMLを読み込み、辞書とエンティティ定義を返します。
///
/// タグを表す要素 (`ke_inf`, `re_inf`, `pos`, `field`, `misc`, `dial`) の
/// エンティティ参照は展開せず、エンティティ名 (`&v5k;` なら `v5k`) のまま保持します。
/// その他のテキスト要素は定義済みのXMLエンティティのみ展開されます。
///
/// # 引数
///
/// * `rdr` - JMdict XMLのリーダー
///
/// # 戻り値
///
/// 文書順のエントリを持つ [`Jmdict`] と、DOCTYPEで宣言された [`Entities`]
///
/// # エラー
///
/// XMLが不正な場合や、`ent_seq` が数値でない場合にエラーを返します。
pub fn load_jmdict_no_transform<R>(rdr: R) -> Result<(Jmdict, Entities)>
where
    R: BufRead,
{
    let mut reader = Reader::from_reader(rdr);
    reader.trim_text(true);
    reader.expand_empty_elements(true);

    let mut state = ParserState::default();
    let mut buf = vec![];
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::DocType(t) => state.entities.extend(parse_entities(std::str::from_utf8(&t)?)),
            Event::Start(e) => state.start(&e)?,
            Event::End(e) => state.end(e.name().as_ref())?,
            Event::Text(t) => state.text.push_str(std::str::from_utf8(&t)?),
            Event::CData(t) => state.text.push_str(std::str::from_utf8(&t)?),
            Event::Eof => break,
            _ => (),
        }
        buf.clear();
    }

    log::debug!(
        "Loaded {} entries and {} entity definitions",
        state.dict.entries.len(),
        state.entities.len(),
    );
    Ok((state.dict, state.entities))
}

/// ローダーの状態
///
/// 要素が現在の文脈の外に現れた場合 (例: `entry` の外の `keb`) は無視されます。
#[derive(Default)]
struct ParserState {
    dict: Jmdict,
    entities: Entities,
    entry: Option<JmdictEntry>,
    kanji: Option<JmdictKanji>,
    reading: Option<JmdictReading>,
    sense: Option<JmdictSense>,
    glossary: Option<JmdictGlossary>,
    source: Option<JmdictSource>,
    text: String,
}

impl ParserState {
    fn start(&mut self, e: &BytesStart) -> Result<()> {
        self.text.clear();
        match e.name().as_ref() {
            b"entry" => self.entry = Some(JmdictEntry::default()),
            b"k_ele" => self.kanji = Some(JmdictKanji::default()),
            b"r_ele" => self.reading = Some(JmdictReading::default()),
            b"sense" => self.sense = Some(JmdictSense::default()),
            b"gloss" => {
                let mut glossary = JmdictGlossary {
                    language: DEFAULT_LANGUAGE.to_string(),
                    ..Default::default()
                };
                for attr in e.attributes() {
                    let attr = attr.map_err(quick_xml::Error::from)?;
                    match attr.key.as_ref() {
                        b"xml:lang" => glossary.language = attr.unescape_value()?.into_owned(),
                        b"g_gend" => glossary.gender = Some(attr.unescape_value()?.into_owned()),
                        _ => (),
                    }
                }
                self.glossary = Some(glossary);
            }
            b"lsource" => {
                let mut source = JmdictSource {
                    language: DEFAULT_LANGUAGE.to_string(),
                    ..Default::default()
                };
                for attr in e.attributes() {
                    let attr = attr.map_err(quick_xml::Error::from)?;
                    let value = attr.unescape_value()?;
                    match attr.key.as_ref() {
                        b"xml:lang" => source.language = value.into_owned(),
                        b"ls_type" => source.partial = value == "part",
                        b"ls_wasei" => source.wasei = value == "y",
                        _ => (),
                    }
                }
                self.source = Some(source);
            }
            _ => (),
        }
        Ok(())
    }

    fn end(&mut self, name: &[u8]) -> Result<()> {
        let raw = mem::take(&mut self.text);
        match name {
            b"entry" => {
                if let Some(entry) = self.entry.take() {
                    self.dict.entries.push(entry);
                }
            }
            b"ent_seq" => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.sequence = raw.trim().parse().map_err(|_| {
                        JmtermError::invalid_format("ent_seq", format!("not a number: {raw:?}"))
                    })?;
                }
            }

            b"k_ele" => {
                if let (Some(entry), Some(kanji)) = (self.entry.as_mut(), self.kanji.take()) {
                    entry.kanji.push(kanji);
                }
            }
            b"keb" => {
                if let Some(kanji) = self.kanji.as_mut() {
                    kanji.expression = unescape_text(&raw);
                }
            }
            b"ke_inf" => {
                if let Some(kanji) = self.kanji.as_mut() {
                    kanji.information.push(entity_name(&raw));
                }
            }
            b"ke_pri" => {
                if let Some(kanji) = self.kanji.as_mut() {
                    kanji.priorities.push(raw);
                }
            }

            b"r_ele" => {
                if let (Some(entry), Some(reading)) = (self.entry.as_mut(), self.reading.take()) {
                    entry.readings.push(reading);
                }
            }
            b"reb" => {
                if let Some(reading) = self.reading.as_mut() {
                    reading.reading = unescape_text(&raw);
                }
            }
            b"re_nokanji" => {
                if let Some(reading) = self.reading.as_mut() {
                    reading.no_kanji = true;
                }
            }
            b"re_restr" => {
                if let Some(reading) = self.reading.as_mut() {
                    reading.restrictions.push(unescape_text(&raw));
                }
            }
            b"re_inf" => {
                if let Some(reading) = self.reading.as_mut() {
                    reading.information.push(entity_name(&raw));
                }
            }
            b"re_pri" => {
                if let Some(reading) = self.reading.as_mut() {
                    reading.priorities.push(raw);
                }
            }

            b"sense" => {
                if let (Some(entry), Some(sense)) = (self.entry.as_mut(), self.sense.take()) {
                    entry.senses.push(sense);
                }
            }
            b"gloss" => {
                if let (Some(sense), Some(mut glossary)) = (self.sense.as_mut(), self.glossary.take())
                {
                    glossary.content = unescape_text(&raw);
                    sense.glossary.push(glossary);
                }
            }
            b"lsource" => {
                if let (Some(sense), Some(mut source)) = (self.sense.as_mut(), self.source.take()) {
                    source.content = unescape_text(&raw);
                    sense.source_languages.push(source);
                }
            }
            _ => {
                if let Some(sense) = self.sense.as_mut() {
                    match name {
                        b"stagk" => sense.restricted_kanji.push(unescape_text(&raw)),
                        b"stagr" => sense.restricted_readings.push(unescape_text(&raw)),
                        b"xref" => sense.references.push(unescape_text(&raw)),
                        b"ant" => sense.antonyms.push(unescape_text(&raw)),
                        b"s_inf" => sense.information.push(unescape_text(&raw)),
                        b"pos" => sense.parts_of_speech.push(entity_name(&raw)),
                        b"field" => sense.fields.push(entity_name(&raw)),
                        b"misc" => sense.misc.push(entity_name(&raw)),
                        b"dial" => sense.dialects.push(entity_name(&raw)),
                        _ => (),
                    }
                }
            }
        }
        Ok(())
    }
}

/// 定義済みエンティティを展開します。未知の参照を含む場合は元の文字列を返します。
fn unescape_text(raw: &str) -> String {
    match unescape(raw) {
        Ok(text) => text.into_owned(),
        Err(_) => raw.to_string(),
    }
}

/// `&name;` 形式の参照からエンティティ名を取り出します。
fn entity_name(raw: &str) -> String {
    match raw.strip_prefix('&').and_then(|s| s.strip_suffix(';')) {
        Some(name) => name.to_string(),
        None => unescape_text(raw),
    }
}
