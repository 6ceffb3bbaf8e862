//! `entry`：把数据源的一个读音条目包装成 `Entry`/`Meaning`。
//!
//! 约定：
//! - 释义里的全角空格（U+3000）先去掉
//! - 含注音符号（ㄅ~ㄩ、ˊˇˋ˙）的释义是读音标注（例如 `[二]ㄇㄛˊmó`），不算义项
//! - 义项顺序与词典一致

use once_cell::sync::Lazy;
use regex::Regex;

use crate::source::{RawDefinition, RawHeteronym};

const FULL_WIDTH_SPACE: char = '\u{3000}';
const FULL_STOP: char = '。';

/// `見「X」條` / `參見「X」、「Y」等條`
static SEE_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"見「(.*)」等?條").expect("valid reference pattern"));
/// `通「X」`
static SAME_AS_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"通「(.*)」").expect("valid reference pattern"));
static PART_OF_SPEECH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*)\]").expect("valid part-of-speech pattern"));

/// 是否含注音符号（声母韵母 U+3105..=U+3129 与声调 ˊˇˋ˙）。
pub fn contains_bopomofo(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, '\u{3105}'..='\u{3129}' | '\u{02CA}' | '\u{02C7}' | '\u{02CB}' | '\u{02D9}'))
}

/// 一个词的一个读音条目（不可变）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    text: String,
    bopomofo: String,
    pinyin: String,
    meanings: Vec<Meaning>,
}

impl Entry {
    pub fn new(text: impl Into<String>, heteronym: RawHeteronym) -> Self {
        let text = text.into();
        let RawHeteronym {
            bopomofo,
            pinyin,
            definitions,
        } = heteronym;
        let meanings = definitions
            .into_iter()
            .filter_map(|d| {
                let def: String = d.def.chars().filter(|&c| c != FULL_WIDTH_SPACE).collect();
                if contains_bopomofo(&def) {
                    return None;
                }
                Some(Meaning::new(&text, RawDefinition { def, kind: d.kind }))
            })
            .collect();
        Self {
            text,
            bopomofo,
            pinyin,
            meanings,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn bopomofo(&self) -> &str {
        &self.bopomofo
    }

    pub fn pinyin(&self) -> &str {
        &self.pinyin
    }

    pub fn meanings(&self) -> &[Meaning] {
        &self.meanings
    }

    /// 至少有一个义项不是单纯的参见/通假。
    pub fn has_meaning(&self) -> bool {
        self.meanings.iter().any(|m| !m.is_cross_reference())
    }

    /// 取词性在 `tags` 中的义项。
    pub fn filter_by_pos(&self, tags: &[&str]) -> Vec<&Meaning> {
        self.meanings
            .iter()
            .filter(|m| m.part_of_speech().is_some_and(|p| tags.contains(&p)))
            .collect()
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, meanings count: {}",
            self.text,
            self.bopomofo,
            self.meanings.len()
        )
    }
}

/// 一条义项。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meaning {
    headword: String,
    definition: String,
    part_of_speech: Option<String>,
}

impl Meaning {
    fn new(headword: &str, raw: RawDefinition) -> Self {
        let part_of_speech = raw.kind.as_deref().and_then(|kind| {
            PART_OF_SPEECH
                .captures(kind)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
        });
        Self {
            headword: headword.to_string(),
            definition: raw.def,
            part_of_speech,
        }
    }

    /// 所属的词。
    pub fn headword(&self) -> &str {
        &self.headword
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// 词性标记（`[動]` -> `動`）；没有 type 字段时为 `None`。
    pub fn part_of_speech(&self) -> Option<&str> {
        self.part_of_speech.as_deref()
    }

    /// 参见的目标词。
    ///
    /// 上游有时写成 `參見「瓏玲」、「瓏瓏」等條`，这里只取第一个。
    pub fn reference(&self) -> Option<&str> {
        let caps = SEE_REFERENCE
            .captures(&self.definition)
            .or_else(|| SAME_AS_REFERENCE.captures(&self.definition))?;
        let quoted = caps.get(1)?.as_str();
        let first = quoted.split('、').next().unwrap_or(quoted);
        Some(first.trim_matches(['「', '」']))
    }

    pub fn is_cross_reference(&self) -> bool {
        SEE_REFERENCE.is_match(&self.definition) || SAME_AS_REFERENCE.is_match(&self.definition)
    }

    /// 非参见义项的注解：截到第一个句号（含），句号在开头时不截。
    pub fn gloss(&self) -> &str {
        match self.definition.find(FULL_STOP) {
            Some(idx) if idx > 0 => &self.definition[..idx + FULL_STOP.len_utf8()],
            _ => &self.definition,
        }
    }
}
