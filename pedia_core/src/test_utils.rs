use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{LookupError, PediaError, Result};
use crate::source::{LexiconSource, RawDefinition, RawHeteronym, RawResponse};

/// 内存词典：未登记的词返回空 heteronyms。
#[derive(Default)]
pub struct MemorySource {
    words: HashMap<String, RawResponse>,
    broken: HashMap<String, LookupError>,
    offline: Vec<String>,
    calls: AtomicUsize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个读音条目，释义按顺序给出；同一个词调用多次即多个读音。
    pub fn word(self, text: &str, defs: &[&str]) -> Self {
        let defs: Vec<(&str, Option<&str>)> = defs.iter().map(|d| (*d, None)).collect();
        self.typed(text, &defs)
    }

    pub fn typed(mut self, text: &str, defs: &[(&str, Option<&str>)]) -> Self {
        let definitions = defs
            .iter()
            .map(|(d, k)| RawDefinition {
                def: d.to_string(),
                kind: k.map(str::to_string),
            })
            .collect();
        self.words
            .entry(text.to_string())
            .or_default()
            .heteronyms
            .push(RawHeteronym {
                bopomofo: String::new(),
                pinyin: String::new(),
                definitions,
            });
        self
    }

    pub fn broken(mut self, text: &str, err: LookupError) -> Self {
        self.broken.insert(text.to_string(), err);
        self
    }

    /// 查这个词时数据源本身失败（模拟网络错误）。
    pub fn offline(mut self, text: &str) -> Self {
        self.offline.push(text.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LexiconSource for MemorySource {
    fn fetch_entries(&self, word: &str) -> Result<RawResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline.iter().any(|w| w == word) {
            return Err(PediaError::from_source("connection reset"));
        }
        if let Some(err) = self.broken.get(word) {
            return Err(err.clone().into());
        }
        Ok(self.words.get(word).cloned().unwrap_or_default())
    }
}

/// 成语测试用的小词典。
pub fn idiom_source() -> MemorySource {
    MemorySource::new()
        .word("一", &["數目字，大寫作「壹」。"])
        .word("鳴", &["鳥獸或昆蟲叫。"])
        .word("驚", &["馬受到刺激而行動失常。"])
        .word("人", &["具有高度智慧的靈長類動物。"])
        .word("驚人", &["使人驚訝。"])
        .word("毛", &["動植物表皮上所生的絲狀物。"])
        .word("不", &["表示否定。"])
        .word("拔", &["抽出、拉出。"])
        .word("一毛", &["一根毛髮。比喻極微小的事物。"])
        .word("不拔", &["堅定不可動搖。"])
        .word("胸", &["身體前面頸下腹上的部分。"])
        .word("有", &["存在。"])
        .word("成", &["完成、實現。"])
        .word("竹", &["植物名。"])
        .word("有成", &["有成就。"])
        .word("成竹", &["比喻事前已有完整的計畫。"])
        .word("打", &["擊、敲。"])
        .word("退", &["向後移動。"])
        .word("堂", &["正房。"])
        .word("鼓", &["打擊樂器。"])
        .word("退堂", &["官吏退出公堂。"])
        .word("退堂鼓", &["比喻中途退縮。"])
        .word("囫", &["見「囫圇」條。"])
        .word("圇", &["見「囫圇」條。"])
        .word("囫圇", &["完整的、整個的。"])
        .word("吞", &["不嚼而整個嚥下。"])
        .word("棗", &["植物名。"])
        .word("八", &["數目字。"])
        .word("面", &["臉。"])
        .word("玲", &["參見「玲瓏」條。"])
        .word("瓏", &["參見「瓏玲」、「瓏瓏」等條。"])
        .word("玲瓏", &["精巧細緻。形容人靈巧敏捷。"])
        .word("戰", &["打仗。"])
        .word("兢", &["參見「兢兢」條。"])
        .word("兢兢", &["小心謹慎的樣子。"])
}
