use std::collections::BTreeMap;

use crate::annotation::AnnotationResolver;
use crate::cache::{AnnotationCache, LookupCache};
use crate::entry::Entry;
use crate::error::Result;
use crate::lookup::Lexicon;
use crate::segmenter::{DEFAULT_MAX_WINDOW, GreedySegmenter, MeaningSegmenter, Segmentation};
use crate::source::LexiconSource;

/// 引擎：持有数据源与两个缓存，对外提供查词、注解与切分。
///
/// ```ignore
/// let engine = Engine::new(source).max_window(3);
/// let parts = engine.segment("一鳴驚人")?;
/// ```
pub struct Engine<S> {
    lexicon: Lexicon<S>,
    annotations: AnnotationCache,
    /// 按义项切分时的最大合并窗口
    max_window: usize,
}

impl<S> Engine<S>
where
    S: LexiconSource,
{
    /// 默认开启查词缓存，最大窗口为 3。
    pub fn new(source: S) -> Self {
        Self {
            lexicon: Lexicon::new(source).with_lookup_cache(LookupCache::new()),
            annotations: AnnotationCache::new(),
            max_window: DEFAULT_MAX_WINDOW,
        }
    }

    pub fn max_window(mut self, n: usize) -> Self {
        self.max_window = n;
        self
    }

    /// 关闭后每个子串探测都会回源。
    pub fn memoize_lookups(mut self, enabled: bool) -> Self {
        self.lexicon = if enabled {
            let cache = self.lexicon.lookup_cache().cloned().unwrap_or_default();
            self.lexicon.with_lookup_cache(cache)
        } else {
            self.lexicon.without_lookup_cache()
        };
        self
    }

    /// 注入（可共享的）查词缓存，同时开启缓存。
    pub fn lookup_cache(mut self, cache: LookupCache) -> Self {
        self.lexicon = self.lexicon.with_lookup_cache(cache);
        self
    }

    pub fn annotation_cache(mut self, cache: AnnotationCache) -> Self {
        self.annotations = cache;
        self
    }

    pub fn lexicon(&self) -> &Lexicon<S> {
        &self.lexicon
    }

    fn resolver(&self) -> AnnotationResolver<'_, S> {
        AnnotationResolver::new(&self.lexicon, self.annotations.clone())
    }

    /// 清空两个缓存（例如两次互不相关的运行之间）。
    pub fn reset_caches(&self) {
        self.annotations.clear();
        if let Some(cache) = self.lexicon.lookup_cache() {
            cache.clear();
        }
    }

    pub fn all_entries(&self, word: &str) -> Result<Vec<Entry>> {
        self.lexicon.all_entries(word)
    }

    pub fn best_entry(&self, word: &str) -> Result<Entry> {
        self.lexicon.best_entry(word)
    }

    pub fn has_meaning(&self, word: &str) -> Result<bool> {
        self.lexicon.has_meaning(word)
    }

    pub fn first_annotation(&self, word: &str) -> Result<String> {
        self.resolver().first_annotation(word)
    }

    pub fn all_annotations(&self, word: &str) -> Result<Vec<String>> {
        self.resolver().all_annotations(word)
    }

    /// 各读音条目中词性标记的出现次数。
    pub fn parts_of_speech(&self, word: &str) -> Result<BTreeMap<String, usize>> {
        let mut counts = BTreeMap::new();
        for entry in self.lexicon.all_entries(word)? {
            for pos in entry.meanings().iter().filter_map(|m| m.part_of_speech()) {
                *counts.entry(pos.to_string()).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }

    /// 逐字列出全部注解（成语拆字释义）。
    pub fn character_annotations(&self, idiom: &str) -> Result<Vec<Vec<String>>> {
        let resolver = self.resolver();
        idiom
            .chars()
            .map(|c| resolver.all_annotations(c.encode_utf8(&mut [0; 4])))
            .collect()
    }

    /// 最长匹配切分。
    pub fn segment(&self, word: &str) -> Result<Vec<String>> {
        GreedySegmenter::new(&self.lexicon).split(word)
    }

    /// 按义项切分；失败时返回 `Segmentation::Unsegmented`。
    pub fn segment_by_meaning(&self, word: &str) -> Result<Segmentation> {
        MeaningSegmenter::new(&self.lexicon)
            .max_window(self.max_window)
            .split(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MemorySource, idiom_source};

    #[test]
    fn segmenting_twice_hits_the_lookup_cache() {
        let engine = Engine::new(idiom_source());
        let first = engine.segment("一鳴驚人").unwrap();
        let calls = engine.lexicon().source().calls();
        assert_eq!(engine.segment("一鳴驚人").unwrap(), first);
        assert_eq!(engine.lexicon().source().calls(), calls);

        engine.reset_caches();
        engine.segment("一鳴驚人").unwrap();
        assert_eq!(engine.lexicon().source().calls(), calls * 2);
    }

    #[test]
    fn memoization_does_not_change_results() {
        let cached = Engine::new(idiom_source());
        let plain = Engine::new(idiom_source()).memoize_lookups(false);
        assert!(plain.lexicon().lookup_cache().is_none());
        for word in ["一鳴驚人", "一毛不拔", "胸有成竹", "打退堂鼓", "囫圇吞棗", "八面玲瓏", "戰戰兢兢"] {
            assert_eq!(cached.segment(word).unwrap(), plain.segment(word).unwrap());
            assert_eq!(
                cached.segment_by_meaning(word).unwrap(),
                plain.segment_by_meaning(word).unwrap()
            );
        }
        assert!(plain.lexicon().source().calls() > cached.lexicon().source().calls());
    }

    #[test]
    fn shared_caches_are_injectable() {
        let lookups = LookupCache::new();
        let annotations = AnnotationCache::new();
        let a = Engine::new(idiom_source())
            .lookup_cache(lookups.clone())
            .annotation_cache(annotations.clone());
        assert_eq!(a.first_annotation("玲").unwrap(), "精巧細緻。");
        assert!(!lookups.is_empty());
        assert_eq!(annotations.get("玲瓏").as_deref(), Some("精巧細緻。"));

        let b = Engine::new(MemorySource::new()).lookup_cache(lookups);
        assert_eq!(b.first_annotation("玲瓏").unwrap(), "精巧細緻。");
        assert_eq!(b.lexicon().source().calls(), 0);
    }

    #[test]
    fn parts_of_speech_are_counted_over_heteronyms() {
        let source = MemorySource::new()
            .typed("行", &[("走。", Some("[動]")), ("做。", Some("[動]")), ("可以。", Some("[形]"))])
            .typed("行", &[("行列。", Some("[名]")), ("輩分。", None)]);
        let engine = Engine::new(source);
        let counts = engine.parts_of_speech("行").unwrap();
        assert_eq!(counts.get("動"), Some(&2));
        assert_eq!(counts.get("形"), Some(&1));
        assert_eq!(counts.get("名"), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn character_annotations_follow_references() {
        let engine = Engine::new(idiom_source());
        let per_char = engine.character_annotations("八面玲").unwrap();
        assert_eq!(per_char.len(), 3);
        assert_eq!(per_char[0], ["數目字。"]);
        assert_eq!(per_char[2], ["精巧細緻。"]);
        // 瓏 的参见目标 瓏玲 不在词典里
        let err = engine.character_annotations("瓏").unwrap_err();
        assert!(err.as_lookup().is_some());
    }

    #[test]
    fn unsegmentable_word_is_reported() {
        let engine = Engine::new(idiom_source());
        let seg = engine.segment_by_meaning("兢").unwrap();
        assert!(!seg.is_segmented());
        assert_eq!(engine.max_window(2).segment_by_meaning("戰戰兢兢").unwrap().parts().map(<[String]>::len), Some(3));
    }
}
