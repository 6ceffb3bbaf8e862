//! `lookup`：查词门面（Lexicon）。
//!
//! 所有对数据源的访问都经过这里：
//! - `all_entries`：一个词的全部读音条目，没有条目视为 `NotFound`
//! - `best_entry`：义项最多的条目（并列时取最先返回的）
//! - `has_meaning`：最佳条目里是否有非参见的义项
//! - `probe`：切分器用的探测接口，“查不到”作为普通结果返回而不是错误

use crate::cache::LookupCache;
use crate::entry::Entry;
use crate::error::{LookupError, PediaError, Result};
use crate::source::LexiconSource;

/// 探测结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// 词典认识这个词（最佳条目）
    Found(Entry),
    /// 词典不认识这个词
    Missing(LookupError),
}

impl Probe {
    pub fn entry(&self) -> Option<&Entry> {
        match self {
            Self::Found(entry) => Some(entry),
            Self::Missing(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// 认识且有实际义项。
    pub fn has_meaning(&self) -> bool {
        self.entry().is_some_and(Entry::has_meaning)
    }
}

pub struct Lexicon<S> {
    source: S,
    /// 按精确子串记忆查词结果；None 表示每次都回源
    lookups: Option<LookupCache>,
}

impl<S> Lexicon<S>
where
    S: LexiconSource,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            lookups: None,
        }
    }

    /// 注入查词缓存（clone 的句柄共享同一份数据）。
    pub fn with_lookup_cache(mut self, cache: LookupCache) -> Self {
        self.lookups = Some(cache);
        self
    }

    pub fn without_lookup_cache(mut self) -> Self {
        self.lookups = None;
        self
    }

    pub fn lookup_cache(&self) -> Option<&LookupCache> {
        self.lookups.as_ref()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn all_entries(&self, word: &str) -> Result<Vec<Entry>> {
        if let Some(cache) = &self.lookups {
            if let Some(outcome) = cache.get(word) {
                tracing::trace!(word, "lookup cache hit");
                return outcome.map_err(PediaError::from);
            }
        }

        let outcome = self.fetch(word);
        if let Some(cache) = &self.lookups {
            match &outcome {
                Ok(entries) => cache.insert(word, Ok(entries.clone())),
                Err(PediaError::Lookup(e)) => cache.insert(word, Err(e.clone())),
                Err(_) => {}
            }
        }
        outcome
    }

    fn fetch(&self, word: &str) -> Result<Vec<Entry>> {
        tracing::debug!(word, "fetch entries");
        let response = self.source.fetch_entries(word)?;
        if response.heteronyms.is_empty() {
            return Err(LookupError::NotFound {
                word: word.to_string(),
            }
            .into());
        }
        Ok(response
            .heteronyms
            .into_iter()
            .map(|h| Entry::new(word, h))
            .collect())
    }

    pub fn best_entry(&self, word: &str) -> Result<Entry> {
        let entries = self.all_entries(word)?;
        let mut best: Option<Entry> = None;
        for entry in entries {
            // 严格大于：并列时保留先出现的
            if best
                .as_ref()
                .is_none_or(|b| entry.meanings().len() > b.meanings().len())
            {
                best = Some(entry);
            }
        }
        best.ok_or_else(|| {
            LookupError::NotFound {
                word: word.to_string(),
            }
            .into()
        })
    }

    pub fn has_meaning(&self, word: &str) -> Result<bool> {
        Ok(self.best_entry(word)?.has_meaning())
    }

    /// “查不到”折叠成 `Probe::Missing`，其它错误照常返回。
    pub fn probe(&self, word: &str) -> Result<Probe> {
        match self.best_entry(word) {
            Ok(entry) => Ok(Probe::Found(entry)),
            Err(PediaError::Lookup(e)) => {
                tracing::trace!(word, reason = %e, "probe missed");
                Ok(Probe::Missing(e))
            }
            Err(e) => Err(e),
        }
    }
}
