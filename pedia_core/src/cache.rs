//! 两个可注入的缓存。
//!
//! 都是“句柄”：`clone()` 得到的是同一份数据，便于在多次调用间复用；
//! 需要隔离时各自 `new()`，或者 `clear()`。不做淘汰。

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::entry::Entry;
use crate::error::LookupError;

/// 参见词 -> 第一条注解。
#[derive(Debug, Clone, Default)]
pub struct AnnotationCache {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl AnnotationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, word: &str) -> Option<String> {
        self.inner.lock().get(word).cloned()
    }

    pub fn insert(&self, word: impl Into<String>, annotation: impl Into<String>) {
        self.inner.lock().insert(word.into(), annotation.into());
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

/// 查词结果缓存，key 为精确子串。
///
/// 只记录词典给出的答案（条目或 `LookupError`），数据源自身的失败不进缓存。
#[derive(Debug, Clone, Default)]
pub struct LookupCache {
    inner: Arc<Mutex<HashMap<String, Result<Vec<Entry>, LookupError>>>>,
}

impl LookupCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, word: &str) -> Option<Result<Vec<Entry>, LookupError>> {
        self.inner.lock().get(word).cloned()
    }

    pub fn insert(&self, word: impl Into<String>, outcome: Result<Vec<Entry>, LookupError>) {
        self.inner.lock().insert(word.into(), outcome);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let cache = AnnotationCache::new();
        let handle = cache.clone();
        handle.insert("玲瓏", "精巧細緻。");
        assert_eq!(cache.get("玲瓏").as_deref(), Some("精巧細緻。"));
        cache.clear();
        assert!(handle.is_empty());
    }

    #[test]
    fn lookup_cache_keeps_misses() {
        let cache = LookupCache::new();
        cache.insert("鳴驚", Err(LookupError::NotFound { word: "鳴驚".into() }));
        assert_eq!(cache.len(), 1);
        assert!(matches!(cache.get("鳴驚"), Some(Err(LookupError::NotFound { .. }))));
        assert!(cache.get("驚人").is_none());
    }
}
