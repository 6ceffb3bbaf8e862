//! `annotation`：为义项生成可读注解。
//!
//! - 参见义项（`見「X」條` / `通「X」`）取 X 的第一条注解，结果记入 `AnnotationCache`
//! - 其它义项截到第一个句号
//! - 参见链按当前路径查环，成环时返回 `ReferenceCycle`

use crate::cache::AnnotationCache;
use crate::entry::{Entry, Meaning};
use crate::error::{PediaError, Result};
use crate::lookup::Lexicon;
use crate::source::LexiconSource;

pub struct AnnotationResolver<'a, S> {
    lexicon: &'a Lexicon<S>,
    cache: AnnotationCache,
}

impl<'a, S> AnnotationResolver<'a, S>
where
    S: LexiconSource,
{
    pub fn new(lexicon: &'a Lexicon<S>, cache: AnnotationCache) -> Self {
        Self { lexicon, cache }
    }

    pub fn cache(&self) -> &AnnotationCache {
        &self.cache
    }

    pub fn annotation(&self, meaning: &Meaning) -> Result<String> {
        let mut path = vec![meaning.headword().to_string()];
        self.resolve(meaning, &mut path)
    }

    /// 条目的全部注解；没有义项的条目视为错误。
    pub fn annotations(&self, entry: &Entry) -> Result<Vec<String>> {
        if entry.meanings().is_empty() {
            return Err(PediaError::Annotation {
                word: entry.text().to_string(),
            });
        }
        entry.meanings().iter().map(|m| self.annotation(m)).collect()
    }

    /// 最佳条目的第一条注解。
    pub fn first_annotation(&self, word: &str) -> Result<String> {
        let mut path = vec![word.to_string()];
        self.first_of(word, &mut path)
    }

    /// 所有读音条目的注解，按条目顺序拼接。
    pub fn all_annotations(&self, word: &str) -> Result<Vec<String>> {
        let mut out = Vec::new();
        for entry in self.lexicon.all_entries(word)? {
            out.extend(self.annotations(&entry)?);
        }
        Ok(out)
    }

    fn first_of(&self, word: &str, path: &mut Vec<String>) -> Result<String> {
        let entry = self.lexicon.best_entry(word)?;
        let first = entry.meanings().first().ok_or_else(|| PediaError::Annotation {
            word: word.to_string(),
        })?;
        self.resolve(first, path)
    }

    fn resolve(&self, meaning: &Meaning, path: &mut Vec<String>) -> Result<String> {
        let Some(target) = meaning.reference() else {
            let gloss = meaning.gloss();
            if gloss.is_empty() {
                return Err(PediaError::Annotation {
                    word: meaning.headword().to_string(),
                });
            }
            return Ok(gloss.to_string());
        };

        if let Some(hit) = self.cache.get(target) {
            return Ok(hit);
        }
        if path.iter().any(|w| w == target) {
            let mut cycle = path.clone();
            cycle.push(target.to_string());
            tracing::warn!(path = ?cycle, "reference cycle");
            return Err(PediaError::ReferenceCycle { path: cycle });
        }

        tracing::debug!(from = meaning.headword(), to = target, "follow reference");
        path.push(target.to_string());
        let annotation = self.first_of(target, path)?;
        path.pop();
        self.cache.insert(target, annotation.clone());
        Ok(annotation)
    }
}
