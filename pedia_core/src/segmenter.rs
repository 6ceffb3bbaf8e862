//! `segmenter`：把成语/多字词切成词典认识的子词。
//!
//! 两种切分器：
//! - `GreedySegmenter`：最长匹配优先、不重叠的窗口扫描，没覆盖到的位置退化为单字
//! - `MeaningSegmenter`：先按“单字是否有实际义项”分类，再逐步把没着落的字并进更长的词
//!
//! 位置一律按字符（`char`）计，`Span` 为半开区间 `[start, end)`。
//! 子串“查不到”只意味着它不是合法子词；数据源自身的失败照常返回。

use crate::error::Result;
use crate::lookup::{Lexicon, Probe};
use crate::source::LexiconSource;

/// 默认的最大合并窗口。
pub const DEFAULT_MAX_WINDOW: usize = 3;

/// 字符区间 `[start, end)`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// 候选区间是否与已接受区间冲突：起点落在 `[a.start, a.end)` 或终点落在 `(a.start, a.end)`。
    pub fn overlaps(&self, accepted: &Span) -> bool {
        (accepted.start <= self.start && self.start < accepted.end)
            || (accepted.start < self.end && self.end < accepted.end)
    }

    /// 两端都落在 `outer` 的闭区间内。
    pub fn within(&self, outer: &Span) -> bool {
        (outer.start..=outer.end).contains(&self.start) && (outer.start..=outer.end).contains(&self.end)
    }

    fn text(&self, chars: &[char]) -> String {
        chars[self.start..self.end].iter().collect()
    }
}

/// 切分结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segmentation {
    /// 各段按顺序拼接恰好还原原词
    Segmented(Vec<String>),
    /// 找不到完整切分：原词不切；`attempt` 是未通过校验的切分，仅供诊断
    Unsegmented { word: String, attempt: Vec<String> },
}

impl Segmentation {
    pub fn is_segmented(&self) -> bool {
        matches!(self, Self::Segmented(_))
    }

    pub fn parts(&self) -> Option<&[String]> {
        match self {
            Self::Segmented(parts) => Some(parts),
            Self::Unsegmented { .. } => None,
        }
    }

    pub fn into_parts(self) -> Option<Vec<String>> {
        match self {
            Self::Segmented(parts) => Some(parts),
            Self::Unsegmented { .. } => None,
        }
    }
}

/// Segmenter：把一个词切成子词序列。
pub trait Segmenter {
    fn segment(&self, word: &str) -> Result<Segmentation>;
}

/// 最长匹配切分器。
pub struct GreedySegmenter<'a, S> {
    lexicon: &'a Lexicon<S>,
}

impl<'a, S> GreedySegmenter<'a, S>
where
    S: LexiconSource,
{
    pub fn new(lexicon: &'a Lexicon<S>) -> Self {
        Self { lexicon }
    }

    /// 词典认识的子词区间，按起点排序。
    ///
    /// 窗口从 `len-1` 递减到 2（整词与单字都不在这里查）；同一窗口内从左到右，
    /// 与已接受区间冲突的候选直接跳过，所以长词一旦接受就不会被短词推翻。
    pub fn matched_spans(&self, chars: &[char]) -> Result<Vec<Span>> {
        let n = chars.len();
        let mut accepted: Vec<Span> = Vec::new();
        for window in (2..n).rev() {
            for start in 0..=(n - window) {
                let candidate = Span::new(start, start + window);
                if accepted.iter().any(|a| candidate.overlaps(a)) {
                    continue;
                }
                if self.lexicon.probe(&candidate.text(chars))?.is_found() {
                    tracing::debug!(start, end = candidate.end, "greedy accept");
                    accepted.push(candidate);
                }
            }
        }
        accepted.sort_by_key(|s| s.start);
        Ok(accepted)
    }

    pub fn split(&self, word: &str) -> Result<Vec<String>> {
        let chars: Vec<char> = word.chars().collect();
        let matched = self.matched_spans(&chars)?;

        let mut out = Vec::with_capacity(chars.len());
        let mut cursor = 0;
        for span in matched {
            // 空隙按单字补齐
            while cursor < span.start {
                out.push(chars[cursor].to_string());
                cursor += 1;
            }
            out.push(span.text(&chars));
            cursor = span.end;
        }
        while cursor < chars.len() {
            out.push(chars[cursor].to_string());
            cursor += 1;
        }
        Ok(out)
    }
}

impl<'a, S> Segmenter for GreedySegmenter<'a, S>
where
    S: LexiconSource,
{
    fn segment(&self, word: &str) -> Result<Segmentation> {
        Ok(Segmentation::Segmented(self.split(word)?))
    }
}

/// 按义项合并的切分器。
pub struct MeaningSegmenter<'a, S> {
    lexicon: &'a Lexicon<S>,
    max_window: usize,
}

impl<'a, S> MeaningSegmenter<'a, S>
where
    S: LexiconSource,
{
    pub fn new(lexicon: &'a Lexicon<S>) -> Self {
        Self {
            lexicon,
            max_window: DEFAULT_MAX_WINDOW,
        }
    }

    pub fn max_window(mut self, n: usize) -> Self {
        self.max_window = n;
        self
    }

    fn probe(&self, chars: &[char], span: Span) -> Result<Probe> {
        self.lexicon.probe(&span.text(chars))
    }

    fn meaningful(&self, chars: &[char], span: Span) -> Result<bool> {
        Ok(self.probe(chars, span)?.has_meaning())
    }

    /// 接受的区间（按起点排序），不保证构成完整切分。
    pub fn accepted_spans(&self, chars: &[char]) -> Result<Vec<Span>> {
        let n = chars.len();
        let mut parts: Vec<Span> = Vec::new();
        let mut pending: Vec<Span> = Vec::new();

        for i in 0..n {
            let span = Span::new(i, i + 1);
            if self.meaningful(chars, span)? {
                parts.push(span);
            } else {
                pending.push(span);
            }
        }

        for window in 2..=self.max_window {
            let reach = window - 1;
            // 本轮解决的区间；轮末才从 pending 移除
            let mut done: Vec<Span> = Vec::new();

            for &span in &pending {
                if done.contains(&span) {
                    continue;
                }
                if parts.iter().any(|p| span.within(p)) {
                    continue;
                }

                // 与紧邻的下一个未解决区间连接
                if let Some(&next) = pending.iter().find(|o| o.start == span.end) {
                    let merged = Span::new(span.start, next.end);
                    if self.meaningful(chars, merged)? {
                        tracing::debug!(start = merged.start, end = merged.end, window, "connect");
                        parts.push(merged);
                        done.push(span);
                        done.push(next);
                        continue;
                    }
                }

                // 向前扩展；词典认识这个子串时不再尝试向后
                if span.start >= reach {
                    let extended = Span::new(span.start - reach, span.end);
                    if let Probe::Found(entry) = self.probe(chars, extended)? {
                        if entry.has_meaning() {
                            tracing::debug!(start = extended.start, end = extended.end, window, "extend backward");
                            parts.retain(|p| !p.within(&extended));
                            parts.push(extended);
                            done.push(span);
                        }
                        continue;
                    }
                }

                // 向后扩展
                if span.end + reach <= n {
                    let extended = Span::new(span.start, span.end + reach);
                    if self.meaningful(chars, extended)? {
                        tracing::debug!(start = extended.start, end = extended.end, window, "extend forward");
                        parts.retain(|p| !p.within(&extended));
                        parts.push(extended);
                        done.push(span);
                    }
                }
            }

            pending.retain(|s| !done.contains(s));
        }

        parts.sort_by_key(|s| s.start);
        Ok(parts)
    }

    pub fn split(&self, word: &str) -> Result<Segmentation> {
        let chars: Vec<char> = word.chars().collect();
        let parts: Vec<String> = self
            .accepted_spans(&chars)?
            .iter()
            .map(|s| s.text(&chars))
            .collect();

        if parts.concat() == word {
            return Ok(Segmentation::Segmented(parts));
        }
        tracing::warn!(word, attempt = ?parts, "no complete segmentation");
        Ok(Segmentation::Unsegmented {
            word: word.to_string(),
            attempt: parts,
        })
    }
}

impl<'a, S> Segmenter for MeaningSegmenter<'a, S>
where
    S: LexiconSource,
{
    fn segment(&self, word: &str) -> Result<Segmentation> {
        self.split(word)
    }
}
