use std::sync::Arc;

use crate::error::Result;

/// 一个读音条目（heteronym）的原始数据。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawHeteronym {
    /// 注音（例如 `ㄇㄚˋ`），只用于过滤义项里的注音噪声
    pub bopomofo: String,
    /// 拼音（例如 `mà`）
    pub pinyin: String,
    /// 释义列表（词典原顺序）
    pub definitions: Vec<RawDefinition>,
}

/// 一条原始释义。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDefinition {
    /// 释义正文
    pub def: String,
    /// 词性字段，例如 `[動]`；可能缺省
    pub kind: Option<String>,
}

/// 数据源对一个词的完整响应。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    pub heteronyms: Vec<RawHeteronym>,
}

/// 词典数据源抽象：core 不关心数据来自网络/文件/内存。
///
/// 约定：
/// - 数据源报错（返回错误信息而非数据）时返回 `LookupError::Service`
/// - 响应缺少数据段时返回 `LookupError::Schema`
/// - 词存在但没有读音条目时，可以返回空的 `heteronyms`，
///   也可以直接返回 `LookupError::NotFound`；`Lexicon` 两种都按“查不到”处理
/// - 网络、解码等自身失败包成 `PediaError::Source`
pub trait LexiconSource: Send + Sync {
    fn fetch_entries(&self, word: &str) -> Result<RawResponse>;
}

impl<T> LexiconSource for &T
where
    T: LexiconSource + ?Sized,
{
    fn fetch_entries(&self, word: &str) -> Result<RawResponse> {
        (**self).fetch_entries(word)
    }
}

impl<T> LexiconSource for Box<T>
where
    T: LexiconSource + ?Sized,
{
    fn fetch_entries(&self, word: &str) -> Result<RawResponse> {
        (**self).fetch_entries(word)
    }
}

impl<T> LexiconSource for Arc<T>
where
    T: LexiconSource + ?Sized,
{
    fn fetch_entries(&self, word: &str) -> Result<RawResponse> {
        (**self).fetch_entries(word)
    }
}
