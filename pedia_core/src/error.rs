//! 错误类型。
//!
//! 两层：
//! - `LookupError`：词典“查不到”这一类（服务端报错 / 响应结构不对 / 没有读音条目）。
//!   切分器把它当作“这个子串不是合法的词”，不会向上抛。
//! - `PediaError`：对外的统一错误，其它错误原样向上传播。

/// pedia 专用 Result，默认错误类型为 [`PediaError`]。
pub type Result<T, E = PediaError> = std::result::Result<T, E>;

/// 查词失败：词典层面的“没有这个词”。
///
/// 可 `Clone`，因此可以放进 [`LookupCache`](crate::cache::LookupCache)。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// 数据源直接返回了错误信息（而不是数据）
    #[error("{word}: {message}")]
    Service { word: String, message: String },

    /// 响应里缺少期望的数据段
    #[error("{word}: revised_dict not exist")]
    Schema { word: String },

    /// 词被接受，但没有任何读音条目
    #[error("{word}: no data in heteronyms")]
    NotFound { word: String },
}

impl LookupError {
    pub fn word(&self) -> &str {
        match self {
            Self::Service { word, .. } | Self::Schema { word } | Self::NotFound { word } => word,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PediaError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// 某个义项推导不出注解（理论上不可达）
    #[error("no annotation for {word}")]
    Annotation { word: String },

    /// 参见链成环：`path` 为当前解析路径，最后一个元素是重复出现的词
    #[error("reference cycle: {}", .path.join(" -> "))]
    ReferenceCycle { path: Vec<String> },

    /// 数据源自身的失败（网络、文件、解码等），core 不关心具体类型
    #[error("lexicon source failed: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl PediaError {
    pub fn from_source<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Source(err.into())
    }

    /// 是否是“查不到”（切分器据此判断子串是否合法）。
    pub fn as_lookup(&self) -> Option<&LookupError> {
        match self {
            Self::Lookup(e) => Some(e),
            _ => None,
        }
    }
}
