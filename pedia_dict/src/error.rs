use pedia_core::PediaError;

/// 数据源自身的失败（与“查不到”无关）。
///
/// 对 core 暴露时包成 [`PediaError::Source`]。
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// 网络请求失败
    #[error("network request failed")]
    Request(#[from] reqwest::Error),

    /// 非 2xx 状态码
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// 响应体或快照不是合法 JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// 快照文件顶层必须是 `词 -> 响应体` 的对象
    #[error("snapshot must be a JSON object keyed by word")]
    SnapshotShape,
}

impl From<SourceError> for PediaError {
    fn from(err: SourceError) -> Self {
        PediaError::from_source(err)
    }
}
