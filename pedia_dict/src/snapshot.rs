use std::{collections::HashMap, fs, path::Path};

use pedia_core::{LexiconSource, RawResponse, Result};
use serde_json::Value;

use crate::error::SourceError;
use crate::wire;

/// 离线快照：`词 -> Entry API 响应体` 的 JSON 对象。
///
/// - 响应体与线上格式相同（包括 `{"Message": ...}` 与双重编码的字符串）
/// - 快照里没有的词按“没有读音条目”处理
#[derive(Debug, Clone, Default)]
pub struct SnapshotLexicon {
    bodies: HashMap<String, Value>,
}

impl SnapshotLexicon {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let s = fs::read_to_string(path)?;
        Self::from_json_str(&s)
    }

    pub fn from_json_str(s: &str) -> Result<Self, SourceError> {
        let Value::Object(map) = serde_json::from_str::<Value>(s)? else {
            return Err(SourceError::SnapshotShape);
        };
        Ok(Self {
            bodies: map.into_iter().collect(),
        })
    }

    /// 记录（或覆盖）一个词的响应体。
    pub fn insert(&mut self, word: impl Into<String>, body: Value) {
        self.bodies.insert(word.into(), body);
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl LexiconSource for SnapshotLexicon {
    fn fetch_entries(&self, word: &str) -> Result<RawResponse> {
        match self.bodies.get(word) {
            Some(body) => wire::decode_value(word, body.clone()),
            None => {
                tracing::trace!(word, "not in snapshot");
                Ok(RawResponse::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"兢兢": {{"revised_dict": {{"heteronyms": [{{"bopomofo": "ㄐㄧㄥ　ㄐㄧㄥ", "pinyin": "jīng jīng", "definitions": [{{"def": "小心謹慎的樣子。"}}]}}]}}}}}}"#
        )
        .unwrap();
        let snapshot = SnapshotLexicon::from_path(file.path()).unwrap();
        assert_eq!(snapshot.len(), 1);
        let response = snapshot.fetch_entries("兢兢").unwrap();
        assert_eq!(response.heteronyms[0].pinyin, "jīng jīng");
        assert!(snapshot.fetch_entries("兢").unwrap().heteronyms.is_empty());
    }

    #[test]
    fn rejects_non_object_snapshot() {
        assert!(matches!(
            SnapshotLexicon::from_json_str("[1, 2]"),
            Err(SourceError::SnapshotShape)
        ));
        assert!(matches!(
            SnapshotLexicon::from_path("/nonexistent/snapshot.json"),
            Err(SourceError::Io(_))
        ));
    }

    #[test]
    fn inserted_bodies_are_decoded_on_fetch() {
        let mut snapshot = SnapshotLexicon::default();
        snapshot.insert("一鳴", json!({"Message": "查無資料"}));
        let err = snapshot.fetch_entries("一鳴").unwrap_err();
        assert!(matches!(
            err.as_lookup(),
            Some(pedia_core::LookupError::Service { .. })
        ));
    }
}
