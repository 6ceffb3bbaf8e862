//! `pedia_dict`：`pedia_core::LexiconSource` 的具体实现。
//!
//! - `EntryApiSource`：线上 Entry API（阻塞 HTTP）
//! - `SnapshotLexicon`：同格式的离线 JSON 快照
mod error;
pub mod http;
pub mod snapshot;
pub mod wire;

pub use error::SourceError;
pub use http::{EntryApiSource, EntryApiSourceBuilder};
pub use snapshot::SnapshotLexicon;
