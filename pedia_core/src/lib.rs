//! `pedia_core`：纯逻辑层，不做任何网络或文件 I/O。
//!
//! 分层：
//! - `source`：数据源抽象（`LexiconSource`），由 `pedia_dict` 等 crate 实现
//! - `entry`：读音条目 / 义项模型，过滤注音噪声
//! - `lookup`：查词门面（最佳条目、是否有实际义项、探测）
//! - `annotation`：义项注解，跟随参见链
//! - `segmenter`：最长匹配切分 / 按义项合并切分
//! - `engine`：把以上组装成对外接口
pub mod annotation;
pub mod cache;
pub mod engine;
pub mod entry;
pub mod error;
pub mod lookup;
pub mod segmenter;
pub mod source;

#[cfg(test)]
mod test_utils;

pub use engine::Engine;
pub use error::{LookupError, PediaError, Result};
pub use segmenter::Segmentation;
pub use source::{LexiconSource, RawDefinition, RawHeteronym, RawResponse};
