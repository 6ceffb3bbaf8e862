//! Entry API 响应体解码。
//!
//! 响应体可能是 JSON 对象，也可能是“内容为 JSON 的字符串”（双重编码），两种都接受：
//!
//! ```text
//! {"revised_dict": {"heteronyms": [{"bopomofo": "ㄐㄧㄥ", "pinyin": "jīng",
//!   "definitions": [{"def": "...", "type": "[動]"}]}]}}
//! {"Message": "查無資料"}
//! ```

use pedia_core::{LookupError, RawDefinition, RawHeteronym, RawResponse, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::error::SourceError;

#[derive(Debug, Deserialize)]
struct WireHeteronym {
    #[serde(default)]
    bopomofo: String,
    #[serde(default)]
    pinyin: String,
    #[serde(default)]
    definitions: Vec<WireDefinition>,
}

#[derive(Debug, Deserialize)]
struct WireDefinition {
    #[serde(default)]
    def: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

impl From<WireHeteronym> for RawHeteronym {
    fn from(h: WireHeteronym) -> Self {
        Self {
            bopomofo: h.bopomofo,
            pinyin: h.pinyin,
            definitions: h
                .definitions
                .into_iter()
                .map(|d| RawDefinition {
                    def: d.def,
                    kind: d.kind,
                })
                .collect(),
        }
    }
}

pub fn decode_body(word: &str, body: &str) -> Result<RawResponse> {
    let value: Value = serde_json::from_str(body).map_err(SourceError::from)?;
    decode_value(word, value)
}

pub fn decode_value(word: &str, value: Value) -> Result<RawResponse> {
    let value = match value {
        Value::String(inner) => serde_json::from_str(&inner).map_err(SourceError::from)?,
        other => other,
    };

    let schema = || LookupError::Schema {
        word: word.to_string(),
    };
    let Value::Object(mut object) = value else {
        return Err(schema().into());
    };

    if let Some(message) = object.remove("Message") {
        let message = match message {
            Value::String(s) => s,
            other => other.to_string(),
        };
        return Err(LookupError::Service {
            word: word.to_string(),
            message,
        }
        .into());
    }

    let heteronyms = object
        .remove("revised_dict")
        .and_then(|mut dict| dict.get_mut("heteronyms").map(Value::take))
        .ok_or_else(schema)?;
    let heteronyms: Vec<WireHeteronym> = serde_json::from_value(heteronyms).map_err(|e| {
        tracing::warn!(word, error = %e, "unexpected heteronyms shape");
        schema()
    })?;

    Ok(RawResponse {
        heteronyms: heteronyms.into_iter().map(RawHeteronym::from).collect(),
    })
}
