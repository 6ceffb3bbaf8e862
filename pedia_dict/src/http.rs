//! 线上数据源：教育部《重編國語辭典修訂本》Entry API。

use std::time::Duration;

use pedia_core::{LexiconSource, RawResponse, Result};
use reqwest::blocking::Client;
use serde_json::Value;

use crate::error::SourceError;
use crate::wire;

pub const DEFAULT_ENDPOINT: &str = "https://pedia.cloud.edu.tw/api/EntryApi/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// 每次查词发一次 GET `<endpoint>?strEntry=<word>`；不重试。
pub struct EntryApiSource {
    client: Client,
    endpoint: String,
}

impl EntryApiSource {
    /// 默认 endpoint 与超时。
    pub fn new() -> Result<Self, SourceError> {
        Self::builder().build()
    }

    pub fn builder() -> EntryApiSourceBuilder {
        EntryApiSourceBuilder::default()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn get(&self, word: &str) -> Result<Value, SourceError> {
        tracing::debug!(word, endpoint = %self.endpoint, "GET entry");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("strEntry", word)])
            .send()?;
        if !response.status().is_success() {
            return Err(SourceError::HttpStatus(response.status()));
        }
        Ok(response.json()?)
    }
}

impl LexiconSource for EntryApiSource {
    fn fetch_entries(&self, word: &str) -> Result<RawResponse> {
        let value = self.get(word)?;
        wire::decode_value(word, value)
    }
}

/// `EntryApiSource` 的配置。
#[derive(Debug, Clone)]
pub struct EntryApiSourceBuilder {
    endpoint: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for EntryApiSourceBuilder {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }
}

impl EntryApiSourceBuilder {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// 单次请求的总超时。
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<EntryApiSource, SourceError> {
        let mut client = Client::builder().timeout(self.timeout);
        if let Some(ua) = &self.user_agent {
            client = client.user_agent(ua.as_str());
        }
        Ok(EntryApiSource {
            client: client.build()?,
            endpoint: self.endpoint,
        })
    }
}
