/*
[INPUT]:  HTTP configuration (API bases, timeouts, user agent)
[OUTPUT]: Configured reqwest client ready for listing/content calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::http::{ArcError, Result};
use crate::types::DatasetVersion;

const DEFAULT_USER_AGENT: &str = concat!("arc-task-viewer/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// GitHub rejects requests without a User-Agent
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// HTTP client for the ARC task repositories
#[derive(Debug, Clone)]
pub struct ArcClient {
    http_client: Client,
    arc1_api_base: Url,
    arc2_api_base: Url,
}

impl ArcClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_api_bases(
            config,
            DatasetVersion::Arc1.default_api_base(),
            DatasetVersion::Arc2.default_api_base(),
        )
    }

    /// Create a client pointing at custom API bases (mirrors, mock servers)
    pub fn with_config_and_api_bases(
        config: ClientConfig,
        arc1_api_base: &str,
        arc2_api_base: &str,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            arc1_api_base: parse_base(arc1_api_base)?,
            arc2_api_base: parse_base(arc2_api_base)?,
        })
    }

    /// API base for a dataset version
    pub fn api_base(&self, version: DatasetVersion) -> &Url {
        match version {
            DatasetVersion::Arc1 => &self.arc1_api_base,
            DatasetVersion::Arc2 => &self.arc2_api_base,
        }
    }

    /// Build `{api_base}/{segment}` for a dataset version
    pub(crate) fn api_url(&self, version: DatasetVersion, segment: &str) -> Result<Url> {
        let base = self.api_base(version);
        Ok(base.join(segment.trim_start_matches('/'))?)
    }

    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http_client.request(method, url)
    }

    /// Send a request and decode a JSON body, mapping non-2xx to `ArcError::Api`
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = String::from_utf8_lossy(&body).trim().to_string();
            return Err(ArcError::api_error(status, message));
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Parse an API base, forcing a trailing slash so `Url::join` appends segments
fn parse_base(base: &str) -> Result<Url> {
    let trimmed = base.trim();
    if trimmed.is_empty() {
        return Err(ArcError::Config("API base must not be empty".to_string()));
    }
    let normalized = format!("{}/", trimmed.trim_end_matches('/'));
    Ok(Url::parse(&normalized)?)
}
