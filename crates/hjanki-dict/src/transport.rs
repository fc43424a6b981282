use async_trait::async_trait;
use hjanki_config::dict::DictConfig;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::{COOKIE, HeaderMap, HeaderValue, USER_AGENT};

use crate::error::DictError;
use crate::key::LookupKey;

/// Source of raw lookup pages
#[async_trait]
pub trait Transport: Send + Sync {
    /// Retrieve the HTML body of the lookup page for `key`
    async fn get(&self, key: &LookupKey) -> Result<String, DictError>;
}

/// Fetches pages from the remote dictionary over HTTP
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    lookup_base: String,
}

impl HttpTransport {
    pub fn new(config: &DictConfig) -> Result<Self, DictError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value("user agent", &config.user_agent)?);
        headers.insert(COOKIE, header_value("cookies", &config.cookie_header())?);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            lookup_base: config.lookup_base(),
        })
    }

    /// Full page URL for a key; the expression is encoded as a single path segment
    pub fn url_for(&self, key: &LookupKey) -> String {
        format!(
            "{}/{}",
            self.lookup_base,
            utf8_percent_encode(key.as_str(), NON_ALPHANUMERIC)
        )
    }
}

fn header_value(what: &str, value: &str) -> Result<HeaderValue, DictError> {
    HeaderValue::from_str(value)
        .map_err(|e| DictError::Config(format!("{what} is not a valid header value: {e}")))
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, key: &LookupKey) -> Result<String, DictError> {
        let url = self.url_for(key);
        tracing::info!("Fetching {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(DictError::Status(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }
}
