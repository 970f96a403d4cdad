/*
[INPUT]:  HTTP configuration (base URL, API paths, timeouts) and a transport
[OUTPUT]: Configured public client ready for API calls, shared response decoding
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::http::envelope::Envelope;
use crate::http::transport::{HttpResponse, ReqwestTransport, Transport};
use crate::http::{Result, YobitError};

/// Base URL for the YoBit API
const BASE_URL: &str = "https://yobit.net";
const PUBLIC_PATH: &str = "/api/3/";
const DEFI_PATH: &str = "/defi/api/1/";
const PRIVATE_PATH: &str = "/tapi/";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Prefix for public market-data endpoints
    pub public_path: String,
    /// Prefix for public liquidity-pool endpoints
    pub defi_path: String,
    /// Endpoint receiving every signed private request
    pub private_path: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            public_path: PUBLIC_PATH.to_string(),
            defi_path: DEFI_PATH.to_string(),
            private_path: PRIVATE_PATH.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Same configuration against another host (mock servers, mirrors)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Unauthenticated client for market-data endpoints
///
/// Holds no mutable state; clones share the underlying transport.
#[derive(Debug, Clone)]
pub struct PublicClient {
    transport: Arc<dyn Transport>,
    base_url: Url,
    public_path: String,
    defi_path: String,
}

impl PublicClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new(&config)?);
        Self::with_transport(config, transport)
    }

    /// Create a new client over an injected transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        Ok(Self {
            transport,
            base_url: Url::parse(&config.base_url)?,
            public_path: config.public_path,
            defi_path: config.defi_path,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn public_path(&self) -> &str {
        &self.public_path
    }

    pub(crate) fn defi_path(&self) -> &str {
        &self.defi_path
    }

    pub(crate) fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Build full URL for a path produced by the request builder
    pub(crate) fn url(&self, path_and_query: &str) -> Result<Url> {
        Ok(self.base_url.join(path_and_query)?)
    }

    /// GET a built path and decode the JSON body
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let url = self.url(path_and_query)?;
        debug!(path = path_and_query, "GET public endpoint");
        let response = self.transport.get(url).await?;
        decode_public(response)
    }
}

/// Parse a body as JSON, failing with a protocol error that keeps the parse detail
pub(crate) fn parse_json(response: &HttpResponse) -> Result<Value> {
    serde_json::from_str(&response.body).map_err(|e| {
        YobitError::protocol(
            response.status,
            format!("exchange did not respond with JSON: {e}"),
        )
    })
}

pub(crate) fn decode_value<T: DeserializeOwned>(status: u16, value: Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| YobitError::protocol(status, format!("unexpected payload shape: {e}")))
}

/// Public endpoints answer with the bare payload, or with a failure envelope
fn decode_public<T: DeserializeOwned>(response: HttpResponse) -> Result<T> {
    let value = parse_json(&response)?;
    if let Some(message) = Envelope::failure_message(&value) {
        return Err(YobitError::Exchange { message });
    }
    if !response.is_success() {
        return Err(YobitError::protocol(
            response.status,
            "unexpected HTTP status for a JSON body",
        ));
    }
    decode_value(response.status, value)
}
