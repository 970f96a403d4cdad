/*
[INPUT]:  Fully built URLs, form bodies and auth headers
[OUTPUT]: Raw HTTP status + body pairs
[POS]:    HTTP layer - transport boundary (reqwest by default, injectable for tests)
[UPDATE]: When changing connection options or adding request methods
*/

use std::fmt;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};

use crate::http::{ClientConfig, Result, YobitError};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Raw response handed back by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP capability consumed by the clients
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// GET with the query string already embedded in `url`
    async fn get(&self, url: Url) -> Result<HttpResponse>;

    /// POST `body` verbatim as a form-encoded payload with extra headers
    async fn post_form(
        &self,
        url: Url,
        body: String,
        headers: &[(&'static str, String)],
    ) -> Result<HttpResponse>;
}

/// Default transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| YobitError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http_client })
    }

    pub fn from_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: Url) -> Result<HttpResponse> {
        let response = self.http_client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }

    async fn post_form(
        &self,
        url: Url,
        body: String,
        headers: &[(&'static str, String)],
    ) -> Result<HttpResponse> {
        let mut builder = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body);
        for (name, value) in headers {
            builder = builder.header(*name, value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
