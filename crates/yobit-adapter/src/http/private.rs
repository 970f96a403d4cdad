/*
[INPUT]:  Credentials, method name and method-specific form fields
[OUTPUT]: Signed POST requests and unwrapped envelope payloads
[POS]:    HTTP layer - authenticated trade API client core
[UPDATE]: When the signing flow, headers or envelope handling change
*/

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::{Authenticator, Credentials, NONCE_FIELD};
use crate::http::envelope::Envelope;
use crate::http::request::FormParams;
use crate::http::transport::Transport;
use crate::http::{ClientConfig, PublicClient, Result, YobitError};

const METHOD_FIELD: &str = "method";
const KEY_HEADER: &str = "Key";
const SIGN_HEADER: &str = "Sign";

/// Authenticated client for the trade API (`POST /tapi/`)
///
/// Wraps a [`PublicClient`] for transport and market data. Clones share the
/// same [`Authenticator`], and therefore the same nonce counter.
#[derive(Debug, Clone)]
pub struct PrivateClient {
    public: PublicClient,
    authenticator: Arc<Authenticator>,
    private_path: String,
}

impl PrivateClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(ClientConfig::default(), credentials)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        let private_path = config.private_path.clone();
        let public = PublicClient::with_config(config)?;
        Ok(Self::with_authenticator(
            public,
            private_path,
            Arc::new(Authenticator::new(credentials)),
        ))
    }

    /// Create a new client over an injected transport
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        credentials: Credentials,
    ) -> Result<Self> {
        let private_path = config.private_path.clone();
        let public = PublicClient::with_transport(config, transport)?;
        Ok(Self::with_authenticator(
            public,
            private_path,
            Arc::new(Authenticator::new(credentials)),
        ))
    }

    /// Assemble a client from an existing public client and authenticator
    pub fn with_authenticator(
        public: PublicClient,
        private_path: impl Into<String>,
        authenticator: Arc<Authenticator>,
    ) -> Self {
        Self {
            public,
            authenticator,
            private_path: private_path.into(),
        }
    }

    /// Unauthenticated market-data client sharing this client's transport
    pub fn public(&self) -> &PublicClient {
        &self.public
    }

    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    /// Validate, sign and send one private API call
    ///
    /// Missing required fields are rejected before a nonce is consumed. Once
    /// signed, the nonce is spent even if the request fails.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        fields: FormParams,
        required: &[&str],
    ) -> Result<T> {
        if let Some(field) = fields.missing(required) {
            return Err(YobitError::validation(format!(
                "missing required field `{field}` for {method}"
            )));
        }
        let url = self.public.url(&self.private_path)?;

        // Nonce slot directly after the method; the authenticator fills it in
        let mut params = FormParams::new()
            .with(METHOD_FIELD, method)
            .with(NONCE_FIELD, "");
        params.extend(fields.iter());

        let signed = self.authenticator.sign(&mut params).await?;
        debug!(method, nonce = signed.nonce, "POST private endpoint");

        let headers = [
            (KEY_HEADER, self.authenticator.api_key().to_string()),
            (SIGN_HEADER, signed.signature),
        ];
        let response = self
            .public
            .transport()
            .post_form(url, signed.body, &headers)
            .await?;

        match Envelope::from_response(&response)? {
            Envelope::Failure(message) => {
                warn!(method, nonce = signed.nonce, %message, "exchange rejected request");
                Err(YobitError::Exchange { message })
            }
            success => success.into_result(response.status),
        }
    }
}
