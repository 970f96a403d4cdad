/*
[INPUT]:  Credentials, ordered form parameters
[OUTPUT]: Nonce, form body and hex HMAC-SHA512 signature
[POS]:    Auth layer - request signing for the private trade API
[UPDATE]: When changing signing algorithm or header format
*/

use std::sync::Arc;

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::auth::{Clock, Credentials, NonceCounter};
use crate::http::{FormParams, Result, YobitError};

type HmacSha512 = Hmac<Sha512>;

/// Form field carrying the nonce
pub const NONCE_FIELD: &str = "nonce";

/// Hex-encoded HMAC-SHA512 of `payload` keyed with `secret`
pub fn hmac_sha512_hex(secret: &[u8], payload: &[u8]) -> Result<String> {
    let mut mac = HmacSha512::new_from_slice(secret)
        .map_err(|e| YobitError::Config(format!("invalid HMAC key: {e}")))?;
    mac.update(payload);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Output of a signing pass: everything needed to send one private request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    pub nonce: u64,
    /// Exact form body that was signed and must be transmitted
    pub body: String,
    /// Value for the `Sign` header
    pub signature: String,
}

/// Signs private requests for one credential and owns its nonce counter
#[derive(Debug)]
pub struct Authenticator {
    credentials: Credentials,
    nonce: NonceCounter,
}

impl Authenticator {
    /// Authenticator with a wall-clock nonce counter
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            nonce: NonceCounter::new(),
        }
    }

    /// Authenticator whose nonce counter reads the given clock
    pub fn with_clock(credentials: Credentials, clock: Arc<dyn Clock>) -> Self {
        Self {
            credentials,
            nonce: NonceCounter::with_clock(clock),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn api_key(&self) -> &str {
        self.credentials.key()
    }

    pub fn nonce_counter(&self) -> &NonceCounter {
        &self.nonce
    }

    /// Stamp `params` with the next nonce and sign the encoded form body
    ///
    /// May wait up to one second for the nonce clock to tick.
    pub async fn sign(&self, params: &mut FormParams) -> Result<SignedPayload> {
        let nonce = self.nonce.next().await?;
        params.set(NONCE_FIELD, nonce.to_string());

        let body = params.encode();
        let signature = hmac_sha512_hex(self.credentials.secret(), body.as_bytes())?;

        Ok(SignedPayload {
            nonce,
            body,
            signature,
        })
    }
}
