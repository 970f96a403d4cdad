/*
[INPUT]:  API credentials and wall-clock time
[OUTPUT]: Nonces, signed form bodies and auth errors
[POS]:    Auth layer - handles YoBit private API authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod credentials;
pub mod nonce;
pub mod signer;

pub use credentials::Credentials;
pub use nonce::{Clock, MAX_NONCE, NonceCounter, SystemClock};
pub use signer::{Authenticator, NONCE_FIELD, SignedPayload, hmac_sha512_hex};
