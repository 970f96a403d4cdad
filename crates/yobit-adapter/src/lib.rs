/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public YoBit adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod registry;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Authenticator, Clock, Credentials, MAX_NONCE, NonceCounter, SystemClock};

// Re-export commonly used types from http
pub use http::{
    BoxError,
    ClientConfig,
    DEFAULT_LIMIT,
    Envelope,
    FormParams,
    HttpResponse,
    MAX_LIMIT,
    PrivateClient,
    PublicClient,
    ReqwestTransport,
    Result,
    Transport,
    YobitError,
};

// Re-export the facade
pub use registry::{Account, Market, Pool, Yobit};

// Re-export all types
pub use types::*;
