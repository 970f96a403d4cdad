/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod defi;
pub mod envelope;
pub mod error;
pub mod private;
pub mod public;
pub mod request;
pub mod trade;
pub mod transport;
pub mod user;

pub use envelope::Envelope;
pub use error::{BoxError, Result, YobitError};
pub use request::{FormParams, build_path};
pub use transport::{HttpResponse, ReqwestTransport, Transport};

pub use client::{ClientConfig, PublicClient};
pub use private::PrivateClient;
pub use public::{DEFAULT_LIMIT, MAX_LIMIT};
