pub use crate::http::RequestClient;
pub use crate::transport::{BoxError, HttpTransport, ReqwestTransport};

pub mod http;
pub mod transport;

use once_cell::sync::Lazy;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The input string could not be parsed into a URL. Returned before any
    /// request is issued.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The transport layer failed after the request was issued (DNS,
    /// connection, TLS, body read).
    #[error("transport failure: {0}")]
    Transport(#[source] BoxError),
    /// A response body was received but did not deserialize into the
    /// requested type.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;

static SHARED: Lazy<RequestClient> = Lazy::new(RequestClient::new);

/// Process-wide client backed by the default reqwest transport. The client
/// holds no per-call state, so a single instance is safe to share across
/// concurrent tasks; constructing a fresh `RequestClient` per call behaves
/// identically.
pub fn shared() -> &'static RequestClient {
    &SHARED
}
