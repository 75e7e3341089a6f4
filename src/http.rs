use crate::{
    transport::{HttpTransport, ReqwestTransport},
    FetchError, Result,
};

use serde::de::DeserializeOwned;
use url::Url;

/// Stateless HTTP GET + JSON decode helper.
///
/// Each [`fetch`](RequestClient::fetch) call parses the URL, issues one GET
/// through the transport and decodes the body into the caller's type. The
/// client keeps no state between calls, so one instance can serve any number
/// of concurrent callers; see [`crate::shared`].
pub struct RequestClient<C = ReqwestTransport> {
    transport: C,
}

impl RequestClient<ReqwestTransport> {
    pub fn new() -> Self {
        Self {
            transport: ReqwestTransport::new(),
        }
    }
}

impl Default for RequestClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HttpTransport> RequestClient<C> {
    /// Build a client over a custom transport implementation.
    pub fn with_transport(transport: C) -> Self {
        Self { transport }
    }

    /// Fetch `url_str` and decode the JSON response body into `T`.
    ///
    /// Resolves exactly once, to exactly one of:
    /// - `Err(FetchError::InvalidUrl)` if the string does not parse; no
    ///   request is issued and the error is produced before any await point.
    /// - `Err(FetchError::Transport)` if the network layer fails after the
    ///   request was issued. No retry is attempted.
    /// - `Err(FetchError::Decode)` if a body arrived but does not match `T`
    ///   (malformed JSON, missing field, wrong field type, empty body).
    /// - `Ok(value)` on a successful decode.
    pub async fn fetch<T>(&self, url_str: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = Url::parse(url_str)?;
        let body = self
            .transport
            .get(&url)
            .await
            .map_err(FetchError::Transport)?;
        match serde_json::from_slice(&body) {
            Ok(value) => Ok(value),
            Err(err) => {
                log::warn!("failed to decode response from {}: {}", url, err);
                Err(FetchError::Decode(err))
            }
        }
    }

    /// Callback-shaped variant of [`fetch`](RequestClient::fetch): invokes
    /// `on_success` with the decoded value or `on_error` with the failure,
    /// whichever applies. Exactly one of the two handlers runs, exactly once.
    pub async fn fetch_with<T, S, E>(&self, url_str: &str, on_success: S, on_error: E)
    where
        T: DeserializeOwned,
        S: FnOnce(T),
        E: FnOnce(FetchError),
    {
        match self.fetch(url_str).await {
            Ok(value) => on_success(value),
            Err(err) => on_error(err),
        }
    }
}
