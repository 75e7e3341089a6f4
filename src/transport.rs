use futures::future::BoxFuture;
use futures::FutureExt;
use url::Url;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Async transport collaborator: one GET against a parsed URL, yielding the
/// raw response body. Implementations decide pooling, timeouts and TLS;
/// [`RequestClient`](crate::RequestClient) imposes none of its own.
pub trait HttpTransport: Send + Sync {
    fn get(&self, url: &Url) -> BoxFuture<'_, std::result::Result<Vec<u8>, BoxError>>;
}

/// Production transport over an async `reqwest::Client` with default
/// configuration.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Wrap a pre-configured `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &Url) -> BoxFuture<'_, std::result::Result<Vec<u8>, BoxError>> {
        // Non-2xx statuses are not remapped here: whatever body the server
        // returns is handed to the decoder as-is.
        let request = self.client.get(url.clone());
        async move {
            let response = request.send().await?;
            let body = response.bytes().await?;
            Ok(body.to_vec())
        }
        .boxed()
    }
}
