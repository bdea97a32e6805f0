pub mod http_client;

use futures::future::BoxFuture;
use thiserror::Error;
use url::Url;

pub use http_client::ReqwestHttpClient;

/// Raw outcome of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Any failure below the HTTP layer: DNS, refused connection, TLS, timeout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Transport error: {0}")]
pub struct TransportError(pub String);

pub type HttpClientResult = std::result::Result<HttpResponse, TransportError>;

/// Capability to fetch a URL.
///
/// The request counts as issued as soon as `get` returns. The returned future
/// resolves exactly once and must not borrow from the client, so callers can
/// move it onto another task. Implementations must tolerate concurrent calls.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &Url) -> BoxFuture<'static, HttpClientResult>;
}
