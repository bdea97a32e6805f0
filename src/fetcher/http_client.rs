use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Client;
use url::Url;

use crate::app::Result;
use crate::fetcher::{HttpClient, HttpClientResult, HttpResponse, TransportError};

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "cleanfeed/0.1.0";

/// [`HttpClient`] backed by `reqwest`.
///
/// Non-2xx responses are returned as-is; only failures to obtain a response
/// at all become a [`TransportError`].
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Result<Self> {
        Self::with_settings(Duration::from_secs(DEFAULT_TIMEOUT_SECS), DEFAULT_USER_AGENT)
    }

    pub fn with_settings(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url) -> BoxFuture<'static, HttpClientResult> {
        tracing::debug!("GET {}", url);
        let request = self.client.get(url.clone());

        async move {
            let response = request.send().await.map_err(to_transport_error)?;
            let status = response.status().as_u16();
            let body = response.bytes().await.map_err(to_transport_error)?.to_vec();

            Ok(HttpResponse { status, body })
        }
        .boxed()
    }
}

fn to_transport_error(e: reqwest::Error) -> TransportError {
    TransportError(e.to_string())
}
