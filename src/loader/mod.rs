#[cfg(test)]
mod spy;

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::domain::{FeedLoader, LoadError, LoadFeedResult};
use crate::fetcher::{HttpClient, HttpClientResult};
use crate::normalizer::FeedItemsMapper;

/// Loads the feed from a fixed URL through an injected [`HttpClient`].
///
/// Holds no per-request state: every call to [`load`](Self::load) issues its
/// own request and completes independently of the others.
pub struct RemoteFeedLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
    alive: Arc<()>,
}

impl RemoteFeedLoader {
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url,
            client,
            alive: Arc::new(()),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Issue one request and report the outcome to `completion`.
    ///
    /// The request is issued before this returns. Waiting for the response
    /// happens on a task spawned onto the current Tokio runtime, and
    /// `completion` runs on that task exactly once. If the loader has been
    /// dropped by the time the response arrives, the result is discarded and
    /// `completion` is never called.
    ///
    /// Outside a Tokio runtime nothing can drive the response, so no request
    /// is issued and `completion` receives [`LoadError::Connectivity`]
    /// immediately on the calling thread.
    pub fn load<F>(&self, completion: F)
    where
        F: FnOnce(LoadFeedResult) + Send + 'static,
    {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("No Tokio runtime available, cannot load {}", self.url);
            completion(Err(LoadError::Connectivity));
            return;
        };

        tracing::debug!("Loading feed from {}", self.url);
        let response = self.client.get(&self.url);
        let alive = Arc::downgrade(&self.alive);

        runtime.spawn(async move {
            let result = response.await;

            // Loader gone, nobody left to report to
            let Some(_guard) = alive.upgrade() else {
                tracing::debug!("Loader released before response arrived, dropping result");
                return;
            };

            completion(Self::classify(result));
        });
    }

    fn classify(result: HttpClientResult) -> LoadFeedResult {
        match result {
            Ok(response) => FeedItemsMapper::map(&response.body, response.status),
            Err(e) => {
                tracing::warn!("{}", e);
                Err(LoadError::Connectivity)
            }
        }
    }
}

#[async_trait]
impl FeedLoader for RemoteFeedLoader {
    async fn load_feed(&self) -> LoadFeedResult {
        tracing::debug!("Loading feed from {}", self.url);
        let result = self.client.get(&self.url).await;
        Self::classify(result)
    }
}
