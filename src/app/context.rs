use std::sync::Arc;

use url::Url;

use crate::app::error::{CleanFeedError, Result};
use crate::config::Config;
use crate::domain::FeedLoader;
use crate::fetcher::{HttpClient, ReqwestHttpClient};
use crate::loader::RemoteFeedLoader;

pub struct AppContext {
    pub config: Config,
    pub client: Arc<dyn HttpClient>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let client = ReqwestHttpClient::with_settings(
            config.http.timeout(),
            &config.http.user_agent,
        )?;

        Ok(Self::with_client(config, Arc::new(client)))
    }

    pub fn with_client(config: Config, client: Arc<dyn HttpClient>) -> Self {
        Self { config, client }
    }

    /// Resolve the feed URL, preferring `url_override` over the configured one.
    pub fn feed_url(&self, url_override: Option<&str>) -> Result<Url> {
        let raw = url_override
            .or(self.config.feed.url.as_deref())
            .ok_or_else(|| {
                CleanFeedError::Config("No feed URL given; pass --url or set [feed].url".into())
            })?;

        Ok(Url::parse(raw)?)
    }

    pub fn loader(&self, url_override: Option<&str>) -> Result<Arc<dyn FeedLoader + Send + Sync>> {
        let url = self.feed_url(url_override)?;
        Ok(Arc::new(RemoteFeedLoader::new(url, self.client.clone())))
    }
}
