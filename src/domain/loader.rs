use async_trait::async_trait;
use thiserror::Error;

use crate::domain::FeedItem;

/// The two ways a load can fail, as surfaced to callers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    /// The transport could not complete the request.
    #[error("Connectivity error")]
    Connectivity,

    /// The response arrived but cannot be trusted: non-200 status or a body
    /// that does not decode.
    #[error("Invalid data")]
    InvalidData,
}

pub type LoadFeedResult = std::result::Result<Vec<FeedItem>, LoadError>;

#[async_trait]
pub trait FeedLoader {
    async fn load_feed(&self) -> LoadFeedResult;
}
