use url::Url;
use uuid::Uuid;

/// A single entry of the feed as the rest of the application sees it.
///
/// Only the normalizer builds these, and only from a payload that decoded
/// completely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Url,
}

impl FeedItem {
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        image_url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            image_url,
        }
    }

    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or("(No description)")
    }
}
