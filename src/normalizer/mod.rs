//! Wire decoding and domain mapping for the remote feed payload.
//!
//! ```text
//! {"items": [{"id": "<uuid>", "image": "<url>", "description"?: "..", "location"?: ".."}]}
//! ```
//!
//! Decoding is all-or-nothing: one bad item rejects the whole payload.

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::domain::{FeedItem, LoadError, LoadFeedResult};

const OK: u16 = 200;

/// Root of the wire payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RemoteFeed {
    pub items: Vec<RemoteFeedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RemoteFeedItem {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub image: Url,
}

impl From<RemoteFeedItem> for FeedItem {
    fn from(item: RemoteFeedItem) -> Self {
        FeedItem {
            id: item.id,
            description: item.description,
            location: item.location,
            image_url: item.image,
        }
    }
}

impl From<&FeedItem> for RemoteFeedItem {
    fn from(item: &FeedItem) -> Self {
        RemoteFeedItem {
            id: item.id,
            description: item.description.clone(),
            location: item.location.clone(),
            image: item.image_url.clone(),
        }
    }
}

impl RemoteFeed {
    pub(crate) fn decode(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    pub(crate) fn encode(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub(crate) fn into_items(self) -> Vec<FeedItem> {
        self.items.into_iter().map(FeedItem::from).collect()
    }
}

impl FromIterator<RemoteFeedItem> for RemoteFeed {
    fn from_iter<I: IntoIterator<Item = RemoteFeedItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FeedItemsMapper;

impl FeedItemsMapper {
    /// Turn a completed response into feed items.
    ///
    /// Anything other than exactly 200 is rejected without looking at the body.
    pub fn map(body: &[u8], status: u16) -> LoadFeedResult {
        if status != OK {
            tracing::warn!("Unexpected status {}, rejecting payload", status);
            return Err(LoadError::InvalidData);
        }

        match RemoteFeed::decode(body) {
            Ok(feed) => {
                let items = feed.into_items();
                tracing::debug!("Decoded {} feed items", items.len());
                Ok(items)
            }
            Err(e) => {
                tracing::warn!("Failed to decode feed payload: {}", e);
                Err(LoadError::InvalidData)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ITEMS: &str = r#"{ "items": [
        {"id": "73A7F70C-75DA-4C2E-B5A3-EED40DC53AA6", "image": "https://url-1.com"},
        {"id": "BA298A85-6275-48D3-8315-9C8F7C1CD109", "location": "Location 2", "image": "https://url-2.com"}
    ]}"#;

    #[test]
    fn test_decodes_items_in_order() {
        let items = FeedItemsMapper::map(TWO_ITEMS.as_bytes(), 200).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0].id,
            Uuid::parse_str("73a7f70c-75da-4c2e-b5a3-eed40dc53aa6").unwrap()
        );
        assert_eq!(items[0].description, None);
        assert_eq!(items[0].location, None);
        assert_eq!(items[0].image_url.as_str(), "https://url-1.com/");
        assert_eq!(items[1].location, Some("Location 2".into()));
        assert_eq!(items[1].image_url.as_str(), "https://url-2.com/");
    }

    #[test]
    fn test_empty_list_is_success() {
        let items = FeedItemsMapper::map(br#"{"items": []}"#, 200).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_non_200_ignores_valid_body() {
        for status in [199, 201, 300, 400, 500] {
            assert_eq!(
                FeedItemsMapper::map(TWO_ITEMS.as_bytes(), status),
                Err(LoadError::InvalidData),
                "status {status}"
            );
        }
    }

    #[test]
    fn test_non_json_is_invalid_data() {
        assert_eq!(
            FeedItemsMapper::map(b"invalid json", 200),
            Err(LoadError::InvalidData)
        );
    }

    #[test]
    fn test_missing_items_field_is_invalid_data() {
        assert_eq!(
            FeedItemsMapper::map(br#"{"entries": []}"#, 200),
            Err(LoadError::InvalidData)
        );
    }

    #[test]
    fn test_missing_image_rejects_whole_payload() {
        let body = r#"{"items": [
            {"id": "73A7F70C-75DA-4C2E-B5A3-EED40DC53AA6", "image": "https://url-1.com"},
            {"id": "BA298A85-6275-48D3-8315-9C8F7C1CD109", "description": "no image"}
        ]}"#;
        assert_eq!(
            FeedItemsMapper::map(body.as_bytes(), 200),
            Err(LoadError::InvalidData)
        );
    }

    #[test]
    fn test_missing_id_rejects_whole_payload() {
        let body = r#"{"items": [
            {"id": "73A7F70C-75DA-4C2E-B5A3-EED40DC53AA6", "image": "https://url-1.com"},
            {"location": "no id", "image": "https://url-2.com"}
        ]}"#;
        assert_eq!(
            FeedItemsMapper::map(body.as_bytes(), 200),
            Err(LoadError::InvalidData)
        );
    }

    #[test]
    fn test_malformed_id_is_invalid_data() {
        let body = r#"{"items": [{"id": "not-a-uuid", "image": "https://url-1.com"}]}"#;
        assert_eq!(
            FeedItemsMapper::map(body.as_bytes(), 200),
            Err(LoadError::InvalidData)
        );
    }

    #[test]
    fn test_relative_image_is_invalid_data() {
        let body = r#"{"items": [{"id": "73A7F70C-75DA-4C2E-B5A3-EED40DC53AA6", "image": "/img.png"}]}"#;
        assert_eq!(
            FeedItemsMapper::map(body.as_bytes(), 200),
            Err(LoadError::InvalidData)
        );
    }

    #[test]
    fn test_wrong_type_is_invalid_data() {
        let body = r#"{"items": [{"id": "73A7F70C-75DA-4C2E-B5A3-EED40DC53AA6", "image": "https://url-1.com", "location": 42}]}"#;
        assert_eq!(
            FeedItemsMapper::map(body.as_bytes(), 200),
            Err(LoadError::InvalidData)
        );
    }

    #[test]
    fn test_null_optionals_are_absent() {
        let body = r#"{"items": [{"id": "73A7F70C-75DA-4C2E-B5A3-EED40DC53AA6", "description": null, "location": null, "image": "https://url-1.com"}]}"#;
        let items = FeedItemsMapper::map(body.as_bytes(), 200).unwrap();
        assert_eq!(items[0].description, None);
        assert_eq!(items[0].location, None);
    }

    #[test]
    fn test_encode_then_decode_preserves_item() {
        let item = FeedItem::new(
            Uuid::new_v4(),
            Some("a description".into()),
            None,
            Url::parse("https://img.example.com/a.png").unwrap(),
        );
        let feed: RemoteFeed = std::iter::once(RemoteFeedItem::from(&item)).collect();

        let body = feed.encode().unwrap();
        let text = String::from_utf8(body.clone()).unwrap();
        assert!(!text.contains("location"));

        let decoded = FeedItemsMapper::map(&body, 200).unwrap();
        assert_eq!(decoded, vec![item]);
    }
}
