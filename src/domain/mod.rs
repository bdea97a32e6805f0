pub mod item;
pub mod loader;

pub use item::FeedItem;
pub use loader::{FeedLoader, LoadError, LoadFeedResult};
