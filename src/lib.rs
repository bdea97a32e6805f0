//! # cleanfeed
//!
//! Loads a list of image feed items from a remote JSON endpoint.
//!
//! ## Architecture
//!
//! ```text
//! RemoteFeedLoader → HttpClient → FeedItemsMapper → Vec<FeedItem>
//! ```
//!
//! - [`fetcher`]: Transport capability and its reqwest implementation
//! - [`normalizer`]: Wire payload decoding and mapping to domain items
//! - [`loader`]: The remote loader tying the two together
//!
//! ## Quick Start
//!
//! ```bash
//! cleanfeed load --url https://example.com/feed
//! ```

/// Application context and error handling.
pub mod app;

/// Configuration loaded from `~/.config/cleanfeed/config.toml`.
pub mod config;

/// Command-line interface using clap.
pub mod cli;

/// Core domain models.
///
/// - [`FeedItem`](domain::FeedItem): A validated feed entry
/// - [`FeedLoader`](domain::FeedLoader): Async trait for anything that loads a feed
/// - [`LoadError`](domain::LoadError): `Connectivity` or `InvalidData`
pub mod domain;

/// HTTP transport.
///
/// - [`HttpClient`](fetcher::HttpClient): Capability to GET a URL
/// - [`ReqwestHttpClient`](fetcher::ReqwestHttpClient): reqwest-based implementation
pub mod fetcher;

/// Remote feed loading.
pub mod loader;

/// Wire payload decoding.
///
/// Converts `{"items": [...]}` JSON into [`FeedItem`](domain::FeedItem)s,
/// rejecting the whole payload if any item is malformed.
pub mod normalizer;
