use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::LoadError;

#[derive(Error, Debug)]
pub enum CleanFeedError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to load feed: {0}")]
    Load(#[from] LoadError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    ConfigFile(#[from] ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CleanFeedError>;
