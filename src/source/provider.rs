use std::fmt;

use async_trait::async_trait;

use crate::core::category::Category;
use crate::core::item::Item;

/// Errors a ranking source can report.
/// The controller only ever shows these as text; nothing here is retried.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    /// Source misconfigured (bad base URL, unusable client).
    Config(String),
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// Upstream answered with a non-success status.
    Api { status: u16, message: String },
    /// Response body did not match the expected shape.
    Parse(String),
    /// The fetch did not settle within the configured timeout.
    Timeout { secs: u64 },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Config(msg) => write!(f, "config error: {msg}"),
            SourceError::Network(msg) => write!(f, "network error: {msg}"),
            SourceError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SourceError::Parse(msg) => write!(f, "parse error: {msg}"),
            SourceError::Timeout { secs } => write!(f, "request timed out after {secs}s"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Retrieves one page of a category's ranking, already ordered by rank.
#[async_trait]
pub trait RankingSource: Send + Sync {
    /// Returns the name of the source, for logs.
    fn name(&self) -> &str;

    async fn fetch(&self, category: Category, page: u32) -> Result<Vec<Item>, SourceError>;
}
