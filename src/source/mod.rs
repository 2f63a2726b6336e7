pub mod http;
pub mod provider;

pub use http::HttpRankingSource;
pub use provider::{RankingSource, SourceError};
