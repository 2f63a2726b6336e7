//! HTTP ranking source.
//!
//! Talks to the manga backend's list endpoint:
//!
//! ```text
//! GET {base_url}/manga/{fetch_key}?page={page}
//!
//! { "data": [ { "id": "…", "title": "…", "coverImageUrl": "…",
//!               "rating": { "rating": { "bayesian": 8.9 }, "follows": 1520 } } ] }
//! ```
//!
//! Every field of an entry except `id` may be missing or null.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::core::category::Category;
use crate::core::item::{Item, RatingInfo, UNTITLED};
use crate::source::{RankingSource, SourceError};

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Deserialize, Debug)]
struct ListResponse {
    #[serde(default)]
    data: Option<Vec<WireItem>>,
}

/// Backends disagree on whether ids are strings or numbers.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(u64),
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct WireItem {
    id: WireId,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    cover_image_url: Option<String>,
    #[serde(default)]
    rating: Option<WireRating>,
}

#[derive(Deserialize, Debug)]
struct WireRating {
    #[serde(default)]
    rating: Option<WireScore>,
    #[serde(default)]
    follows: Option<u64>,
}

#[derive(Deserialize, Debug)]
struct WireScore {
    #[serde(default)]
    bayesian: Option<f64>,
}

// ============================================================================
// Translation Layer
// ============================================================================

impl From<WireItem> for Item {
    fn from(wire: WireItem) -> Self {
        let id = match wire.id {
            WireId::Text(s) => s,
            WireId::Number(n) => n.to_string(),
        };
        let rating = wire
            .rating
            .map(|r| RatingInfo {
                bayesian_score: r.rating.and_then(|s| s.bayesian),
                follow_count: r.follows,
            })
            .unwrap_or_default();
        Item {
            id,
            title: wire.title.unwrap_or_else(|| UNTITLED.to_string()),
            cover_image_url: wire.cover_image_url,
            rating,
        }
    }
}

fn parse_items(body: &str) -> Result<Vec<Item>, SourceError> {
    let response: ListResponse =
        serde_json::from_str(body).map_err(|e| SourceError::Parse(e.to_string()))?;
    Ok(response
        .data
        .unwrap_or_default()
        .into_iter()
        .map(Item::from)
        .collect())
}

// ============================================================================
// Source Implementation
// ============================================================================

pub struct HttpRankingSource {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpRankingSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self, category: Category) -> String {
        format!("{}/manga/{}", self.base_url, category.fetch_key())
    }

    async fn fetch_once(&self, category: Category, page: u32) -> Result<Vec<Item>, SourceError> {
        let url = self.endpoint(category);
        info!("GET {url}?page={page}");

        let response = self
            .client
            .get(&url)
            .query(&[("page", page)])
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    SourceError::Config(e.to_string())
                } else {
                    SourceError::Network(e.to_string())
                }
            })?;

        debug!("{} response status: {}", category, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("{} API error: {} - {}", category, status, err_body);
            return Err(SourceError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        let items = parse_items(&body)?;
        debug!("{} parsed {} items ({} bytes)", category, items.len(), body.len());
        Ok(items)
    }
}

#[async_trait]
impl RankingSource for HttpRankingSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, category: Category, page: u32) -> Result<Vec<Item>, SourceError> {
        match tokio::time::timeout(self.timeout, self.fetch_once(category, page)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("{} fetch timed out after {:?}", category, self.timeout);
                Err(SourceError::Timeout {
                    secs: self.timeout.as_secs(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_entry() {
        let body = r#"{"data":[{"id":"abc","title":"Berserk","coverImageUrl":"https://c/1.jpg",
            "rating":{"rating":{"bayesian":9.05},"follows":2300}}]}"#;
        let items = parse_items(body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "abc");
        assert_eq!(items[0].title, "Berserk");
        assert_eq!(items[0].cover_image_url.as_deref(), Some("https://c/1.jpg"));
        assert_eq!(items[0].rating.bayesian_score, Some(9.05));
        assert_eq!(items[0].rating.follow_count, Some(2300));
    }

    #[test]
    fn test_parse_sparse_entry() {
        let body = r#"{"data":[{"id":42,"title":null,"rating":{"rating":null}}]}"#;
        let items = parse_items(body).unwrap();
        assert_eq!(items[0].id, "42");
        assert_eq!(items[0].title, UNTITLED);
        assert_eq!(items[0].rating, RatingInfo::default());
    }

    #[test]
    fn test_parse_missing_or_null_data_is_empty() {
        assert!(parse_items("{}").unwrap().is_empty());
        assert!(parse_items(r#"{"data":null}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_preserves_upstream_order() {
        let body = r#"{"data":[{"id":"3"},{"id":"1"},{"id":"2"}]}"#;
        let ids: Vec<String> = parse_items(body).unwrap().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_parse_garbage_is_parse_error() {
        assert!(matches!(parse_items("<html>"), Err(SourceError::Parse(_))));
    }

    #[test]
    fn test_endpoint_uses_fetch_key() {
        let source = HttpRankingSource::new("http://host/api/", Duration::from_secs(1));
        assert_eq!(source.endpoint(Category::New), "http://host/api/manga/latestArrivals");
        assert_eq!(source.endpoint(Category::Top), "http://host/api/manga/rating");
    }
}
