//! # Ranked Items
//!
//! The entity every category ranks. Items are owned by whoever fetched them;
//! the controller only ever reads them (and clones one into the selection
//! store on selection).

use serde::Serialize;

/// Title shown when the upstream record has none.
pub const UNTITLED: &str = "Untitled Manga";

/// Cover shown when the upstream record has no cover image.
pub const PLACEHOLDER_COVER: &str = "./placeholder.jpg";

/// Rating metrics attached to an item. Either field may be missing upstream.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct RatingInfo {
    pub bayesian_score: Option<f64>,
    pub follow_count: Option<u64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub cover_image_url: Option<String>,
    pub rating: RatingInfo,
}

impl Item {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cover_image_url: None,
            rating: RatingInfo::default(),
        }
    }

    pub fn with_bayesian(mut self, score: f64) -> Self {
        self.rating.bayesian_score = Some(score);
        self
    }

    pub fn with_follows(mut self, follows: u64) -> Self {
        self.rating.follow_count = Some(follows);
        self
    }

    #[cfg(test)]
    pub fn with_cover(mut self, url: impl Into<String>) -> Self {
        self.cover_image_url = Some(url.into());
        self
    }

    /// Cover URL, falling back to the bundled placeholder.
    /// Empty strings count as missing.
    pub fn cover_or_placeholder(&self) -> &str {
        match self.cover_image_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => PLACEHOLDER_COVER,
        }
    }
}
