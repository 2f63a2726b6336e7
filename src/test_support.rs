//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::category::Category;
use crate::core::fetch::PerCategory;
use crate::core::item::Item;
use crate::core::selection::{Navigator, SelectionContext, SelectionStore};
use crate::core::state::App;
use crate::source::{RankingSource, SourceError};

#[derive(Default)]
struct Recorded {
    selected: Option<Item>,
    routes: Vec<String>,
}

/// Selection store and navigator in one. Clones share the same record.
#[derive(Clone, Default)]
pub struct Recorder {
    inner: Arc<Mutex<Recorded>>,
}

impl Recorder {
    pub fn selected(&self) -> Option<Item> {
        self.inner.lock().unwrap().selected.clone()
    }

    pub fn routes(&self) -> Vec<String> {
        self.inner.lock().unwrap().routes.clone()
    }

    pub fn context(&self) -> SelectionContext {
        SelectionContext::new(Arc::new(self.clone()), Arc::new(self.clone()))
    }
}

impl SelectionStore for Recorder {
    fn set_selected_item(&self, item: Item) {
        self.inner.lock().unwrap().selected = Some(item);
    }
}

impl Navigator for Recorder {
    fn navigate(&self, path: &str) {
        self.inner.lock().unwrap().routes.push(path.to_string());
    }
}

/// `n` items with ids `{prefix}0..{prefix}{n-1}`, descending scores.
pub fn items(prefix: &str, n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| {
            Item::new(format!("{prefix}{i}"), format!("Title {prefix}{i}"))
                .with_bayesian(10.0 - i as f64 * 0.1)
                .with_follows(1000 * (n - i) as u64)
        })
        .collect()
}

/// Creates a test App (default category Top) wired to a fresh Recorder.
pub fn test_app() -> (App, Recorder) {
    test_app_with(Category::Top, Recorder::default())
}

pub fn test_app_with(category: Category, recorder: Recorder) -> (App, Recorder) {
    let app = App::new(category, recorder.context());
    (app, recorder)
}

/// A source that answers from canned per-category results.
pub struct FakeSource {
    pub results: PerCategory<Result<Vec<Item>, SourceError>>,
}

impl FakeSource {
    pub fn ready(top: usize, favourite: usize, new: usize) -> Self {
        Self {
            results: PerCategory {
                top: Ok(items("t", top)),
                favourite: Ok(items("f", favourite)),
                new: Ok(items("n", new)),
            },
        }
    }
}

#[async_trait]
impl RankingSource for FakeSource {
    fn name(&self) -> &str {
        "fake"
    }

    async fn fetch(&self, category: Category, _page: u32) -> Result<Vec<Item>, SourceError> {
        self.results.get(category).clone()
    }
}
