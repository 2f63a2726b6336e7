//! # Fetch Results & Readiness
//!
//! Each category is fetched independently. This module models one fetch as a
//! tiny state machine (`FetchResultSet`) and folds the three of them into a
//! single gate (`OverallReadiness`).
//!
//! ```text
//!            ┌──────────► Ready(items)
//! Loading ───┤
//!            └──────────► Error(message)
//!
//! combine(top, favourite, new):
//!   any Loading          → Loading
//!   else any Error       → Error(first message, Top → Favourite → New)
//!   else                 → Ready
//! ```
//!
//! There is no partial readiness: the view is either blocked or fully
//! populated, whatever order the sources settle in.

use crate::core::category::Category;
use crate::core::item::Item;

/// Message reported when every failing source failed without saying why.
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Loading,
    Error,
    Ready,
}

/// Outcome of fetching one category's ranking.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchResultSet {
    #[default]
    Loading,
    Error(Option<String>),
    Ready(Vec<Item>),
}

impl FetchResultSet {
    pub fn status(&self) -> FetchStatus {
        match self {
            FetchResultSet::Loading => FetchStatus::Loading,
            FetchResultSet::Error(_) => FetchStatus::Error,
            FetchResultSet::Ready(_) => FetchStatus::Ready,
        }
    }

    /// Items in upstream order; empty unless the fetch is ready.
    pub fn items(&self) -> &[Item] {
        match self {
            FetchResultSet::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchResultSet::Error(message) => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchResultSet::Loading)
    }
}

/// One value per category, addressed by `Category` rather than by string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerCategory<T> {
    pub top: T,
    pub favourite: T,
    pub new: T,
}

impl<T> PerCategory<T> {
    pub fn get(&self, category: Category) -> &T {
        match category {
            Category::Top => &self.top,
            Category::Favourite => &self.favourite,
            Category::New => &self.new,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::Top => &mut self.top,
            Category::Favourite => &mut self.favourite,
            Category::New => &mut self.new,
        }
    }

    /// Values paired with their category, in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverallReadiness {
    Loading,
    Error(String),
    Ready,
}

/// Folds the three per-category results into one readiness state.
pub fn combine(sources: &PerCategory<FetchResultSet>) -> OverallReadiness {
    if sources.iter().any(|(_, set)| set.is_loading()) {
        return OverallReadiness::Loading;
    }

    let mut errored = sources
        .iter()
        .filter(|(_, set)| set.status() == FetchStatus::Error)
        .peekable();
    if errored.peek().is_none() {
        return OverallReadiness::Ready;
    }

    let message = errored
        .find_map(|(_, set)| set.error_message().filter(|m| !m.is_empty()))
        .unwrap_or(UNKNOWN_ERROR);
    OverallReadiness::Error(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(n: usize) -> FetchResultSet {
        FetchResultSet::Ready(
            (0..n)
                .map(|i| Item::new(i.to_string(), format!("Item {i}")))
                .collect(),
        )
    }

    fn error(message: &str) -> FetchResultSet {
        FetchResultSet::Error(Some(message.to_string()))
    }

    fn sources(top: FetchResultSet, favourite: FetchResultSet, new: FetchResultSet) -> PerCategory<FetchResultSet> {
        PerCategory { top, favourite, new }
    }

    #[test]
    fn test_default_sources_are_loading() {
        let all = PerCategory::<FetchResultSet>::default();
        assert_eq!(combine(&all), OverallReadiness::Loading);
    }

    #[test]
    fn test_any_loading_wins() {
        let statuses = [
            FetchResultSet::Loading,
            ready(3),
            error("boom"),
        ];
        // Loading in every position, with every combination of the others.
        for a in &statuses {
            for b in &statuses {
                assert_eq!(
                    combine(&sources(FetchResultSet::Loading, a.clone(), b.clone())),
                    OverallReadiness::Loading
                );
                assert_eq!(
                    combine(&sources(a.clone(), FetchResultSet::Loading, b.clone())),
                    OverallReadiness::Loading
                );
                assert_eq!(
                    combine(&sources(a.clone(), b.clone(), FetchResultSet::Loading)),
                    OverallReadiness::Loading
                );
            }
        }
    }

    #[test]
    fn test_twelve_and_three_ready_with_one_loading_is_loading() {
        let all = sources(ready(12), ready(3), FetchResultSet::Loading);
        assert_eq!(combine(&all), OverallReadiness::Loading);
    }

    #[test]
    fn test_all_ready() {
        assert_eq!(combine(&sources(ready(1), ready(0), ready(9))), OverallReadiness::Ready);
    }

    #[test]
    fn test_error_order_prefers_top_then_favourite_then_new() {
        let all = sources(error("rating down"), error("fav down"), error("new down"));
        assert_eq!(combine(&all), OverallReadiness::Error("rating down".into()));

        let all = sources(ready(1), error("fav down"), error("new down"));
        assert_eq!(combine(&all), OverallReadiness::Error("fav down".into()));

        let all = sources(ready(1), ready(1), error("new down"));
        assert_eq!(combine(&all), OverallReadiness::Error("new down".into()));
    }

    #[test]
    fn test_error_without_message_falls_through_to_next_message() {
        let all = sources(FetchResultSet::Error(None), ready(2), error("new down"));
        assert_eq!(combine(&all), OverallReadiness::Error("new down".into()));
    }

    #[test]
    fn test_error_without_any_message() {
        let all = sources(ready(2), FetchResultSet::Error(None), ready(2));
        assert_eq!(combine(&all), OverallReadiness::Error(UNKNOWN_ERROR.into()));
    }

    #[test]
    fn test_items_empty_unless_ready() {
        assert!(FetchResultSet::Loading.items().is_empty());
        assert!(error("x").items().is_empty());
        assert_eq!(ready(4).items().len(), 4);
    }

    #[test]
    fn test_per_category_get_mut() {
        let mut all = PerCategory::<FetchResultSet>::default();
        *all.get_mut(Category::Favourite) = ready(2);
        assert_eq!(all.favourite.status(), FetchStatus::Ready);
        assert_eq!(all.get(Category::Top).status(), FetchStatus::Loading);
    }
}
