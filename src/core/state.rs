//! # Application State
//!
//! The aggregate controller: three fetch results, the selected category, and
//! the injected selection side effects. Everything the view shows (readiness,
//! the ranked list, per-item stats) is derived on demand, never stored.
//!
//! ```text
//! App
//! ├── selected_category: Category            // user-driven, survives refetches
//! ├── sources: PerCategory<FetchResultSet>   // supplied by fetch tasks
//! ├── fetch_generation: u64                  // current fetch cycle
//! └── selection: SelectionContext            // store + navigator
//! ```
//!
//! Changes from the event loop go through `update(state, action)` in action.rs.

use log::{debug, info, warn};

use crate::core::category::{Category, CategoryDescriptor, InvalidCategoryError};
use crate::core::fetch::{FetchResultSet, OverallReadiness, PerCategory, combine};
use crate::core::item::Item;
use crate::core::selection::{SelectionContext, chapters_path};
use crate::source::SourceError;

/// Maximum number of ranked items shown for a category.
pub const DISPLAY_LIMIT: usize = 9;

/// Page requested from every source. Only the first page is ever shown.
pub const FIRST_PAGE: u32 = 1;

pub struct App {
    pub selected_category: Category,
    pub sources: PerCategory<FetchResultSet>,
    pub fetch_generation: u64,
    selection: SelectionContext,
}

impl App {
    pub fn new(default_category: Category, selection: SelectionContext) -> Self {
        Self {
            selected_category: default_category,
            sources: PerCategory::default(),
            fetch_generation: 0,
            selection,
        }
    }

    pub fn readiness(&self) -> OverallReadiness {
        combine(&self.sources)
    }

    /// The surfaced error, if the combined state is an error.
    pub fn error_message(&self) -> Option<String> {
        match self.readiness() {
            OverallReadiness::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn descriptor(&self) -> &'static CategoryDescriptor {
        self.selected_category.descriptor()
    }

    /// Ranked items for the selected category, at most `DISPLAY_LIMIT`,
    /// in upstream order. Empty until every source is ready.
    pub fn displayed_list(&self) -> &[Item] {
        if self.readiness() != OverallReadiness::Ready {
            return &[];
        }
        let items = self.sources.get(self.selected_category).items();
        &items[..items.len().min(DISPLAY_LIMIT)]
    }

    /// Per-item stat under the selected category, `None` where the category
    /// has no stat.
    pub fn display_value(&self, item: &Item) -> Option<String> {
        self.descriptor().stat_value(item)
    }

    /// Screen-reader style summary: `"{title} - {label}: {value}"`.
    pub fn accessible_label(&self, item: &Item) -> String {
        let descriptor = self.descriptor();
        match descriptor.stat_value(item) {
            Some(value) => format!("{} - {}: {}", item.title, descriptor.label, value),
            None => item.title.clone(),
        }
    }

    pub fn select_category(&mut self, category: Category) {
        if self.selected_category != category {
            debug!("Category {} -> {}", self.selected_category, category);
        }
        self.selected_category = category;
    }

    /// Selects a category by registry key. Unknown keys are rejected and
    /// leave the selection untouched.
    pub fn select_category_key(&mut self, key: &str) -> Result<(), InvalidCategoryError> {
        let category = key.parse::<Category>().inspect_err(|e| {
            warn!("Rejected category selection: {e}");
        })?;
        self.select_category(category);
        Ok(())
    }

    /// Records the item in the selection store, then navigates to its
    /// chapter list. Navigation fires on every call, repeats included.
    pub fn select_item(&self, item: &Item) -> String {
        let path = chapters_path(&item.id);
        info!("Selected '{}' ({})", item.title, item.id);
        self.selection.store.set_selected_item(item.clone());
        self.selection.navigator.navigate(&path);
        path
    }

    /// Starts a new fetch cycle: every source goes back to Loading and
    /// results from earlier cycles will be ignored.
    pub fn begin_fetch_cycle(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.sources = PerCategory::default();
        info!("Fetch cycle {} started", self.fetch_generation);
        self.fetch_generation
    }

    /// Applies one source's outcome. Returns false when the result is stale
    /// (older cycle) or the source has already settled this cycle.
    pub fn apply_fetch_result(
        &mut self,
        category: Category,
        generation: u64,
        result: Result<Vec<Item>, SourceError>,
    ) -> bool {
        if generation != self.fetch_generation {
            debug!(
                "Dropping stale {} result (generation {}, current {})",
                category, generation, self.fetch_generation
            );
            return false;
        }
        let slot = self.sources.get_mut(category);
        if !slot.is_loading() {
            warn!("{category} already settled this cycle, ignoring duplicate result");
            return false;
        }
        *slot = match result {
            Ok(items) => {
                info!("{} ready with {} items", category, items.len());
                FetchResultSet::Ready(items)
            }
            Err(e) => {
                warn!("{category} fetch failed: {e}");
                FetchResultSet::Error(Some(e.to_string()))
            }
        };
        true
    }
}
