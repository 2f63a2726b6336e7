//! # Actions
//!
//! Everything that can happen to the controller becomes an `Action`.
//! User presses Tab? That's `Action::NextCategory`.
//! A source answers? That's `Action::FetchCompleted { .. }`.
//!
//! `update()` applies an action to the state and returns an `Effect` telling
//! the adapter what I/O to perform next. Selection side effects go through
//! the injected `SelectionContext`, never through globals.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::category::Category;
use crate::core::item::Item;
use crate::core::state::App;
use crate::source::SourceError;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectCategory(Category),
    NextCategory,
    PrevCategory,
    /// Select the item at this position of the displayed list.
    ActivateItem(usize),
    /// Start a new fetch cycle for all three sources.
    Refresh,
    FetchCompleted {
        category: Category,
        generation: u64,
        result: Result<Vec<Item>, SourceError>,
    },
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn one fetch per category, tagged with this generation.
    SpawnFetches(u64),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SelectCategory(category) => {
            app.select_category(category);
            Effect::None
        }
        Action::NextCategory => {
            app.select_category(app.selected_category.next());
            Effect::None
        }
        Action::PrevCategory => {
            app.select_category(app.selected_category.prev());
            Effect::None
        }
        Action::ActivateItem(index) => {
            match app.displayed_list().get(index).cloned() {
                Some(item) => {
                    app.select_item(&item);
                }
                None => debug!("No item at rank index {index}"),
            }
            Effect::None
        }
        Action::Refresh => Effect::SpawnFetches(app.begin_fetch_cycle()),
        Action::FetchCompleted {
            category,
            generation,
            result,
        } => {
            app.apply_fetch_result(category, generation, result);
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}
