//! # Selection Collaborators
//!
//! Selecting an item has two effects that live outside the controller:
//! the item is recorded in a process-wide selection store, and the app
//! navigates to the item's chapter list. Both are traits injected into
//! `App`, so tests can swap in recorders and the TUI can swap in its own.

use std::sync::{Arc, Mutex, MutexGuard};

use log::info;

use crate::core::item::Item;

/// Receives the most recently selected item. Written by the controller,
/// never read back by it.
pub trait SelectionStore: Send + Sync {
    fn set_selected_item(&self, item: Item);
}

/// Fire-and-forget route change.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Route to an item's chapter list.
pub fn chapters_path(id: &str) -> String {
    format!("/manga/{id}/chapters")
}

/// The injected pair of selection side effects.
#[derive(Clone)]
pub struct SelectionContext {
    pub store: Arc<dyn SelectionStore>,
    pub navigator: Arc<dyn Navigator>,
}

impl SelectionContext {
    pub fn new(store: Arc<dyn SelectionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panicking writer can't leave a half-written Option or Vec behind.
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-memory selection store shared by everything holding the `Arc`.
#[derive(Default)]
pub struct SharedSelection {
    current: Mutex<Option<Item>>,
}

impl SharedSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Item> {
        lock(&self.current).clone()
    }
}

impl SelectionStore for SharedSelection {
    fn set_selected_item(&self, item: Item) {
        *lock(&self.current) = Some(item);
    }
}

/// Navigator that records every route it is asked to visit.
#[derive(Default)]
pub struct RouteHistory {
    visited: Mutex<Vec<String>>,
}

impl RouteHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        lock(&self.visited).last().cloned()
    }

    #[cfg(test)]
    pub fn visited(&self) -> Vec<String> {
        lock(&self.visited).clone()
    }
}

impl Navigator for RouteHistory {
    fn navigate(&self, path: &str) {
        info!("Navigating to {path}");
        lock(&self.visited).push(path.to_string());
    }
}
