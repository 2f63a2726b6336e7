//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the ranking
//! view, and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the skeleton shimmer keeps moving.
//! - **Idle** (ready or error): sleeps up to 500ms, only redraws on events,
//!   fetch results or terminal resize.
//!
//! ## Fetching
//!
//! Each fetch cycle spawns one tokio task per category. Tasks report back
//! through an mpsc channel as `Action::FetchCompleted`, tagged with the cycle's
//! generation, and the loop feeds them through `update()` in arrival order.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crate::core::action::{Action, Effect, update};
use crate::core::category::Category;
use crate::core::config::ResolvedConfig;
use crate::core::fetch::OverallReadiness;
use crate::core::selection::{RouteHistory, SelectionContext, SharedSelection};
use crate::core::state::{App, FIRST_PAGE};
use crate::source::RankingSource;
use crate::tui::component::EventHandler;
use crate::tui::components::{RankingEvent, RankingListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub ranking_list: RankingListState,
    /// Selection store shared with the controller; read here for display only.
    pub selection: Arc<SharedSelection>,
    /// Navigator shared with the controller.
    pub routes: Arc<RouteHistory>,
    /// Local time the current cycle became ready.
    pub refreshed_at: Option<String>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            ranking_list: RankingListState::new(),
            selection: Arc::new(SharedSelection::new()),
            routes: Arc::new(RouteHistory::new()),
            refreshed_at: None,
        }
    }

    pub fn selection_context(&self) -> SelectionContext {
        SelectionContext::new(self.selection.clone(), self.routes.clone())
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a terminal event to a core action. Cursor movement stays in the
/// ranking list and yields no action unless it activates a row.
fn event_to_action(event: TuiEvent, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::NextCategory => Some(Action::NextCategory),
        TuiEvent::PrevCategory => Some(Action::PrevCategory),
        TuiEvent::JumpCategory(i) => Category::ALL.get(i).copied().map(Action::SelectCategory),
        TuiEvent::Refresh => Some(Action::Refresh),
        TuiEvent::Resize => None,
        other => tui
            .ranking_list
            .handle_event(&other)
            .map(|RankingEvent::Activate(index)| Action::ActivateItem(index)),
    }
}

pub fn run(config: &ResolvedConfig, source: Arc<dyn RankingSource>) -> std::io::Result<()> {
    let mut tui = TuiState::new();
    let mut app = App::new(config.default_category, tui.selection_context());
    info!(
        "TUI starting: source={}, category={}",
        source.name(),
        app.selected_category
    );

    let mut terminal = ratatui::init();

    // Channel for actions from fetch tasks
    let (tx, rx) = mpsc::channel();
    let mut fetch_handles: Vec<tokio::task::AbortHandle> = Vec::new();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut pending = vec![Action::Refresh];

    'event_loop: loop {
        // Apply queued actions: startup refresh, key presses, fetch results.
        for action in pending.drain(..).chain(std::iter::from_fn(|| rx.try_recv().ok())) {
            needs_redraw = true;
            debug!("Event loop applying: {:?}", action);
            let category_before = app.selected_category;
            match update(&mut app, action) {
                Effect::Quit => break 'event_loop,
                Effect::SpawnFetches(generation) => {
                    for handle in fetch_handles.drain(..) {
                        handle.abort();
                    }
                    tui.refreshed_at = None;
                    fetch_handles = spawn_fetches(source.clone(), generation, tx.clone());
                }
                Effect::None => {}
            }
            if app.selected_category != category_before {
                tui.ranking_list.reset();
            }
        }

        let readiness = app.readiness();
        if readiness == OverallReadiness::Ready && tui.refreshed_at.is_none() {
            tui.refreshed_at = Some(chrono::Local::now().format("%H:%M:%S").to_string());
        }

        let loading = readiness == OverallReadiness::Loading;
        if loading {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let frame_index = (start_time.elapsed().as_millis() / 120) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, frame_index))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while loading, long when idle
        let timeout = if loading {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = event_to_action(event, &mut tui) {
                pending.push(action);
            }
        }
    }

    for handle in fetch_handles {
        handle.abort();
    }
    ratatui::restore();
    Ok(())
}

/// Spawns one fetch per category for the given cycle. Returns abort handles
/// so a newer cycle (or exit) can cancel them.
pub fn spawn_fetches(
    source: Arc<dyn RankingSource>,
    generation: u64,
    tx: mpsc::Sender<Action>,
) -> Vec<tokio::task::AbortHandle> {
    info!("Spawning fetch cycle {} via {}", generation, source.name());
    Category::ALL
        .into_iter()
        .map(|category| {
            let source = source.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = source.fetch(category, FIRST_PAGE).await;
                if tx
                    .send(Action::FetchCompleted {
                        category,
                        generation,
                        result,
                    })
                    .is_err()
                {
                    warn!("Failed to deliver {category} result: receiver dropped");
                }
            })
            .abort_handle()
        })
        .collect()
}
