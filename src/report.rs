//! # Plain Output
//!
//! Non-interactive mode: fetch all three categories concurrently, wait for
//! every one to settle, then print the selected category as text or JSON.
//! Uses the same controller and reducer as the TUI.

use futures::future::join_all;
use log::info;
use serde::Serialize;

use crate::core::action::{Action, update};
use crate::core::category::Category;
use crate::core::fetch::OverallReadiness;
use crate::core::item::Item;
use crate::core::state::{App, FIRST_PAGE};
use crate::source::RankingSource;

/// Runs one fetch cycle to completion.
pub async fn fetch_all(app: &mut App, source: &dyn RankingSource) {
    let generation = app.begin_fetch_cycle();
    let fetches = Category::ALL.map(|category| async move {
        (category, source.fetch(category, FIRST_PAGE).await)
    });
    for (category, result) in join_all(fetches).await {
        update(
            app,
            Action::FetchCompleted {
                category,
                generation,
                result,
            },
        );
    }
    info!("Fetch cycle {} settled: {:?}", generation, app.readiness());
}

/// Renders the current view as plain text. Errors render as a single
/// `Error: …` line, matching the TUI's all-or-nothing behavior.
pub fn render_plain(app: &App) -> String {
    let descriptor = app.descriptor();
    match app.readiness() {
        OverallReadiness::Loading => "Loading…\n".to_string(),
        OverallReadiness::Error(message) => format!("Error: {message}\n"),
        OverallReadiness::Ready => {
            let mut out = format!("{} - {}\n", descriptor.title, descriptor.subtitle);
            for (i, item) in app.displayed_list().iter().enumerate() {
                match app.display_value(item) {
                    Some(value) => out.push_str(&format!(
                        "{:>2}. {} ({}: {})\n",
                        i + 1,
                        item.title,
                        descriptor.label,
                        value
                    )),
                    None => out.push_str(&format!("{:>2}. {}\n", i + 1, item.title)),
                }
            }
            out
        }
    }
}

#[derive(Serialize)]
struct JsonRanking<'a> {
    category: Category,
    title: &'static str,
    label: &'static str,
    items: Vec<JsonEntry<'a>>,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    rank: usize,
    #[serde(flatten)]
    item: &'a Item,
    /// Stat as shown in the list; absent for categories without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    display_value: Option<String>,
}

/// Renders the displayed list of the selected category as pretty JSON.
/// Returns `None` unless every source is ready.
pub fn render_json(app: &App) -> Option<Result<String, serde_json::Error>> {
    if app.readiness() != OverallReadiness::Ready {
        return None;
    }
    let descriptor = app.descriptor();
    let ranking = JsonRanking {
        category: app.selected_category,
        title: descriptor.title,
        label: descriptor.label,
        items: app
            .displayed_list()
            .iter()
            .enumerate()
            .map(|(i, item)| JsonEntry {
                rank: i + 1,
                item,
                display_value: app.display_value(item),
            })
            .collect(),
    };
    Some(serde_json::to_string_pretty(&ranking))
}
