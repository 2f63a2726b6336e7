//! # Ranking List Component
//!
//! The ranked items of the selected category, one row each:
//!
//! ```text
//!  1  Berserk                                   ★ 9.12
//!  2  Vagabond                                  ★ 8.97
//! ```
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `RankingListState` lives in `TuiState` (cursor survives redraws)
//! - `RankingList` is created each frame with borrowed state and props
//!
//! The stat column is omitted entirely for categories without a stat.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::category::CategoryDescriptor;
use crate::core::item::Item;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

/// Columns taken by the rank number and its gap.
const RANK_WIDTH: usize = 4;

/// Persistent cursor state for the ranking list.
#[derive(Default)]
pub struct RankingListState {
    pub list_state: ListState,
    /// Number of rows shown last frame; bounds cursor movement.
    pub len: usize,
}

impl RankingListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Syncs the row count, keeping the cursor on a valid row.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        let selected = match (len, self.list_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (_, Some(i)) => Some(i.min(len - 1)),
        };
        self.list_state.select(selected);
    }

    pub fn reset(&mut self) {
        self.list_state = ListState::default();
        self.set_len(self.len);
    }
}

/// Events emitted by the ranking list.
#[derive(Debug, PartialEq, Eq)]
pub enum RankingEvent {
    Activate(usize),
}

impl EventHandler for RankingListState {
    type Event = RankingEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<RankingEvent> {
        if self.len == 0 {
            return None;
        }
        let current = self.list_state.selected().unwrap_or(0);
        match event {
            TuiEvent::CursorUp => self.list_state.select(Some(current.saturating_sub(1))),
            TuiEvent::CursorDown => self.list_state.select(Some((current + 1).min(self.len - 1))),
            TuiEvent::CursorFirst => self.list_state.select(Some(0)),
            TuiEvent::CursorLast => self.list_state.select(Some(self.len - 1)),
            TuiEvent::Activate => return Some(RankingEvent::Activate(current)),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the ranking list.
pub struct RankingList<'a> {
    state: &'a mut RankingListState,
    items: &'a [Item],
    descriptor: &'static CategoryDescriptor,
}

impl<'a> RankingList<'a> {
    pub fn new(
        state: &'a mut RankingListState,
        items: &'a [Item],
        descriptor: &'static CategoryDescriptor,
    ) -> Self {
        Self {
            state,
            items,
            descriptor,
        }
    }

    fn row(&self, rank: usize, item: &Item, width: usize, is_selected: bool) -> ListItem<'static> {
        let accent = theme::color(self.descriptor.color);
        let stat = self
            .descriptor
            .stat_value(item)
            .map(|value| format!("{} {}", theme::glyph(self.descriptor.stat_icon), value));
        let stat_width = stat.as_deref().map_or(0, |s| s.width() + 1);

        let title_width = width.saturating_sub(RANK_WIDTH + stat_width);
        let title = truncate_to_width(&item.title, title_width);
        let padding = " ".repeat(title_width.saturating_sub(title.width()));

        let base = if is_selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            Span::styled(
                format!("{rank:>2}  "),
                if is_selected { base } else { Style::default().fg(Color::DarkGray) },
            ),
            Span::styled(format!("{title}{padding}"), base),
        ];
        if let Some(stat) = stat {
            spans.push(Span::styled(
                format!(" {stat}"),
                if is_selected { base } else { Style::default().fg(accent) },
            ));
        }
        ListItem::new(Line::from(spans))
    }
}

impl Component for RankingList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.set_len(self.items.len());
        let selected = self.state.selected();
        let width = area.width as usize;

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| self.row(i + 1, item, width, selected == Some(i)))
            .collect();

        frame.render_stateful_widget(List::new(rows), area, &mut self.state.list_state);
    }
}

/// Truncate to at most `max_width` display columns, ending in "…" if cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::category::Category;
    use crate::test_support::items;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(items: &[Item], category: Category, state: &mut RankingListState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(50, 10)).unwrap();
        terminal
            .draw(|f| RankingList::new(state, items, category.descriptor()).render(f, f.area()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_rows_show_rank_title_and_stat() {
        let list = vec![Item::new("1", "Berserk").with_bayesian(9.123)];
        let text = render(&list, Category::Top, &mut RankingListState::new());
        assert!(text.contains(" 1  Berserk"));
        assert!(text.contains("★ 9.12"));
    }

    #[test]
    fn test_follows_are_compact() {
        let list = vec![Item::new("1", "Popular").with_follows(15_300)];
        let text = render(&list, Category::Favourite, &mut RankingListState::new());
        assert!(text.contains("15.3K"));
    }

    #[test]
    fn test_new_category_hides_stat() {
        let list = vec![Item::new("1", "Fresh").with_bayesian(7.5)];
        let text = render(&list, Category::New, &mut RankingListState::new());
        assert!(text.contains("Fresh"));
        assert!(!text.contains("7.50"));
    }

    #[test]
    fn test_cursor_is_clamped_and_activates_current_row() {
        let list = items("t", 3);
        let mut state = RankingListState::new();
        render(&list, Category::Top, &mut state);
        assert_eq!(state.selected(), Some(0));

        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected(), Some(2));
        assert_eq!(state.handle_event(&TuiEvent::Activate), Some(RankingEvent::Activate(2)));

        state.handle_event(&TuiEvent::CursorFirst);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_shrinking_list_pulls_cursor_back() {
        let mut state = RankingListState::new();
        state.set_len(9);
        state.handle_event(&TuiEvent::CursorLast);
        assert_eq!(state.selected(), Some(8));
        state.set_len(3);
        assert_eq!(state.selected(), Some(2));
        state.set_len(0);
        assert_eq!(state.selected(), None);
        assert_eq!(state.handle_event(&TuiEvent::Activate), None);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Berserk", 10), "Berserk");
        assert_eq!(truncate_to_width("Berserk", 5), "Bers…");
        assert_eq!(truncate_to_width("Berserk", 0), "");
        // Wide characters count as two columns.
        assert_eq!(truncate_to_width("進撃の巨人", 5), "進撃…");
    }
}
