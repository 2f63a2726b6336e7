//! # StatusBar Component
//!
//! Bottom line showing fetch status, the last route navigated to, and key
//! hints. Purely presentational: all props come from the caller.
//!
//! ## Conditional Formatting
//!
//! 1. **Route present**: `"Updated 14:02:11 | → /manga/42/chapters"`
//! 2. **No route yet**: `"Updated 14:02:11"`
//!
//! Key hints are right-aligned and dropped first on narrow terminals.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

const KEY_HINTS: &str = "←/→ category  ↑/↓ move  ⏎ open  r refresh  q quit";

pub struct StatusBar {
    /// Fetch status text (e.g. "Loading…", "Updated 14:02:11")
    pub status_message: String,
    /// Last route handed to the navigator
    pub route: Option<String>,
}

impl StatusBar {
    pub fn new(status_message: String, route: Option<String>) -> Self {
        Self {
            status_message,
            route,
        }
    }

    pub fn left_text(&self) -> String {
        match &self.route {
            Some(route) => format!("{} | → {}", self.status_message, route),
            None => self.status_message.clone(),
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let left = self.left_text();
        let hints_width = KEY_HINTS.width() as u16;
        let show_hints = (left.width() as u16 + hints_width + 2) <= area.width;

        if !show_hints {
            frame.render_widget(Span::raw(left), area);
            return;
        }

        let [left_area, right_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);
        frame.render_widget(Span::raw(left), left_area);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                KEY_HINTS,
                Style::default().fg(Color::DarkGray),
            ))),
            right_area,
        );
    }
}
