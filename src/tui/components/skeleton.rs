//! # Skeleton Component
//!
//! Placeholder rows shown while any source is still loading. A shimmer band
//! moves down the rows with `frame_index`, so the screen visibly ticks while
//! waiting.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::DISPLAY_LIMIT;
use crate::tui::component::Component;

pub struct Skeleton {
    frame_index: usize,
}

impl Skeleton {
    pub fn new(frame_index: usize) -> Self {
        Self { frame_index }
    }

    fn bar_width(row: usize, available: usize) -> usize {
        // Vary the bar lengths so rows don't look like a solid block.
        let widths = [70, 55, 80, 60, 75, 50, 65, 85, 58];
        available * widths[row % widths.len()] / 100
    }
}

impl Component for Skeleton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let available = (area.width as usize).saturating_sub(4);
        let highlighted = self.frame_index % DISPLAY_LIMIT;

        let lines: Vec<Line> = (0..DISPLAY_LIMIT.min(area.height as usize))
            .map(|row| {
                let shade = if row == highlighted { Color::Gray } else { Color::DarkGray };
                Line::from(vec![
                    Span::styled(" ▪  ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        "▒".repeat(Self::bar_width(row, available)),
                        Style::default().fg(shade),
                    ),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}
