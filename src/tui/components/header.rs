//! # Header Component
//!
//! Title icon, title and subtitle of the selected category. Stateless: the
//! descriptor is the only prop.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::category::CategoryDescriptor;
use crate::tui::component::Component;
use crate::tui::theme;

pub struct Header {
    pub descriptor: &'static CategoryDescriptor,
}

impl Header {
    pub fn new(descriptor: &'static CategoryDescriptor) -> Self {
        Self { descriptor }
    }

    /// Always two lines: title, then subtitle.
    pub fn height() -> u16 {
        2
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let accent = theme::color(self.descriptor.color);
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", theme::glyph(self.descriptor.title_icon)),
                    Style::default().fg(accent),
                ),
                Span::styled(
                    self.descriptor.title,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("  {}", self.descriptor.subtitle.to_uppercase()),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}
