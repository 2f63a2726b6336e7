//! # Category Tabs
//!
//! One tab per registered category, the selected one drawn in its accent
//! color. Tabs come from `Category::ALL`, so the bar cannot offer a category
//! the registry doesn't know.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Tabs;

use crate::core::category::Category;
use crate::tui::component::Component;
use crate::tui::theme;

pub struct CategoryTabs {
    pub selected: Category,
}

impl CategoryTabs {
    pub fn new(selected: Category) -> Self {
        Self { selected }
    }
}

impl Component for CategoryTabs {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = Category::ALL
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let descriptor = category.descriptor();
                Line::from(format!(
                    "{} {} {}",
                    i + 1,
                    theme::glyph(descriptor.title_icon),
                    category.key()
                ))
            })
            .collect();

        let accent = theme::color(self.selected.descriptor().color);
        let tabs = Tabs::new(titles)
            .select(self.selected.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
            .divider(" ");
        frame.render_widget(tabs, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_all_categories_listed() {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        let mut tabs = CategoryTabs::new(Category::New);
        terminal.draw(|f| tabs.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Top"));
        assert!(text.contains("Favourite"));
        assert!(text.contains("New"));
    }

    #[test]
    fn test_selected_tab_uses_accent_color() {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        let mut tabs = CategoryTabs::new(Category::Favourite);
        terminal.draw(|f| tabs.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let rose = buffer
            .content()
            .iter()
            .filter(|cell| cell.fg == Color::LightRed)
            .count();
        assert!(rose > 0);
    }
}
