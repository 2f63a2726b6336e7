use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::fetch::OverallReadiness;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CategoryTabs, Header, RankingList, Skeleton, StatusBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, frame_index: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(Header::height()),
        Length(1),
        Length(1),
        Length(1),
        Min(0),
        Length(1),
        Length(1),
    ]);
    let [header_area, _, tabs_area, _, main_area, selected_area, status_area] =
        layout.areas(frame.area());

    Header::new(app.descriptor()).render(frame, header_area);
    CategoryTabs::new(app.selected_category).render(frame, tabs_area);

    // Main area - skeleton, error, or the ranked list. Never a partial list.
    let readiness = app.readiness();
    match &readiness {
        OverallReadiness::Loading => Skeleton::new(frame_index).render(frame, main_area),
        OverallReadiness::Error(message) => draw_error_view(frame, main_area, message),
        OverallReadiness::Ready => {
            let items = app.displayed_list();
            if items.is_empty() {
                tui.ranking_list.set_len(0);
                draw_empty_view(frame, main_area);
            } else {
                RankingList::new(&mut tui.ranking_list, items, app.descriptor())
                    .render(frame, main_area);
            }
        }
    }

    frame.render_widget(Span::styled(selected_line(tui), Style::default().fg(Color::Gray)), selected_area);

    StatusBar::new(status_message(&readiness, tui), tui.routes.current())
        .render(frame, status_area);
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(Line::from(Span::styled(
        format!("Error: {error_msg}"),
        Style::default().fg(Color::Red),
    )))
    .block(Block::bordered().title("ERROR").border_style(Style::default().fg(Color::Red)))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}

fn draw_empty_view(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("No titles in this category yet.")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn selected_line(tui: &TuiState) -> String {
    match tui.selection.current() {
        Some(item) => format!("Selected: {} [{}]", item.title, item.cover_or_placeholder()),
        None => String::new(),
    }
}

pub fn status_message(readiness: &OverallReadiness, tui: &TuiState) -> String {
    match readiness {
        OverallReadiness::Loading => "Loading…".to_string(),
        OverallReadiness::Error(_) => "Fetch failed (r to retry)".to_string(),
        OverallReadiness::Ready => match &tui.refreshed_at {
            Some(at) => format!("Updated {at}"),
            None => "Ready".to_string(),
        },
    }
}
