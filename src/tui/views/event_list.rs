use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};
use smart_scheduler::{
    app::AppState,
    ui::event_list::{self, ListView, EMPTY_HINT, EMPTY_TITLE, LOADING_TEXT},
};
use crate::tui::views::event_card;

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let events = app.filtered_events();
    let view = event_list::build(app.loading, &events, app.selected_event_index);

    match view {
        ListView::Loading => {
            let loading = Paragraph::new(LOADING_TEXT)
                .style(Style::default().fg(app.theme.muted))
                .alignment(Alignment::Center);
            f.render_widget(loading, centered_line(area, 0));
        }
        ListView::Empty => {
            let empty = Paragraph::new(vec![
                Line::styled(EMPTY_TITLE, Style::default().add_modifier(Modifier::BOLD)),
                Line::from(""),
                Line::styled(EMPTY_HINT, Style::default().fg(app.theme.muted)),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            f.render_widget(empty, centered_line(area, 1));
        }
        ListView::Cards(cards) => {
            let heights: Vec<u16> = cards.iter().map(event_card::height).collect();
            let start = first_visible(&heights, app.selected_event_index, area.height);

            let mut y = area.y;
            let bottom = area.y + area.height;
            for (card, height) in cards.iter().zip(&heights).skip(start) {
                if y + height > bottom {
                    break;
                }
                let card_area = Rect { x: area.x, y, width: area.width, height: *height };
                event_card::render(f, card, &app.theme, card_area);
                y += height;
            }
        }
    }
}

/// Index of the first card to draw so that `selected` stays on screen.
fn first_visible(heights: &[u16], selected: usize, available: u16) -> usize {
    let selected = selected.min(heights.len().saturating_sub(1));
    let mut start = selected;
    let mut used = heights.get(selected).copied().unwrap_or(0);

    while start > 0 && used + heights[start - 1] <= available {
        start -= 1;
        used += heights[start];
    }

    start
}

fn centered_line(area: Rect, extra: u16) -> Rect {
    let height = (1 + extra * 3).min(area.height);
    Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: area.width,
        height,
    }
}
