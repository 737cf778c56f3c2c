use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use smart_scheduler::app::AppState;

pub fn render(f: &mut Frame, app: &AppState) {
    let area = f.size();
    let help_width = 60.min(area.width);
    let help_height = 23.min(area.height);
    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = ratatui::layout::Rect {
        x,
        y,
        width: help_width,
        height: help_height,
    };

    f.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(vec![Span::styled("Smart Scheduler Help", Style::default().fg(app.theme.help_title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![Span::styled("Navigation:", Style::default().fg(app.theme.help_section))]),
        Line::from("  j/k      - Next/previous event"),
        Line::from("  f        - Cycle category filter"),
        Line::from("  r        - Reload events"),
        Line::from(""),
        Line::from(vec![Span::styled("Event Management:", Style::default().fg(app.theme.help_section))]),
        Line::from("  a        - Open/close the add event form"),
        Line::from("  A        - Archive or restore selected event"),
        Line::from("  x        - Delete selected event"),
        Line::from(""),
        Line::from(vec![Span::styled("Add Event Form:", Style::default().fg(app.theme.help_section))]),
        Line::from("  Tab      - Next field (Shift-Tab for previous)"),
        Line::from("  Enter    - Submit the event"),
        Line::from("  Esc      - Cancel and close the form"),
        Line::from(""),
        Line::from(vec![Span::styled("Commands:", Style::default().fg(app.theme.help_section))]),
        Line::from("  :q       - Quit"),
        Line::from("  :r       - Reload events from the server"),
        Line::from("  :new     - Add event (:new [Meeting title])"),
        Line::from("  :filter  - Filter by category (:filter work)"),
        Line::from("  :theme   - Change theme (:theme gruvbox)"),
        Line::from("  :help    - Show this help"),
        Line::from(""),
    ];

    let visible_lines = help_height.saturating_sub(3) as usize;
    let total_lines = help_text.len();
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let scroll = app.help_scroll.min(max_scroll);

    let scrolled_text: Vec<Line> = help_text
        .into_iter()
        .skip(scroll)
        .take(visible_lines)
        .collect();

    let help_paragraph = Paragraph::new(scrolled_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!(" Help (j/k to scroll, q to close) [{}/{}] ", scroll + 1, total_lines))
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}
