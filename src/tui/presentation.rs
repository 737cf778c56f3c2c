use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use smart_scheduler::app::{AppState, Mode, NotificationKind};
use crate::tui::{dialogs, views};

pub fn ui(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    render_header(f, app, chunks[0]);
    render_section_title(f, app, chunks[1]);
    views::event_list::render(f, app, chunks[2]);
    render_status_bar(f, app, chunks[3]);

    if app.event_form.is_some() {
        dialogs::event_form::render(f, app);
    }

    if app.show_help {
        dialogs::help::render(f, app);
    }
}

fn render_header(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let toggle_label = if app.show_form() { "Close Form" } else { "Add Event" };

    let header = Paragraph::new(Line::from(vec![
        Span::styled("Smart Scheduler", Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        Span::styled(" - Manage your events and stay organized", Style::default().fg(app.theme.muted)),
        Span::raw("   "),
        Span::styled("a", Style::default().fg(app.theme.success)),
        Span::raw(format!(" = {}", toggle_label)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn render_section_title(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let count = Paragraph::new(format!(" Upcoming Events ({})", app.store.len()))
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(count, halves[0]);

    let filter = Paragraph::new(Line::from(vec![
        Span::styled("f", Style::default().fg(app.theme.help_section)),
        Span::raw(format!(" = Filter: {} ", app.category_filter.label())),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(filter, halves[1]);
}

fn render_status_bar(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let (text, color, alignment) = if matches!(app.mode, Mode::Command) {
        (app.command_buffer.clone(), app.theme.command_mode, Alignment::Left)
    } else if let Some(notification) = &app.notification {
        let color = match notification.kind {
            NotificationKind::Success => app.theme.success,
            NotificationKind::Error => app.theme.error,
        };
        (notification.message.clone(), color, Alignment::Center)
    } else if app.pending_requests > 0 {
        ("Working...".to_string(), app.theme.muted, Alignment::Center)
    } else {
        (
            "Press 'q' to quit, '?' for help".to_string(),
            app.theme.status_bar,
            Alignment::Center,
        )
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(alignment)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}
