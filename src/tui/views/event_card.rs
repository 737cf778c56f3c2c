use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use smart_scheduler::ui::{event_card::CardView, theme::Theme};

pub fn height(card: &CardView) -> u16 {
    let notes = u16::from(card.notes.is_some());
    let actions = u16::from(card.is_selected);
    4 + notes + actions
}

pub fn render(f: &mut Frame, card: &CardView, theme: &Theme, area: Rect) {
    let title_style = if card.archived {
        Style::default().fg(theme.muted).add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(&card.title, title_style),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", card.category),
                Style::default().fg(theme.category_color(card.category)),
            ),
        ]),
        Line::from(vec![
            Span::styled("Date: ", Style::default().fg(theme.muted)),
            Span::raw(&card.date_label),
            Span::styled("   Time: ", Style::default().fg(theme.muted)),
            Span::raw(&card.time_label),
        ]),
    ];

    if let Some(notes) = &card.notes {
        lines.push(Line::from(vec![
            Span::styled("Notes: ", Style::default().fg(theme.muted)),
            Span::raw(notes),
        ]));
    }

    if card.is_selected {
        lines.push(Line::from(vec![
            Span::styled("A", Style::default().fg(theme.help_section)),
            Span::raw(format!(" = {} | ", card.archive_label())),
            Span::styled("x", Style::default().fg(theme.error)),
            Span::raw(" = Delete"),
        ]));
    }

    let border_style = if card.is_selected {
        Style::default().fg(theme.selected_bg)
    } else {
        Style::default().fg(theme.muted)
    };

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(content, area);
}
