use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use smart_scheduler::app::{AppState, FormField};

const FIELDS: [FormField; 4] = [FormField::Title, FormField::Date, FormField::Time, FormField::Notes];

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Title => "Enter event title",
        FormField::Date => "YYYY-MM-DD",
        FormField::Time => "HH:MM",
        FormField::Notes => "Add any additional notes...",
    }
}

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(form) = &app.event_form else {
        return;
    };

    let area = f.size();
    let form_width = 64.min(area.width);
    let form_height = 20.min(area.height);
    let x = (area.width.saturating_sub(form_width)) / 2;
    let y = (area.height.saturating_sub(form_height)) / 2;

    let form_area = ratatui::layout::Rect {
        x,
        y,
        width: form_width,
        height: form_height,
    };

    f.render_widget(Clear, form_area);

    let active_color = app.theme.selected_bg;
    let inactive_color = app.theme.muted;

    let mut form_text = vec![
        Line::from(vec![Span::styled("Create New Event", Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
    ];

    for field in FIELDS {
        let is_active = form.active_field == field;
        let label_color = if is_active { active_color } else { inactive_color };
        let value = form.value(field);

        let mut spans = vec![
            Span::styled(format!("{}: ", field.label()), Style::default().fg(label_color)),
        ];
        if value.is_empty() {
            spans.push(Span::styled(placeholder(field), Style::default().fg(inactive_color)));
        } else {
            spans.push(Span::raw(value));
        }
        if is_active {
            spans.push(Span::styled("_", Style::default().fg(active_color)));
        }
        form_text.push(Line::from(spans));

        match form.error(field) {
            Some(message) => form_text.push(Line::from(vec![
                Span::styled(format!("  {}", message), Style::default().fg(app.theme.error)),
            ])),
            None => form_text.push(Line::from("")),
        }
    }

    form_text.extend(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(app.theme.help_section)),
            Span::raw(" = Next field | "),
            Span::styled("Enter", Style::default().fg(app.theme.success)),
            Span::raw(" = Add Event | "),
            Span::styled("Esc", Style::default().fg(app.theme.error)),
            Span::raw(" = Cancel"),
        ]),
    ]);

    let form_paragraph = Paragraph::new(form_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Add Event "))
        .alignment(Alignment::Left);

    f.render_widget(form_paragraph, form_area);
}
