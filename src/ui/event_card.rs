use chrono::{DateTime, NaiveDate};

use crate::app::CardAction;
use crate::calendar::event::parse_clock_time;
use crate::calendar::{Category, Event};

/// `Jul 04, 2025`; the raw input when it is not a recognisable date.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()))
        .map(|date| date.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `2:30 PM`; the raw input when it is not `HH:MM[:SS]`.
pub fn format_time(raw: &str) -> String {
    parse_clock_time(raw)
        .map(|time| time.format("%-I:%M %p").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub date_label: String,
    pub time_label: String,
    pub notes: Option<String>,
    pub archived: bool,
    pub is_selected: bool,
}

impl CardView {
    pub fn from_event(event: &Event, is_selected: bool) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            category: event.category,
            date_label: format_date(&event.date),
            time_label: format_time(&event.time),
            notes: event.has_notes().then(|| event.notes.clone().unwrap_or_default()),
            archived: event.is_archived(),
            is_selected,
        }
    }

    pub fn archive_label(&self) -> &'static str {
        if self.archived { "Restore" } else { "Archive" }
    }

    pub fn archive_action(&self) -> CardAction {
        CardAction::ToggleArchive(self.id.clone())
    }

    pub fn delete_action(&self) -> CardAction {
        CardAction::Delete(self.id.clone())
    }
}
