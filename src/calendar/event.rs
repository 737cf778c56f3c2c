use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::calendar::Category;

pub const ARCHIVED_STATUS: &str = "archived";
pub const ACTIVE_STATUS: &str = "active";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "category_or_other")]
    pub category: Category,
    #[serde(default = "default_status", deserialize_with = "status_or_active")]
    pub status: String,
}

/// Payload for `POST /events`. The server fills in id, category and status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventData {
    pub title: String,
    pub date: String,
    pub time: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveResult {
    pub id: String,
    pub status: String,
}

fn default_status() -> String {
    ACTIVE_STATUS.to_string()
}

fn category_or_other<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(Category::from).unwrap_or_default())
}

/// `null` reads the same as an absent status.
fn status_or_active<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.unwrap_or_else(default_status))
}

impl Event {
    pub fn is_archived(&self) -> bool {
        self.status == ARCHIVED_STATUS
    }

    pub fn has_notes(&self) -> bool {
        self.notes.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// Combined local date-time used for chronological ordering.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()?;
        let time = parse_clock_time(&self.time)?;
        Some(date.and_time(time))
    }
}

pub fn parse_clock_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

/// Sorts ascending by date and time. Entries without a parseable start keep
/// their relative order after every dated entry.
pub fn sort_chronologically(events: &mut [Event]) {
    events.sort_by(|a, b| match (a.starts_at(), b.starts_at()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_event(id: &str, date: &str, time: &str) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {}", id),
            date: date.to_string(),
            time: time.to_string(),
            notes: None,
            category: Category::Work,
            status: ACTIVE_STATUS.to_string(),
        }
    }

    #[test]
    fn deserializes_server_event() {
        let json = r#"{
            "id": "64f1",
            "title": "Dentist",
            "date": "2025-07-04",
            "time": "14:30",
            "notes": "Bring insurance card",
            "category": "Personal",
            "status": "active"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.id, "64f1");
        assert_eq!(event.category, Category::Personal);
        assert_eq!(event.notes.as_deref(), Some("Bring insurance card"));
        assert!(!event.is_archived());
    }

    #[test]
    fn missing_optional_fields_get_defaults() {
        let json = r#"{"id": "1", "title": "Standup", "date": "2025-01-02", "time": "09:00"}"#;

        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.notes, None);
        assert_eq!(event.category, Category::Other);
        assert_eq!(event.status, ACTIVE_STATUS);
    }

    #[test]
    fn null_category_and_status_get_defaults() {
        let json = r#"{
            "id": "1",
            "title": "Standup",
            "date": "2025-01-02",
            "time": "09:00",
            "notes": null,
            "category": null,
            "status": null
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.notes, None);
        assert_eq!(event.category, Category::Other);
        assert_eq!(event.status, ACTIVE_STATUS);
    }

    #[test]
    fn one_null_row_does_not_poison_the_list() {
        let json = r#"[
            {"id": "1", "title": "A", "date": "2025-01-02", "time": "09:00", "category": "Work"},
            {"id": "2", "title": "B", "date": "2025-01-03", "time": "10:00", "category": null, "status": null}
        ]"#;

        let events: Vec<Event> = serde_json::from_str(json).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].category, Category::Work);
        assert_eq!(events[1].category, Category::Other);
        assert_eq!(events[1].status, ACTIVE_STATUS);
    }

    #[test]
    fn archived_status_is_exact_match() {
        let mut event = create_test_event("1", "2025-01-02", "09:00");
        event.status = "archived".to_string();
        assert!(event.is_archived());

        event.status = "Archived".to_string();
        assert!(!event.is_archived());
    }

    #[test]
    fn empty_notes_are_not_shown() {
        let mut event = create_test_event("1", "2025-01-02", "09:00");
        event.notes = Some(String::new());
        assert!(!event.has_notes());
    }

    #[test]
    fn create_payload_serializes_only_draft_fields() {
        let data = CreateEventData {
            title: "Review".to_string(),
            date: "2025-03-01".to_string(),
            time: "10:15".to_string(),
            notes: String::new(),
        };

        let value = serde_json::to_value(&data).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"title": "Review", "date": "2025-03-01", "time": "10:15", "notes": ""})
        );
    }

    #[test]
    fn starts_at_accepts_seconds() {
        let event = create_test_event("1", "2025-01-02", "09:00:30");
        let expected = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(9, 0, 30)
            .unwrap();
        assert_eq!(event.starts_at(), Some(expected));
    }

    #[test]
    fn sort_orders_by_date_then_time() {
        let mut events = vec![
            create_test_event("late", "2025-01-03", "08:00"),
            create_test_event("afternoon", "2025-01-02", "15:00"),
            create_test_event("morning", "2025-01-02", "09:00"),
        ];

        sort_chronologically(&mut events);

        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["morning", "afternoon", "late"]);
    }

    #[test]
    fn sort_puts_unparseable_entries_last_in_input_order() {
        let mut events = vec![
            create_test_event("bad1", "soon", "09:00"),
            create_test_event("ok", "2025-01-02", "09:00"),
            create_test_event("bad2", "2025-01-02", "noon"),
        ];

        sort_chronologically(&mut events);

        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["ok", "bad1", "bad2"]);
    }
}
