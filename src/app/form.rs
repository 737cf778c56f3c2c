use std::collections::BTreeMap;

use crate::calendar::CreateEventData;

const DATE_INPUT_MAX: usize = 10;
const TIME_INPUT_MAX: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    #[default]
    Title,
    Date,
    Time,
    Notes,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Event Title *",
            FormField::Date => "Date *",
            FormField::Time => "Time *",
            FormField::Notes => "Notes (Optional)",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Submitted(CreateEventData),
    Cancelled,
}

/// Draft of a new event plus the validation messages from the last submit.
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub draft: CreateEventData,
    pub active_field: FormField,
    errors: BTreeMap<FormField, String>,
}

impl EventForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        let mut form = Self::new();
        form.draft.title = title.into();
        form
    }

    pub fn next_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Title => FormField::Date,
            FormField::Date => FormField::Time,
            FormField::Time => FormField::Notes,
            FormField::Notes => FormField::Title,
        };
    }

    pub fn prev_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Title => FormField::Notes,
            FormField::Date => FormField::Title,
            FormField::Time => FormField::Date,
            FormField::Notes => FormField::Time,
        };
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.draft.title,
            FormField::Date => &self.draft.date,
            FormField::Time => &self.draft.time,
            FormField::Notes => &self.draft.notes,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.draft.title,
            FormField::Date => &mut self.draft.date,
            FormField::Time => &mut self.draft.time,
            FormField::Notes => &mut self.draft.notes,
        }
    }

    /// Replaces a field and drops its error without re-validating.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
        self.errors.remove(&field);
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.active_field;
        let accepted = match field {
            FormField::Date => (c.is_ascii_digit() || c == '-') && self.draft.date.len() < DATE_INPUT_MAX,
            FormField::Time => (c.is_ascii_digit() || c == ':') && self.draft.time.len() < TIME_INPUT_MAX,
            FormField::Title | FormField::Notes => true,
        };
        if !accepted {
            return;
        }
        self.value_mut(field).push(c);
        self.errors.remove(&field);
    }

    pub fn pop_char(&mut self) {
        let field = self.active_field;
        self.value_mut(field).pop();
        self.errors.remove(&field);
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn validate(&mut self) -> bool {
        let mut errors = BTreeMap::new();

        if self.draft.title.trim().is_empty() {
            errors.insert(FormField::Title, "Title is required".to_string());
        }
        if self.draft.date.is_empty() {
            errors.insert(FormField::Date, "Date is required".to_string());
        }
        if self.draft.time.is_empty() {
            errors.insert(FormField::Time, "Time is required".to_string());
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// On success hands back the draft and starts over with an empty one.
    pub fn submit(&mut self) -> Option<FormOutcome> {
        if !self.validate() {
            tracing::debug!("Form submit rejected: {:?}", self.errors.keys().collect::<Vec<_>>());
            return None;
        }

        let data = std::mem::take(&mut self.draft);
        self.errors.clear();
        self.active_field = FormField::Title;
        Some(FormOutcome::Submitted(data))
    }

    pub fn cancel(&self) -> FormOutcome {
        FormOutcome::Cancelled
    }
}
