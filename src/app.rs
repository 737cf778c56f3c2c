pub mod form;
pub mod message;
pub mod store;

use std::time::{Duration, Instant};

use crate::calendar::{CategoryFilter, Event};
use crate::ui::theme::Theme;

pub use form::{EventForm, FormField, FormOutcome};
pub use message::{Action, CardAction, Outcome};
pub use store::EventStore;

pub const LOAD_FAILED: &str = "Failed to load events. Please try again.";
pub const CREATED: &str = "Event created successfully!";
pub const CREATE_FAILED: &str = "Failed to create event. Please check your input.";
pub const DELETED: &str = "Event deleted.";
pub const DELETE_FAILED: &str = "Failed to delete event.";
pub const ARCHIVED: &str = "Event archived";
pub const RESTORED: &str = "Event restored";
pub const ARCHIVE_FAILED: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    Insert,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub raised_at: Instant,
}

impl Notification {
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.raised_at) >= ttl
    }
}

pub struct AppState {
    pub mode: Mode,
    pub store: EventStore,
    pub loading: bool,
    pub category_filter: CategoryFilter,
    pub event_form: Option<EventForm>,
    pub notification: Option<Notification>,
    pub selected_event_index: usize,
    pub pending_requests: usize,
    pub pending_reloads: usize,
    pub command_buffer: String,
    pub show_help: bool,
    pub help_scroll: usize,
    pub theme: Theme,
}

impl AppState {
    /// Starts in the loading state; the first fetch is expected right away.
    pub fn new() -> Self {
        Self {
            mode: Mode::Normal,
            store: EventStore::new(),
            loading: true,
            category_filter: CategoryFilter::All,
            event_form: None,
            notification: None,
            selected_event_index: 0,
            pending_requests: 0,
            pending_reloads: 0,
            command_buffer: String::new(),
            show_help: false,
            help_scroll: 0,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_filter(mut self, filter: CategoryFilter) -> Self {
        self.category_filter = filter;
        self
    }

    pub fn show_form(&self) -> bool {
        self.event_form.is_some()
    }

    pub fn open_form(&mut self, form: EventForm) {
        self.event_form = Some(form);
        self.mode = Mode::Insert;
    }

    pub fn close_form(&mut self) {
        self.event_form = None;
        if self.mode == Mode::Insert {
            self.mode = Mode::Normal;
        }
    }

    pub fn toggle_form(&mut self) {
        if self.show_form() {
            self.close_form();
        } else {
            self.open_form(EventForm::new());
        }
    }

    pub fn handle_form_outcome(&mut self, outcome: FormOutcome) -> Option<Action> {
        match outcome {
            FormOutcome::Submitted(data) => Some(Action::Create(data)),
            FormOutcome::Cancelled => {
                self.close_form();
                None
            }
        }
    }

    pub fn filtered_events(&self) -> Vec<&Event> {
        self.store.filtered(self.category_filter)
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.category_filter = filter;
        self.selected_event_index = 0;
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.filtered_events().get(self.selected_event_index).copied()
    }

    pub fn move_event_selection_down(&mut self) {
        let event_count = self.filtered_events().len();
        if event_count > 0 && self.selected_event_index < event_count - 1 {
            self.selected_event_index += 1;
        }
    }

    pub fn move_event_selection_up(&mut self) {
        self.selected_event_index = self.selected_event_index.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let event_count = self.filtered_events().len();
        self.selected_event_index = self.selected_event_index.min(event_count.saturating_sub(1));
    }

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notification = Some(Notification {
            kind,
            message: message.into(),
            raised_at: Instant::now(),
        });
    }

    pub fn expire_notification(&mut self, ttl: Duration) {
        let now = Instant::now();
        if self.notification.as_ref().is_some_and(|n| n.is_expired_at(now, ttl)) {
            self.notification = None;
        }
    }

    /// Marks an action as in flight before its request is sent.
    pub fn begin(&mut self, action: &Action) {
        if matches!(action, Action::Reload) {
            self.pending_reloads += 1;
            self.loading = true;
        }
        self.pending_requests += 1;
    }

    pub fn apply(&mut self, outcome: Outcome) {
        self.pending_requests = self.pending_requests.saturating_sub(1);

        match outcome {
            Outcome::Loaded(result) => {
                self.pending_reloads = self.pending_reloads.saturating_sub(1);
                match result {
                    Ok(events) => self.store.replace_all(events),
                    Err(e) => {
                        tracing::error!("Failed to load events: {}", e);
                        self.notify(NotificationKind::Error, LOAD_FAILED);
                    }
                }
                self.loading = self.pending_reloads > 0;
            }
            Outcome::Created(Ok(events)) => {
                self.store.replace_all(events);
                self.notify(NotificationKind::Success, CREATED);
                self.close_form();
            }
            Outcome::Created(Err(e)) => {
                tracing::error!("Failed to add event: {}", e);
                self.notify(NotificationKind::Error, CREATE_FAILED);
            }
            Outcome::Deleted { id, result: Ok(()) } => {
                if self.store.remove_by_id(&id) == 0 {
                    tracing::warn!("Deleted event {} is no longer listed", id);
                }
                self.notify(NotificationKind::Success, DELETED);
            }
            Outcome::Deleted { id, result: Err(e) } => {
                tracing::error!("Failed to delete event {}: {}", id, e);
                self.notify(NotificationKind::Error, DELETE_FAILED);
            }
            Outcome::Archived { id, result: Ok(updated) } => {
                if !self.store.patch_status_by_id(&id, &updated.status) {
                    tracing::warn!("Archived event {} is no longer listed", id);
                }
                let message = if updated.status == crate::calendar::ARCHIVED_STATUS {
                    ARCHIVED
                } else {
                    RESTORED
                };
                self.notify(NotificationKind::Success, message);
            }
            Outcome::Archived { id, result: Err(e) } => {
                tracing::error!("Failed to archive/restore event {}: {}", id, e);
                self.notify(NotificationKind::Error, ARCHIVE_FAILED);
            }
        }

        self.clamp_selection();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
