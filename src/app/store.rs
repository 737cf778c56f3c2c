use crate::calendar::{CategoryFilter, Event};

/// Ordered, id-keyed cache of the server's events. All mutation goes through
/// these methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the event, or replaces the entry that already has its id.
    pub fn add(&mut self, event: Event) {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => *existing = event,
            None => self.events.push(event),
        }
    }

    /// Drops every entry with this id. Returns how many were removed.
    pub fn remove_by_id(&mut self, id: &str) -> usize {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        before - self.events.len()
    }

    /// Sets the status of every entry with this id. Returns false when none
    /// matched.
    pub fn patch_status_by_id(&mut self, id: &str, status: &str) -> bool {
        let mut patched = false;
        for event in self.events.iter_mut().filter(|e| e.id == id) {
            event.status = status.to_string();
            patched = true;
        }
        patched
    }

    pub fn replace_all(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn filtered(&self, filter: CategoryFilter) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| filter.matches(event.category))
            .collect()
    }
}
