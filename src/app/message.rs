use crate::api::ApiError;
use crate::calendar::{ArchiveResult, CreateEventData, Event};

/// What a card asks the root to do with its event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Delete(String),
    ToggleArchive(String),
}

/// Work that needs the remote service.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Reload,
    Create(CreateEventData),
    Delete(String),
    ToggleArchive(String),
}

impl From<CardAction> for Action {
    fn from(action: CardAction) -> Self {
        match action {
            CardAction::Delete(id) => Action::Delete(id),
            CardAction::ToggleArchive(id) => Action::ToggleArchive(id),
        }
    }
}

/// Settled result of an [`Action`], applied to state in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Loaded(Result<Vec<Event>, ApiError>),
    /// The re-fetched, sorted collection after a create.
    Created(Result<Vec<Event>, ApiError>),
    Deleted {
        id: String,
        result: Result<(), ApiError>,
    },
    Archived {
        id: String,
        result: Result<ArchiveResult, ApiError>,
    },
}
