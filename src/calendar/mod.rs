pub mod event;
pub mod category;

pub use event::{ArchiveResult, CreateEventData, Event, sort_chronologically, ARCHIVED_STATUS, ACTIVE_STATUS};
pub use category::{Category, CategoryFilter};
