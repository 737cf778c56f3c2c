pub mod api;
pub mod app;
pub mod calendar;
pub mod home;
pub mod input;
pub mod storage;
pub mod ui;

pub use api::{ApiError, EventsApi, HttpEventsClient};
pub use app::{Action, AppState, CardAction, Mode, Outcome};
pub use calendar::{Category, CategoryFilter, CreateEventData, Event};
pub use home::Home;

pub use input::{command_mode, insert_mode, normal_mode};
