pub mod client;

pub use client::{ApiError, EventsApi, HttpEventsClient, DEFAULT_BASE_URL};

#[cfg(test)]
pub use client::MockEventsApi;
