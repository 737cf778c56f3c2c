use crate::calendar::{ArchiveResult, CreateEventData, Event};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://smart-scheduler-server.onrender.com";

/// Failures are flattened per call site; the cause is logged, not carried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to fetch events")]
    FetchFailed,
    #[error("Failed to create event")]
    CreateFailed,
    #[error("Failed to delete event")]
    DeleteFailed,
    #[error("Failed to archive event")]
    ArchiveFailed,
}

#[derive(Debug, Deserialize)]
struct EventListResponse {
    data: Vec<Event>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventsApi: Send + Sync {
    async fn fetch_events(&self) -> Result<Vec<Event>, ApiError>;

    async fn create_event(&self, data: &CreateEventData) -> Result<Event, ApiError>;

    async fn delete_event(&self, id: &str) -> Result<(), ApiError>;

    async fn archive_event(&self, id: &str) -> Result<ArchiveResult, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpEventsClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpEventsClient {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/events", self.base_url)
    }

    fn event_url(&self, id: &str) -> String {
        format!("{}/events/{}", self.base_url, urlencoding::encode(id))
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        operation: &str,
        failure: ApiError,
    ) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("{} request failed: {}", operation, e);
            failure.clone()
        })?;

        let status = response.status();
        tracing::info!("{} response status: {}", operation, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("{} failed. Status: {}, Body: {}", operation, status, body);
            return Err(failure);
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        operation: &str,
        failure: ApiError,
    ) -> Result<T, ApiError> {
        let body = response.text().await.map_err(|e| {
            tracing::error!("{} body could not be read: {}", operation, e);
            failure.clone()
        })?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("{} returned malformed JSON: {}. Body: {}", operation, e, body);
            failure
        })
    }
}

impl Default for HttpEventsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventsApi for HttpEventsClient {
    async fn fetch_events(&self) -> Result<Vec<Event>, ApiError> {
        let url = self.collection_url();
        tracing::info!("Fetching events from {}", url);

        let response = self
            .send(self.client.get(&url), "Fetch events", ApiError::FetchFailed)
            .await?;

        let list: EventListResponse =
            Self::decode(response, "Fetch events", ApiError::FetchFailed).await?;

        tracing::info!("Fetched {} events successfully", list.data.len());
        Ok(list.data)
    }

    async fn create_event(&self, data: &CreateEventData) -> Result<Event, ApiError> {
        let url = self.collection_url();
        tracing::info!("Creating event: {} on {} {}", data.title, data.date, data.time);
        tracing::debug!("POST {} with payload: {:?}", url, data);

        let response = self
            .send(self.client.post(&url).json(data), "Create event", ApiError::CreateFailed)
            .await?;

        let created: Event = Self::decode(response, "Create event", ApiError::CreateFailed).await?;

        tracing::info!("Event created successfully with ID: {}", created.id);
        Ok(created)
    }

    async fn delete_event(&self, id: &str) -> Result<(), ApiError> {
        let url = self.event_url(id);
        tracing::info!("Deleting event {}", id);

        self.send(self.client.delete(&url), "Delete event", ApiError::DeleteFailed)
            .await?;

        tracing::info!("Event {} deleted", id);
        Ok(())
    }

    async fn archive_event(&self, id: &str) -> Result<ArchiveResult, ApiError> {
        let url = format!("{}/archive", self.event_url(id));
        tracing::info!("Toggling archive state of event {}", id);

        let response = self
            .send(self.client.put(&url), "Archive event", ApiError::ArchiveFailed)
            .await?;

        let result: ArchiveResult =
            Self::decode(response, "Archive event", ApiError::ArchiveFailed).await?;

        tracing::info!("Event {} is now {}", result.id, result.status);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_has_default_base_url() {
        let client = HttpEventsClient::new();

        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn custom_base_url_drops_trailing_slash() {
        let client = HttpEventsClient::new().with_base_url("http://localhost:8080/");

        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.collection_url(), "http://localhost:8080/events");
    }

    #[test]
    fn event_id_is_encoded_as_one_segment() {
        let client = HttpEventsClient::new().with_base_url("http://localhost");

        assert_eq!(client.event_url("a/b c"), "http://localhost/events/a%2Fb%20c");
    }

    #[test]
    fn errors_read_as_generic_failures() {
        assert_eq!(ApiError::FetchFailed.to_string(), "Failed to fetch events");
        assert_eq!(ApiError::ArchiveFailed.to_string(), "Failed to archive event");
    }
}
