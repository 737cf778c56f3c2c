//! HTTP contract tests for the events client against a wiremock server.

use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use smart_scheduler::{
    ApiError, Category, CreateEventData, EventsApi, HttpEventsClient,
};

fn client_for(server: &MockServer) -> HttpEventsClient {
    HttpEventsClient::new().with_base_url(server.uri())
}

mod fetch {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn unwraps_data_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {
                        "id": "1",
                        "title": "Standup",
                        "date": "2025-03-10",
                        "time": "09:00",
                        "notes": "Daily",
                        "category": "Work",
                        "status": "active"
                    },
                    {
                        "id": "2",
                        "title": "Gym",
                        "date": "2025-03-11",
                        "time": "18:30"
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let events = assert_ok!(client_for(&server).fetch_events().await);

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].category, Category::Work);
        assert_eq!(events[0].notes.as_deref(), Some("Daily"));
        assert_eq!(events[1].category, Category::Other);
        assert_eq!(events[1].status, "active");
        assert!(events[1].notes.is_none());
    }

    #[tokio::test]
    async fn keeps_server_order() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"id": "b", "title": "Later", "date": "2025-05-02", "time": "10:00"},
                    {"id": "a", "title": "Sooner", "date": "2025-05-01", "time": "10:00"}
                ]
            })))
            .mount(&server)
            .await;

        let events = assert_ok!(client_for(&server).fetch_events().await);
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn null_fields_do_not_fail_the_load() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"id": "1", "title": "Standup", "date": "2025-03-10", "time": "09:00", "category": "Work"},
                    {"id": "2", "title": "Gym", "date": "2025-03-11", "time": "18:30", "category": null, "status": null}
                ]
            })))
            .mount(&server)
            .await;

        let events = assert_ok!(client_for(&server).fetch_events().await);

        assert_eq!(events.len(), 2);
        assert_eq!(events[1].category, Category::Other);
        assert_eq!(events[1].status, "active");
    }

    #[tokio::test]
    async fn server_error_is_fetch_failed() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/events"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = assert_err!(client_for(&server).fetch_events().await);
        assert_eq!(err, ApiError::FetchFailed);
    }

    #[tokio::test]
    async fn malformed_body_is_fetch_failed() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "1"}])))
            .mount(&server)
            .await;

        let err = assert_err!(client_for(&server).fetch_events().await);
        assert_eq!(err, ApiError::FetchFailed);
    }

    #[tokio::test]
    async fn unreachable_server_is_fetch_failed() {
        let client = HttpEventsClient::new().with_base_url("http://127.0.0.1:9");

        let err = assert_err!(client.fetch_events().await);
        assert_eq!(err, ApiError::FetchFailed);
    }
}

mod create {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft() -> CreateEventData {
        CreateEventData {
            title: "Dentist".to_string(),
            date: "2025-07-04".to_string(),
            time: "09:15".to_string(),
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn posts_form_fields_as_json() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/events"))
            .and(body_json(json!({
                "title": "Dentist",
                "date": "2025-07-04",
                "time": "09:15",
                "notes": ""
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "42",
                "title": "Dentist",
                "date": "2025-07-04",
                "time": "09:15",
                "category": "Personal",
                "status": "active"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created = assert_ok!(client_for(&server).create_event(&draft()).await);

        assert_eq!(created.id, "42");
        assert_eq!(created.category, Category::Personal);
    }

    #[tokio::test]
    async fn rejected_payload_is_create_failed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/events"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "bad date"})))
            .mount(&server)
            .await;

        let err = assert_err!(client_for(&server).create_event(&draft()).await);
        assert_eq!(err, ApiError::CreateFailed);
    }
}

mod delete {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn deletes_by_id() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/events/abc123"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        assert_ok!(client_for(&server).delete_event("abc123").await);
    }

    #[tokio::test]
    async fn missing_event_is_delete_failed() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/events/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = assert_err!(client_for(&server).delete_event("gone").await);
        assert_eq!(err, ApiError::DeleteFailed);
    }
}

mod archive {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn returns_new_status() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/events/7/archive"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "7",
                "status": "archived"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = assert_ok!(client_for(&server).archive_event("7").await);

        assert_eq!(result.id, "7");
        assert_eq!(result.status, "archived");
    }

    #[tokio::test]
    async fn server_error_is_archive_failed() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/events/7/archive"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = assert_err!(client_for(&server).archive_event("7").await);
        assert_eq!(err, ApiError::ArchiveFailed);
    }
}
