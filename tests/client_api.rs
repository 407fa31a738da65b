//! Task client integration tests
//!
//! A wiremock server stands in for the proxy so every envelope shape the
//! client has to classify can be produced directly.

mod common;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{task_json, task_page_json, unreachable_backend_url};
use spirited_todo::client::{error_text, ApiError, ClientConfig, ClientError, TaskApiClient};
use spirited_todo::shared::{ErrorCode, Priority, TaskCreate, TaskListParams, TaskUpdate};

fn client_for(server: &MockServer) -> TaskApiClient {
    TaskApiClient::new(ClientConfig::new(&server.uri()).expect("mock server URL is valid"))
}

#[tokio::test]
async fn test_get_tasks_decodes_page() {
    let proxy = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .and(query_param("limit", "5"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_page_json(
            vec![task_json(1, "First", 1), task_json(2, "Second", 3)],
            2,
            1,
            5,
        )))
        .expect(1)
        .mount(&proxy)
        .await;

    let page = client_for(&proxy)
        .get_tasks(&TaskListParams::for_page(1, 5))
        .await
        .expect("page decodes");

    assert_eq!(page.total, 2);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[1].priority, Priority::High);
}

#[tokio::test]
async fn test_server_error_envelope_becomes_api_error() {
    let proxy = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "msg": "A server error occurred.", "error_code": "INTERNAL_SERVER_ERROR" }
        })))
        .mount(&proxy)
        .await;

    let error = client_for(&proxy)
        .get_tasks(&TaskListParams::default())
        .await
        .expect_err("500 is an error");

    assert_matches!(&error, ClientError::Api(api) if api.message == "A server error occurred.");
    assert_eq!(error.error_code(), Some(&ErrorCode::InternalServerError));
    assert_eq!(error_text(&error), "A server error occurred. Please try again later.");
}

#[tokio::test]
async fn test_string_error_body_keeps_message() {
    let proxy = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks/8"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "Internal server error" })))
        .mount(&proxy)
        .await;

    let error = client_for(&proxy).get_task(8).await.expect_err("500 is an error");

    assert_matches!(error, ClientError::Api(api) => {
        assert_eq!(api, ApiError::new("Internal server error", ErrorCode::InvalidInput));
    });
}

#[tokio::test]
async fn test_unparseable_body_uses_fallback_with_id() {
    let proxy = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/tasks/12"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&proxy)
        .await;

    let updates = TaskUpdate {
        title: Some("Renamed".to_string()),
        ..TaskUpdate::default()
    };
    let error = client_for(&proxy)
        .update_task(12, &updates)
        .await
        .expect_err("503 is an error");

    assert_matches!(&error, ClientError::Api(api) => {
        assert_eq!(api.message, "Failed to update task 12");
        assert_eq!(api.error_code, ErrorCode::InvalidInput);
    });
    assert_eq!(error_text(&error), "Failed to update task 12");
}

#[tokio::test]
async fn test_unknown_code_is_preserved() {
    let proxy = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks/4"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": { "msg": "Task is locked", "error_code": "TASK_LOCKED" }
        })))
        .mount(&proxy)
        .await;

    let error = client_for(&proxy).get_task(4).await.expect_err("409 is an error");

    assert_eq!(error.error_code(), Some(&ErrorCode::Other("TASK_LOCKED".to_string())));
    assert_eq!(error_text(&error), "Task is locked");
}

#[tokio::test]
async fn test_create_task_posts_json() {
    let proxy = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .and(body_json(json!({ "title": "Buy milk", "priority": 2 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json(10, "Buy milk", 2)))
        .expect(1)
        .mount(&proxy)
        .await;

    let task = client_for(&proxy)
        .create_task(&TaskCreate::new("Buy milk", Priority::Mid))
        .await
        .expect("task created");

    assert_eq!(task.id, 10);
    assert_eq!(task.title, "Buy milk");
}

#[tokio::test]
async fn test_create_task_high_priority_limit() {
    let proxy = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "msg": "Cannot have more than 5 high priority tasks",
                "error_code": "HIGH_PRIORITY_LIMIT"
            }
        })))
        .mount(&proxy)
        .await;

    let error = client_for(&proxy)
        .create_task(&TaskCreate::new("Sixth urgent", Priority::High))
        .await
        .expect_err("limit reached");

    assert_eq!(error_text(&error), "You cannot create more than 5 high priority tasks.");
}

#[tokio::test]
async fn test_delete_task_succeeds_on_no_content() {
    let proxy = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/tasks/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&proxy)
        .await;

    client_for(&proxy).delete_task(3).await.expect("task deleted");
}

#[tokio::test]
async fn test_malformed_success_body_is_transport_error() {
    let proxy = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks/2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\":"))
        .mount(&proxy)
        .await;

    let error = client_for(&proxy).get_task(2).await.expect_err("body is truncated");

    assert_matches!(error, ClientError::Transport(_));
}

#[tokio::test]
async fn test_unreachable_proxy_is_transport_error() {
    let client = TaskApiClient::new(ClientConfig::new(&unreachable_backend_url()).expect("valid URL"));

    let error = client.get_task(1).await.expect_err("nothing is listening");

    assert_matches!(&error, ClientError::Transport(_));
    assert_eq!(error.error_code(), None);
    assert!(!error_text(&error).is_empty());
}
