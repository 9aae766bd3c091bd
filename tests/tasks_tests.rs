use serde_json::json;
use std::sync::Arc;
use taskhub_client::session::{MemoryStore, Session, SessionStore};
use taskhub_client::tasks::{TaskCreate, TaskFilter, TaskUpdate};
use taskhub_client::Taskhub;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn task_body(id: i64, title: &str, completed: bool) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": "1",
        "title": title,
        "completed": completed,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

fn authenticated_hub(url: &str) -> Taskhub {
    let store = Arc::new(MemoryStore::new());
    store
        .save(&Session::new("T".into(), "R".into(), None))
        .unwrap();
    Taskhub::with_store(url, store).unwrap()
}

#[tokio::test]
async fn list_with_filter_sends_query_and_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .and(query_param("filter", "completed"))
        .and(header("Authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tasks": [task_body(1, "done thing", true)],
            "total": 3,
            "completed": 1,
            "pending": 2
        })))
        .mount(&mock_server)
        .await;

    let hub = authenticated_hub(&mock_server.uri());
    let listing = hub.tasks().list(Some(TaskFilter::Completed)).await.unwrap();

    // Counts are trusted as returned, not recomputed from the list
    assert_eq!(listing.tasks.len(), 1);
    assert_eq!(listing.total, 3);
    assert_eq!(listing.completed, 1);
    assert_eq!(listing.pending, 2);
}

#[tokio::test]
async fn list_without_token_omits_authorization() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tasks": [],
            "total": 0,
            "completed": 0,
            "pending": 0
        })))
        .mount(&mock_server)
        .await;

    let hub = Taskhub::new(&mock_server.uri()).unwrap();
    hub.tasks().list(None).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0]
        .headers
        .keys()
        .all(|name| name.as_str() != "authorization"));
}

#[tokio::test]
async fn create_task() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({ "title": "write tests" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(task_body(7, "write tests", false)))
        .mount(&mock_server)
        .await;

    let hub = authenticated_hub(&mock_server.uri());
    let task = hub
        .tasks()
        .create(TaskCreate {
            title: "write tests".to_string(),
            description: None,
        })
        .await
        .unwrap();

    assert_eq!(task.id, 7);
    assert!(!task.completed);
}

#[tokio::test]
async fn get_and_update_task() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_body(7, "old title", false)))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/tasks/7"))
        .and(body_json(json!({ "title": "new title" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_body(7, "new title", false)))
        .mount(&mock_server)
        .await;

    let hub = authenticated_hub(&mock_server.uri());

    let task = hub.tasks().get(7).await.unwrap();
    assert_eq!(task.title, "old title");

    let task = hub
        .tasks()
        .update(
            7,
            TaskUpdate {
                title: Some("new title".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(task.title, "new title");
}

#[tokio::test]
async fn toggle_complete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/tasks/7/complete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_body(7, "write tests", true)))
        .mount(&mock_server)
        .await;

    let hub = authenticated_hub(&mock_server.uri());
    let task = hub.tasks().toggle_complete(7).await.unwrap();

    assert!(task.completed);
}

#[tokio::test]
async fn delete_task() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/tasks/7"))
        .and(header("Authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let hub = authenticated_hub(&mock_server.uri());
    hub.tasks().delete(7).await.unwrap();
}

#[tokio::test]
async fn delete_failure_surfaces_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/tasks/7"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "detail": "Task not found"
        })))
        .mount(&mock_server)
        .await;

    let hub = authenticated_hub(&mock_server.uri());
    let err = hub.tasks().delete(7).await.unwrap_err();

    assert_eq!(err.to_string(), "Task not found");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn expired_token_surfaces_reactively() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Could not validate credentials"
        })))
        .mount(&mock_server)
        .await;

    let hub = authenticated_hub(&mock_server.uri());

    // The client never checks expiry itself; the rejection arrives from
    // the backend on the next call.
    let err = hub.tasks().list(None).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(hub.is_authenticated());
}
