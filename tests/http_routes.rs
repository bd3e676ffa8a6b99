//! HTTP Route Tests
//!
//! Drives the full router (entry, observability and CORS layers) in-process.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tower::ServiceExt;

use todokv::cli::{resolve_config, ServerArgs};
use todokv::http_server::{HttpServer, HttpServerConfig};
use todokv::store::{TodoList, TodoStore};

// =============================================================================
// Test Utilities
// =============================================================================

fn router_for(store: Arc<TodoStore>) -> Router {
    HttpServer::with_store(HttpServerConfig::default(), store).router()
}

async fn call(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn empty(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// =============================================================================
// Scenario
// =============================================================================

#[tokio::test]
async fn test_buy_milk_over_http() {
    let store = Arc::new(TodoStore::new());

    let (status, body) = call(
        router_for(store.clone()),
        empty("PUT", "/entry/1/Buy%20milk/false"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": "1", "title": "Buy milk", "completed": "false"}));

    let (_, body) = call(router_for(store.clone()), empty("GET", "/entry/1")).await;
    assert_eq!(body, json!({"id": "1", "title": "Buy milk", "completed": "false"}));

    call(
        router_for(store.clone()),
        empty("PUT", "/entry/1/Buy%20milk/true"),
    )
    .await;
    let (_, body) = call(router_for(store.clone()), empty("GET", "/entry/1")).await;
    assert_eq!(body["completed"], "true");
    assert_eq!(body["title"], "Buy milk");

    let (status, body) = call(router_for(store.clone()), empty("DELETE", "/entry/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completed"], "true");

    let (status, body) = call(router_for(store.clone()), empty("GET", "/entry/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);

    let (status, body) = call(router_for(store), empty("GET", "/list")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"todos": []}));
}

// =============================================================================
// Individual routes
// =============================================================================

#[tokio::test]
async fn test_delete_unknown_twice_is_404_both_times() {
    let store = Arc::new(TodoStore::new());
    store.upsert("other", "untouched", "false");

    for _ in 0..2 {
        let (status, _) = call(router_for(store.clone()), empty("DELETE", "/entry/ghost")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_json_body_upsert_keeps_special_characters() {
    let store = Arc::new(TodoStore::new());
    let title = "He said \"ship it\" \\o/ {done}";

    let (status, body) = call(
        router_for(store.clone()),
        with_json("PUT", "/entry/q", json!({"title": title, "completed": "true"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], title);

    let (_, body) = call(router_for(store), empty("GET", "/list")).await;
    let listing: TodoList = serde_json::from_value(body).unwrap();
    assert_eq!(listing.todos.len(), 1);
    assert_eq!(listing.todos[0].title, title);
    assert_eq!(listing.todos[0].completed, "true");
}

#[tokio::test]
async fn test_list_is_sorted_by_id() {
    let store = Arc::new(TodoStore::new());
    store.upsert("b", "2", "false");
    store.upsert("a", "1", "false");

    let (_, body) = call(router_for(store), empty("GET", "/list")).await;
    let ids: Vec<_> = body["todos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[tokio::test]
async fn test_health_and_metrics() {
    let store = Arc::new(TodoStore::new());
    store.upsert("1", "t", "false");
    store.get("missing");

    let (status, body) = call(router_for(store.clone()), empty("GET", "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["records"], 1);

    let (status, body) = call(router_for(store), empty("GET", "/metrics")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["inserts"], 1);
    assert_eq!(body["not_found"], 1);
}

#[tokio::test]
async fn test_concurrent_requests_on_distinct_ids() {
    let store = Arc::new(TodoStore::new());

    let tasks: Vec<_> = (0..64)
        .map(|i| {
            let router = router_for(store.clone());
            tokio::spawn(async move {
                let uri = format!("/entry/{}/task%20{}/false", i, i);
                call(router, empty("PUT", &uri)).await
            })
        })
        .collect();

    for task in tasks {
        let (status, _) = task.await.unwrap();
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(store.len(), 64);
}

// =============================================================================
// Listening socket
// =============================================================================

#[tokio::test]
async fn test_host_name_addr_binds_and_serves() {
    let config = resolve_config(&ServerArgs {
        config: None,
        addr: Some("localhost:0".to_string()),
    })
    .unwrap();
    assert_eq!(config.host, "localhost");

    let server = HttpServer::with_config(config);
    let store = server.store();
    store.upsert("1", "Buy milk", "false");

    let listener = server.bind().await.unwrap();
    let local = listener.local_addr().unwrap();
    tokio::spawn(server.serve(listener));

    let mut stream = TcpStream::connect(local).await.unwrap();
    stream
        .write_all(b"GET /entry/1 HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200"), "got: {}", response);
    assert!(response.contains("\"title\":\"Buy milk\""));
}
