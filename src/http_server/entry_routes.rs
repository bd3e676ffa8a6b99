//! Entry HTTP Routes
//!
//! Translates requests into store operations.
//!
//! - `GET    /entry/:id`                    read one
//! - `PUT    /entry/:id/:title/:completed`  upsert from path segments
//! - `PUT    /entry/:id`                    upsert from a JSON body
//! - `DELETE /entry/:id`                    delete
//! - `GET    /list`                         read all

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::errors::ApiResult;
use crate::store::{Record, TodoList, TodoStore};

/// Body of `PUT /entry/:id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: String,
}

/// Create entry routes
pub fn entry_routes(store: Arc<TodoStore>) -> Router {
    Router::new()
        .route(
            "/entry/:id",
            get(get_entry_handler)
                .put(upsert_entry_body_handler)
                .delete(delete_entry_handler),
        )
        .route("/entry/:id/:title/:completed", put(upsert_entry_path_handler))
        .route("/list", get(list_handler))
        .with_state(store)
}

async fn get_entry_handler(
    State(store): State<Arc<TodoStore>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Record>> {
    Ok(Json(store.fetch(&id)?))
}

async fn list_handler(State(store): State<Arc<TodoStore>>) -> Json<TodoList> {
    Json(TodoList::from_snapshot(store.list()))
}

async fn upsert_entry_path_handler(
    State(store): State<Arc<TodoStore>>,
    Path((id, title, completed)): Path<(String, String, String)>,
) -> Json<Record> {
    Json(store.upsert(&id, &title, &completed))
}

async fn upsert_entry_body_handler(
    State(store): State<Arc<TodoStore>>,
    Path(id): Path<String>,
    Json(request): Json<UpsertRequest>,
) -> Json<Record> {
    Json(store.upsert(&id, &request.title, &request.completed))
}

async fn delete_entry_handler(
    State(store): State<Arc<TodoStore>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Record>> {
    Ok(Json(store.remove(&id)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn send(router: Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = Arc::new(TodoStore::new());

        let (status, body) = send(entry_routes(store.clone()), "PUT", "/entry/1/Buy%20milk/false").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Buy milk");

        let (status, body) = send(entry_routes(store), "GET", "/entry/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "1");
        assert_eq!(body["completed"], "false");
    }

    #[tokio::test]
    async fn test_get_unknown_is_404() {
        let (status, body) = send(entry_routes(Arc::new(TodoStore::new())), "GET", "/entry/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 404);
    }

    #[tokio::test]
    async fn test_list_on_empty_store() {
        let (status, body) = send(entry_routes(Arc::new(TodoStore::new())), "GET", "/list").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "todos": [] }));
    }
}
