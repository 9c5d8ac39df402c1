#![deny(unsafe_code)]

pub mod grpc;
pub mod pb;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use todoer_core::{MemoryStore, StoreError, Todo, TodoList, TodoStore};
use tokio::sync::Mutex;
use tracing::warn;

/// Shared service state: the storage engine behind a single mutex.
///
/// The engine itself is synchronous and not safe under concurrent access, so
/// both transports serialize every call through this lock.
#[derive(Clone, Default)]
pub struct ServiceState {
    pub store: Arc<Mutex<MemoryStore>>,
}

impl ServiceState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn build_router(state: ServiceState) -> Router {
    Router::new()
        .route("/todolist", get(get_all_todo_lists).post(create_todo_list))
        .route(
            "/todolist/:id",
            get(get_todo_list)
                .put(update_todo_list)
                .delete(delete_todo_list),
        )
        .route(
            "/todolist/:list_id/todo",
            get(get_todos_by_list).post(create_todo),
        )
        .route(
            "/todolist/:list_id/todo/:id",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(state)
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("due_date is invalid")]
    InvalidDueDate,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Store(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Store(err) if err.is_validation() => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidDueDate => StatusCode::BAD_REQUEST,
        };
        let message = self.to_string();
        warn!(%status, error = %message, "request failed");
        (
            status,
            Json(serde_json::json!({ "error": { "message": message } })),
        )
            .into_response()
    }
}

/// Wire representation of a todo list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoListBody {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub title: String,
}

impl From<TodoList> for TodoListBody {
    fn from(list: TodoList) -> Self {
        Self {
            id: list.id,
            title: list.title,
        }
    }
}

impl From<TodoListBody> for TodoList {
    fn from(body: TodoListBody) -> Self {
        Self {
            id: body.id,
            title: body.title,
        }
    }
}

/// Wire representation of a todo item. `due_date` is an RFC 3339 timestamp
/// string, empty when unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoBody {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub list_id: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub done: bool,
}

impl From<Todo> for TodoBody {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            list_id: todo.list_id,
            description: todo.description,
            comments: todo.comments,
            due_date: format_due_date(todo.due_date),
            labels: todo.labels,
            done: todo.done,
        }
    }
}

impl TryFrom<TodoBody> for Todo {
    type Error = ApiError;

    fn try_from(body: TodoBody) -> Result<Self, ApiError> {
        Ok(Self {
            id: body.id,
            list_id: body.list_id,
            description: body.description,
            comments: body.comments,
            due_date: parse_due_date(&body.due_date)?,
            labels: body.labels,
            done: body.done,
        })
    }
}

pub(crate) fn parse_due_date(raw: &str) -> Result<Option<DateTime<Utc>>, ApiError> {
    if raw.is_empty() {
        return Ok(None);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(|_| ApiError::InvalidDueDate)
}

pub(crate) fn format_due_date(due_date: Option<DateTime<Utc>>) -> String {
    due_date
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default()
}

// Todo list resource

async fn create_todo_list(
    State(state): State<ServiceState>,
    Json(body): Json<TodoListBody>,
) -> Result<Json<TodoListBody>, ApiError> {
    let list = state.store.lock().await.insert_list(body.into())?;
    Ok(Json(list.into()))
}

async fn get_all_todo_lists(State(state): State<ServiceState>) -> Json<Vec<TodoListBody>> {
    let lists = state.store.lock().await.all_lists();
    Json(lists.into_iter().map(TodoListBody::from).collect())
}

async fn get_todo_list(
    State(state): State<ServiceState>,
    Path(id): Path<u32>,
) -> Result<Json<TodoListBody>, ApiError> {
    let list = state.store.lock().await.list_by_id(id)?;
    Ok(Json(list.into()))
}

async fn update_todo_list(
    State(state): State<ServiceState>,
    Path(id): Path<u32>,
    Json(mut body): Json<TodoListBody>,
) -> Result<StatusCode, ApiError> {
    // The path id is authoritative; an id in the body is ignored.
    body.id = id;
    state.store.lock().await.update_list(body.into())?;
    Ok(StatusCode::OK)
}

async fn delete_todo_list(
    State(state): State<ServiceState>,
    Path(id): Path<u32>,
) -> Result<StatusCode, ApiError> {
    state.store.lock().await.delete_list_by_id(id)?;
    Ok(StatusCode::OK)
}

// Todo resource

async fn create_todo(
    State(state): State<ServiceState>,
    Path(list_id): Path<u32>,
    Json(mut body): Json<TodoBody>,
) -> Result<Json<TodoBody>, ApiError> {
    body.list_id = list_id;
    let todo = state.store.lock().await.insert_todo(body.try_into()?)?;
    Ok(Json(todo.into()))
}

async fn get_todos_by_list(
    State(state): State<ServiceState>,
    Path(list_id): Path<u32>,
) -> Result<Json<Vec<TodoBody>>, ApiError> {
    let todos = state.store.lock().await.todos_by_list_id(list_id)?;
    Ok(Json(todos.into_iter().map(TodoBody::from).collect()))
}

async fn get_todo(
    State(state): State<ServiceState>,
    Path((_list_id, id)): Path<(u32, u32)>,
) -> Result<Json<TodoBody>, ApiError> {
    let todo = state.store.lock().await.todo_by_id(id)?;
    Ok(Json(todo.into()))
}

async fn update_todo(
    State(state): State<ServiceState>,
    Path((_list_id, id)): Path<(u32, u32)>,
    Json(mut body): Json<TodoBody>,
) -> Result<StatusCode, ApiError> {
    body.id = id;
    state.store.lock().await.update_todo(body.try_into()?)?;
    Ok(StatusCode::OK)
}

async fn delete_todo(
    State(state): State<ServiceState>,
    Path((list_id, id)): Path<(u32, u32)>,
) -> Result<StatusCode, ApiError> {
    // Deletion only keys on the id pair; no description is involved.
    let mut target = Todo::new(list_id, String::new());
    target.id = id;
    state.store.lock().await.delete_todo(&target)?;
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(ServiceState::new())
    }

    fn post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn put(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_todo_list_returns_the_stored_entity() {
        let app = app();

        let response = app
            .oneshot(post("/todolist", serde_json::json!({ "title": "Routine" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "id": 0, "title": "Routine" }));
    }

    #[tokio::test]
    async fn create_todo_list_with_empty_title_is_bad_request() {
        let app = app();

        let response = app
            .oneshot(post("/todolist", serde_json::json!({ "title": "" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body["error"]["message"],
            serde_json::json!("todo list title is empty")
        );
    }

    #[tokio::test]
    async fn get_all_todo_lists_returns_every_created_list() {
        let app = app();

        for title in ["Routine", "Work"] {
            let response = app
                .clone()
                .oneshot(post("/todolist", serde_json::json!({ "title": title })))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app.oneshot(get("/todolist")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let mut lists = body_json(response).await.as_array().unwrap().clone();
        lists.sort_by_key(|list| list["id"].as_u64());
        assert_eq!(
            lists,
            vec![
                serde_json::json!({ "id": 0, "title": "Routine" }),
                serde_json::json!({ "id": 1, "title": "Work" }),
            ]
        );
    }

    #[tokio::test]
    async fn get_missing_todo_list_is_not_found() {
        let app = app();

        let response = app.oneshot(get("/todolist/9")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(
            body["error"]["message"],
            serde_json::json!("todo list not found")
        );
    }

    #[tokio::test]
    async fn unsupported_method_is_method_not_allowed() {
        let app = app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri("/todolist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn update_todo_list_replaces_title_and_returns_empty_body() {
        let app = app();

        app.clone()
            .oneshot(post("/todolist", serde_json::json!({ "title": "Routine" })))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(put("/todolist/0", serde_json::json!({ "title": "Chores" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());

        let response = app.oneshot(get("/todolist/0")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["title"], serde_json::json!("Chores"));
    }

    #[tokio::test]
    async fn update_todo_list_with_empty_title_keeps_stored_title() {
        let app = app();

        app.clone()
            .oneshot(post("/todolist", serde_json::json!({ "title": "Routine" })))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(put("/todolist/0", serde_json::json!({ "title": "" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app.oneshot(get("/todolist/0")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["title"], serde_json::json!("Routine"));
    }

    #[tokio::test]
    async fn delete_todo_list_then_get_is_not_found() {
        let app = app();

        app.clone()
            .oneshot(post("/todolist", serde_json::json!({ "title": "Routine" })))
            .await
            .unwrap();

        let response = app.clone().oneshot(delete("/todolist/0")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/todolist/0")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_todo_returns_the_stored_entity() {
        let app = app();

        app.clone()
            .oneshot(post("/todolist", serde_json::json!({ "title": "Routine" })))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(post(
                "/todolist/0/todo",
                serde_json::json!({ "description": "Make the bed" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], serde_json::json!(0));
        assert_eq!(body["list_id"], serde_json::json!(0));
        assert_eq!(body["description"], serde_json::json!("Make the bed"));
        assert_eq!(body["done"], serde_json::json!(false));
        assert_eq!(body["due_date"], serde_json::json!(""));

        let response = app.oneshot(get("/todolist/0/todo")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_todo_under_missing_list_is_not_found() {
        let app = app();

        let response = app
            .oneshot(post(
                "/todolist/99/todo",
                serde_json::json!({ "description": "x" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(
            body["error"]["message"],
            serde_json::json!("todo list not found")
        );
    }

    #[tokio::test]
    async fn create_todo_with_empty_description_is_bad_request() {
        let app = app();

        app.clone()
            .oneshot(post("/todolist", serde_json::json!({ "title": "Routine" })))
            .await
            .unwrap();

        let response = app
            .oneshot(post(
                "/todolist/0/todo",
                serde_json::json!({ "description": "" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body["error"]["message"],
            serde_json::json!("todo item description is empty")
        );
    }

    #[tokio::test]
    async fn due_date_round_trips_as_rfc3339() {
        let app = app();

        app.clone()
            .oneshot(post("/todolist", serde_json::json!({ "title": "Routine" })))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(post(
                "/todolist/0/todo",
                serde_json::json!({
                    "description": "Water the plants",
                    "due_date": "2024-05-01T10:00:00Z"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["due_date"], serde_json::json!("2024-05-01T10:00:00Z"));

        let response = app.oneshot(get("/todolist/0/todo/0")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["due_date"], serde_json::json!("2024-05-01T10:00:00Z"));
    }

    #[tokio::test]
    async fn malformed_due_date_is_bad_request() {
        let app = app();

        app.clone()
            .oneshot(post("/todolist", serde_json::json!({ "title": "Routine" })))
            .await
            .unwrap();

        let response = app
            .oneshot(post(
                "/todolist/0/todo",
                serde_json::json!({
                    "description": "Water the plants",
                    "due_date": "next tuesday"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body["error"]["message"],
            serde_json::json!("due_date is invalid")
        );
    }

    #[tokio::test]
    async fn update_todo_replaces_the_stored_todo() {
        let app = app();

        app.clone()
            .oneshot(post("/todolist", serde_json::json!({ "title": "Routine" })))
            .await
            .unwrap();
        app.clone()
            .oneshot(post(
                "/todolist/0/todo",
                serde_json::json!({ "description": "Make the bed" }),
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(put(
                "/todolist/0/todo/0",
                serde_json::json!({ "description": "Make the bed", "done": true }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/todolist/0/todo/0")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["done"], serde_json::json!(true));
    }

    #[tokio::test]
    async fn delete_last_todo_leaves_an_empty_list_view() {
        let app = app();

        app.clone()
            .oneshot(post("/todolist", serde_json::json!({ "title": "Routine" })))
            .await
            .unwrap();
        app.clone()
            .oneshot(post(
                "/todolist/0/todo",
                serde_json::json!({ "description": "Make the bed" }),
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(delete("/todolist/0/todo/0"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.clone().oneshot(get("/todolist/0/todo/0")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // The list itself still reads fine, now empty.
        let response = app.oneshot(get("/todolist/0/todo")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!([]));
    }
}
