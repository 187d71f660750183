use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub uuid: String,
    pub title: String,
    pub body: String,
    pub priority: i32,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub priority: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
}

/// Username/password the server accepts via HTTP Basic auth.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn expected_header(&self) -> String {
        let pair = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(pair))
    }
}

/// Todos in insertion order.
pub type Db = Arc<RwLock<Vec<Todo>>>;

pub fn app(credentials: Credentials) -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    let expected: Arc<str> = credentials.expected_header().into();
    Router::new()
        .route("/todos/api/v1.0/todos", get(list_todos))
        .route("/todos/api/v1.0/todo/create", post(create_todo))
        .route("/todos/api/v1.0/todo/{id}", get(get_todo))
        .route("/todos/api/v1.0/todo/delete/{id}", delete(delete_todo))
        .layer(middleware::from_fn_with_state(expected, require_basic_auth))
        .with_state(db)
}

pub async fn run(listener: TcpListener, credentials: Credentials) -> Result<(), std::io::Error> {
    axum::serve(listener, app(credentials)).await
}

/// Start the server on a random local port in a background thread.
pub fn spawn(credentials: Credentials) -> std::io::Result<SocketAddr> {
    spawn_router(app(credentials))
}

/// Serve `router` on a random local port in a background thread.
///
/// The thread owns its own single-threaded runtime, so blocking callers can
/// talk to the server without an async context of their own.
pub fn spawn_router(router: Router) -> std::io::Result<SocketAddr> {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = std_listener.local_addr()?;
    std_listener.set_nonblocking(true)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    std::thread::spawn(move || {
        let result = runtime.block_on(async {
            let listener = TcpListener::from_std(std_listener)?;
            axum::serve(listener, router).await
        });
        if let Err(err) = result {
            tracing::error!(error = %err, "mock server stopped");
        }
    });

    Ok(addr)
}

async fn require_basic_auth(
    State(expected): State<Arc<str>>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == &*expected);
    if !authorized {
        tracing::debug!(uri = %request.uri(), "rejected request without valid credentials");
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(request).await)
}

async fn list_todos(State(db): State<Db>) -> Json<TodoList> {
    let todos = db.read().await;
    Json(TodoList {
        todos: todos.clone(),
    })
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = Todo {
        uuid: Uuid::new_v4().to_string(),
        title: input.title,
        body: input.body,
        priority: input.priority,
    };
    db.write().await.push(todo.clone());
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, StatusCode> {
    let todos = db.read().await;
    todos
        .iter()
        .find(|todo| todo.uuid == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let mut todos = db.write().await;
    let index = todos
        .iter()
        .position(|todo| todo.uuid == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    todos.remove(index);
    Ok(Json(json!({ "result": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_uuid_key() {
        let todo = Todo {
            uuid: "abc".to_string(),
            title: "Study".to_string(),
            body: "Study for exam".to_string(),
            priority: 2,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["uuid"], "abc");
        assert_eq!(json["title"], "Study");
        assert_eq!(json["body"], "Study for exam");
        assert_eq!(json["priority"], 2);
    }

    #[test]
    fn create_todo_defaults_body_and_priority() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"Only title"}"#).unwrap();
        assert_eq!(input.title, "Only title");
        assert!(input.body.is_empty());
        assert_eq!(input.priority, 0);
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"body":"b","priority":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn expected_header_matches_basic_scheme() {
        let creds = Credentials::new("user", "secret");
        assert_eq!(creds.expected_header(), "Basic dXNlcjpzZWNyZXQ=");
    }
}
