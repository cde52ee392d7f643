//! In-memory stand-in for the public placeholder todo service.
//!
//! Same routes and status codes as the real thing: integer ids assigned on
//! POST (201), PUT replaces the whole record (200), DELETE answers 200 with
//! `{}`. Unlike the public service, writes are kept, so a board can be
//! exercised end to end.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

/// Todos per user in generated seed data.
const TODOS_PER_USER: u64 = 20;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub user_id: u64,
}

/// PUT body. Any `id` in the body is ignored in favour of the path.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    pub user_id: Option<u64>,
}

#[derive(Debug, Default)]
pub struct TodoDb {
    todos: BTreeMap<u64, Todo>,
    next_id: u64,
}

impl TodoDb {
    pub fn new(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            todos: todos.into_iter().map(|t| (t.id, t)).collect(),
            next_id,
        }
    }
}

pub type Db = Arc<RwLock<TodoDb>>;

/// `count` generated todos, `userId` advancing every 20 like the public data.
pub fn seed(count: u64) -> Vec<Todo> {
    (1..=count)
        .map(|id| Todo {
            user_id: (id - 1) / TODOS_PER_USER + 1,
            id,
            title: format!("todo {id}"),
            completed: id % 3 == 0,
        })
        .collect()
}

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(todos: Vec<Todo>) -> Router {
    let db: Db = Arc::new(RwLock::new(TodoDb::new(todos)));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(replace_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener, todos: Vec<Todo>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(todos)).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let db = db.read().await;
    Json(db.todos.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<NewTodo>,
) -> (StatusCode, Json<Todo>) {
    let mut db = db.write().await;
    let todo = Todo {
        user_id: input.user_id,
        id: db.next_id,
        title: input.title,
        completed: input.completed,
    };
    db.next_id += 1;
    db.todos.insert(todo.id, todo.clone());
    debug!(id = todo.id, "todo created");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, StatusCode> {
    let db = db.read().await;
    db.todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn replace_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<ReplaceTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut db = db.write().await;
    let todo = db.todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    todo.title = input.title;
    todo.completed = input.completed;
    if let Some(user_id) = input.user_id {
        todo.user_id = user_id;
    }
    debug!(id, "todo replaced");
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut db = db.write().await;
    db.todos.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    debug!(id, "todo deleted");
    Ok(Json(serde_json::json!({})))
}
