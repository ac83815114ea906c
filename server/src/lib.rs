//! HTTP surface of the htmx todo app.
//!
//! # Design
//! Each handler performs one store operation and answers with the fragment
//! the client swaps into the page. The store sits behind a
//! `tokio::sync::RwLock`: listing shares the lock, every mutation holds the
//! write lock for its whole read-modify-write, so concurrent toggles and
//! inserts are serialized.
//!
//! Requests addressed at a missing id succeed with an empty body. For the
//! row-level `outerHTML` swaps that means the stale row disappears.

pub mod config;
pub mod error;

use std::{future::Future, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, put},
    Form, Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use todo_core::{
    render::STYLESHEET_PATH, render_item, render_list, render_page, CreateTodo, MemoryStore,
    TodoId, TodoStore,
};

pub use config::Config;
pub use error::AppError;

pub type Db<S> = Arc<RwLock<S>>;

const STYLESHEET: &str = include_str!("../static/index.css");

/// Router over a fresh, empty `MemoryStore`.
pub fn app() -> Router {
    app_with_store(MemoryStore::new())
}

pub fn app_with_store<S>(store: S) -> Router
where
    S: TodoStore + Send + Sync + 'static,
{
    let db: Db<S> = Arc::new(RwLock::new(store));
    Router::new()
        .route("/", get(index))
        .route("/todos", get(list_todos::<S>).post(create_todo::<S>))
        .route(
            "/todos/{id}",
            put(toggle_todo::<S>).delete(delete_todo::<S>),
        )
        .route(STYLESHEET_PATH, get(stylesheet))
        .with_state(db)
}

pub async fn run<S>(listener: TcpListener, store: S) -> Result<(), std::io::Error>
where
    S: TodoStore + Send + Sync + 'static,
{
    run_until(listener, store, std::future::pending()).await
}

/// Serve until `shutdown` resolves, then finish in-flight requests.
pub async fn run_until<S, F>(
    listener: TcpListener,
    store: S,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    S: TodoStore + Send + Sync + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app_with_store(store))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn index() -> Html<String> {
    Html(render_page())
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

async fn list_todos<S>(State(db): State<Db<S>>) -> Result<Html<String>, AppError>
where
    S: TodoStore + Send + Sync + 'static,
{
    let todos = db.read().await.list()?;
    tracing::debug!(count = todos.len(), "listing todos");
    Ok(Html(render_list(&todos)))
}

async fn create_todo<S>(
    State(db): State<Db<S>>,
    Form(input): Form<CreateTodo>,
) -> Result<Html<String>, AppError>
where
    S: TodoStore + Send + Sync + 'static,
{
    let todo = db.write().await.insert(&input.content)?;
    tracing::info!(id = todo.id, "created todo");
    Ok(Html(render_item(&todo)))
}

async fn toggle_todo<S>(
    State(db): State<Db<S>>,
    Path(id): Path<TodoId>,
) -> Result<Html<String>, AppError>
where
    S: TodoStore + Send + Sync + 'static,
{
    let toggled = db.write().await.toggle(id)?;
    match toggled {
        Some(todo) => {
            tracing::info!(id, completed = todo.completed, "toggled todo");
            Ok(Html(render_item(&todo)))
        }
        None => {
            tracing::debug!(id, "toggle of missing todo");
            Ok(Html(String::new()))
        }
    }
}

/// Always `200` with an empty body; htmx skips the swap on `204`.
async fn delete_todo<S>(
    State(db): State<Db<S>>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, AppError>
where
    S: TodoStore + Send + Sync + 'static,
{
    let removed = db.write().await.delete(id)?;
    tracing::info!(id, removed, "deleted todo");
    Ok(StatusCode::OK)
}
