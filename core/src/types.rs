//! Domain types for the todo list.
//!
//! # Design
//! `Todo` is the canonical record owned by a `TodoStore`. Everything outside
//! the store (renderer, request handlers) works on clones, so handing out a
//! `Todo` never grants a way to mutate the stored list.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier. Starts at 1 and is never reused.
pub type TodoId = u64;

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub content: String,
    #[serde(default)]
    pub completed: bool,
}

/// Form payload for creating a new todo.
///
/// Only the content is accepted from the client; id and completion state are
/// always decided by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub content: String,
}
