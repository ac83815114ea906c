//! The todo store contract and its in-memory implementation.
//!
//! # Design
//! `TodoStore` is the only way to reach the canonical list. Mutating methods
//! take `&mut self`, so whoever wraps a store (a lock, a single task) decides
//! how concurrent callers are serialized; the store itself never hands out
//! references into its collection.
//!
//! Every method returns `Result` so a backend with real I/O can report
//! `StoreError::Internal`. `MemoryStore` only does so once its id space is
//! used up.

use crate::error::{Result, StoreError};
use crate::types::{Todo, TodoId};

/// Message carried by `StoreError::Validation` for empty content.
pub const EMPTY_CONTENT: &str = "Content cannot be empty";

/// Message carried by `StoreError::Internal` when no id is left to assign.
pub const ID_SPACE_EXHAUSTED: &str = "id space exhausted";

/// Owner of the canonical todo collection.
pub trait TodoStore {
    /// All todos in insertion order.
    fn list(&self) -> Result<Vec<Todo>>;

    /// Look up a todo by id. `None` when absent.
    fn get(&self, id: TodoId) -> Result<Option<Todo>>;

    /// Store a new, active todo with a freshly assigned id.
    ///
    /// Fails with `StoreError::Validation` on empty content, leaving the
    /// store untouched.
    fn insert(&mut self, content: &str) -> Result<Todo>;

    /// Set the completed flag. `None` when the id is absent.
    fn update(&mut self, id: TodoId, completed: bool) -> Result<Option<Todo>>;

    /// Remove a todo. Returns whether a record was removed.
    fn delete(&mut self, id: TodoId) -> Result<bool>;

    /// Flip the completed flag of `id`.
    ///
    /// The read and the write happen under the same exclusive borrow, so no
    /// other mutation can land between them.
    fn toggle(&mut self, id: TodoId) -> Result<Option<Todo>> {
        match self.get(id)? {
            Some(todo) => self.update(id, !todo.completed),
            None => Ok(None),
        }
    }
}

/// `TodoStore` backed by a `Vec` kept in insertion order.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    todos: Vec<Todo>,
    /// `None` once `TodoId::MAX` has been handed out.
    next_id: Option<TodoId>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Build a store holding `todos` as-is.
    ///
    /// The id counter starts past the highest supplied id; a record with
    /// id `TodoId::MAX` leaves no id for later inserts. Records with a
    /// duplicate id are dropped, keeping the first occurrence.
    pub fn with_todos(todos: impl IntoIterator<Item = Todo>) -> Self {
        let mut store = Self::new();
        for todo in todos {
            if store.position(todo.id).is_some() {
                continue;
            }
            store.next_id = match (store.next_id, todo.id.checked_add(1)) {
                (Some(next), Some(after)) => Some(next.max(after)),
                _ => None,
            };
            store.todos.push(todo);
        }
        store
    }

    /// The two sample todos the application starts with when seeding.
    pub fn seeded() -> Self {
        Self::with_todos([
            Todo {
                id: 1,
                content: "Hello".to_string(),
                completed: false,
            },
            Todo {
                id: 2,
                content: "World".to_string(),
                completed: false,
            },
        ])
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }
}

impl TodoStore for MemoryStore {
    fn list(&self) -> Result<Vec<Todo>> {
        Ok(self.todos.clone())
    }

    fn get(&self, id: TodoId) -> Result<Option<Todo>> {
        Ok(self.position(id).map(|idx| self.todos[idx].clone()))
    }

    fn insert(&mut self, content: &str) -> Result<Todo> {
        if content.is_empty() {
            return Err(StoreError::Validation(EMPTY_CONTENT.to_string()));
        }
        let Some(id) = self.next_id else {
            return Err(StoreError::Internal(ID_SPACE_EXHAUSTED.to_string()));
        };
        let todo = Todo {
            id,
            content: content.to_string(),
            completed: false,
        };
        self.next_id = id.checked_add(1);
        self.todos.push(todo.clone());
        Ok(todo)
    }

    fn update(&mut self, id: TodoId, completed: bool) -> Result<Option<Todo>> {
        let Some(idx) = self.position(id) else {
            return Ok(None);
        };
        let todo = &mut self.todos[idx];
        todo.completed = completed;
        Ok(Some(todo.clone()))
    }

    fn delete(&mut self, id: TodoId) -> Result<bool> {
        match self.position(id) {
            Some(idx) => {
                // `remove`, not `swap_remove`: insertion order must survive.
                self.todos.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
