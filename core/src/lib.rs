//! Todo state and fragment rendering for the htmx todo app.
//!
//! # Overview
//! Owns the todo list behind the `TodoStore` contract and turns todos into
//! the HTML fragments the browser swaps into the page. Nothing here touches
//! the network or an async runtime; the server crate drives it.
//!
//! # Design
//! - `TodoStore` mutations take `&mut self`; the caller picks the lock.
//! - Rejected writes are `StoreError::Validation`; absent ids are `None` /
//!   `false`, never errors.
//! - Renderers are pure functions, so markup is tested without a server.

pub mod error;
pub mod render;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use render::{render_error, render_form, render_item, render_list, render_page};
pub use store::{MemoryStore, TodoStore};
pub use types::{CreateTodo, Todo, TodoId};
