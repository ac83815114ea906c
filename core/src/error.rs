//! Error types for todo store operations.
//!
//! # Design
//! A missing id is not represented here: lookups and mutations addressed at
//! an absent todo return `None` / `false`. Only rejected writes and backend
//! failures are errors, so callers can tell them apart without inspecting
//! messages.

use thiserror::Error;

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The input was rejected before any state was touched.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The persistence layer failed. Store state is unchanged.
    #[error("store failure: {0}")]
    Internal(String),
}

impl StoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
