//! Mapping of store failures onto HTTP responses.
//!
//! # Design
//! Validation failures come back as a `400` carrying a small HTML fragment,
//! retargeted with `HX-Retarget`/`HX-Reswap` into the form's error slot so
//! it never lands in the todo list. Internal failures are logged in full and answered
//! with a generic `500`; the client never sees backend details.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use todo_core::{render::FORM_ERROR_ID, render_error, StoreError};

pub const HX_RETARGET: &str = "hx-retarget";
pub const HX_RESWAP: &str = "hx-reswap";

/// Error type returned by request handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Store(StoreError::Validation(message)) => {
                tracing::debug!(%message, "rejected request");
                (
                    StatusCode::BAD_REQUEST,
                    [
                        (HX_RETARGET, format!("#{FORM_ERROR_ID}")),
                        (HX_RESWAP, "innerHTML".to_string()),
                    ],
                    Html(render_error(&message)),
                )
                    .into_response()
            }
            AppError::Store(StoreError::Internal(detail)) => {
                tracing::error!(%detail, "store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(render_error("Something went wrong")),
                )
                    .into_response()
            }
        }
    }
}
