//! API error type and its HTTP mapping.
//!
//! Client faults surface their message with a 400. Everything else is logged
//! here and answered with a generic 500 so internals never reach the wire.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tracing::error;

use crate::services::catalog::CatalogError;
use crate::types::ErrorBody;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid prompt provided")]
    InvalidPrompt,
    #[error("Invalid query provided")]
    InvalidQuery,
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("handler panicked: {0}")]
    Panic(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPrompt | Self::InvalidQuery => StatusCode::BAD_REQUEST,
            Self::Catalog(_) | Self::Panic(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!(error = %self, "request failed");
            INTERNAL_ERROR_MESSAGE.to_owned()
        } else {
            self.to_string()
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Convert a caught handler panic into the generic 500 reply.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "unknown panic payload".to_owned()
    };
    ApiError::Panic(detail).into_response()
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
