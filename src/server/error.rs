use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::TriviaError;

/// Uniform body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl TriviaError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TriviaError::NotFound => StatusCode::NOT_FOUND,
            TriviaError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            TriviaError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            TriviaError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TriviaError> for ErrorEnvelope {
    fn from(error: TriviaError) -> Self {
        Self {
            success: false,
            error: error.status_code().as_u16(),
            message: error.to_string(),
        }
    }
}

impl IntoResponse for TriviaError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorEnvelope::from(self))).into_response()
    }
}

impl From<JsonRejection> for TriviaError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::info!("Rejected request body: {}", rejection.body_text());
        TriviaError::Unprocessable
    }
}

// routes only take integer ids, anything else names a resource that cannot exist
impl From<PathRejection> for TriviaError {
    fn from(rejection: PathRejection) -> Self {
        tracing::info!("Rejected path: {}", rejection.body_text());
        TriviaError::NotFound
    }
}

// an unreadable query (e.g. a repeated `page`) cannot name any page
impl From<QueryRejection> for TriviaError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::info!("Rejected query: {}", rejection.body_text());
        TriviaError::NotFound
    }
}
