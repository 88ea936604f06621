mod categories;
mod questions;
mod quizzes;

use axum::Json;
use serde::Serialize;

use crate::error::TriviaError;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

pub type ApiResponse<T> = Result<Json<T>, TriviaError>;

/// Body of successful write operations.
#[derive(Serialize)]
pub struct Acknowledgement {
    success: bool,
    message: &'static str,
}

impl Acknowledgement {
    fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}
