use thiserror::Error;

pub type TriviaResult<T> = Result<T, TriviaError>;

/// Every failure a request can end in. Storage errors never travel further
/// than the conversion into [`TriviaError::Internal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TriviaError {
    #[error("Not found")]
    NotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Unprocessable")]
    Unprocessable,
    #[error("Internal server error")]
    Internal,
}

impl From<sqlx::Error> for TriviaError {
    fn from(error: sqlx::Error) -> TriviaError {
        match error {
            sqlx::Error::RowNotFound => TriviaError::NotFound,
            error => {
                tracing::error!("Storage failure: {}", error);
                TriviaError::Internal
            }
        }
    }
}
