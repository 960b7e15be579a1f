use axum::http::StatusCode;
use standard_error::{StandardError, Status};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("job not found: {0}")]
    JobNotFound(String),

    #[error("application not found: {0}")]
    ApplicationNotFound(String),

    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error("id already in use: {0}")]
    Conflict(String),
}

pub type BoardResult<T> = core::result::Result<T, BoardError>;

impl From<BoardError> for StandardError {
    fn from(err: BoardError) -> Self {
        tracing::debug!("board error: {}", &err);
        match err {
            BoardError::JobNotFound(_) => {
                StandardError::new("ERR-JOB-404").code(StatusCode::NOT_FOUND)
            }
            BoardError::ApplicationNotFound(_) => {
                StandardError::new("ERR-APPLICATION-404").code(StatusCode::NOT_FOUND)
            }
            BoardError::ValidationFailed(_) => {
                StandardError::new("ERR-VALIDATION-001").code(StatusCode::UNPROCESSABLE_ENTITY)
            }
            BoardError::Conflict(_) => {
                StandardError::new("ERR-CONFLICT-001").code(StatusCode::CONFLICT)
            }
        }
    }
}

/// Rejects blank (empty or whitespace-only) required fields.
pub fn require(field: &str, value: &str) -> BoardResult<()> {
    if value.trim().is_empty() {
        return Err(BoardError::ValidationFailed(format!("{} cannot be empty", field)));
    }
    Ok(())
}
