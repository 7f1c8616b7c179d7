//! Unified error handling for the application layer.
//!
//! Wraps domain validation failures together with the input, I/O and
//! parsing failures of the command-line surface, and decides which details
//! are safe to print.

use domain::FieldError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Validation
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Seed file error: {0}")]
    Seed(#[from] serde_json::Error),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Field(_) => "VALIDATION_ERROR",
            AppError::InvalidDate(_) => "INVALID_DATE",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Io(_) => "IO_ERROR",
            AppError::Seed(_) => "SEED_ERROR",
        }
    }

    /// Check if the error was caused by caller input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Field(_) | AppError::InvalidDate(_) | AppError::BadRequest(_)
        )
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Field(err) => err.to_string(),
            AppError::BadRequest(msg) => msg.clone(),

            // Hide OS details, log them instead
            AppError::Io(err) => {
                tracing::error!("I/O error: {:?}", err);
                format!("I/O error: {}", err.kind())
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn invalid_date(input: impl Into<String>) -> Self {
        AppError::InvalidDate(input.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }
}
