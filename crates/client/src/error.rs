//! Client error types.

use holidaysync_core::calendar::YearError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during a sync run.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid year: {0}")]
    InvalidYear(#[from] YearError),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Calendar not found: {url}")]
    NotFound { url: String },

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Concurrency gate closed: {0}")]
    Gate(#[from] tokio::sync::AcquireError),

    #[error("Classification task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_display() {
        assert_eq!(
            ClientError::from(YearError::Empty).to_string(),
            "Invalid year: Year is empty"
        );
        assert_eq!(
            ClientError::NotFound {
                url: "http://localhost/1999.json".to_string()
            }
            .to_string(),
            "Calendar not found: http://localhost/1999.json"
        );
        assert_eq!(
            ClientError::ServerError {
                status: 503,
                message: "unavailable".to_string()
            }
            .to_string(),
            "Server returned 503: unavailable"
        );
    }
}
