use thiserror::Error;

/// Errors that can occur when interpreting the requested year.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum YearError {
    #[error("Year is empty")]
    Empty,
    #[error("Year is not a number: {0}")]
    NotANumber(String),
    #[error("Year is out of the supported range: {0}")]
    OutOfRange(i32),
}
