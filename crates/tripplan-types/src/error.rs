use thiserror::Error;

/// Result type for tripplan-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown field: {0} (expected origin, destination, departure or return)")]
    UnknownField(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date for {field}: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },
}
