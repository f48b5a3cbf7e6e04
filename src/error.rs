//! Error types for case conversion

use thiserror::Error;

/// Result type for case conversion operations
pub type Result<T> = std::result::Result<T, CaseError>;

/// Errors raised by the conversion engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    /// A required argument was absent
    #[error("Invalid argument: `{name}` must not be absent")]
    InvalidArgument { name: &'static str },
}

/// Returned when a string does not name a known naming convention
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown case: {0} (expected one of: dot, camel, kebab, snake, pascal, train)")]
pub struct ParseCaseError(pub String);
