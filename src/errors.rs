//! Error handling for the mock generator.
//!
//! Most malformed input is recovered silently: a line with no parameter
//! list degrades to "no parameters, no return type" rather than failing,
//! because the supported grammar subset is deliberately permissive. Only
//! unrecoverable structural breaks surface as an error value.

use thiserror::Error;

/// Main error type for the mock generator.
#[derive(Error, Debug)]
pub enum MockerError {
    /// A parameter list was opened but its parenthesis balance never
    /// returned to zero before the end of the line.
    #[error("Unmatched parenthesis in signature: {0}")]
    UnmatchedParenthesis(String),

    /// Errors related to file I/O, such as file not found or permission denied.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the mock generator.
pub type MockerResult<T> = Result<T, MockerError>;
