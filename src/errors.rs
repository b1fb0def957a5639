/// Represents all error types that can occur in the board library.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Errors {
    /// A required value was absent or is not allowed for the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Attempted access outside the bounds of the chess board.
    #[error("index cannot be outside range [0,63], got {0}")]
    OutOfBounds(isize),
}

/// Result alias for board library operations.
pub type Result<T> = std::result::Result<T, Errors>;
