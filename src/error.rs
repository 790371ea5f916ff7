//! Error type shared by every fallible operation in this crate.
use thiserror::Error;


/// Errors returned by [`Sample`](crate::Sample) construction,
/// [`AdaBoost`](crate::AdaBoost), and [`Logger`](crate::research::Logger).
#[derive(Debug, Error)]
pub enum BoostError {
    /// The given sample or parameter violates a precondition,
    /// e.g., ragged rows, labels outside `{-1, +1}`,
    /// or a feature-count mismatch at prediction time.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Failed to write a log file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}


impl BoostError {
    pub(crate) fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }
}


/// `Result` alias with [`BoostError`].
pub type Result<T> = std::result::Result<T, BoostError>;
