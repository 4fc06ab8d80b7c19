//! Error types for the refine engine.

use std::fmt;

/// Context information for error reporting.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Zero-based position of the failing operation in the sequence.
    pub step: Option<usize>,
    /// Name of the failing operation, if known.
    pub operation: Option<String>,
}

/// Errors that can occur while parsing or applying operations.
#[derive(Debug)]
pub struct Error {
    /// The error message.
    pub message: String,
    /// Context information for the error.
    pub context: Context,
}

impl Error {
    /// Create an error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Context::default(),
        }
    }

    /// Add the operation step to an existing error.
    pub fn at_step(mut self, step: usize) -> Self {
        self.context.step = Some(step);
        self
    }

    /// Add the operation name to an existing error.
    pub fn in_operation(mut self, name: impl Into<String>) -> Self {
        self.context.operation = Some(name.into());
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        match (&self.context.operation, self.context.step) {
            (Some(name), Some(step)) => write!(f, " (in '{}' at step {})", name, step),
            (Some(name), None) => write!(f, " (in '{}')", name),
            (None, Some(step)) => write!(f, " (at step {})", step),
            (None, None) => Ok(()),
        }
    }
}

impl std::error::Error for Error {}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
