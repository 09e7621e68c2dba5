//! Error types for the bound camera crate
//!
//! Runtime tick operations never fail: a vanished manipulator or an
//! unconstrained axis is represented as data. Errors only come out of
//! construction and configuration (limit kinds, projections, parallax
//! settings, manipulator lookups).

use std::fmt;

/// Result type for bound camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Bound camera errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Limit kind combines opposite directions (TOP+BOTTOM or LEFT+RIGHT)
    InvalidLimitKind(String),

    /// Projection parameters produce an unusable viewport
    InvalidViewport(String),

    /// Configuration struct holds an unusable value
    InvalidConfiguration(String),

    /// Manipulator key does not resolve in its table
    UnknownManipulator(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLimitKind(msg) => write!(f, "Invalid limit kind: {}", msg),
            Error::InvalidViewport(msg) => write!(f, "Invalid viewport: {}", msg),
            Error::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::UnknownManipulator(msg) => write!(f, "Unknown manipulator: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an [`Error`] variant and log it at ERROR severity
///
/// # Example
///
/// ```ignore
/// let err = engine_err!("boundcam::Limit", InvalidLimitKind, "kind {:?}", kind);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::boundcam::Error::$variant(message)
    }};
}

/// Log an error and return it from the enclosing function
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
