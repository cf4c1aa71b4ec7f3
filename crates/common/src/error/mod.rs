//! Error classification shared across podpublish crates
//!
//! Every error type that crosses a crate boundary implements
//! [`ErrorClassification`] so callers can make uniform decisions about
//! retrying, logging level and user-facing severity without matching on
//! concrete variants.
//!
//! ## ErrorSeverity Levels
//!
//! | Level | Use Case | Examples |
//! |-------|----------|----------|
//! | **Info** | Expected conditions | Empty shop list, unsupported catalog combination |
//! | **Warning** | Degraded but operational | Rate limiting |
//! | **Error** | Failure requiring attention | Rejected credential, HTTP 5xx, invalid input |
//!
//! ## Example
//!
//! ```rust,ignore
//! use podpublish_common::error::{ErrorClassification, ErrorSeverity};
//!
//! #[derive(Debug, thiserror::Error)]
//! pub enum UploadError {
//!     #[error("upload rejected: {0}")]
//!     Rejected(String),
//!     #[error("throttled")]
//!     Throttled,
//! }
//!
//! impl ErrorClassification for UploadError {
//!     fn is_retryable(&self) -> bool {
//!         matches!(self, Self::Throttled)
//!     }
//!
//!     fn severity(&self) -> ErrorSeverity {
//!         match self {
//!             Self::Rejected(_) => ErrorSeverity::Error,
//!             Self::Throttled => ErrorSeverity::Warning,
//!         }
//!     }
//! }
//! ```

use std::fmt;

/// Standard interface for classifying errors by their characteristics.
pub trait ErrorClassification {
    /// Check if this error is retryable
    ///
    /// Retryable errors are transient issues that may succeed if attempted
    /// again, such as rate limiting.
    fn is_retryable(&self) -> bool;

    /// Get the error severity level
    ///
    /// Used for logging decisions and user-facing presentation.
    fn severity(&self) -> ErrorSeverity;
}

/// Error severity levels for logging and presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational, typically for debugging
    Info,
    /// Warning, should be monitored but not critical
    Warning,
    /// Error, requires attention and action
    Error,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}
