//! Error Handling Infrastructure
//!
//! This module defines all error types used throughout Datagate.
//! All errors are structured and map to specific error codes for programmatic handling.
//!
//! # Error Categories
//! - `InvalidCommand`: Command construction rejected before any I/O
//! - `InvalidDescriptor`: Unparseable connection descriptor
//! - `Runtime`: Failure to set up the blocking wrapper around an async driver
//! - `Sqlite`: Native SQLite driver errors, surfaced verbatim
//! - `Postgres`: Native PostgreSQL driver errors, surfaced verbatim
//!
//! Driver errors are wrapped exactly once; the original driver error stays
//! reachable through [`std::error::Error::source`], so callers keep full
//! backend diagnostic fidelity.

use thiserror::Error;

/// Main error type for Datagate operations
#[derive(Error, Debug)]
pub enum DataGateError {
    /// Command text failed construction-time validation
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Connection descriptor could not be parsed
    #[error("Invalid connection descriptor: {0}")]
    InvalidDescriptor(String),

    /// The blocking entry points could not build their one-shot runtime
    #[error("Blocking runtime setup failed: {0}")]
    Runtime(#[source] std::io::Error),

    /// Native SQLite driver error
    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Native PostgreSQL driver error
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] tokio_postgres::Error),
}

impl DataGateError {
    /// Convert error to a stable error code string
    ///
    /// Error codes are stable and suitable for programmatic handling by callers.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCommand(_) => "INVALID_COMMAND",
            Self::InvalidDescriptor(_) => "INVALID_DESCRIPTOR",
            Self::Runtime(_) => "RUNTIME_ERROR",
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "SQLITE_ERROR",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "POSTGRES_ERROR",
        }
    }

    /// Get the human-readable error message
    #[must_use]
    pub fn message(&self) -> String {
        // Use Display implementation from thiserror
        self.to_string()
    }

    /// Create an invalid command error
    pub fn invalid_command(message: impl Into<String>) -> Self {
        Self::InvalidCommand(message.into())
    }

    /// Create an invalid descriptor error
    pub fn invalid_descriptor(message: impl Into<String>) -> Self {
        Self::InvalidDescriptor(message.into())
    }
}

/// Result type alias for Datagate operations
pub type Result<T> = std::result::Result<T, DataGateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DataGateError::invalid_command("test").error_code(), "INVALID_COMMAND");
        assert_eq!(DataGateError::invalid_descriptor("test").error_code(), "INVALID_DESCRIPTOR");
        assert_eq!(
            DataGateError::Runtime(std::io::Error::new(std::io::ErrorKind::Other, "test"))
                .error_code(),
            "RUNTIME_ERROR"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = DataGateError::invalid_command("text must not be empty");
        assert!(err.message().contains("text must not be empty"));

        let err = DataGateError::invalid_descriptor("missing host");
        assert!(err.message().contains("missing host"));
    }

    #[test]
    fn test_error_constructors() {
        let err = DataGateError::invalid_command("test");
        assert!(matches!(err, DataGateError::InvalidCommand(_)));

        let err = DataGateError::invalid_descriptor("test");
        assert!(matches!(err, DataGateError::InvalidDescriptor(_)));
    }

    #[cfg(feature = "sqlite")]
    #[test]
    fn test_sqlite_error_keeps_source() {
        use std::error::Error as _;

        let driver_err = rusqlite::Connection::open_with_flags(
            "/definitely/not/a/real/path/x.db",
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE,
        )
        .unwrap_err();

        let err = DataGateError::from(driver_err);
        assert_eq!(err.error_code(), "SQLITE_ERROR");
        assert!(err.source().is_some());
    }
}
