//! Datagate - Uniform Command Gateway for Relational Backends
//!
//! Datagate is a thin data-access gateway: it presents one contract for
//! executing typed data-definition and data-modification commands against
//! heterogeneous relational backends, in both blocking and non-blocking
//! form, plus a connectivity probe that is independent of command execution.
//!
//! # Core Principles
//! - One gateway instance is bound to one connection descriptor for life
//! - Fresh connection per call (no pooling, no persistent handle)
//! - Commands are validated before any I/O occurs
//! - Probes never error; execution failures surface the driver error verbatim
//! - No SQL dialect translation (vendor-specific SQL is the caller's problem)
//!
//! # Module Organization
//! - [`error`] - Error types and handling
//! - [`command`] - Command value objects and their validation
//! - [`gateway`] - Gateway contract and backend implementations
//!
//! # Example
//! ```no_run
//! use datagate::{Command, DataGateway, SqliteGateway};
//!
//! # fn main() -> datagate::Result<()> {
//! let gateway = SqliteGateway::new("/tmp/app.db");
//! if gateway.test_connection() {
//!     let created = gateway.execute(&Command::ddl("CREATE TABLE t (id INTEGER)"))?;
//!     assert_eq!(created, 0);
//! }
//! # Ok(())
//! # }
//! ```

pub mod command; // Command value objects and construction-time validation
pub mod error; // Error handling infrastructure
pub mod gateway; // Gateway contract and backend implementations

// Re-export commonly used types for convenience
pub use command::{Command, DataDefinitionQuery, Insert, Write};
pub use error::{DataGateError, Result};
pub use gateway::{BackendKind, DataGateway};

#[cfg(feature = "postgres")]
pub use gateway::postgres::PostgresGateway;
#[cfg(feature = "sqlite")]
pub use gateway::sqlite::SqliteGateway;
