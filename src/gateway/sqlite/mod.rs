//! `SQLite` Gateway Implementation
//!
//! This module implements the [`DataGateway`] trait for `SQLite` databases.
//!
//! # Connection Descriptor
//! A file path (`/path/to/db.sqlite`). The probe opens the file without the
//! create flag, so a missing file reports `false`; execution opens
//! read-write-create, so executing against a fresh path creates the file.
//!
//! # Implementation Notes
//! - Uses `rusqlite` (synchronous driver, no suspension needed)
//! - The async variants run the same synchronous code inside the async call
//! - Writer contention is bounded by a default `busy_timeout`
//! - Result sentinel: rows changed; DDL such as `CREATE TABLE` reports `0`

use rusqlite::{Connection, OpenFlags};
use std::path::PathBuf;
use std::time::Duration;

use crate::command::Command;
use crate::error::Result;
use crate::gateway::{BackendKind, DataGateway};

/// How long an opened connection waits on a locked database before failing
const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// `SQLite` gateway bound to one database file
#[derive(Debug, Clone)]
pub struct SqliteGateway {
    path: PathBuf,
}

impl SqliteGateway {
    /// Create a gateway for the database file named by `descriptor`
    #[must_use]
    pub fn new(descriptor: impl Into<PathBuf>) -> Self {
        Self { path: descriptor.into() }
    }

    /// The connection descriptor this gateway was constructed with
    #[must_use]
    pub fn descriptor(&self) -> &std::path::Path {
        &self.path
    }

    /// Open a connection for command execution (creates the file if missing)
    fn open_for_execute(&self) -> Result<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE;
        let conn = Connection::open_with_flags(&self.path, flags)?;
        conn.busy_timeout(DEFAULT_BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Probe body shared by the blocking and async entry points
    fn probe(&self) -> bool {
        // No create flag: probing must not materialize the database file
        let outcome = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_WRITE)
            .and_then(|conn| conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0)));

        match outcome {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(backend = %BackendKind::SQLite, error = %err, "connection probe failed");
                false
            }
        }
    }

    /// Execution body shared by the blocking and async entry points
    fn run(&self, command: &Command) -> Result<i64> {
        let conn = self.open_for_execute()?;

        // Rows changed for DML; 0 for DDL. Every command kind executes the
        // same way here: one statement, text passed to the engine verbatim.
        let changed = conn.execute(command.text(), [])?;

        tracing::debug!(backend = %BackendKind::SQLite, rows = changed, "command executed");
        Ok(i64::try_from(changed).unwrap_or(i64::MAX))
    }
}

impl DataGateway for SqliteGateway {
    fn backend(&self) -> BackendKind {
        BackendKind::SQLite
    }

    fn test_connection(&self) -> bool {
        self.probe()
    }

    async fn test_connection_async(&self) -> bool {
        // rusqlite is synchronous; the file open never suspends
        self.probe()
    }

    fn execute(&self, command: &Command) -> Result<i64> {
        self.run(command)
    }

    async fn execute_async(&self, command: &Command) -> Result<i64> {
        self.run(command)
    }
}
