//! `PostgreSQL` Gateway Implementation
//!
//! This module implements the [`DataGateway`] trait for `PostgreSQL` databases.
//!
//! # Connection Descriptor
//! A `tokio-postgres` connection string, e.g.
//! `host=localhost user=app dbname=app connect_timeout=10`. The descriptor is
//! parsed once at construction; an embedded `connect_timeout` bounds how long
//! a connection attempt waits. There is no other timeout surface.
//!
//! # Implementation Notes
//! - Uses `tokio-postgres` (async driver, requires tokio runtime)
//! - The blocking variants wrap the async paths in a one-shot
//!   current-thread runtime and must not be called from inside a runtime
//! - Result sentinel: rows affected for writes; `-1` for DDL, where the
//!   server reports a command tag without a meaningful row count

use std::future::Future;
use tokio_postgres::{Config, NoTls};

use crate::command::Command;
use crate::error::{DataGateError, Result};
use crate::gateway::{BackendKind, DataGateway};

/// Sentinel reported for statements without a meaningful row count (DDL)
const DDL_SENTINEL: i64 = -1;

/// `PostgreSQL` gateway bound to one connection descriptor
#[derive(Debug, Clone)]
pub struct PostgresGateway {
    descriptor: String,
    config: Config,
}

impl PostgresGateway {
    /// Create a gateway from a `tokio-postgres` connection string
    ///
    /// # Errors
    /// Returns [`DataGateError::InvalidDescriptor`] if the descriptor cannot
    /// be parsed. Reachability is NOT checked here; use
    /// [`DataGateway::test_connection`] for that.
    pub fn new(descriptor: &str) -> Result<Self> {
        let config = descriptor
            .parse::<Config>()
            .map_err(|err| DataGateError::invalid_descriptor(err.to_string()))?;

        Ok(Self { descriptor: descriptor.to_string(), config })
    }

    /// The connection descriptor this gateway was constructed with
    #[must_use]
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// Probe body shared by the blocking and async entry points
    ///
    /// A successful handshake validates host, credentials, and target
    /// database; dropping both halves closes the connection.
    async fn probe(&self) -> bool {
        match self.config.connect(NoTls).await {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(backend = %BackendKind::Postgres, error = %err, "connection probe failed");
                false
            }
        }
    }

    /// Execution body shared by the blocking and async entry points
    async fn run(&self, command: &Command) -> Result<i64> {
        let (client, connection) = self.config.connect(NoTls).await?;

        // Spawn connection handler
        // Note: Connection errors are not logged to prevent credential leakage
        tokio::spawn(async move {
            let _ = connection.await;
        });

        let result = match command {
            Command::Write(write) => {
                let affected = client.execute(write.text(), &[]).await?;
                i64::try_from(affected).unwrap_or(i64::MAX)
            }
            Command::Insert(insert) => {
                let affected = client.execute(insert.text(), &[]).await?;
                i64::try_from(affected).unwrap_or(i64::MAX)
            }
            Command::DataDefinitionQuery(ddl) => {
                // The server's command tag for DDL carries no row count
                client.batch_execute(ddl.text()).await?;
                DDL_SENTINEL
            }
        };

        tracing::debug!(backend = %BackendKind::Postgres, rows = result, "command executed");
        Ok(result)
    }
}

/// Run an async gateway operation to completion on a one-shot runtime
///
/// # Errors
/// Returns [`DataGateError::Runtime`] if the runtime cannot be built.
fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(DataGateError::Runtime)?;
    Ok(runtime.block_on(future))
}

impl DataGateway for PostgresGateway {
    fn backend(&self) -> BackendKind {
        BackendKind::Postgres
    }

    fn test_connection(&self) -> bool {
        match block_on(self.probe()) {
            Ok(reachable) => reachable,
            Err(err) => {
                // Probes never error, runtime setup failures included
                tracing::debug!(backend = %BackendKind::Postgres, error = %err, "connection probe failed");
                false
            }
        }
    }

    async fn test_connection_async(&self) -> bool {
        self.probe().await
    }

    fn execute(&self, command: &Command) -> Result<i64> {
        block_on(self.run(command))?
    }

    async fn execute_async(&self, command: &Command) -> Result<i64> {
        self.run(command).await
    }
}
