//! Gateway Contract and Core Types
//!
//! This module defines the uniform contract every backend gateway implements.
//! Each backend (`SQLite`, `PostgreSQL`) lives in its own submodule.
//!
//! # Stateless Design
//! A gateway is bound to one connection descriptor at construction and holds
//! no other state. Connections are opened, used, and closed within each call;
//! there is no pooling and no persistent handle. Concurrent calls on one
//! gateway instance are independent and unordered.
//!
//! # Probe/Execute Asymmetry
//! `test_connection*` is a speculative health signal: it never errors, all
//! connectivity failures collapse to `false`. `execute*` surfaces every
//! backend failure verbatim, because swallowing one would mask a
//! data-integrity problem. This asymmetry is the core contract.
//!
//! # Backend Isolation
//! Each gateway implementation is completely independent. No shared SQL
//! helpers, no dialect translation; command text is opaque.

use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::command::Command;
use crate::error::Result;

// Backend-specific implementations
#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "postgres")]
pub mod postgres;

/// Supported database backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// `SQLite` embedded file engine
    SQLite,
    /// `PostgreSQL` client/server engine
    Postgres,
}

impl BackendKind {
    /// Get the backend name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SQLite => "sqlite",
            Self::Postgres => "postgres",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Database gateway trait
///
/// All backend gateways implement this trait. Every operation exists in a
/// blocking and a non-blocking form with identical semantics; the async
/// variants suspend only at the I/O boundary, never during validation.
///
/// # Execute Result Sentinels
/// `execute*` returns a backend-defined integer. The sentinel is NOT uniform
/// across backends and each implementation documents its own:
/// - `SQLite`: rows changed; a DDL statement such as `CREATE TABLE` reports `0`
/// - `PostgreSQL`: rows affected for writes; `-1` for DDL, where a row count
///   is not meaningful
///
/// # Blocking Variants
/// `test_connection` and `execute` on gateways backed by an async driver run
/// a one-shot runtime internally and MUST NOT be called from inside an async
/// runtime; use the `_async` variants there.
pub trait DataGateway {
    /// The backend this gateway targets
    fn backend(&self) -> BackendKind;

    /// Probe connectivity: open a connection, close it, report the outcome
    ///
    /// Never errors. Unreachable hosts, nonexistent databases, and missing
    /// files all report `false`.
    fn test_connection(&self) -> bool;

    /// Non-blocking form of [`DataGateway::test_connection`]
    ///
    /// Never errors; a failed probe resolves to `false`.
    fn test_connection_async(&self) -> impl Future<Output = bool> + Send;

    /// Execute one command, returning the backend's result sentinel
    ///
    /// # Errors
    /// Backend-native failures (malformed SQL, pre-existing objects,
    /// unreachable database) are propagated, wrapped once with the driver
    /// error retained as the source. Nothing is retried.
    fn execute(&self, command: &Command) -> Result<i64>;

    /// Non-blocking form of [`DataGateway::execute`]
    ///
    /// # Errors
    /// Same failure behavior as [`DataGateway::execute`], delivered through
    /// the returned future.
    fn execute_async(&self, command: &Command) -> impl Future<Output = Result<i64>> + Send;
}
