//! Gateway Contract Testing
//!
//! Exercises the public API end to end against the embedded backend:
//! - command validation happens before any connection is opened
//! - probe and execute keep their asymmetric failure behavior
//! - result sentinels and driver errors match the documented contract
//!
//! Client/server coverage that needs a live PostgreSQL process lives in the
//! backend's own module and is `#[ignore]`d; everything here runs on a
//! throwaway SQLite file.

#![cfg(feature = "sqlite")]

use pretty_assertions::assert_eq;
use std::path::PathBuf;

use datagate::{BackendKind, Command, DataGateError, DataGateway, Insert, SqliteGateway, Write};

// ============================================================================
// Test Helpers
// ============================================================================

fn fresh_db_path(label: &str) -> PathBuf {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let path = std::env::temp_dir().join(format!("datagate_contract_{label}_{timestamp}.db"));
    let _ = std::fs::remove_file(&path);
    path
}

fn cleanup_db(path: &PathBuf) {
    let _ = std::fs::remove_file(path);
}

// ============================================================================
// Command Validation (no I/O)
// ============================================================================

#[test]
fn command_validation_rejects_before_any_io() {
    // Empty text fails both write and insert
    assert!(matches!(Write::new(""), Err(DataGateError::InvalidCommand(_))));
    assert!(matches!(Insert::new(""), Err(DataGateError::InvalidCommand(_))));

    // Non-empty text without the prefix: valid write, invalid insert
    let text = "UPDATE users SET name = 'Bob' WHERE id = 1";
    assert!(Write::new(text).is_ok());
    assert!(matches!(Insert::new(text), Err(DataGateError::InvalidCommand(_))));

    // Prefixed text passes regardless of letter case, and keeps its text
    let text = "InSeRt InTo users (name) VALUES ('Alice')";
    let insert = Insert::new(text).unwrap();
    assert_eq!(insert.text(), text);
}

#[test]
fn ddl_text_is_passed_through_verbatim() {
    let command = Command::ddl("CREATE TABLE #TestTemp (Id tinyint);");
    assert_eq!(command.text(), "CREATE TABLE #TestTemp (Id tinyint);");
}

// ============================================================================
// Probe Semantics
// ============================================================================

#[tokio::test]
async fn probe_reports_health_without_errors() {
    let path = fresh_db_path("probe");
    let gateway = SqliteGateway::new(path.clone());
    assert_eq!(gateway.backend(), BackendKind::SQLite);

    // Missing database: false in both forms, never an error or panic
    assert!(!gateway.test_connection());
    assert!(!gateway.test_connection_async().await);

    // Execution creates the file; subsequent probes see a healthy target
    gateway.execute(&Command::ddl("CREATE TABLE t (id INTEGER)")).unwrap();
    assert!(gateway.test_connection());
    assert!(gateway.test_connection_async().await);

    cleanup_db(&path);
}

// ============================================================================
// Execute Semantics
// ============================================================================

#[tokio::test]
async fn execute_sentinels_match_embedded_backend_contract() {
    let path = fresh_db_path("sentinels");
    let gateway = SqliteGateway::new(path.clone());

    // DDL on a fresh database: statement executed, no rows affected
    let created = gateway.execute(&Command::ddl("CREATE TABLE CreateObject (Id INTEGER);"));
    assert_eq!(created.unwrap(), 0);

    // Inserts report rows changed on both entry points
    let insert = Command::insert("INSERT INTO CreateObject (Id) VALUES (1)").unwrap();
    assert_eq!(gateway.execute(&insert).unwrap(), 1);
    let insert = Command::insert("INSERT INTO CreateObject (Id) VALUES (2)").unwrap();
    assert_eq!(gateway.execute_async(&insert).await.unwrap(), 1);

    cleanup_db(&path);
}

#[tokio::test]
async fn execute_failures_surface_on_both_entry_points() {
    let path = fresh_db_path("failures");
    let gateway = SqliteGateway::new(path.clone());

    let malformed = Command::ddl("CREATE TABLE #TestTemp;");
    assert!(matches!(gateway.execute(&malformed), Err(DataGateError::Sqlite(_))));
    assert!(matches!(gateway.execute_async(&malformed).await, Err(DataGateError::Sqlite(_))));

    // The probe path stays unaffected by execution failures
    assert!(gateway.test_connection());

    cleanup_db(&path);
}

#[tokio::test]
async fn concurrent_executes_on_one_gateway_are_independent() {
    let path = fresh_db_path("concurrent");
    let gateway = SqliteGateway::new(path.clone());

    let left_cmd = Command::ddl("CREATE TABLE left_side (id INTEGER)");
    let right_cmd = Command::ddl("CREATE TABLE right_side (id INTEGER)");
    let (left, right) = tokio::join!(
        gateway.execute_async(&left_cmd),
        gateway.execute_async(&right_cmd),
    );
    assert_eq!(left.unwrap(), 0);
    assert_eq!(right.unwrap(), 0);

    // Both objects exist; a write against each succeeds
    let insert = Command::insert("INSERT INTO left_side (id) VALUES (1)").unwrap();
    assert_eq!(gateway.execute(&insert).unwrap(), 1);
    let insert = Command::insert("INSERT INTO right_side (id) VALUES (1)").unwrap();
    assert_eq!(gateway.execute(&insert).unwrap(), 1);

    cleanup_db(&path);
}
