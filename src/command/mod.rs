//! Database Command Model
//!
//! This module defines the value objects a gateway accepts: a closed set of
//! command kinds unified by the [`Command`] enum. Commands are immutable,
//! caller-owned, and validated at construction so malformed intent is
//! rejected before any connection is opened.
//!
//! # Command Kinds
//! - [`Write`]: generic data-modification statement; text must be non-empty
//! - [`Insert`]: a narrower intent than `Write`; text must additionally start
//!   with the case-insensitive literal `"insert into"`
//! - [`DataDefinitionQuery`]: raw DDL text, passed through verbatim; the
//!   backend is the sole arbiter of syntactic correctness
//!
//! # Validation Strategy
//! Validation is purely lexical and synchronous. No I/O, no suspension.
//! Deserialization goes through the same constructors (`try_from`), so a
//! command obtained from serialized data carries the same guarantees as one
//! built in code.

use serde::{Deserialize, Serialize};

use crate::error::{DataGateError, Result};

/// Required prefix for [`Insert`] command text (matched ASCII-case-insensitively)
const INSERT_PREFIX: &str = "insert into";

/// Generic data-modification command
///
/// Holds one statement of non-empty text. The text is otherwise opaque;
/// no dialect checks are performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Write {
    text: String,
}

impl Write {
    /// Construct a write command, rejecting empty text
    ///
    /// # Errors
    /// Returns [`DataGateError::InvalidCommand`] if `text` is empty.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(DataGateError::invalid_command("command text must not be empty"));
        }
        Ok(Self { text })
    }

    /// The raw statement text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the command, returning the raw statement text
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl TryFrom<String> for Write {
    type Error = DataGateError;

    fn try_from(text: String) -> Result<Self> {
        Self::new(text)
    }
}

impl From<Write> for String {
    fn from(command: Write) -> Self {
        command.text
    }
}

impl std::fmt::Display for Write {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Insert command
///
/// Carries the same non-empty guarantee as [`Write`] plus a syntactic
/// prefix check: the text must begin with `"insert into"`, any letter case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Insert {
    text: String,
}

impl Insert {
    /// Construct an insert command
    ///
    /// The emptiness check runs first, then the prefix check. A prefix slice
    /// that does not fall on a character boundary fails the prefix check.
    ///
    /// # Errors
    /// Returns [`DataGateError::InvalidCommand`] if `text` is empty or does
    /// not start with `"insert into"` (case-insensitive).
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = Write::new(text)?.into_text();

        let has_prefix = text
            .get(..INSERT_PREFIX.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(INSERT_PREFIX));
        if !has_prefix {
            return Err(DataGateError::invalid_command(format!(
                "insert command text must start with \"{INSERT_PREFIX}\" (case-insensitive)"
            )));
        }

        Ok(Self { text })
    }

    /// The raw statement text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the command, returning the raw statement text
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl TryFrom<String> for Insert {
    type Error = DataGateError;

    fn try_from(text: String) -> Result<Self> {
        Self::new(text)
    }
}

impl From<Insert> for String {
    fn from(command: Insert) -> Self {
        command.text
    }
}

impl std::fmt::Display for Insert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Data-definition command (DDL)
///
/// No validation is applied; the text travels to the backend verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DataDefinitionQuery {
    text: String,
}

impl DataDefinitionQuery {
    /// Construct a DDL command from raw statement text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw statement text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the command, returning the raw statement text
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl From<String> for DataDefinitionQuery {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for DataDefinitionQuery {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<DataDefinitionQuery> for String {
    fn from(command: DataDefinitionQuery) -> Self {
        command.text
    }
}

impl std::fmt::Display for DataDefinitionQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Any command a gateway can execute
///
/// The set of kinds is small and fixed, so gateways dispatch with a plain
/// `match` at the execution site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Generic data-modification statement
    Write(Write),
    /// Insert statement
    Insert(Insert),
    /// Data-definition statement
    DataDefinitionQuery(DataDefinitionQuery),
}

impl Command {
    /// Construct a validated [`Write`] command
    ///
    /// # Errors
    /// Returns [`DataGateError::InvalidCommand`] if `text` is empty.
    pub fn write(text: impl Into<String>) -> Result<Self> {
        Ok(Self::Write(Write::new(text)?))
    }

    /// Construct a validated [`Insert`] command
    ///
    /// # Errors
    /// Returns [`DataGateError::InvalidCommand`] if `text` is empty or lacks
    /// the `"insert into"` prefix.
    pub fn insert(text: impl Into<String>) -> Result<Self> {
        Ok(Self::Insert(Insert::new(text)?))
    }

    /// Construct a [`DataDefinitionQuery`] command (never fails)
    #[must_use]
    pub fn ddl(text: impl Into<String>) -> Self {
        Self::DataDefinitionQuery(DataDefinitionQuery::new(text))
    }

    /// The raw statement text, whatever the kind
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Write(command) => command.text(),
            Self::Insert(command) => command.text(),
            Self::DataDefinitionQuery(command) => command.text(),
        }
    }
}

impl From<Write> for Command {
    fn from(command: Write) -> Self {
        Self::Write(command)
    }
}

impl From<Insert> for Command {
    fn from(command: Insert) -> Self {
        Self::Insert(command)
    }
}

impl From<DataDefinitionQuery> for Command {
    fn from(command: DataDefinitionQuery) -> Self {
        Self::DataDefinitionQuery(command)
    }
}
