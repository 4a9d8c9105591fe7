// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dutybook::CoreError;
use dutybook_domain::DomainError;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested resource was not found.
    NotFound(String),
    /// The requested staff member was not found.
    StaffNotFound(String),
    /// The requested time block was not found.
    BlockNotFound(i64),
    /// The requested time entry was not found.
    EntryNotFound(i64),
    /// The requested assignment was not found.
    AssignmentNotFound(i64),
    /// The requested sign-off record was not found.
    SignOffNotFound(i64),
    /// No report sign-off exists for the month.
    ReportSignOffNotFound {
        /// The year.
        year: u16,
        /// The month number.
        month: u8,
    },
    /// The requested rota shift was not found.
    ShiftNotFound(i64),
    /// The requested audit event was not found.
    EventNotFound(i64),
    /// No rota entry exists for the date.
    RotaEntryNotFound(String),
    /// A store-level uniqueness constraint rejected the write.
    UniqueViolation(String),
    /// A stored value could not be converted to its domain form.
    ConversionError(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::StaffNotFound(id) => write!(f, "Staff member not found: {id}"),
            Self::BlockNotFound(id) => write!(f, "Time block not found: {id}"),
            Self::EntryNotFound(id) => write!(f, "Time entry not found: {id}"),
            Self::AssignmentNotFound(id) => write!(f, "Assignment not found: {id}"),
            Self::SignOffNotFound(id) => write!(f, "Sign-off not found: {id}"),
            Self::ReportSignOffNotFound { year, month } => {
                write!(f, "No report sign-off exists for {year}-{month:02}")
            }
            Self::ShiftNotFound(id) => write!(f, "Rota shift not found: {id}"),
            Self::EventNotFound(id) => write!(f, "Audit event not found: {id}"),
            Self::RotaEntryNotFound(date) => {
                write!(f, "No rota entry exists for {date}")
            }
            Self::UniqueViolation(msg) => write!(f, "Uniqueness constraint violated: {msg}"),
            Self::ConversionError(msg) => write!(f, "Stored value conversion failed: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                info,
            ) => Self::UniqueViolation(info.message().to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

/// The outcome type for gated operations.
///
/// A gated operation can fail two ways: the command is rejected by
/// validation or the lock engine (`Rejected`), or storage itself fails
/// (`Storage`). Rejections are user-facing and recoverable; storage
/// failures are operational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    /// The command was rejected; nothing was mutated.
    Rejected(CoreError),
    /// The underlying storage operation failed.
    Storage(PersistenceError),
}

impl std::fmt::Display for OpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for OpError {}

impl From<CoreError> for OpError {
    fn from(err: CoreError) -> Self {
        Self::Rejected(err)
    }
}

impl From<DomainError> for OpError {
    fn from(err: DomainError) -> Self {
        Self::Rejected(CoreError::DomainViolation(err))
    }
}

impl From<PersistenceError> for OpError {
    fn from(err: PersistenceError) -> Self {
        Self::Storage(err)
    }
}

impl From<diesel::result::Error> for OpError {
    fn from(err: diesel::result::Error) -> Self {
        Self::Storage(err.into())
    }
}
