//! Crate error types.
//!
//! Rule violations in a timetable are not errors here; they are
//! [`ScheduleError`](crate::models::ScheduleError) values carried in the
//! state. The enums below cover contract violations and I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for persistence operations.
pub type Result<T, E = PersistenceError> = std::result::Result<T, E>;

/// Rejected school settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Periods per day outside the supported range.
    #[error("maxPeriods must be between 1 and {max}, got {found}")]
    MaxPeriodsOutOfRange { found: u32, max: u32 },

    /// A class identifier is blank.
    #[error("class identifiers must not be empty")]
    EmptyClassId,

    /// The same class identifier appears twice.
    #[error("duplicate class identifier: {0}")]
    DuplicateClassId(String),
}

/// Persistence gateway error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Temp file could not be renamed over the target.
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// State could not be encoded.
    #[error("Failed to serialize timetable state")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Stored blob is not a timetable state.
    #[error("Failed to deserialize timetable state")]
    Deserialization {
        #[source]
        source: serde_json::Error,
    },

    /// The gateway refused the write.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl PersistenceError {
    /// A message suitable for showing to the person editing the timetable.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!("Could not {} the file at {}", operation, path.display()),
            Self::AtomicWriteFailed { target_path, .. } => format!(
                "Could not save the timetable to {}. Please check disk space and permissions.",
                target_path.display()
            ),
            Self::Serialization { .. } => {
                "An error occurred while saving the timetable.".to_string()
            }
            Self::Deserialization { .. } => {
                "The saved timetable could not be read and was ignored.".to_string()
            }
            Self::Unavailable(reason) => format!("Storage is unavailable: {reason}"),
        }
    }
}
