//! Timetable state and rule violations.
//!
//! `ScheduleState` is the aggregate root: settings, sessions, instructors,
//! and the violations derived from them. Each part sits behind an `Arc`
//! so a transition can share untouched parts with the previous state.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{Instructor, SchoolSettings, Session};

/// A rule violation attached to one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleError {
    /// The offending or affected session.
    pub session_id: String,
    /// Human-readable description.
    pub message: String,
    /// Violation category.
    #[serde(rename = "type")]
    pub error_type: ScheduleErrorType,
}

/// Classification of timetable violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleErrorType {
    /// Session placed in a slot its instructor cannot teach.
    InstructorAvailability,
    /// Instructor holds more than one session in a slot.
    DoubleBooking,
    /// Sync group members do not share a slot.
    SyncMismatch,
}

impl ScheduleError {
    /// Creates an availability violation.
    pub fn instructor_availability(session_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            message: message.into(),
            error_type: ScheduleErrorType::InstructorAvailability,
        }
    }

    /// Creates a double-booking violation.
    pub fn double_booking(session_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            message: message.into(),
            error_type: ScheduleErrorType::DoubleBooking,
        }
    }

    /// Creates a sync-mismatch violation.
    pub fn sync_mismatch(session_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            message: message.into(),
            error_type: ScheduleErrorType::SyncMismatch,
        }
    }
}

/// Canonical timetable state.
///
/// `errors` always equals `validate_schedule` of the other three fields
/// for any state committed by the store (loaded blobs are trusted).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleState {
    pub settings: Arc<SchoolSettings>,
    pub sessions: Arc<Vec<Session>>,
    pub instructors: Arc<Vec<Instructor>>,
    pub errors: Arc<Vec<ScheduleError>>,
}

impl ScheduleState {
    /// Empty state with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the timetable has no violations.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Finds a session by id.
    pub fn session(&self, session_id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == session_id)
    }

    /// Finds an instructor by id.
    pub fn instructor(&self, instructor_id: &str) -> Option<&Instructor> {
        self.instructors.iter().find(|i| i.id == instructor_id)
    }

    /// Number of sessions with a full placement.
    pub fn placed_count(&self) -> usize {
        self.sessions.iter().filter(|s| s.is_placed()).count()
    }
}
