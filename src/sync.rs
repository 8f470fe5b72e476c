//! Assignment synchronization.
//!
//! Instructors' assignment lists are the source of truth for what can be
//! placed. This module derives the session list from them, carrying over
//! the placement of every session whose id survives.

use std::collections::HashMap;

use crate::models::{Instructor, Session};

/// Derives one session per assignment, instructors first, then assignments.
///
/// Identity fields come from the assignment and its instructor. Placement
/// is copied from the previous session with the same id; a new id starts
/// unplaced. Previous sessions without a matching assignment are dropped
/// together with their placement.
///
/// Pure and idempotent: feeding the output back in with the same
/// instructors yields an equal list.
pub fn synchronize_sessions(instructors: &[Instructor], previous: &[Session]) -> Vec<Session> {
    let by_id: HashMap<&str, &Session> = previous.iter().map(|s| (s.id.as_str(), s)).collect();

    let mut sessions = Vec::with_capacity(instructors.iter().map(|i| i.assignments.len()).sum());
    for instructor in instructors {
        for assignment in &instructor.assignments {
            let mut session = Session::from_assignment(&instructor.id, assignment);
            if let Some(prev) = by_id.get(assignment.id.as_str()) {
                session.assigned_day = prev.assigned_day;
                session.assigned_period = prev.assigned_period;
            }
            sessions.push(session);
        }
    }
    sessions
}
