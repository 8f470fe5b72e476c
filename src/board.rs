//! Read-side queries for timetable boards.
//!
//! Renderers show one board per class: a grid of periods × days whose
//! cells list the sessions placed there, plus a pool of unplaced sessions.
//! Everything here reads a committed [`ScheduleState`] and never mutates.

use crate::models::{DayOfWeek, Period, ScheduleError, ScheduleState, Session};

/// One row of a class board: the cells of a period, Monday first.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardRow<'a> {
    pub period: Period,
    pub cells: Vec<Vec<&'a Session>>,
}

/// Sessions of `class_group_id` placed at `day`/`period`, in session order.
pub fn sessions_in_cell<'a>(
    state: &'a ScheduleState,
    class_group_id: &str,
    day: DayOfWeek,
    period: Period,
) -> Vec<&'a Session> {
    state
        .sessions
        .iter()
        .filter(|s| {
            s.class_group_id == class_group_id
                && s.assigned_day == Some(day)
                && s.assigned_period == Some(period)
        })
        .collect()
}

/// Sessions missing a day or a period.
pub fn unassigned_sessions(state: &ScheduleState) -> Vec<&Session> {
    state.sessions.iter().filter(|s| !s.is_placed()).collect()
}

/// All errors naming a session, duplicates included.
pub fn errors_for_session<'a>(state: &'a ScheduleState, session_id: &str) -> Vec<&'a ScheduleError> {
    state
        .errors
        .iter()
        .filter(|e| e.session_id == session_id)
        .collect()
}

/// Whether a session may be dropped on the board of `class_group_id`.
///
/// Sessions only belong on their own class's board.
pub fn accepts_drop(session: &Session, class_group_id: &str) -> bool {
    session.class_group_id == class_group_id
}

/// Full board of one class, one row per period of the configured day.
pub fn class_timetable<'a>(state: &'a ScheduleState, class_group_id: &str) -> Vec<BoardRow<'a>> {
    state
        .settings
        .periods()
        .map(|period| BoardRow {
            period,
            cells: DayOfWeek::ALL
                .iter()
                .map(|&day| sessions_in_cell(state, class_group_id, day, period))
                .collect(),
        })
        .collect()
}
