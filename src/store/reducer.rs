//! Pure state transition function.

use std::sync::Arc;

use super::{Command, InitData, MovePayload};
use crate::models::{Instructor, ScheduleState, SchoolSettings, Session};
use crate::sync::synchronize_sessions;
use crate::validation::validate_schedule;

/// Applies a command to a state, returning the next state.
///
/// The input is never modified. Parts the command does not touch are
/// shared with the input (`Arc::ptr_eq` holds for them), and `errors` is
/// recomputed from scratch for every command except `LoadState` and
/// `Unknown`.
///
/// | Command | Effect |
/// |---------|--------|
/// | `LoadState` | replaces everything verbatim |
/// | `InitData` | settings (or current), sessions (given or derived), instructors |
/// | `UpdateSettings` | settings only |
/// | `MoveSession` | placement of the named session only |
/// | `Unknown` | none |
pub fn reduce(state: &ScheduleState, command: Command) -> ScheduleState {
    match command {
        Command::LoadState(loaded) => loaded,
        Command::InitData(payload) => init_data(state, payload),
        Command::UpdateSettings(settings) => update_settings(state, settings),
        Command::MoveSession(payload) => move_session(state, payload),
        Command::Unknown => state.clone(),
    }
}

fn init_data(state: &ScheduleState, payload: InitData) -> ScheduleState {
    let InitData {
        settings,
        sessions,
        instructors,
    } = payload;

    let settings = settings.map_or_else(|| Arc::clone(&state.settings), Arc::new);
    let sessions =
        sessions.unwrap_or_else(|| synchronize_sessions(&instructors, &state.sessions));

    revalidated(settings, Arc::new(sessions), Arc::new(instructors))
}

fn update_settings(state: &ScheduleState, settings: SchoolSettings) -> ScheduleState {
    revalidated(
        Arc::new(settings),
        Arc::clone(&state.sessions),
        Arc::clone(&state.instructors),
    )
}

fn move_session(state: &ScheduleState, payload: MovePayload) -> ScheduleState {
    // a half placement unplaces
    let (day, period) = match (payload.day, payload.period) {
        (Some(day), Some(period)) => (Some(day), Some(period)),
        _ => (None, None),
    };

    let sessions = state
        .sessions
        .iter()
        .map(|s| {
            if s.id == payload.session_id {
                let mut moved = s.clone();
                moved.assigned_day = day;
                moved.assigned_period = period;
                moved
            } else {
                s.clone()
            }
        })
        .collect();

    revalidated(
        Arc::clone(&state.settings),
        Arc::new(sessions),
        Arc::clone(&state.instructors),
    )
}

fn revalidated(
    settings: Arc<SchoolSettings>,
    sessions: Arc<Vec<Session>>,
    instructors: Arc<Vec<Instructor>>,
) -> ScheduleState {
    let errors = validate_schedule(&sessions, &instructors, &settings);
    ScheduleState {
        settings,
        sessions,
        instructors,
        errors: Arc::new(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Availability, DayOfWeek, InstructorAssignment, ScheduleError, ScheduleErrorType,
    };

    fn roster() -> Vec<Instructor> {
        let mut away_monday_first = Availability::all_available(6);
        away_monday_first.set(DayOfWeek::Mon, 1, false);
        vec![
            Instructor::new("A", "Suzuki")
                .with_availability(away_monday_first)
                .with_assignment(InstructorAssignment::new("s1", "Math", "1-A"))
                .with_assignment(InstructorAssignment::new("s2", "Math", "1-B")),
            Instructor::new("B", "Tanaka")
                .with_availability(Availability::all_available(6))
                .with_assignment(InstructorAssignment::new("s3", "English", "1-A").with_sync_group("g1"))
                .with_assignment(InstructorAssignment::new("s4", "English", "1-B").with_sync_group("g1")),
        ]
    }

    fn initialized() -> ScheduleState {
        reduce(&ScheduleState::default(), Command::init_instructors(roster()))
    }

    fn error_kinds(state: &ScheduleState) -> Vec<(&str, ScheduleErrorType)> {
        state
            .errors
            .iter()
            .map(|e| (e.session_id.as_str(), e.error_type))
            .collect()
    }

    #[test]
    fn test_init_derives_sessions() {
        let state = initialized();
        let ids: Vec<&str> = state.sessions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2", "s3", "s4"]);
        assert_eq!(state.instructors.len(), 2);
        assert!(state.is_valid());
        assert_eq!(*state.settings, SchoolSettings::default());
    }

    #[test]
    fn test_init_with_explicit_sessions_and_settings() {
        let settings = SchoolSettings::new(8, vec!["2-A".into()]).unwrap();
        let sessions = vec![Session::new("x1", "Art", "A", "2-A").placed_at(DayOfWeek::Mon, 1)];
        let state = reduce(
            &ScheduleState::default(),
            Command::InitData(InitData {
                settings: Some(settings.clone()),
                sessions: Some(sessions.clone()),
                instructors: roster(),
            }),
        );
        assert_eq!(*state.settings, settings);
        assert_eq!(*state.sessions, sessions);
        assert_eq!(error_kinds(&state), vec![("x1", ScheduleErrorType::InstructorAvailability)]);
    }

    #[test]
    fn test_availability_cleared_by_move() {
        let state = reduce(&initialized(), Command::move_session("s1", DayOfWeek::Mon, 1));
        assert_eq!(error_kinds(&state), vec![("s1", ScheduleErrorType::InstructorAvailability)]);

        let state = reduce(&state, Command::move_session("s1", DayOfWeek::Mon, 2));
        assert!(state.is_valid());
    }

    #[test]
    fn test_double_booking_via_moves() {
        let mut state = initialized();
        state = reduce(&state, Command::move_session("s1", DayOfWeek::Wed, 3));
        state = reduce(&state, Command::move_session("s2", DayOfWeek::Wed, 3));
        assert_eq!(error_kinds(&state), vec![("s2", ScheduleErrorType::DoubleBooking)]);

        state = reduce(&state, Command::move_session("s2", DayOfWeek::Wed, 4));
        assert!(state.is_valid());
    }

    #[test]
    fn test_sync_mismatch_via_moves() {
        let state = reduce(&initialized(), Command::move_session("s3", DayOfWeek::Tue, 2));
        assert_eq!(
            error_kinds(&state),
            vec![
                ("s3", ScheduleErrorType::SyncMismatch),
                ("s4", ScheduleErrorType::SyncMismatch)
            ]
        );

        // the same instructor teaches both halves, so a shared slot trades
        // the mismatch for a double booking
        let state = reduce(&state, Command::move_session("s4", DayOfWeek::Tue, 2));
        assert_eq!(error_kinds(&state), vec![("s4", ScheduleErrorType::DoubleBooking)]);
    }

    #[test]
    fn test_move_round_trip() {
        let start = initialized();
        let placed = reduce(&start, Command::move_session("s2", DayOfWeek::Tue, 3));
        let back = reduce(&placed, Command::unplace_session("s2"));

        assert!(!back.session("s2").unwrap().is_placed());
        assert_eq!(*back.sessions, *start.sessions);
    }

    #[test]
    fn test_half_move_unplaces() {
        let start = initialized();
        let placed = reduce(&start, Command::move_session("s2", DayOfWeek::Tue, 3));
        let half = Command::MoveSession(MovePayload {
            session_id: "s2".into(),
            day: Some(DayOfWeek::Wed),
            period: None,
        });
        let next = reduce(&placed, half);

        let s2 = next.session("s2").unwrap();
        assert_eq!(s2.placement(), (None, None));
        assert_eq!(*next.sessions, *start.sessions);

        let half: Command =
            serde_json::from_str(r#"{"type":"MOVE_SESSION","payload":{"sessionId":"s2","period":4}}"#)
                .unwrap();
        let next = reduce(&placed, half);
        assert_eq!(next.session("s2").unwrap().placement(), (None, None));
    }

    #[test]
    fn test_move_leaves_others_and_input_untouched() {
        let start = reduce(&initialized(), Command::move_session("s1", DayOfWeek::Fri, 6));
        let snapshot = start.clone();
        let next = reduce(&start, Command::move_session("s2", DayOfWeek::Thu, 1));

        assert_eq!(start, snapshot);
        assert_eq!(next.session("s1"), start.session("s1"));
        assert!(Arc::ptr_eq(&next.instructors, &start.instructors));
        assert!(Arc::ptr_eq(&next.settings, &start.settings));
        assert!(!Arc::ptr_eq(&next.sessions, &start.sessions));
    }

    #[test]
    fn test_move_unknown_session() {
        let start = initialized();
        let next = reduce(&start, Command::move_session("nope", DayOfWeek::Mon, 1));
        assert_eq!(*next.sessions, *start.sessions);
    }

    #[test]
    fn test_update_settings_keeps_roster() {
        let start = reduce(&initialized(), Command::move_session("s1", DayOfWeek::Mon, 1));
        let settings = SchoolSettings::new(4, vec!["1-A".into()]).unwrap();
        let next = reduce(&start, Command::UpdateSettings(settings.clone()));

        assert_eq!(*next.settings, settings);
        assert!(Arc::ptr_eq(&next.sessions, &start.sessions));
        assert!(Arc::ptr_eq(&next.instructors, &start.instructors));
        assert_eq!(*next.errors, *start.errors);
    }

    #[test]
    fn test_load_state_is_verbatim() {
        let mut loaded = initialized();
        loaded.errors = Arc::new(vec![ScheduleError::double_booking("s1", "stale")]);
        let next = reduce(&ScheduleState::default(), Command::LoadState(loaded.clone()));
        assert_eq!(next, loaded);
        assert_eq!(next.errors[0].message, "stale");
    }

    #[test]
    fn test_unknown_command_is_noop() {
        let start = initialized();
        let next = reduce(&start, Command::Unknown);
        assert!(Arc::ptr_eq(&next.sessions, &start.sessions));
        assert!(Arc::ptr_eq(&next.errors, &start.errors));
    }

    #[test]
    fn test_reinit_drops_removed_assignment() {
        let start = reduce(&initialized(), Command::move_session("s1", DayOfWeek::Tue, 4));
        let mut instructors = roster();
        instructors[0].remove_assignment("s1");

        let next = reduce(&start, Command::init_instructors(instructors));
        assert!(next.session("s1").is_none());
        assert_eq!(next.sessions.len(), 3);

        // placement is gone for good once the prior list no longer holds it
        let readded = reduce(&next, Command::init_instructors(roster()));
        assert!(!readded.session("s1").unwrap().is_placed());
    }

    #[test]
    fn test_reinit_keeps_placements() {
        let start = reduce(&initialized(), Command::move_session("s4", DayOfWeek::Fri, 5));
        let mut instructors = roster();
        instructors[1].name = "Tanaka (renamed)".into();

        let next = reduce(&start, Command::init_instructors(instructors));
        assert_eq!(next.session("s4").unwrap().slot(), start.session("s4").unwrap().slot());
        assert!(Arc::ptr_eq(&next.settings, &start.settings));
    }
}
