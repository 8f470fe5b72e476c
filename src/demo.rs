//! Demo roster.
//!
//! Two full-time instructors and one part-timer teaching five sessions
//! across classes 1-A and 1-B. The two English sessions form the
//! `eng_level_1` sync group (ability-leveled parallel classes).

use crate::models::{
    Availability, DayOfWeek, Instructor, InstructorAssignment, ScheduleState, SchoolSettings,
};
use crate::store::{reduce, Command};

/// Periods per day in the demo roster.
const DEMO_PERIODS: u32 = 6;

/// Default school settings (6 periods, classes 1-A and 1-B).
pub fn settings() -> SchoolSettings {
    SchoolSettings::default()
}

/// Part-timer: Monday afternoons, all of Wednesday and Friday.
fn part_time_availability() -> Availability {
    Availability::filled(DEMO_PERIODS, false)
        .with_day(DayOfWeek::Mon, &[false, false, true, true, true, true])
        .with_day(DayOfWeek::Wed, &[true; 6])
        .with_day(DayOfWeek::Fri, &[true; 6])
}

/// The demo instructors with their assignments.
pub fn instructors() -> Vec<Instructor> {
    vec![
        Instructor::new("inst_1", "Sato Komorebi")
            .with_availability(Availability::all_available(DEMO_PERIODS))
            .with_assignment(InstructorAssignment::new("sess_1", "Japanese", "1-A"))
            .with_assignment(
                InstructorAssignment::new("sess_3", "English α", "1-A").with_sync_group("eng_level_1"),
            ),
        Instructor::new("inst_2", "Tanaka Stardust")
            .with_availability(Availability::all_available(DEMO_PERIODS))
            .with_assignment(InstructorAssignment::new("sess_2", "Mathematics", "1-B")),
        Instructor::new("inst_3", "Suzuki Moonlight")
            .with_part_time(true)
            .with_availability(part_time_availability())
            .with_assignment(
                InstructorAssignment::new("sess_4", "English β", "1-B").with_sync_group("eng_level_1"),
            )
            .with_assignment(InstructorAssignment::new("sess_5", "Science", "1-A")),
    ]
}

/// A validated state holding the demo roster, every session unplaced.
pub fn seed_state() -> ScheduleState {
    let base = ScheduleState {
        settings: std::sync::Arc::new(settings()),
        ..ScheduleState::default()
    };
    reduce(&base, Command::init_instructors(instructors()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_state() {
        let state = seed_state();
        let ids: Vec<&str> = state.sessions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["sess_1", "sess_3", "sess_2", "sess_4", "sess_5"]);
        assert!(state.is_valid());
        assert_eq!(state.placed_count(), 0);
    }

    #[test]
    fn test_part_timer_availability() {
        let roster = instructors();
        let part_timer = &roster[2];
        assert!(part_timer.is_part_time);
        let slots = &part_timer.available_slots;
        assert!(!slots.is_available(DayOfWeek::Mon, 2));
        assert!(slots.is_available(DayOfWeek::Mon, 3));
        assert!(!slots.is_available(DayOfWeek::Tue, 1));
        assert!(!slots.is_available(DayOfWeek::Thu, 6));
        assert!(slots.is_available(DayOfWeek::Wed, 1));
        assert_eq!(slots.available_count(), 4 + 6 + 6);
    }
}
