//! Timetable rule validation.
//!
//! Computes every rule violation of a timetable from scratch. Runs in
//! three passes, always in this order:
//! 1. Instructor availability (placed sessions only)
//! 2. Double booking of an instructor within one slot
//! 3. Sync groups whose members do not share a slot
//!
//! Pure and total: the same input always yields the same list, and no
//! input makes it fail. An empty list means the timetable is valid.

use std::collections::HashMap;
use std::hash::Hash;

use crate::models::{Instructor, ScheduleError, SchoolSettings, Session};

/// Validates a timetable.
///
/// Errors are ordered by pass (availability, double booking, sync), and
/// within a pass by input order: session order for availability, first
/// appearance of the slot or sync group for the others. A session may
/// carry errors of several types, and the first member of a sync group
/// receives one error per mismatching member.
///
/// `settings` is accepted for signature stability; none of the checks
/// depends on it.
pub fn validate_schedule(
    sessions: &[Session],
    instructors: &[Instructor],
    _settings: &SchoolSettings,
) -> Vec<ScheduleError> {
    let instructor_map: HashMap<&str, &Instructor> =
        instructors.iter().map(|i| (i.id.as_str(), i)).collect();

    let mut errors = Vec::new();
    check_availability(sessions, &instructor_map, &mut errors);
    check_double_booking(sessions, &instructor_map, &mut errors);
    check_sync_groups(sessions, &mut errors);
    errors
}

/// Flags placed sessions whose instructor cannot teach in that slot.
///
/// Sessions naming an unknown instructor are skipped.
fn check_availability(
    sessions: &[Session],
    instructors: &HashMap<&str, &Instructor>,
    errors: &mut Vec<ScheduleError>,
) {
    for session in sessions {
        let Some(slot) = session.slot() else {
            continue;
        };
        let Some(instructor) = instructors.get(session.instructor_id.as_str()) else {
            continue;
        };
        if !instructor.available_slots.is_available_at(slot) {
            errors.push(ScheduleError::instructor_availability(
                &session.id,
                format!(
                    "{} is not available on {} period {}.",
                    instructor.name, slot.day, slot.period
                ),
            ));
        }
    }
}

/// Flags every session after the first of the same instructor in a slot.
fn check_double_booking(
    sessions: &[Session],
    instructors: &HashMap<&str, &Instructor>,
    errors: &mut Vec<ScheduleError>,
) {
    let by_slot = group_in_order(sessions.iter().filter_map(|s| s.slot().map(|slot| (slot, s))));

    for (_, slot_sessions) in by_slot {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for session in slot_sessions {
            let count = counts.entry(session.instructor_id.as_str()).or_insert(0);
            *count += 1;
            if *count > 1 {
                let name = instructors
                    .get(session.instructor_id.as_str())
                    .map(|i| i.name.as_str())
                    .unwrap_or("Instructor");
                errors.push(ScheduleError::double_booking(
                    &session.id,
                    format!("{name} has more than one session in the same slot."),
                ));
            }
        }
    }
}

/// Flags sync-group members whose placement differs from the group's first member.
///
/// Unplaced members take part; an unplaced member differs from any placed
/// one, and two unplaced members agree. The first member is flagged once
/// for every mismatching member.
fn check_sync_groups(sessions: &[Session], errors: &mut Vec<ScheduleError>) {
    const MESSAGE: &str = "Synchronized sessions are not scheduled in the same slot.";

    let by_group = group_in_order(
        sessions
            .iter()
            .filter_map(|s| s.active_sync_group().map(|g| (g, s))),
    );

    for (_, members) in by_group {
        let Some((first, rest)) = members.split_first() else {
            continue;
        };
        for other in rest {
            if first.placement() != other.placement() {
                errors.push(ScheduleError::sync_mismatch(&first.id, MESSAGE));
                errors.push(ScheduleError::sync_mismatch(&other.id, MESSAGE));
            }
        }
    }
}

/// Groups values by key, keeping groups in order of first key appearance.
fn group_in_order<K, V>(items: impl Iterator<Item = (K, V)>) -> Vec<(K, Vec<V>)>
where
    K: Eq + Hash + Copy,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<V>)> = Vec::new();
    for (key, value) in items {
        let i = *index.entry(key).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[i].1.push(value);
    }
    groups
}
