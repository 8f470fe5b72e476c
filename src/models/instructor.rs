//! Instructor model.
//!
//! Instructors teach sessions. Each carries a weekly availability grid and
//! the list of assignments (subject × class) it is responsible for; the
//! assignments are the source from which placeable sessions are derived.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Availability;

/// A teacher on the school roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    /// Unique, stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Informational flag; availability is what the validator checks.
    pub is_part_time: bool,
    /// When this instructor can teach.
    pub available_slots: Availability,
    /// Teaching obligations, in display order.
    #[serde(default)]
    pub assignments: Vec<InstructorAssignment>,
}

/// A declared teaching obligation of one instructor.
///
/// The assignment id doubles as the id of the session derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorAssignment {
    pub id: String,
    pub subject_id: String,
    /// Should reference a class in `SchoolSettings::classes`.
    pub class_group_id: String,
    #[serde(default)]
    pub is_required_sync: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_group_id: Option<String>,
}

impl Instructor {
    /// Creates a full-time instructor with no availability and no assignments.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_part_time: false,
            available_slots: Availability::none(),
            assignments: Vec::new(),
        }
    }

    /// Creates an instructor with a random `inst-` id, available in every
    /// slot of a `max_periods` day.
    pub fn generated<R: Rng>(name: impl Into<String>, max_periods: u32, rng: &mut R) -> Self {
        Self::new(generate_id("inst", rng), name)
            .with_availability(Availability::all_available(max_periods))
    }

    /// Sets the part-time flag.
    pub fn with_part_time(mut self, is_part_time: bool) -> Self {
        self.is_part_time = is_part_time;
        self
    }

    /// Sets the availability grid.
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.available_slots = availability;
        self
    }

    /// Appends an assignment.
    pub fn with_assignment(mut self, assignment: InstructorAssignment) -> Self {
        self.assignments.push(assignment);
        self
    }

    /// Removes an assignment by id. Returns whether one was removed.
    pub fn remove_assignment(&mut self, assignment_id: &str) -> bool {
        let before = self.assignments.len();
        self.assignments.retain(|a| a.id != assignment_id);
        self.assignments.len() != before
    }

    /// Finds an assignment by id.
    pub fn assignment(&self, assignment_id: &str) -> Option<&InstructorAssignment> {
        self.assignments.iter().find(|a| a.id == assignment_id)
    }
}

impl InstructorAssignment {
    /// Creates an unsynchronized assignment.
    pub fn new(
        id: impl Into<String>,
        subject_id: impl Into<String>,
        class_group_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            subject_id: subject_id.into(),
            class_group_id: class_group_id.into(),
            is_required_sync: false,
            sync_group_id: None,
        }
    }

    /// Creates an assignment with a random `sess-` id.
    pub fn generated<R: Rng>(
        subject_id: impl Into<String>,
        class_group_id: impl Into<String>,
        rng: &mut R,
    ) -> Self {
        Self::new(generate_id("sess", rng), subject_id, class_group_id)
    }

    /// Marks the assignment as part of a sync group.
    pub fn with_sync_group(mut self, sync_group_id: impl Into<String>) -> Self {
        self.is_required_sync = true;
        self.sync_group_id = Some(sync_group_id.into());
        self
    }
}

/// Builds `"{prefix}-{16 hex digits}"`.
fn generate_id<R: Rng>(prefix: &str, rng: &mut R) -> String {
    format!("{prefix}-{:016x}", rng.random::<u64>())
}
