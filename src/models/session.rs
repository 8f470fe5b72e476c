//! Session model.
//!
//! A session is the placeable unit of the timetable: one lesson of one
//! subject for one class, taught by one instructor. Only sessions carry a
//! placement.
//!
//! # Placement
//! `assigned_day` and `assigned_period` are meant to be set together. A
//! session with only one of them set is treated as unplaced by the
//! availability and double-booking checks. Sync-group comparison uses the
//! raw [`Session::placement`] pair, so a half-placed member still differs
//! from an unplaced one.

use serde::{Deserialize, Serialize};

use super::{DayOfWeek, InstructorAssignment, Period, Slot};

/// A placeable teaching session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique id; equals the source assignment id when derived.
    pub id: String,
    pub subject_id: String,
    pub instructor_id: String,
    pub class_group_id: String,
    /// Whether this session must share its slot with its sync group.
    pub is_required_sync: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_day: Option<DayOfWeek>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_period: Option<Period>,
}

impl Session {
    /// Creates an unplaced, unsynchronized session.
    pub fn new(
        id: impl Into<String>,
        subject_id: impl Into<String>,
        instructor_id: impl Into<String>,
        class_group_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            subject_id: subject_id.into(),
            instructor_id: instructor_id.into(),
            class_group_id: class_group_id.into(),
            is_required_sync: false,
            sync_group_id: None,
            assigned_day: None,
            assigned_period: None,
        }
    }

    /// Derives an unplaced session from an instructor's assignment.
    pub fn from_assignment(instructor_id: &str, assignment: &InstructorAssignment) -> Self {
        Self {
            id: assignment.id.clone(),
            subject_id: assignment.subject_id.clone(),
            instructor_id: instructor_id.to_string(),
            class_group_id: assignment.class_group_id.clone(),
            is_required_sync: assignment.is_required_sync,
            sync_group_id: assignment.sync_group_id.clone(),
            assigned_day: None,
            assigned_period: None,
        }
    }

    /// Marks the session as part of a sync group.
    pub fn with_sync_group(mut self, sync_group_id: impl Into<String>) -> Self {
        self.is_required_sync = true;
        self.sync_group_id = Some(sync_group_id.into());
        self
    }

    /// Places the session at `day`/`period`.
    pub fn placed_at(mut self, day: DayOfWeek, period: Period) -> Self {
        self.assigned_day = Some(day);
        self.assigned_period = Some(period);
        self
    }

    /// The occupied slot, if both day and period are set.
    pub fn slot(&self) -> Option<Slot> {
        match (self.assigned_day, self.assigned_period) {
            (Some(day), Some(period)) => Some(Slot::new(day, period)),
            _ => None,
        }
    }

    /// Whether both day and period are set.
    #[inline]
    pub fn is_placed(&self) -> bool {
        self.slot().is_some()
    }

    /// Raw placement pair, used for sync-group comparison.
    ///
    /// Two unplaced sessions compare equal here.
    #[inline]
    pub fn placement(&self) -> (Option<DayOfWeek>, Option<Period>) {
        (self.assigned_day, self.assigned_period)
    }

    /// The sync group this session must follow, if any.
    ///
    /// Requires `is_required_sync` and a non-empty group id.
    pub fn active_sync_group(&self) -> Option<&str> {
        match &self.sync_group_id {
            Some(group) if self.is_required_sync && !group.is_empty() => Some(group.as_str()),
            _ => None,
        }
    }
}
