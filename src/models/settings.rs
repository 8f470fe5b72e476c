//! School-wide settings.
//!
//! Settings define the shape of the grid: how many periods a day has and
//! which class groups get a board. The validator never reads them; they
//! bound the period numbers renderers and editors offer.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Period;
use crate::error::SettingsError;

/// Upper bound for periods per day accepted by [`SchoolSettings::new`].
pub const MAX_PERIODS_LIMIT: u32 = 12;

/// Grid dimensions and class roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolSettings {
    /// Number of periods per day.
    pub max_periods: u32,
    /// Ordered class-group identifiers.
    pub classes: Vec<String>,
}

impl Default for SchoolSettings {
    fn default() -> Self {
        Self {
            max_periods: 6,
            classes: vec!["1-A".to_string(), "1-B".to_string()],
        }
    }
}

impl SchoolSettings {
    /// Creates checked settings.
    ///
    /// # Errors
    /// `max_periods` must lie in `1..=MAX_PERIODS_LIMIT`; class ids must be
    /// non-empty and unique.
    pub fn new(max_periods: u32, classes: Vec<String>) -> Result<Self, SettingsError> {
        if !(1..=MAX_PERIODS_LIMIT).contains(&max_periods) {
            return Err(SettingsError::MaxPeriodsOutOfRange {
                found: max_periods,
                max: MAX_PERIODS_LIMIT,
            });
        }

        let mut seen = HashSet::new();
        for class in &classes {
            if class.trim().is_empty() {
                return Err(SettingsError::EmptyClassId);
            }
            if !seen.insert(class.as_str()) {
                return Err(SettingsError::DuplicateClassId(class.clone()));
            }
        }

        Ok(Self {
            max_periods,
            classes,
        })
    }

    /// Creates settings from a comma-separated class list ("1-A, 1-B").
    ///
    /// Entries are trimmed and blanks dropped before the checks of [`new`](Self::new).
    pub fn from_class_list(max_periods: u32, class_list: &str) -> Result<Self, SettingsError> {
        let classes = class_list
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect();
        Self::new(max_periods, classes)
    }

    /// Periods of a day, `1..=max_periods`.
    pub fn periods(&self) -> impl Iterator<Item = Period> {
        1..=self.max_periods
    }

    /// Whether a class id is on the roster.
    pub fn has_class(&self, class_group_id: &str) -> bool {
        self.classes.iter().any(|c| c == class_group_id)
    }
}
