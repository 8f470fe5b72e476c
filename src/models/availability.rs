//! Instructor availability grid.
//!
//! A dense `day -> period -> bool` map of when an instructor can teach.
//!
//! # Lookup
//! A slot is available iff an entry exists for it AND the entry is `true`.
//! Missing days or periods read as unavailable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{DayOfWeek, Period, Slot};

/// Weekly availability of one instructor.
///
/// Serializes as `{"Mon": {"1": true, ...}, ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availability {
    slots: BTreeMap<DayOfWeek, BTreeMap<Period, bool>>,
}

impl Availability {
    /// Creates an empty grid (nothing available).
    pub fn none() -> Self {
        Self::default()
    }

    /// Every weekday, periods `1..=max_periods`, all available.
    pub fn all_available(max_periods: u32) -> Self {
        Self::filled(max_periods, true)
    }

    /// Every weekday, periods `1..=max_periods`, all set to `value`.
    pub fn filled(max_periods: u32, value: bool) -> Self {
        let slots = DayOfWeek::ALL
            .iter()
            .map(|&day| (day, (1..=max_periods).map(|p| (p, value)).collect()))
            .collect();
        Self { slots }
    }

    /// Sets one day's periods from a list, period 1 first.
    pub fn with_day(mut self, day: DayOfWeek, periods: &[bool]) -> Self {
        let row = self.slots.entry(day).or_default();
        for (i, &value) in periods.iter().enumerate() {
            row.insert(i as Period + 1, value);
        }
        self
    }

    /// Whether the instructor can teach at `day`/`period`.
    pub fn is_available(&self, day: DayOfWeek, period: Period) -> bool {
        self.slots
            .get(&day)
            .and_then(|row| row.get(&period))
            .copied()
            .unwrap_or(false)
    }

    /// Slot form of [`is_available`](Self::is_available).
    #[inline]
    pub fn is_available_at(&self, slot: Slot) -> bool {
        self.is_available(slot.day, slot.period)
    }

    /// Sets a single slot.
    pub fn set(&mut self, day: DayOfWeek, period: Period, available: bool) {
        self.slots.entry(day).or_default().insert(period, available);
    }

    /// Flips a single slot; an absent entry becomes available.
    pub fn toggle(&mut self, day: DayOfWeek, period: Period) {
        let current = self.is_available(day, period);
        self.set(day, period, !current);
    }

    /// Number of available slots.
    pub fn available_count(&self) -> usize {
        self.slots
            .values()
            .flat_map(|row| row.values())
            .filter(|&&v| v)
            .count()
    }
}
