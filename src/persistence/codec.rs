//! JSON encoding of the timetable state.

use crate::error::{PersistenceError, Result};
use crate::models::ScheduleState;

/// Serializes a state to the persisted JSON layout.
pub fn encode_state(state: &ScheduleState) -> Result<String> {
    serde_json::to_string_pretty(state).map_err(|source| PersistenceError::Serialization { source })
}

/// Parses a persisted blob.
///
/// All four top-level fields are required; nothing is revalidated.
pub fn decode_state(blob: &str) -> Result<ScheduleState> {
    serde_json::from_str(blob).map_err(|source| PersistenceError::Deserialization { source })
}
