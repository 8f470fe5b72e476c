//! Persistence of the timetable state.
//!
//! The store depends only on [`PersistenceGateway`]: fetch the last saved
//! blob, write a new one. Two gateways ship with the crate:
//!
//! - `MemoryGateway` - keeps the blob in memory (tests, embedding)
//! - `FileGateway` - JSON file on disk with atomic replace
//!
//! # Blob Format
//!
//! A single JSON object with `settings`, `sessions`, `instructors`, and
//! `errors`, field names in camelCase. `errors` is stored but never
//! recomputed on load.

mod codec;
mod file;
mod memory;

pub use codec::{decode_state, encode_state};
pub use file::FileGateway;
pub use memory::MemoryGateway;

use crate::error::Result;
use crate::models::ScheduleState;

/// Storage for the serialized timetable state.
pub trait PersistenceGateway {
    /// Returns the last saved blob, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<String>>;

    /// Replaces the saved blob.
    fn save(&mut self, blob: &str) -> Result<()>;
}

impl<G: PersistenceGateway + ?Sized> PersistenceGateway for Box<G> {
    fn load(&self) -> Result<Option<String>> {
        (**self).load()
    }

    fn save(&mut self, blob: &str) -> Result<()> {
        (**self).save(blob)
    }
}

/// Reads and decodes the last saved state.
///
/// A read failure or an undecodable blob is logged and reported as
/// `None`; a partially parsed state is never returned.
pub fn load_state<G: PersistenceGateway + ?Sized>(gateway: &G) -> Option<ScheduleState> {
    let blob = match gateway.load() {
        Ok(Some(blob)) => blob,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(error = %e, "could not read saved timetable state");
            return None;
        }
    };

    match decode_state(&blob) {
        Ok(state) => Some(state),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring corrupt timetable state");
            None
        }
    }
}

/// Encodes and writes a state.
pub fn save_state<G: PersistenceGateway + ?Sized>(
    gateway: &mut G,
    state: &ScheduleState,
) -> Result<()> {
    let blob = encode_state(state)?;
    gateway.save(&blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOfWeek, Instructor, Session};
    use std::sync::Arc;

    #[test]
    fn test_load_state_absent() {
        let gateway = MemoryGateway::new();
        assert!(load_state(&gateway).is_none());
    }

    #[test]
    fn test_load_state_corrupt() {
        let gateway = MemoryGateway::with_blob("{\"settings\": 42");
        assert!(load_state(&gateway).is_none());

        let gateway = MemoryGateway::with_blob("{\"sessions\": []}");
        assert!(load_state(&gateway).is_none());
    }

    #[test]
    fn test_save_then_load() {
        let mut gateway = MemoryGateway::new();
        let state = ScheduleState {
            sessions: Arc::new(vec![
                Session::new("s1", "Math", "i1", "1-A").placed_at(DayOfWeek::Thu, 4)
            ]),
            instructors: Arc::new(vec![Instructor::new("i1", "Sato")]),
            ..ScheduleState::default()
        };

        save_state(&mut gateway, &state).unwrap();
        assert_eq!(load_state(&gateway), Some(state));
    }

    #[test]
    fn test_boxed_gateway() {
        let mut gateway: Box<dyn PersistenceGateway> = Box::new(MemoryGateway::new());
        save_state(&mut gateway, &ScheduleState::default()).unwrap();
        assert_eq!(load_state(&gateway), Some(ScheduleState::default()));
    }
}
