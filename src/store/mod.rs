//! Timetable state store.
//!
//! [`reduce`] is the pure transition function. [`ScheduleStore`] owns the
//! current state, applies commands one at a time, and writes every
//! committed state through its persistence gateway.
//!
//! # Usage
//!
//! ```
//! use u_timetable::{Command, ScheduleStore, StoreConfig};
//! use u_timetable::models::DayOfWeek;
//! use u_timetable::persistence::MemoryGateway;
//!
//! let mut store = ScheduleStore::open(MemoryGateway::new(), StoreConfig::default());
//! store.dispatch(Command::init_instructors(u_timetable::demo::instructors()));
//! let state = store.dispatch(Command::move_session("sess_1", DayOfWeek::Mon, 1));
//! assert!(state.is_valid());
//! ```

mod command;
mod reducer;

pub use command::{Command, InitData, MovePayload};
pub use reducer::reduce;

use crate::config::StoreConfig;
use crate::demo;
use crate::models::{DayOfWeek, Instructor, Period, ScheduleState, SchoolSettings};
use crate::persistence::{self, PersistenceGateway};

/// Owner of the canonical timetable state.
///
/// Commands are processed synchronously and completely, one per call;
/// readers only ever see committed states. Persisting is best effort: a
/// failed save is logged and the in-memory state stays committed.
#[derive(Debug)]
pub struct ScheduleStore<G: PersistenceGateway> {
    state: ScheduleState,
    gateway: G,
    config: StoreConfig,
}

impl<G: PersistenceGateway> ScheduleStore<G> {
    /// Creates a store starting from `state`, without reading the gateway.
    pub fn new(gateway: G, config: StoreConfig, state: ScheduleState) -> Self {
        Self {
            state,
            gateway,
            config,
        }
    }

    /// Creates a store from the gateway's last saved state.
    ///
    /// A missing or corrupt blob falls back to the empty default state, or
    /// to the demo roster when `config.seed_when_empty` is set.
    pub fn open(gateway: G, config: StoreConfig) -> Self {
        let state = match persistence::load_state(&gateway) {
            Some(state) => state,
            None if config.seed_when_empty => {
                tracing::debug!("no saved timetable, seeding demo roster");
                demo::seed_state()
            }
            None => ScheduleState::default(),
        };
        Self::new(gateway, config, state)
    }

    /// The last committed state.
    pub fn state(&self) -> &ScheduleState {
        &self.state
    }

    /// Store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The persistence gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Consumes the store, returning its gateway.
    pub fn into_gateway(self) -> G {
        self.gateway
    }

    /// Applies a command and returns the new state.
    ///
    /// Every command but `LoadState` and `Unknown` is persisted after its
    /// errors are recomputed.
    pub fn dispatch(&mut self, command: Command) -> &ScheduleState {
        let name = command.name();
        let commits = command.commits();

        self.state = reduce(&self.state, command);
        tracing::debug!(
            command = name,
            sessions = self.state.sessions.len(),
            errors = self.state.errors.len(),
            "applied command"
        );

        if commits && self.config.persist_on_commit {
            if let Err(e) = persistence::save_state(&mut self.gateway, &self.state) {
                tracing::warn!(command = name, error = %e, "failed to persist timetable state");
            }
        }
        &self.state
    }

    /// Replaces the state verbatim.
    pub fn load_state(&mut self, state: ScheduleState) -> &ScheduleState {
        self.dispatch(Command::LoadState(state))
    }

    /// Installs a roster, re-deriving sessions from its assignments.
    pub fn init_data(&mut self, payload: InitData) -> &ScheduleState {
        self.dispatch(Command::InitData(payload))
    }

    /// Replaces the instructor roster, keeping placements by session id.
    pub fn update_instructors(&mut self, instructors: Vec<Instructor>) -> &ScheduleState {
        self.dispatch(Command::init_instructors(instructors))
    }

    /// Replaces the school settings.
    pub fn update_settings(&mut self, settings: SchoolSettings) -> &ScheduleState {
        self.dispatch(Command::UpdateSettings(settings))
    }

    /// Places a session at `day`/`period`.
    pub fn move_session(
        &mut self,
        session_id: impl Into<String>,
        day: DayOfWeek,
        period: Period,
    ) -> &ScheduleState {
        self.dispatch(Command::move_session(session_id, day, period))
    }

    /// Returns a session to the unplaced pool.
    pub fn unplace_session(&mut self, session_id: impl Into<String>) -> &ScheduleState {
        self.dispatch(Command::unplace_session(session_id))
    }
}
