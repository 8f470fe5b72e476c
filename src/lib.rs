//! School timetable state engine.
//!
//! Keeps the canonical state of a weekly timetable (which session sits in
//! which day/period slot for which class) and recomputes every rule
//! violation after each edit. Placement is chosen by people; this crate
//! only derives, validates, and stores it.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Session`, `Instructor`, `InstructorAssignment`,
//!   `SchoolSettings`, `Availability`, `ScheduleError`, `ScheduleState`
//! - **`sync`**: Derives the session list from instructors' assignments
//! - **`validation`**: Availability, double-booking, and sync-group checks
//! - **`store`**: Commands, the pure reducer, and the persisting `ScheduleStore`
//! - **`persistence`**: Gateway trait plus in-memory and JSON-file gateways
//! - **`board`**: Read-side queries for grid renderers
//! - **`demo`**: Seed data
//!
//! # Flow
//!
//! ```text
//! Command ─▶ reduce ─▶ synchronize_sessions? ─▶ validate_schedule ─▶ gateway.save
//! ```

pub mod board;
pub mod config;
pub mod demo;
pub mod error;
pub mod models;
pub mod persistence;
pub mod store;
pub mod sync;
pub mod validation;

pub use config::StoreConfig;
pub use error::{PersistenceError, SettingsError};
pub use store::{reduce, Command, ScheduleStore};
pub use sync::synchronize_sessions;
pub use validation::validate_schedule;
