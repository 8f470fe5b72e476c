//! Store configuration.

use serde::{Deserialize, Serialize};

/// How a [`ScheduleStore`](crate::ScheduleStore) starts up and persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// Write every committed mutation to the gateway.
    pub persist_on_commit: bool,

    /// Start from the demo roster when nothing usable is saved.
    ///
    /// When `false`, an empty state with default settings is used.
    pub seed_when_empty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            persist_on_commit: true,
            seed_when_empty: false,
        }
    }
}

impl StoreConfig {
    /// A config that never writes to the gateway.
    pub fn ephemeral() -> Self {
        Self {
            persist_on_commit: false,
            ..Default::default()
        }
    }

    /// Sets whether commits are persisted.
    pub fn with_persist_on_commit(mut self, persist: bool) -> Self {
        self.persist_on_commit = persist;
        self
    }

    /// Sets whether an empty store is seeded with demo data.
    pub fn with_seed_when_empty(mut self, seed: bool) -> Self {
        self.seed_when_empty = seed;
        self
    }
}
