//! Persistence boundary for the balance and stats that outlive a session.
//!
//! The round logic never blocks on this: profiles are loaded once at seating
//! time and written back best-effort after each settlement, so a dead store
//! costs history, not gameplay.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{GameConfig, GameStats};

/// The persisted slice of a session: everything worth keeping between visits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub balance: u64,
    pub stats: GameStats,
}

impl Profile {
    /// Profile of a player seen for the first time.
    pub fn fresh(config: &GameConfig) -> Self {
        Self {
            balance: config.starting_balance,
            stats: GameStats::default(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Profile store unavailable: {reason}")]
pub struct StoreError {
    reason: String,
}

impl StoreError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Where profiles live between sessions: a backend, browser storage, a file.
pub trait ProfileStore {
    fn load(&self) -> Result<Profile, StoreError>;
    fn save(&mut self, profile: &Profile) -> Result<(), StoreError>;
}

/// Loads the profile to seat a session with, falling back to a fresh one when
/// the store cannot answer.
pub fn load_or_default(store: &impl ProfileStore, config: &GameConfig) -> Profile {
    match store.load() {
        Ok(profile) => profile,
        Err(err) => {
            log::warn!("Failed to load profile, starting fresh: {}", err);
            Profile::fresh(config)
        }
    }
}

/// Writes the profile back after a settlement. Failures are logged and
/// swallowed, the in-memory session stays authoritative.
pub fn save_best_effort(store: &mut impl ProfileStore, profile: &Profile) {
    if let Err(err) = store.save(profile) {
        log::warn!("Failed to save profile: {}", err);
    }
}

/// Keeps the profile in process memory, mostly useful in tests and demos.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    profile: Option<Profile>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved_profile(&self) -> Option<Profile> {
        self.profile
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self) -> Result<Profile, StoreError> {
        self.profile
            .ok_or_else(|| StoreError::new("no profile saved yet"))
    }

    fn save(&mut self, profile: &Profile) -> Result<(), StoreError> {
        self.profile = Some(*profile);
        Ok(())
    }
}

/// Stand-in for a backend that always answers with table defaults and
/// acknowledges writes without keeping them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DefaultsStore {
    config: GameConfig,
}

impl DefaultsStore {
    pub const fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl ProfileStore for DefaultsStore {
    fn load(&self) -> Result<Profile, StoreError> {
        Ok(Profile::fresh(&self.config))
    }

    fn save(&mut self, _profile: &Profile) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl ProfileStore for BrokenStore {
        fn load(&self) -> Result<Profile, StoreError> {
            Err(StoreError::new("backend is down"))
        }

        fn save(&mut self, _profile: &Profile) -> Result<(), StoreError> {
            Err(StoreError::new("backend is down"))
        }
    }

    #[test]
    fn memory_store_round_trips_a_profile() {
        let mut store = MemoryStore::new();
        let profile = Profile {
            balance: 123_456,
            stats: GameStats {
                games_played: 2,
                games_won: 1,
                games_lost: 1,
                biggest_win: 777,
            },
        };

        save_best_effort(&mut store, &profile);

        assert_eq!(store.saved_profile(), Some(profile));
        assert_eq!(store.load(), Ok(profile));
        assert_eq!(load_or_default(&store, &GameConfig::default()), profile);
    }

    #[test]
    fn empty_memory_store_reports_a_load_error() {
        let store = MemoryStore::new();

        assert_eq!(store.saved_profile(), None);
        assert!(store.load().is_err());
    }

    #[test]
    fn broken_store_falls_back_to_a_fresh_profile() {
        let config = GameConfig::default();
        let profile = load_or_default(&BrokenStore, &config);

        assert_eq!(profile, Profile::fresh(&config));
        assert_eq!(profile.balance, 1_000_000);
        assert_eq!(profile.stats, GameStats::default());
    }

    #[test]
    fn failed_saves_are_swallowed() {
        let mut store = BrokenStore;
        save_best_effort(&mut store, &Profile::default());
    }

    #[test]
    fn defaults_store_discards_writes() {
        let config = GameConfig::default();
        let mut store = DefaultsStore::new(config);

        let played = Profile {
            balance: 42,
            stats: GameStats::default(),
        };
        save_best_effort(&mut store, &played);

        assert_eq!(store.load(), Ok(Profile::fresh(&config)));
    }
}
