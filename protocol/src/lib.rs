//! Wire types for the stats round-trip between the game client and whatever
//! backs it. The JSON shape is fixed by the deployed web client: camelCase
//! keys, a `{ balance, stats }` document in both directions, and a bare
//! message object acknowledging writes.

use minestake_core::{GameStats, Profile};
use serde::{Deserialize, Serialize};

/// Body of a stats fetch response, and of a stats update request.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub balance: u64,
    pub stats: StatsCounters,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsCounters {
    pub games_played: u64,
    pub games_won: u64,
    pub games_lost: u64,
    pub biggest_win: u64,
}

/// Body acknowledging a stats update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveAck {
    pub message: String,
}

impl SaveAck {
    pub fn updated() -> Self {
        Self {
            message: "Stats updated successfully".into(),
        }
    }
}

impl ProfilePayload {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl From<Profile> for ProfilePayload {
    fn from(profile: Profile) -> Self {
        Self {
            balance: profile.balance,
            stats: profile.stats.into(),
        }
    }
}

impl From<ProfilePayload> for Profile {
    fn from(payload: ProfilePayload) -> Self {
        Self {
            balance: payload.balance,
            stats: payload.stats.into(),
        }
    }
}

impl From<GameStats> for StatsCounters {
    fn from(stats: GameStats) -> Self {
        Self {
            games_played: stats.games_played,
            games_won: stats.games_won,
            games_lost: stats.games_lost,
            biggest_win: stats.biggest_win,
        }
    }
}

impl From<StatsCounters> for GameStats {
    fn from(counters: StatsCounters) -> Self {
        Self {
            games_played: counters.games_played,
            games_won: counters.games_won,
            games_lost: counters.games_lost,
            biggest_win: counters.biggest_win,
        }
    }
}
