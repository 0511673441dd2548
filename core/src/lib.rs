//! Round logic for a mines-style wagering game: place a wager, reveal tiles
//! one at a time, and either cash out at the current multiplier or lose the
//! wager to a mine.
//!
//! Everything here is deterministic given a [`BoardGenerator`]; see that
//! trait for where randomness (and therefore trust) has to live.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use error::*;
pub use format::*;
pub use generator::*;
pub use multiplier::*;
pub use session::*;
pub use stats::*;
pub use store::*;
pub use types::*;

mod error;
mod format;
mod generator;
mod multiplier;
mod session;
mod stats;
mod store;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_size: u8,
    pub starting_balance: u64,
    pub min_wager: u64,
    pub max_wager: u64,
}

impl GameConfig {
    pub const fn new_unchecked(
        grid_size: u8,
        starting_balance: u64,
        min_wager: u64,
        max_wager: u64,
    ) -> Self {
        Self {
            grid_size,
            starting_balance,
            min_wager,
            max_wager,
        }
    }

    pub fn new(grid_size: u8, starting_balance: u64, min_wager: u64, max_wager: u64) -> Self {
        let grid_size = grid_size.clamp(2, u8::MAX);
        let max_wager = max_wager.max(min_wager);
        Self::new_unchecked(grid_size, starting_balance, min_wager, max_wager)
    }

    pub const fn total_tiles(&self) -> TileCount {
        square(self.grid_size)
    }

    /// Largest playable mine count, leaving at least one safe tile.
    pub const fn max_mines(&self) -> TileCount {
        self.total_tiles().saturating_sub(1)
    }

    /// Coerces a raw wager input into `0..=max_wager`.
    pub fn clamp_wager(&self, amount: i64) -> u64 {
        u64::try_from(amount).unwrap_or(0).min(self.max_wager)
    }

    pub fn validate_mine_count(&self, mines: TileCount) -> Result<()> {
        let max = self.max_mines();
        if mines == 0 || mines > max {
            Err(GameError::InvalidMineCount { mines, max })
        } else {
            Ok(())
        }
    }

    pub fn validate_position(&self, position: TileIndex) -> Result<TileIndex> {
        let total = self.total_tiles();
        if position < total {
            Ok(position)
        } else {
            Err(GameError::InvalidPosition { position, total })
        }
    }
}

impl Default for GameConfig {
    /// The table the reference client runs: a 5x5 board, a million starting
    /// coins, and wagers from 1 to 1,000,000.
    fn default() -> Self {
        Self::new_unchecked(5, 1_000_000, 1, 1_000_000)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mines: BTreeSet<TileIndex>,
    total_tiles: TileCount,
}

impl MineLayout {
    pub fn from_positions(total_tiles: TileCount, positions: &[TileIndex]) -> Result<Self> {
        let mut mines = BTreeSet::new();
        for &position in positions {
            if position >= total_tiles {
                return Err(GameError::InvalidPosition {
                    position,
                    total: total_tiles,
                });
            }
            mines.insert(position);
        }
        Ok(Self { mines, total_tiles })
    }

    pub(crate) fn from_mine_set(total_tiles: TileCount, mines: BTreeSet<TileIndex>) -> Self {
        debug_assert!(mines.iter().all(|&position| position < total_tiles));
        Self { mines, total_tiles }
    }

    pub fn validate_position(&self, position: TileIndex) -> Result<TileIndex> {
        if position < self.total_tiles {
            Ok(position)
        } else {
            Err(GameError::InvalidPosition {
                position,
                total: self.total_tiles,
            })
        }
    }

    pub const fn total_tiles(&self) -> TileCount {
        self.total_tiles
    }

    pub fn mine_count(&self) -> TileCount {
        self.mines.len() as TileCount
    }

    pub fn safe_tile_count(&self) -> TileCount {
        self.total_tiles - self.mine_count()
    }

    pub fn contains_mine(&self, position: TileIndex) -> bool {
        self.mines.contains(&position)
    }

    pub fn iter(&self) -> impl Iterator<Item = TileIndex> + '_ {
        self.mines.iter().copied()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Safe,
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Safe => true,
            HitMine => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResetOutcome {
    NoChange,
    Cleared,
}

impl ResetOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Cleared => true,
        }
    }
}
