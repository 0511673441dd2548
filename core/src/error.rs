use thiserror::Error;

use crate::types::{TileCount, TileIndex};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Wager {wager} is outside the allowed range {min}..={max}")]
    InvalidWager { wager: u64, min: u64, max: u64 },
    #[error("Mine count {mines} is outside the allowed range 1..={max}")]
    InvalidMineCount { mines: TileCount, max: TileCount },
    #[error("Tile {position} is outside the board of {total} tiles")]
    InvalidPosition { position: TileIndex, total: TileCount },
    #[error("Round already started, no setup changes are accepted")]
    RoundAlreadyStarted,
}

pub type Result<T> = std::result::Result<T, GameError>;
