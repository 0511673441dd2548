use serde::{Deserialize, Serialize};

use crate::*;

/// Wager preselected for a fresh session, before the player touches the input.
const DEFAULT_WAGER: u64 = 10_000;
/// Mine count preselected for a fresh session.
const DEFAULT_MINES: TileCount = 5;

/// Where the round stands, derived from the session rather than stored in it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// No round underway: wager and mine count can change, tiles are inert.
    Setup,
    /// Wager escrowed and board live: reveals and cash-out are accepted.
    Playing,
    /// Round settled, board still shown: only a reset is accepted.
    Result,
}

impl RoundPhase {
    pub const fn is_setup(self) -> bool {
        matches!(self, Self::Setup)
    }

    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_result(self) -> bool {
        matches!(self, Self::Result)
    }
}

/// What a successful cash-out paid.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub multiplier: f64,
    pub winnings: u64,
    pub net_win: u64,
}

/// One player's seat at the table: balance, stats, round state, and the
/// transitions between them. Single-owner by design; there is no interior
/// mutability and no sharing to coordinate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    balance: u64,
    wager: u64,
    mine_count: TileCount,
    layout: Option<MineLayout>,
    revealed: Vec<TileIndex>,
    active: bool,
    current_multiplier: f64,
    triggered_mine: Option<TileIndex>,
    stats: GameStats,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self::with_profile(config, Profile::fresh(&config))
    }

    /// Seats a player with a previously persisted balance and stats.
    pub fn with_profile(config: GameConfig, profile: Profile) -> Self {
        Self {
            balance: profile.balance,
            wager: DEFAULT_WAGER.min(config.max_wager),
            mine_count: DEFAULT_MINES.min(config.max_mines()).max(1),
            layout: None,
            revealed: Vec::new(),
            active: false,
            current_multiplier: 1.0,
            triggered_mine: None,
            stats: profile.stats,
            config,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn wager(&self) -> u64 {
        self.wager
    }

    pub fn mine_count(&self) -> TileCount {
        self.mine_count
    }

    pub fn current_multiplier(&self) -> f64 {
        self.current_multiplier
    }

    pub fn triggered_mine(&self) -> Option<TileIndex> {
        self.triggered_mine
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    /// The board of the round in progress, or of the round just settled.
    pub fn mine_layout(&self) -> Option<&MineLayout> {
        self.layout.as_ref()
    }

    pub fn phase(&self) -> RoundPhase {
        if self.active {
            RoundPhase::Playing
        } else if self.revealed.is_empty() {
            RoundPhase::Setup
        } else {
            RoundPhase::Result
        }
    }

    pub fn revealed_count(&self) -> TileCount {
        self.revealed.len() as TileCount
    }

    /// Tiles revealed this round, in click order.
    pub fn reveal_order(&self) -> &[TileIndex] {
        &self.revealed
    }

    pub fn is_revealed(&self, position: TileIndex) -> bool {
        self.revealed.contains(&position)
    }

    pub fn has_mine_at(&self, position: TileIndex) -> bool {
        self.layout
            .as_ref()
            .is_some_and(|layout| layout.contains_mine(position))
    }

    /// What a cash-out right now would pay.
    pub fn potential_win(&self) -> u64 {
        crate::multiplier::potential_win(self.wager, self.current_multiplier)
    }

    /// The persistable slice of the session, handed to a [`ProfileStore`]
    /// after each settlement.
    pub fn profile(&self) -> Profile {
        Profile {
            balance: self.balance,
            stats: self.stats,
        }
    }

    /// Coerces and applies a wager edit, returning the effective wager.
    /// Outside of setup the input is ignored.
    pub fn set_wager(&mut self, amount: i64) -> u64 {
        if self.phase().is_setup() {
            self.wager = self.config.clamp_wager(amount);
        }
        self.wager
    }

    pub fn set_mines(&mut self, mines: TileCount) -> Result<()> {
        self.config.validate_mine_count(mines)?;
        self.check_setup()?;
        self.mine_count = mines;
        Ok(())
    }

    /// Escrows the wager and opens the board produced by `generator`.
    pub fn start_round(&mut self, generator: impl BoardGenerator) -> Result<()> {
        self.check_setup()?;
        self.config.validate_mine_count(self.mine_count)?;

        let max = self.config.max_wager.min(self.balance);
        if self.wager < self.config.min_wager || self.wager > max {
            return Err(GameError::InvalidWager {
                wager: self.wager,
                min: self.config.min_wager,
                max,
            });
        }

        // the guard above keeps the wager within the balance
        self.balance -= self.wager;
        self.layout = Some(generator.generate(self.config, self.mine_count));
        self.revealed.clear();
        self.current_multiplier = 1.0;
        self.triggered_mine = None;
        self.active = true;
        log::debug!(
            "round started: wager {}, {} mines",
            self.wager,
            self.mine_count
        );
        Ok(())
    }

    pub fn reveal_tile(&mut self, position: TileIndex) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let position = self.config.validate_position(position)?;

        if !self.phase().is_playing() || self.is_revealed(position) {
            return Ok(NoChange);
        }

        // start_round always sets a layout, but a deserialized snapshot can
        // claim an active round without one
        let Some(layout) = self.layout.as_ref() else {
            return Ok(NoChange);
        };
        let hit_mine = layout.contains_mine(position);
        self.revealed.push(position);

        if hit_mine {
            self.triggered_mine = Some(position);
            self.active = false;
            self.stats.record(RoundOutcome::Loss);
            log::debug!(
                "mine hit at tile {} after {} reveals",
                position,
                self.revealed.len()
            );
            Ok(HitMine)
        } else {
            self.current_multiplier = multiplier(self.revealed_count(), self.mine_count);
            log::debug!(
                "safe tile {}, multiplier now {:.2}",
                position,
                self.current_multiplier
            );
            Ok(Safe)
        }
    }

    /// Settles the round at the current multiplier. Returns `None` when there
    /// is no live round or nothing has been revealed yet.
    pub fn cash_out(&mut self) -> Option<Settlement> {
        if !self.phase().is_playing() || self.revealed.is_empty() {
            return None;
        }

        let winnings = crate::multiplier::potential_win(self.wager, self.current_multiplier);
        let net_win = winnings.saturating_sub(self.wager);
        self.balance = self.balance.saturating_add(winnings);
        self.active = false;
        self.stats.record(RoundOutcome::Win { net_win });
        log::debug!(
            "cashed out {} at {:.2}x",
            winnings,
            self.current_multiplier
        );
        Some(Settlement {
            multiplier: self.current_multiplier,
            winnings,
            net_win,
        })
    }

    /// Clears the settled board back to setup. Wager, mine count, balance,
    /// and stats all carry over.
    pub fn reset_round(&mut self) -> ResetOutcome {
        use ResetOutcome::*;

        if !self.phase().is_result() {
            return NoChange;
        }

        self.revealed.clear();
        self.layout = None;
        self.current_multiplier = 1.0;
        self.triggered_mine = None;
        Cleared
    }

    fn check_setup(&self) -> Result<()> {
        if self.phase().is_setup() {
            Ok(())
        } else {
            Err(GameError::RoundAlreadyStarted)
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
