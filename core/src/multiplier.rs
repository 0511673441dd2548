//! Payout math for the posted odds: every safe reveal compounds the
//! multiplier by `1 + mines / 10`, and amounts settle in whole coins.

use crate::types::TileCount;

/// Multiplier after `revealed` safe tiles with `mine_count` mines in play,
/// `(1 + mine_count / 10) ^ revealed` rounded to cents.
pub fn multiplier(revealed: TileCount, mine_count: TileCount) -> f64 {
    round2(growth_base(mine_count).powi(revealed as i32))
}

/// Per-reveal growth factor. More mines in play pay better odds.
pub fn growth_base(mine_count: TileCount) -> f64 {
    1.0 + f64::from(mine_count) / 10.0
}

/// How much the most recent reveal added to the multiplier.
pub fn tile_bonus(revealed: TileCount, mine_count: TileCount) -> f64 {
    if revealed == 0 {
        return 0.0;
    }
    round2(multiplier(revealed, mine_count) - multiplier(revealed - 1, mine_count))
}

/// Coins returned by cashing out `wager` at `multiplier`, floored to a whole coin.
pub fn potential_win(wager: u64, multiplier: f64) -> u64 {
    (wager as f64 * multiplier).floor() as u64
}

/// Profit relative to the wager, negative when the multiplier is below 1.
pub fn net_win(wager: u64, multiplier: f64) -> i64 {
    let winnings = i64::try_from(potential_win(wager, multiplier)).unwrap_or(i64::MAX);
    winnings.saturating_sub_unsigned(wager)
}

/// Rounds to two decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
