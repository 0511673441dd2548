use serde::{Deserialize, Serialize};

/// How a settled round ended. A win carries the profit over the wager.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Win { net_win: u64 },
    Loss,
}

/// Lifetime play counters carried across rounds and sessions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub games_played: u64,
    pub games_won: u64,
    pub games_lost: u64,
    pub biggest_win: u64,
}

impl GameStats {
    pub fn record(&mut self, outcome: RoundOutcome) {
        self.games_played = self.games_played.saturating_add(1);
        match outcome {
            RoundOutcome::Win { net_win } => {
                self.games_won = self.games_won.saturating_add(1);
                self.biggest_win = self.biggest_win.max(net_win);
            }
            RoundOutcome::Loss => {
                self.games_lost = self.games_lost.saturating_add(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wins_and_losses_both_count_as_played() {
        let mut stats = GameStats::default();

        stats.record(RoundOutcome::Win { net_win: 5_000 });
        stats.record(RoundOutcome::Loss);
        stats.record(RoundOutcome::Loss);

        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.games_lost, 2);
        assert_eq!(stats.games_won + stats.games_lost, stats.games_played);
    }

    #[test]
    fn biggest_win_keeps_the_maximum_and_ignores_losses() {
        let mut stats = GameStats::default();

        stats.record(RoundOutcome::Win { net_win: 500 });
        stats.record(RoundOutcome::Win { net_win: 5_000 });
        stats.record(RoundOutcome::Win { net_win: 1_000 });
        assert_eq!(stats.biggest_win, 5_000);

        stats.record(RoundOutcome::Loss);
        assert_eq!(stats.biggest_win, 5_000);
    }
}
