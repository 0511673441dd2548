use std::collections::BTreeSet;

use super::*;

/// Purely random placement: draws uniformly until the requested number of
/// distinct tiles holds a mine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig, mine_count: TileCount) -> MineLayout {
        use rand::prelude::*;

        let total_tiles = config.total_tiles();

        // a full board leaves nothing to reveal and the draw loop would never finish
        let mine_count = if mine_count >= total_tiles {
            log::warn!(
                "Requested {} mines but only {} tiles, clamping to {}",
                mine_count,
                total_tiles,
                total_tiles.saturating_sub(1)
            );
            total_tiles.saturating_sub(1)
        } else {
            mine_count
        };

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines = BTreeSet::new();
        while (mines.len() as TileCount) < mine_count {
            mines.insert(rng.random_range(0..total_tiles));
        }

        MineLayout::from_mine_set(total_tiles, mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exactly_the_requested_number_of_mines() {
        let config = GameConfig::default();

        for seed in 0..32 {
            let layout = RandomBoardGenerator::new(seed).generate(config, 5);
            assert_eq!(layout.mine_count(), 5);
            assert_eq!(layout.total_tiles(), 25);
            assert!(layout.iter().all(|position| position < 25));
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_board() {
        let config = GameConfig::default();

        let first = RandomBoardGenerator::new(7).generate(config, 10);
        let second = RandomBoardGenerator::new(7).generate(config, 10);

        assert_eq!(first, second);
    }

    #[test]
    fn oversized_mine_count_is_clamped_to_leave_one_safe_tile() {
        let config = GameConfig::default();

        let layout = RandomBoardGenerator::new(0).generate(config, 25);

        assert_eq!(layout.mine_count(), 24);
        assert_eq!(layout.safe_tile_count(), 1);
    }
}
