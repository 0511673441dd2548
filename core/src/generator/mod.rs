use crate::*;
pub use random::*;

mod random;

/// Produces the mine layout for one round.
///
/// The built-in [`RandomBoardGenerator`] runs wherever the session runs, so a
/// player who can read its memory can read the board. Deployments that pay out
/// real value should implement this trait on the server side and hand the
/// session a layout the client never generates itself.
pub trait BoardGenerator {
    fn generate(self, config: GameConfig, mine_count: TileCount) -> MineLayout;
}
