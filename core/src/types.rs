/// Flat tile position on the board, row-major in `0..total_tiles`.
pub type TileIndex = u16;

/// Count type used for mine counts and total-tile counts.
pub type TileCount = u16;

pub const fn square(side: u8) -> TileCount {
    let side = side as TileCount;
    side.saturating_mul(side)
}
