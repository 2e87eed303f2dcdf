use rand::Rng;

use super::config::GameConfig;
use super::state::Position;

/// The fixed discrete coordinate space of the board.
///
/// Positions are expressed in board units; on-board positions are aligned to
/// `cell_size` and lie in `[0, board_extent)` on both axes. All methods are
/// pure functions over these two constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    board_extent: i32,
    cell_size: i32,
}

impl Grid {
    pub fn new(config: &GameConfig) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "invalid board geometry: {:?}",
            config.validate()
        );
        Self {
            board_extent: config.board_extent,
            cell_size: config.cell_size,
        }
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn board_extent(&self) -> i32 {
        self.board_extent
    }

    /// True iff both coordinates are inside the board and cell-aligned
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let on_axis = |c: i32| c >= 0 && c < self.board_extent && c % self.cell_size == 0;
        on_axis(pos.x) && on_axis(pos.y)
    }

    /// A uniformly random on-board, cell-aligned position
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Position {
        let cells = self.board_extent / self.cell_size;
        let x = rng.gen_range(0..cells) * self.cell_size;
        let y = rng.gen_range(0..cells) * self.cell_size;
        Position::new(x, y)
    }

    /// The cell-aligned center of the board, used as the spawn point
    pub fn center(&self) -> Position {
        let cells = self.board_extent / self.cell_size;
        let mid = (cells / 2) * self.cell_size;
        Position::new(mid, mid)
    }
}
