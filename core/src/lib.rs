use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use error::*;
pub use generator::*;
pub use grid::*;
pub use plate::*;
pub use types::*;

mod error;
mod generator;
mod grid;
mod plate;
mod types;

/// Board dimensions and mine budget for one game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    /// Clamps to a playable configuration: each axis at least 1, and mines
    /// strictly below the cell total so placement always terminates.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mines = mines.min(mult(width, height) - 1);
        Self::new_unchecked(width, height, mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }
}

/// Mine placement for one game. Built once by a generator (or from explicit
/// coordinates in tests) and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl Minefield {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&mined| mined).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_coords(width: Coord, height: Coord, mines: &[Pos]) -> Result<Self> {
        let mut mine_mask: Array2<bool> =
            Array2::default((height.max(0) as usize, width.max(0) as usize));

        for &(row, col) in mines {
            if row < 0 || row >= height || col < 0 || col >= width {
                return Err(GameError::InvalidReference(row, col));
            }
            mine_mask[(row, col).to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    /// Mine-free field sized for `config`; what a grid holds before its first
    /// deal.
    pub(crate) fn empty(config: GameConfig) -> Self {
        let mine_mask =
            Array2::default((config.height.max(0) as usize, config.width.max(0) as usize));
        Self {
            mine_mask,
            mine_count: 0,
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            width: self.width(),
            height: self.height(),
            mines: self.mine_count,
        }
    }

    pub(crate) fn mine_mask_dim(&self) -> (usize, usize) {
        self.mine_mask.dim()
    }

    pub fn width(&self) -> Coord {
        self.mine_mask.ncols() as Coord
    }

    pub fn height(&self) -> Coord {
        self.mine_mask.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn in_bounds(&self, (row, col): Pos) -> bool {
        row >= 0 && row < self.height() && col >= 0 && col < self.width()
    }

    /// Safe probe: `false` off the grid, so neighbor scans near the border
    /// need no bounds handling of their own.
    pub fn contains_mine(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.mine_mask[pos.to_nd_index()]
    }

    /// Mined cells among the eight neighbors of `pos`.
    pub fn adjacent_mines(&self, pos: Pos) -> u8 {
        neighbors(pos).filter(|&p| self.contains_mine(p)).count() as u8
    }

    pub(crate) fn validate(&self, pos: Pos) -> Result<Pos> {
        if self.in_bounds(pos) {
            Ok(pos)
        } else {
            Err(GameError::InvalidReference(pos.0, pos.1))
        }
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    /// Whether the caller should re-read the flag counter.
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Outcome of a reveal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether the reveal changed any plate.
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
