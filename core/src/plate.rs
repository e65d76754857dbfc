use serde::{Deserialize, Serialize};

use crate::types::Pos;

/// Player-visible state of a single plate.
///
/// A plate is flagged or revealed, never both: reveals are gated on the flag,
/// and flag toggles are refused once a plate is open. `Revealed` carries the
/// adjacent-mine count computed when the plate opened and is never left again.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PlateState {
    Hidden,
    Flagged,
    Revealed(u8),
}

impl PlateState {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

impl Default for PlateState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// One plate newly opened by a reveal, handed back so the caller can update
/// its visuals without re-scanning the board.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Opened {
    pub pos: Pos,
    pub adjacent: u8,
}
