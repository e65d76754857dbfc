use thiserror::Error;

use crate::types::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A mutating call addressed a plate outside the grid. Callers only ever
    /// act on coordinates they enumerated themselves, so this is an
    /// integration bug, not a recoverable game state.
    #[error("invalid grid reference ({0}, {1})")]
    InvalidReference(Coord, Coord),
}

pub type Result<T> = core::result::Result<T, GameError>;
