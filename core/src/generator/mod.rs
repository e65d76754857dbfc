use crate::*;
pub use random::*;

mod random;

/// Strategy for placing mines into a fresh minefield.
pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Minefield;
}
