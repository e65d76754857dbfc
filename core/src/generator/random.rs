use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform random placement by rejection sampling: draw positions until an
/// unmined cell turns up, once per requested mine. The seed makes placement
/// reproducible.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Minefield {
        let height = config.height.max(0) as usize;
        let width = config.width.max(0) as usize;
        let mut mine_mask: Array2<bool> = Array2::default((height, width));

        // Sampling cannot terminate once every cell is mined; fill and bail.
        if config.mines >= config.total_cells() {
            log::warn!(
                "requested {} mines but {}x{} board only fits {}, filling every cell",
                config.mines,
                config.width,
                config.height,
                config.total_cells()
            );
            mine_mask.fill(true);
            return Minefield::from_mine_mask(mine_mask);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed: CellCount = 0;

        while placed < config.mines {
            let row = rng.random_range(0..height);
            let col = rng.random_range(0..width);

            let cell = &mut mine_mask[[row, col]];
            if !*cell {
                *cell = true;
                placed += 1;
            }
        }

        Minefield::from_mine_mask(mine_mask)
    }
}
