/// Single coordinate axis. Signed so that the safe probes can take any value
/// a neighbor scan produces, including positions off the top or left edge.
pub type Coord = i32;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional `(row, col)` position.
pub type Pos = (Coord, Coord);

/// Conversion into an `ndarray` index. Callers bounds-check first; a negative
/// coordinate here is a bug upstream.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Pos {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0 as usize, self.1 as usize]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = if a < 0 { 0 } else { a as CellCount };
    let b = if b < 0 { 0 } else { b as CellCount };
    a.saturating_mul(b)
}

const DISPLACEMENTS: [(Coord, Coord); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// All eight neighbor positions of `pos`, whether or not they fall inside the
/// grid. Bounds handling lives in the probes, not here.
pub fn neighbors((row, col): Pos) -> impl Iterator<Item = Pos> {
    DISPLACEMENTS.iter().map(move |&(dr, dc)| (row + dr, col + dc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_yields_all_eight_and_skips_center() {
        let all: Vec<Pos> = neighbors((1, 1)).collect();

        assert_eq!(all.len(), 8);
        assert!(!all.contains(&(1, 1)));
        assert!(all.contains(&(0, 0)));
        assert!(all.contains(&(2, 2)));
    }

    #[test]
    fn neighbors_of_origin_include_negative_positions() {
        let all: Vec<Pos> = neighbors((0, 0)).collect();

        assert!(all.contains(&(-1, -1)));
        assert!(all.contains(&(-1, 0)));
        assert!(all.contains(&(0, -1)));
    }

    #[test]
    fn mult_treats_negative_axes_as_empty() {
        assert_eq!(mult(-3, 10), 0);
        assert_eq!(mult(4, 5), 20);
        assert_eq!(mult(Coord::MAX, Coord::MAX), CellCount::MAX);
    }
}
