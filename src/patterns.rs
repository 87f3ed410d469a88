use crate::grid::{Cell, Grid, COLS, ROWS};
use rand::Rng;

/// How a pattern populates a fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    /// Each cell alive independently with probability `1 / one_in`.
    Random { one_in: u32 },
    /// Literal `(row, col)` live coordinates.
    Cells(&'static [(usize, usize)]),
}

pub struct Pattern {
    pub name: &'static str,
    pub seed: Seed,
}

// Order is the cycling order in the start screen.
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Random",
        seed: Seed::Random { one_in: 10 },
    },
    Pattern {
        name: "Block",
        seed: Seed::Cells(&[(1, 1), (1, 2), (2, 1), (2, 2)]),
    },
    Pattern {
        name: "Beehive",
        seed: Seed::Cells(&[(1, 2), (1, 3), (2, 1), (2, 4), (3, 2), (3, 3)]),
    },
    Pattern {
        name: "Blinker",
        seed: Seed::Cells(&[(10, 20), (10, 21), (10, 22)]),
    },
    Pattern {
        name: "Toad",
        seed: Seed::Cells(&[(10, 20), (10, 21), (10, 22), (11, 19), (11, 20), (11, 21)]),
    },
    Pattern {
        name: "Glider",
        seed: Seed::Cells(&[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]),
    },
    Pattern {
        name: "Spaceship",
        seed: Seed::Cells(&[
            (1, 2), (1, 3), (1, 4), (1, 5),
            (2, 1), (2, 5),
            (3, 5),
            (4, 1), (4, 4),
        ]),
    },
    Pattern {
        name: "Spaceship2",
        seed: Seed::Cells(&[
            (10, 1), (10, 2), (10, 3), (10, 4), (10, 5),
            (11, 0), (11, 5),
            (12, 5),
            (13, 0), (13, 4),
        ]),
    },
    Pattern {
        name: "Diehard",
        seed: Seed::Cells(&[(10, 25), (11, 19), (11, 20), (12, 20), (12, 24), (12, 25), (12, 26)]),
    },
    Pattern {
        name: "Acorn",
        seed: Seed::Cells(&[(10, 20), (11, 22), (12, 19), (12, 20), (12, 23), (12, 24), (12, 25)]),
    },
];

/// Index of `name` in [`PATTERNS`].
pub fn position(name: &str) -> Option<usize> {
    PATTERNS.iter().position(|pattern| pattern.name == name)
}

/// Index after `index`, wrapping to the first pattern.
pub fn next_index(index: usize) -> usize {
    (index + 1) % PATTERNS.len()
}

/// Index before `index`, wrapping to the last pattern.
pub fn previous_index(index: usize) -> usize {
    (index + PATTERNS.len() - 1) % PATTERNS.len()
}

/// Builds a fresh board from `pattern`. Seeded live cells are flagged for redraw.
pub fn apply_pattern<R: Rng>(pattern: &Pattern, rng: &mut R) -> Grid {
    let mut grid = Grid::empty();
    match pattern.seed {
        Seed::Cells(cells) => {
            for &(row, col) in cells {
                grid.set(row, col, Cell::new(true, true));
            }
        }
        Seed::Random { one_in } => {
            for row in 0..ROWS {
                for col in 0..COLS {
                    if rng.gen_ratio(1, one_in) {
                        grid.set(row, col, Cell::new(true, true));
                    }
                }
            }
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::step;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(name: &str) -> Grid {
        let index = position(name).unwrap();
        apply_pattern(&PATTERNS[index], &mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn pattern_order_is_fixed() {
        let names: Vec<_> = PATTERNS.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            [
                "Random", "Block", "Beehive", "Blinker", "Toad", "Glider", "Spaceship",
                "Spaceship2", "Diehard", "Acorn",
            ]
        );
    }

    #[test]
    fn every_literal_cell_is_on_the_board() {
        for pattern in PATTERNS {
            if let Seed::Cells(cells) = pattern.seed {
                for &(row, col) in cells {
                    assert!(row < ROWS && col < COLS, "{} has ({row}, {col})", pattern.name);
                }
                assert_eq!(seeded(pattern.name).live_count(), cells.len());
            }
        }
    }

    #[test]
    fn index_cycling_wraps() {
        assert_eq!(previous_index(0), PATTERNS.len() - 1);
        assert_eq!(next_index(PATTERNS.len() - 1), 0);
        assert_eq!(next_index(previous_index(3)), 3);
    }

    #[test]
    fn block_and_beehive_are_still_lifes() {
        for name in ["Block", "Beehive"] {
            let grid = seeded(name);
            assert_eq!(step(&grid).live_cells(), grid.live_cells(), "{name}");
        }
    }

    #[test]
    fn blinker_and_toad_oscillate() {
        for name in ["Blinker", "Toad"] {
            let grid = seeded(name);
            let once = step(&grid);
            assert_ne!(once.live_cells(), grid.live_cells(), "{name}");
            assert_eq!(step(&once).live_cells(), grid.live_cells(), "{name}");
        }
    }

    #[test]
    fn glider_moves_and_keeps_five_cells() {
        let glider = seeded("Glider");
        let next = step(&glider);
        assert_eq!(next.live_count(), 5);
        assert_ne!(next.live_cells(), glider.live_cells());

        // after a full period it is the same shape shifted one cell down-right
        let mut grid = glider.clone();
        for _ in 0..4 {
            grid = step(&grid);
        }
        let shifted: Vec<_> = glider.live_cells().iter().map(|&(r, c)| (r + 1, c + 1)).collect();
        assert_eq!(grid.live_cells(), shifted);
    }

    #[test]
    fn seeded_cells_are_flagged_for_redraw() {
        let grid = seeded("Acorn");
        for (_, _, cell) in grid.iter() {
            assert_eq!(cell.updated, cell.alive);
        }
    }

    #[test]
    fn random_density_is_about_one_in_ten() {
        let mut rng = StdRng::seed_from_u64(42);
        let total: usize = (0..50)
            .map(|_| apply_pattern(&PATTERNS[0], &mut rng).live_count())
            .sum();
        let mean = total as f64 / 50.0;
        // 800 cells at p = 0.1, averaged over 50 boards
        assert!((70.0..90.0).contains(&mean), "mean live cells {mean}");
    }

    #[test]
    fn random_is_reproducible_for_a_fixed_seed() {
        let a = apply_pattern(&PATTERNS[0], &mut StdRng::seed_from_u64(99));
        let b = apply_pattern(&PATTERNS[0], &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
