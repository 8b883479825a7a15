// patterns.rs - The start-up seed, named presets and random fill

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::grid::Grid;

/// Nine gliders placed on every new grid, as absolute (row, col) cells.
#[rustfmt::skip]
pub const SEED: &[(usize, usize)] = &[
    // Top-left trio
    (0, 1), (1, 2), (2, 0), (2, 1), (2, 2),
    (2, 12), (3, 11), (4, 13), (4, 12), (4, 11),
    (14, 2), (13, 3), (12, 1), (12, 2), (12, 3),
    // Bottom row
    (26, 33), (27, 32), (28, 34), (28, 33), (28, 32),
    (26, 43), (27, 42), (28, 44), (28, 43), (28, 42),
    (26, 53), (27, 52), (28, 54), (28, 53), (28, 52),
    // Middle row
    (16, 28), (17, 27), (18, 29), (18, 28), (18, 27),
    (16, 43), (17, 42), (18, 44), (18, 43), (18, 42),
    (16, 58), (17, 57), (18, 59), (18, 58), (18, 57),
];

pub const SEED_MAX_ROW: usize = 28;
pub const SEED_MAX_COL: usize = 59;

/// A named shape with cells relative to its top-left corner.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

#[rustfmt::skip]
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 1), (1, 2), (0, 2), (2, 1), (2, 0)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

impl Pattern {
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }

    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0)
    }

    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0)
    }

    /// Sets the pattern's cells alive with its top-left corner at (row, col).
    /// Cells already alive elsewhere are left untouched.
    pub fn stamp(&self, grid: &mut Grid, row: usize, col: usize) -> Result<()> {
        self.check_fits(grid)?;
        for &(dr, dc) in self.cells {
            grid.set((row + dr) as isize, (col + dc) as isize, true);
        }
        Ok(())
    }

    /// Stamps the pattern in the middle of the grid.
    pub fn stamp_centred(&self, grid: &mut Grid) -> Result<()> {
        self.check_fits(grid)?;
        let row = (grid.rows() - self.height()) / 2;
        let col = (grid.cols() - self.width()) / 2;
        self.stamp(grid, row, col)
    }

    fn check_fits(&self, grid: &Grid) -> Result<()> {
        if self.height() > grid.rows() || self.width() > grid.cols() {
            return Err(Error::PatternTooLarge {
                pattern: self.name,
                height: self.height(),
                width: self.width(),
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        Ok(())
    }
}

/// Replaces the grid content with a deterministic ~33% random fill.
pub fn scatter(grid: &mut Grid, seed_value: u64) {
    grid.clear();

    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            // Top bits of an LCG are the well-mixed ones
            if (seed >> 33) % 3 == 0 {
                grid.set(row as isize, col as isize, true);
            }
        }
    }
}
