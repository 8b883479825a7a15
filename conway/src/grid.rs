// grid.rs - Toroidal grid for Conway's Game of Life
//
// Every coordinate wraps: rows modulo `rows`, columns modulo `cols`, so each
// cell has exactly eight neighbours and there is no border to special-case.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::config;
use crate::error::{Error, Result};
use crate::patterns;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>, // row-major
}

impl Grid {
    /// Creates a grid with the glider seed already placed.
    ///
    /// The grid must be large enough to hold the seed without wrapping,
    /// otherwise `Error::InvalidDimensions` is returned.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        config::check_seeded_dimensions(rows, cols)?;
        let mut grid = Self::empty(rows, cols)?;
        grid.seed();
        Ok(grid)
    }

    /// Creates an all-dead grid.
    pub fn empty(rows: usize, cols: usize) -> Result<Self> {
        // Both must be non-zero, and the cell count must fit an index.
        let len = rows
            .checked_mul(cols)
            .filter(|&len| len > 0 && len <= isize::MAX as usize)
            .ok_or(Error::InvalidDimensions {
                rows,
                cols,
                min_rows: 1,
                min_cols: 1,
            })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn left_of(&self, col: usize) -> usize {
        (col + self.cols - 1) % self.cols
    }

    pub fn right_of(&self, col: usize) -> usize {
        (col + 1) % self.cols
    }

    pub fn above(&self, row: usize) -> usize {
        (row + self.rows - 1) % self.rows
    }

    pub fn under(&self, row: usize) -> usize {
        (row + 1) % self.rows
    }

    /// Maps any coordinate, negative ones included, onto the torus.
    pub fn wrap(&self, row: isize, col: isize) -> (usize, usize) {
        (
            row.rem_euclid(self.rows as isize) as usize,
            col.rem_euclid(self.cols as isize) as usize,
        )
    }

    pub fn get(&self, row: isize, col: isize) -> bool {
        let (row, col) = self.wrap(row, col);
        self.cell(row, col)
    }

    pub fn set(&mut self, row: isize, col: isize, alive: bool) {
        let (row, col) = self.wrap(row, col);
        let index = self.index(row, col);
        self.cells[index] = alive;
    }

    /// Flips a cell and returns its new state.
    pub fn toggle(&mut self, row: isize, col: isize) -> bool {
        let alive = !self.get(row, col);
        self.set(row, col, alive);
        alive
    }

    /// Counts the live cells among the eight wrapped neighbours of a cell.
    pub fn live_neighbours(&self, row: isize, col: isize) -> u8 {
        let (row, col) = self.wrap(row, col);
        self.neighbours_at(row, col)
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Coordinates of every live cell, row by row.
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(index, _)| (index / cols, index % cols))
    }

    /// Writes the generation following `self` into `next`.
    ///
    /// Reads only from `self`, so every cell sees the same pre-step state.
    /// `next` is resized to match if it came from a different grid.
    pub fn next_generation_into(&self, next: &mut Grid) {
        if next.rows != self.rows || next.cols != self.cols {
            *next = Grid {
                rows: self.rows,
                cols: self.cols,
                cells: vec![false; self.cells.len()],
            };
        }

        for row in 0..self.rows {
            for col in 0..self.cols {
                let count = self.neighbours_at(row, col);
                let alive = self.cell(row, col);

                let next_state = match (alive, count) {
                    (true, 2) | (true, 3) => true, // Survival
                    (false, 3) => true,            // Birth
                    _ => false,                    // Death or stays dead
                };

                let index = self.index(row, col);
                next.cells[index] = next_state;
            }
        }
    }

    /// Pure form of `next_generation_into`.
    pub fn next_generation(&self) -> Grid {
        let mut next = Grid {
            rows: self.rows,
            cols: self.cols,
            cells: vec![false; self.cells.len()],
        };
        self.next_generation_into(&mut next);
        next
    }

    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.rows.hash(&mut hasher);
        self.cols.hash(&mut hasher);
        self.cells.hash(&mut hasher);
        hasher.finish()
    }

    fn seed(&mut self) {
        for &(row, col) in patterns::SEED {
            let index = self.index(row, col);
            self.cells[index] = true;
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn cell(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    fn neighbours_at(&self, row: usize, col: usize) -> u8 {
        let (up, down) = (self.above(row), self.under(row));
        let (left, right) = (self.left_of(col), self.right_of(col));

        #[rustfmt::skip]
        let neighbours = [
            (up, left),   (up, col),   (up, right),
            (row, left),               (row, right),
            (down, left), (down, col), (down, right),
        ];

        neighbours
            .iter()
            .filter(|&&(r, c)| self.cell(r, c))
            .count() as u8
    }
}
