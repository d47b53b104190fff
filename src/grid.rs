use std::fmt;

use thiserror::Error;

use crate::rule_set::RuleSet;
use crate::rule_set::B3S23;
use crate::zoom::ZoomLevel;
use crate::zoom::ZoomSpec;

pub const ROWS: usize = 64;
pub const COLS: usize = 128;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("Cell ({row}, {col}) is outside the grid")]
    InvalidCoordinate { row: usize, col: usize },
}

pub type GridResult<T> = Result<T, GridError>;

/// A fixed size, bounded Life grid. Nothing wraps around the edges.
#[derive(Clone)]
pub struct Grid {
    /// Authoritative cell states, row major
    current: Vec<bool>,

    /// Scratch buffer the next generation is written to. Swapped with `current` after each step.
    next: Vec<bool>,

    rule: RuleSet,

    generation: u64,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            current: vec![false; ROWS * COLS],
            next: vec![false; ROWS * COLS],
            rule: B3S23,
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_alive(&self, row: usize, col: usize) -> GridResult<bool> {
        let i = Self::index(row, col)?;

        Ok(self.current[i])
    }

    /// Flip a single cell
    pub fn toggle(&mut self, row: usize, col: usize) -> GridResult<()> {
        let i = Self::index(row, col)?;
        self.current[i] = !self.current[i];

        Ok(())
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> GridResult<()> {
        let i = Self::index(row, col)?;
        self.current[i] = alive;

        Ok(())
    }

    /// Kill every cell. The generation counter is left alone.
    pub fn clear(&mut self) {
        self.current.fill(false);
    }

    pub fn is_any_alive(&self) -> bool {
        self.current.iter().any(|&c| c)
    }

    pub fn live_count(&self) -> usize {
        self.current.iter().filter(|&&c| c).count()
    }

    /// Number of live cells among the 8 neighbors of `(row, col)`. Positions past the edges are
    /// skipped.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> GridResult<u8> {
        Self::index(row, col)?;

        Ok(self.neighbors_unchecked(row, col))
    }

    fn neighbors_unchecked(&self, row: usize, col: usize) -> u8 {
        let mut n = 0;

        for r in row.saturating_sub(1)..=(row + 1).min(ROWS - 1) {
            for c in col.saturating_sub(1)..=(col + 1).min(COLS - 1) {
                if (r, c) == (row, col) {
                    continue;
                }

                if self.current[r * COLS + c] {
                    n += 1;
                }
            }
        }

        n
    }

    /// Advance the whole grid by one generation.
    ///
    /// Only rows `0..ROWS - 1` and columns `0..COLS - 1` are evaluated. Cells on the last row and
    /// the last column keep their state forever, though they still count as neighbors.
    pub fn step_generation(&mut self) {
        for row in 0..ROWS {
            for col in 0..COLS {
                let i = row * COLS + col;
                let alive = self.current[i];

                self.next[i] = if row == ROWS - 1 || col == COLS - 1 {
                    alive
                } else {
                    let n = self.neighbors_unchecked(row, col);
                    self.rule.next_state(alive, n)
                };
            }
        }

        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// The part of the grid shown at `zoom`
    pub fn visible_subgrid(&self, zoom: ZoomLevel) -> SubGrid<'_> {
        SubGrid {
            cells: &self.current,
            spec: zoom.spec(),
        }
    }

    fn index(row: usize, col: usize) -> GridResult<usize> {
        if row >= ROWS || col >= COLS {
            return Err(GridError::InvalidCoordinate { row, col });
        }

        Ok(row * COLS + col)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("generation", &self.generation)
            .field("live", &self.live_count())
            .finish()
    }
}

impl PartialEq for Grid {
    /// Two grids are equal when their current cells are. Scratch state and counters are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl Eq for Grid {}

/// A rectangular window into a [`Grid`]. Indices passed to it are local to the window.
#[derive(Clone, Copy)]
pub struct SubGrid<'a> {
    cells: &'a [bool],
    spec: &'static ZoomSpec,
}

impl<'a> SubGrid<'a> {
    pub fn rows(&self) -> usize {
        self.spec.rows()
    }

    pub fn cols(&self) -> usize {
        self.spec.cols()
    }

    /// Absolute `(row, col)` of the top left cell
    pub fn origin(&self) -> (usize, usize) {
        (self.spec.row_start, self.spec.col_start)
    }

    /// Returns `None` outside the window
    pub fn is_alive(&self, row: usize, col: usize) -> Option<bool> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }

        let (r0, c0) = self.origin();

        Some(self.cells[(r0 + row) * COLS + c0 + col])
    }

    /// Iterate over `(row, col, alive)` in row major order, with local indices
    pub fn iter(self) -> impl Iterator<Item = (usize, usize, bool)> + 'a {
        let (r0, c0) = (self.spec.row_start, self.spec.col_start);
        let (rows, cols) = (self.spec.rows(), self.spec.cols());
        let cells = self.cells;

        (0..rows).flat_map(move |r| {
            (0..cols).map(move |c| (r, c, cells[(r0 + r) * COLS + c0 + c]))
        })
    }
}

impl fmt::Display for SubGrid<'_> {
    /// `#` for live cells, `.` for dead ones, one line per row
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, c, alive) in self.iter() {
            f.write_str(if alive { "#" } else { "." })?;

            if c == self.cols() - 1 {
                f.write_str("\n")?;
            }
        }

        Ok(())
    }
}
