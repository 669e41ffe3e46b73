// board.rs - Board type for Conway's Game of Life
//
// Cells are stored column-major: index = x * height + y, with y increasing upward.

use std::fmt;

use crate::error::{LifeError, Result};
use crate::transform;

pub const DEFAULT_WIDTH: usize = 50;   // Playing area used when no size is given
pub const DEFAULT_HEIGHT: usize = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    Alive,
    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }
}

/// A fixed-size grid of cells at one point in simulated time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// An all-dead board. Both dimensions must be at least one.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![CellState::Dead; width * height],
        })
    }

    /// Builds a board from `columns[x][y]`, the native convention.
    pub fn from_columns(columns: Vec<Vec<CellState>>) -> Result<Self> {
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);
        check_dimensions(width, height)?;
        if columns.iter().any(|column| column.len() != height) {
            return Err(LifeError::InvalidDimensions {
                width,
                height,
                reason: "columns have different lengths",
            });
        }

        Ok(Self {
            width,
            height,
            cells: columns.into_iter().flatten().collect(),
        })
    }

    /// Builds a board from a row-major matrix whose first row is the top of the board.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_dimensions(width, height)?;
        if rows.iter().any(|row| row.len() != width) {
            return Err(LifeError::InvalidDimensions {
                width,
                height,
                reason: "rows have different lengths",
            });
        }

        Self::from_columns(transform::flip(&transform::transpose(&rows)))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Unchecked read for coordinates already known to be on the board.
    pub(crate) fn cell(&self, x: usize, y: usize) -> CellState {
        self.cells[x * self.height + y]
    }

    pub(crate) fn put(&mut self, x: usize, y: usize, state: CellState) {
        self.cells[x * self.height + y] = state;
    }

    pub fn get(&self, x: usize, y: usize) -> Result<CellState> {
        self.check(x, y)?;
        Ok(self.cell(x, y))
    }

    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> Result<()> {
        self.check(x, y)?;
        self.put(x, y, state);
        Ok(())
    }

    /// Flips one cell, returning its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<CellState> {
        let next = self.get(x, y)?.toggled();
        self.set(x, y, next)?;
        Ok(next)
    }

    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Every `(x, y)` on the board, column by column.
    pub fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| (x, y)))
    }

    pub fn to_columns(&self) -> Vec<Vec<CellState>> {
        self.cells
            .chunks(self.height)
            .map(<[CellState]>::to_vec)
            .collect()
    }

    /// Row-major view with the top row (highest y) first, as drawn on screen.
    pub fn to_rows(&self) -> Vec<Vec<CellState>> {
        transform::transpose(&transform::flip(&self.to_columns()))
    }

    pub(crate) fn check(&self, x: usize, y: usize) -> Result<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(LifeError::InvalidCoordinate {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(LifeError::InvalidDimensions {
            width,
            height,
            reason: "both dimensions must be positive",
        });
    }
    if width.checked_mul(height).is_none() {
        return Err(LifeError::InvalidDimensions {
            width,
            height,
            reason: "board is too large",
        });
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let marker = if self.cell(x, y).is_alive() { '#' } else { '.' };
                write!(f, "{marker}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
