// source.rs - The single way boards get built

use std::path::PathBuf;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::board::{Board, CellState};
use crate::codec;
use crate::error::Result;

/// Where the starting board comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSource {
    /// Each cell alive with probability one half, reproducible from `seed`.
    Random { seed: u64, width: usize, height: usize },
    /// A file in the text save format.
    File(PathBuf),
    /// A row-major matrix, top row first.
    InMemory(Vec<Vec<CellState>>),
}

impl BoardSource {
    pub fn build(self) -> Result<Board> {
        match self {
            BoardSource::Random { seed, width, height } => random_board(seed, width, height),
            BoardSource::File(path) => codec::load(path),
            BoardSource::InMemory(rows) => Board::from_rows(rows),
        }
    }
}

fn random_board(seed: u64, width: usize, height: usize) -> Result<Board> {
    let mut board = Board::new(width, height)?;
    let mut rng = SmallRng::seed_from_u64(seed);
    for x in 0..width {
        for y in 0..height {
            board.put(x, y, CellState::from(rng.gen_bool(0.5)));
        }
    }
    debug!(seed, width, height, live = board.live_cells(), "random board generated");
    Ok(board)
}
