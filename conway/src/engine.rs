// engine.rs - Generation stepping and the simulation that owns a board

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::board::{Board, CellState};
use crate::error::Result;
use crate::neighbors;

const HISTORY_LEN: usize = 10;

/// Conway's rule for one cell given its live-neighbor count.
pub fn next_state(state: CellState, live_neighbors: u8) -> CellState {
    match (state, live_neighbors) {
        (CellState::Alive, 2) | (CellState::Alive, 3) => CellState::Alive, // Survival
        (CellState::Dead, 3) => CellState::Alive,                          // Birth
        _ => CellState::Dead,                                              // Death or stays dead
    }
}

/// Computes the next generation into a fresh board. The input is only read.
pub fn step(board: &Board) -> Board {
    let mut next = board.clone();
    for (x, y) in board.coordinates() {
        let count = neighbors::count_unchecked(board, x, y);
        // Every (x, y) from `coordinates` is on both boards.
        next.put(x, y, next_state(board.cell(x, y), count));
    }
    next
}

/// Same as [`step`], then reports the transition to `observer`.
pub fn step_observed(board: &Board, observer: &mut dyn GenerationObserver) -> Board {
    let next = step(board);
    observer.on_generation(board, &next);
    next
}

/// Hook for side effects such as debug dumps; never affects the result of a step.
pub trait GenerationObserver {
    fn on_generation(&mut self, previous: &Board, next: &Board);
}

impl<F> GenerationObserver for F
where
    F: FnMut(&Board, &Board),
{
    fn on_generation(&mut self, previous: &Board, next: &Board) {
        self(previous, next)
    }
}

/// Logs every new generation at `debug` level.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl GenerationObserver for TracingObserver {
    fn on_generation(&mut self, previous: &Board, next: &Board) {
        debug!(
            before = previous.live_cells(),
            after = next.live_cells(),
            "generation computed\n{next}"
        );
    }
}

/// A board plus the bookkeeping around it: generation count, observer and
/// a short history of board hashes used to spot cycles.
pub struct Simulation {
    board: Board,
    generation: u64,
    observer: Option<Box<dyn GenerationObserver + Send>>,
    history: [u64; HISTORY_LEN],
    history_count: usize,
}

impl Simulation {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            generation: 0,
            observer: None,
            history: [0; HISTORY_LEN],
            history_count: 0,
        }
    }

    pub fn with_observer(mut self, observer: impl GenerationObserver + Send + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Steps once. Returns `true` when the new board matches one of the recent ones.
    pub fn advance(&mut self) -> bool {
        let next = match self.observer.as_deref_mut() {
            Some(observer) => step_observed(&self.board, observer),
            None => step(&self.board),
        };
        self.board = next;
        self.generation += 1;
        self.check_for_cycle()
    }

    pub fn toggle(&mut self, x: usize, y: usize) -> Result<CellState> {
        self.board.toggle(x, y)
    }

    /// Swaps in a new board (pattern, random fill, load) and resets the counters.
    pub fn replace(&mut self, board: Board) {
        self.board = board;
        self.reset_history();
    }

    pub fn clear(&mut self) -> Result<()> {
        let empty = Board::new(self.board.width(), self.board.height())?;
        self.replace(empty);
        Ok(())
    }

    pub fn live_cells(&self) -> usize {
        self.board.live_cells()
    }

    pub fn dead_cells(&self) -> usize {
        self.board.width() * self.board.height() - self.live_cells()
    }

    fn hash_board(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.board.hash(&mut hasher);
        hasher.finish()
    }

    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.hash_board();
        let seen = self.history[..self.history_count.min(HISTORY_LEN)].contains(&current_hash);
        if !seen {
            self.history[self.history_count % HISTORY_LEN] = current_hash;
            self.history_count += 1;
        }
        seen
    }

    fn reset_history(&mut self) {
        self.generation = 0;
        self.history = [0; HISTORY_LEN];
        self.history_count = 0;
    }
}
