// lib.rs - Conway's Game of Life on a bounded board
//
// Board model, neighbor counting, generation stepping and the text save format.
// Rendering and input live in the `conway_gui` crate.

pub mod board;
pub mod codec;
pub mod engine;
pub mod error;
pub mod neighbors;
pub mod patterns;
pub mod source;
pub mod transform;

pub use board::{Board, CellState, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use codec::{decode, encode, load, save};
pub use engine::{next_state, step, step_observed, GenerationObserver, Simulation, TracingObserver};
pub use error::{LifeError, Result};
pub use neighbors::{live_neighbor_count, NEIGHBOR_OFFSETS};
pub use patterns::{Pattern, PATTERNS};
pub use source::BoardSource;
