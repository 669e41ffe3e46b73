// neighbors.rs - Live-neighbor counting with edges clipped (no wraparound)

use crate::board::Board;
use crate::error::Result;

/// Relative positions of the eight surrounding cells.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Number of live cells around `(x, y)`, in `0..=8`.
///
/// Neighbors that fall off the board count as dead. Fails with
/// `InvalidCoordinate` when `(x, y)` itself is not on the board.
pub fn live_neighbor_count(board: &Board, x: usize, y: usize) -> Result<u8> {
    board.check(x, y)?;
    Ok(count_unchecked(board, x, y))
}

pub(crate) fn count_unchecked(board: &Board, x: usize, y: usize) -> u8 {
    let mut count = 0;
    for &(dx, dy) in &NEIGHBOR_OFFSETS {
        let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
            continue;
        };
        if board.contains(nx, ny) && board.cell(nx, ny).is_alive() {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellState;
    use crate::error::LifeError;

    fn full(width: usize, height: usize) -> Board {
        let mut board = Board::new(width, height).unwrap();
        for (x, y) in board.clone().coordinates() {
            board.set(x, y, CellState::Alive).unwrap();
        }
        board
    }

    #[test]
    fn corners_see_at_most_three() {
        let board = full(5, 4);
        assert_eq!(live_neighbor_count(&board, 0, 0).unwrap(), 3);
        assert_eq!(live_neighbor_count(&board, 4, 0).unwrap(), 3);
        assert_eq!(live_neighbor_count(&board, 0, 3).unwrap(), 3);
        assert_eq!(live_neighbor_count(&board, 4, 3).unwrap(), 3);
    }

    #[test]
    fn edges_see_five_and_interior_sees_eight() {
        let board = full(5, 4);
        assert_eq!(live_neighbor_count(&board, 2, 0).unwrap(), 5);
        assert_eq!(live_neighbor_count(&board, 0, 2).unwrap(), 5);
        assert_eq!(live_neighbor_count(&board, 2, 2).unwrap(), 8);
    }

    #[test]
    fn cell_does_not_count_itself() {
        let mut board = Board::new(3, 3).unwrap();
        board.set(1, 1, CellState::Alive).unwrap();
        assert_eq!(live_neighbor_count(&board, 1, 1).unwrap(), 0);
        assert_eq!(live_neighbor_count(&board, 0, 0).unwrap(), 1);
    }

    #[test]
    fn no_wraparound_across_edges() {
        let mut board = Board::new(4, 4).unwrap();
        board.set(3, 3, CellState::Alive).unwrap();
        assert_eq!(live_neighbor_count(&board, 0, 0).unwrap(), 0);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        let board = full(1, 1);
        assert_eq!(live_neighbor_count(&board, 0, 0).unwrap(), 0);
    }

    #[test]
    fn off_board_lookup_is_an_error() {
        let board = full(3, 3);
        assert!(matches!(
            live_neighbor_count(&board, 3, 1),
            Err(LifeError::InvalidCoordinate { x: 3, y: 1, .. })
        ));
        assert!(live_neighbor_count(&board, 0, 9).is_err());
    }
}
