use crate::board::{Board, CellState};
use crate::error::Result;

/// A named configuration, as `(x, y)` offsets from its bottom-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 0), (1, 0), (2, 0), (1, 1), (2, 1), (3, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (0, 1), (1, 1), (1, 2), (2, 2)],
    },
];

impl Pattern {
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0)
    }

    /// Sets the pattern's cells alive with its bottom-left corner at `origin`.
    /// Nothing is written unless every cell fits on the board.
    pub fn stamp(&self, board: &mut Board, origin: (usize, usize)) -> Result<()> {
        let (ox, oy) = origin;
        for &(x, y) in self.cells {
            board.check(ox.saturating_add(x), oy.saturating_add(y))?;
        }
        for &(x, y) in self.cells {
            board.put(ox + x, oy + y, CellState::Alive);
        }
        Ok(())
    }

    /// A fresh board with the pattern roughly centred.
    pub fn centered_on(&self, width: usize, height: usize) -> Result<Board> {
        let mut board = Board::new(width, height)?;
        let origin = (
            width.saturating_sub(self.width()) / 2,
            height.saturating_sub(self.height()) / 2,
        );
        self.stamp(&mut board, origin)?;
        Ok(board)
    }
}

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::step;
    use crate::error::LifeError;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find("glider").map(|p| p.name), Some("Glider"));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn stamp_is_all_or_nothing() {
        let mut board = Board::new(4, 4).unwrap();
        let glider = find("Glider").unwrap();
        assert!(matches!(
            glider.stamp(&mut board, (2, 2)),
            Err(LifeError::InvalidCoordinate { .. })
        ));
        assert_eq!(board.live_cells(), 0);
        glider.stamp(&mut board, (1, 1)).unwrap();
        assert_eq!(board.live_cells(), 5);
    }

    #[test]
    fn glider_moves_after_four_generations() {
        let glider = find("Glider").unwrap();
        let mut board = Board::new(10, 10).unwrap();
        glider.stamp(&mut board, (2, 5)).unwrap();

        let mut moved = Board::new(10, 10).unwrap();
        // Travels one cell right and one cell up every four generations.
        glider.stamp(&mut moved, (3, 6)).unwrap();

        let mut current = board;
        for _ in 0..4 {
            current = step(&current);
        }
        assert_eq!(current, moved);
    }

    #[test]
    fn period_two_oscillators_return() {
        for name in ["Blinker", "Toad", "Beacon"] {
            let board = find(name).unwrap().centered_on(8, 8).unwrap();
            assert_ne!(step(&board), board, "{name} should change");
            assert_eq!(step(&step(&board)), board, "{name} should have period two");
        }
    }

    #[test]
    fn block_stays_put() {
        let board = find("Block").unwrap().centered_on(6, 6).unwrap();
        assert_eq!(step(&board), board);
    }
}
