// codec.rs - Text save format and file persistence
//
// Format: a "{width} {height}" header, then one line per row, top row first,
// '1' for a live cell and '0' for a dead one.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::board::{Board, CellState};
use crate::error::{LifeError, Result};

const ALIVE: char = '1';
const DEAD: char = '0';

pub fn encode(board: &Board) -> String {
    let mut text = format!("{} {}\n", board.width(), board.height());
    text.reserve((board.width() + 1) * board.height());
    for row in board.to_rows() {
        text.extend(row.iter().map(|cell| if cell.is_alive() { ALIVE } else { DEAD }));
        text.push('\n');
    }
    text
}

pub fn decode(text: &str) -> Result<Board> {
    let mut lines = text.lines();
    let header = lines
        .next()
        .ok_or_else(|| LifeError::malformed(1, "missing header"))?;
    let (width, height) = parse_header(header)?;

    let rows = lines
        .enumerate()
        .map(|(index, line)| parse_row(line, index + 2, width))
        .collect::<Result<Vec<_>>>()?;

    if rows.len() != height {
        return Err(LifeError::malformed(
            rows.len() + 2,
            format!("expected {height} rows, found {}", rows.len()),
        ));
    }

    Board::from_rows(rows)
}

fn parse_header(header: &str) -> Result<(usize, usize)> {
    let Some((width, height)) = header.split_once(' ') else {
        return Err(LifeError::malformed(1, format!("expected \"<width> <height>\", got {header:?}")));
    };
    Ok((parse_dimension(width)?, parse_dimension(height)?))
}

// Plain decimal digits only: no sign, no padding.
fn parse_dimension(field: &str) -> Result<usize> {
    let digits = !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit());
    match field.parse::<usize>() {
        Ok(value) if digits && value > 0 => Ok(value),
        _ => Err(LifeError::malformed(1, format!("{field:?} is not a positive integer"))),
    }
}

fn parse_row(line: &str, line_number: usize, width: usize) -> Result<Vec<CellState>> {
    let row = line
        .chars()
        .map(|c| match c {
            ALIVE => Ok(CellState::Alive),
            DEAD => Ok(CellState::Dead),
            other => Err(LifeError::malformed(line_number, format!("unexpected character {other:?}"))),
        })
        .collect::<Result<Vec<_>>>()?;

    if row.len() != width {
        return Err(LifeError::malformed(
            line_number,
            format!("expected {width} cells, found {}", row.len()),
        ));
    }
    Ok(row)
}

/// Writes `board` over an existing save file. A missing file is an error, not created.
pub fn save(board: &Board, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let unavailable = |source| LifeError::StorageUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(unavailable)?;
    file.write_all(encode(board).as_bytes()).map_err(unavailable)?;
    file.flush().map_err(unavailable)?;

    debug!(path = %path.display(), width = board.width(), height = board.height(), "board saved");
    Ok(())
}

pub fn load(path: impl AsRef<Path>) -> Result<Board> {
    let path = path.as_ref();
    let unavailable = |source| LifeError::StorageUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let mut text = String::new();
    File::open(path)
        .map_err(unavailable)?
        .read_to_string(&mut text)
        .map_err(unavailable)?;

    let board = decode(&text)?;
    debug!(path = %path.display(), width = board.width(), height = board.height(), "board loaded");
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellState::{Alive as A, Dead as D};

    fn assert_malformed(text: &str, expected_line: usize) {
        match decode(text) {
            Err(LifeError::MalformedFormat { line, .. }) => assert_eq!(line, expected_line, "{text:?}"),
            other => panic!("expected MalformedFormat for {text:?}, got {other:?}"),
        }
    }

    #[test]
    fn encodes_top_row_first() {
        let board = Board::from_rows(vec![vec![A, D, A], vec![D, A, D]]).unwrap();
        assert_eq!(encode(&board), "3 2\n101\n010\n");
    }

    #[test]
    fn decodes_top_row_to_highest_y() {
        let board = decode("3 2\n101\n010\n").unwrap();
        assert_eq!(board.get(0, 1).unwrap(), A);
        assert_eq!(board.get(1, 1).unwrap(), D);
        assert_eq!(board.get(1, 0).unwrap(), A);
    }

    #[test]
    fn accepts_crlf_and_missing_final_newline() {
        let expected = decode("2 2\n10\n01\n").unwrap();
        assert_eq!(decode("2 2\r\n10\r\n01\r\n").unwrap(), expected);
        assert_eq!(decode("2 2\n10\n01").unwrap(), expected);
    }

    #[test]
    fn rejects_bad_headers() {
        assert_malformed("", 1);
        assert_malformed("3\n101\n", 1);
        assert_malformed("3 2 1\n101\n010\n", 1);
        assert_malformed("x 2\n101\n010\n", 1);
        assert_malformed("0 2\n\n\n", 1);
        assert_malformed("-3 2\n101\n010\n", 1);
    }

    #[test]
    fn header_is_exactly_two_numbers_and_one_space() {
        assert_malformed("3\t2\n101\n010\n", 1);
        assert_malformed("3   2\n101\n010\n", 1);
        assert_malformed("+3 2\n101\n010\n", 1);
        assert_malformed(" 3 2\n101\n010\n", 1);
        assert_malformed("3 2 \n101\n010\n", 1);
        assert!(decode("3 2\n101\n010\n").is_ok());
    }

    #[test]
    fn rejects_row_count_mismatch() {
        assert_malformed("3 2\n101\n", 3);
        assert_malformed("3 2\n101\n010\n111\n", 5);
    }

    #[test]
    fn rejects_row_width_mismatch() {
        assert_malformed("3 2\n10\n010\n", 2);
        assert_malformed("3 2\n101\n0101\n", 3);
    }

    #[test]
    fn rejects_foreign_characters() {
        assert_malformed("3 2\n1x1\n010\n", 2);
        assert_malformed("3 2\n101\n0 0\n", 3);
    }
}
