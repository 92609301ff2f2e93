//! Puzzle-set text format.
//!
//! The format is the common euler/kaggle layout: optional `Grid NN` header
//! lines separate puzzles, every other non-blank line contributes
//! whitespace-separated digit runs, and each 81 collected digits form one
//! puzzle (0 = empty cell).

use std::path::Path;

use crate::{Grid, SudokuError};

/// Parse a whole puzzle set from text.
pub fn parse_puzzles(text: &str) -> Result<Vec<Grid>, SudokuError> {
    let mut puzzles = Vec::new();
    let mut digits: Vec<u8> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("Grid") {
            flush(&mut digits, &mut puzzles)?;
            continue;
        }
        for token in line.split_whitespace() {
            if !token.chars().all(|c| c.is_ascii_digit()) {
                return Err(SudokuError::InvalidToken(token.to_string()));
            }
            digits.extend(token.bytes().map(|b| b - b'0'));
        }
    }
    flush(&mut digits, &mut puzzles)?;
    Ok(puzzles)
}

/// Read and parse a puzzle-set file.
pub fn load_puzzles<P: AsRef<Path>>(path: P) -> Result<Vec<Grid>, SudokuError> {
    let text = std::fs::read_to_string(path)?;
    parse_puzzles(&text)
}

fn flush(digits: &mut Vec<u8>, puzzles: &mut Vec<Grid>) -> Result<(), SudokuError> {
    if digits.is_empty() {
        return Ok(());
    }
    if digits.len() != 81 {
        return Err(SudokuError::InvalidShape(digits.len()));
    }
    let mut rows = [[0u8; 9]; 9];
    for (i, d) in digits.drain(..).enumerate() {
        rows[i / 9][i % 9] = d;
    }
    let grid = Grid::from_rows(rows);
    grid.validate()?;
    puzzles.push(grid);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    const TWO_GRIDS: &str = "\
Grid 01
003020600
900305001
001806400
008102900
700000008
006708200
002609500
800203009
005010300
Grid 02
200080300
060070084
030500209
000105408
000000000
402706000
301007040
720040060
004010003
";

    #[test]
    fn parses_a_two_puzzle_set() {
        let puzzles = parse_puzzles(TWO_GRIDS).unwrap();
        assert_eq!(puzzles.len(), 2);
        assert_eq!(puzzles[0].get(Position::new(0, 2)), 3);
        assert_eq!(puzzles[1].get(Position::new(0, 0)), 2);
    }

    #[test]
    fn accepts_space_separated_digits_and_blank_lines() {
        let text = "1 2 3 4 5 6 7 8 9\n".repeat(3)
            + "\n"
            + &"9 8 7 6 5 4 3 2 1\n".repeat(6);
        let puzzles = parse_puzzles(&text).unwrap();
        assert_eq!(puzzles.len(), 1);
        assert_eq!(puzzles[0].get(Position::new(2, 0)), 1);
        assert_eq!(puzzles[0].get(Position::new(3, 0)), 9);
    }

    #[test]
    fn rejects_truncated_and_garbled_sets() {
        assert!(matches!(
            parse_puzzles("1 2 3"),
            Err(SudokuError::InvalidShape(3))
        ));
        assert!(matches!(
            parse_puzzles("1 2 x"),
            Err(SudokuError::InvalidToken(_))
        ));
    }

    #[test]
    fn empty_input_yields_no_puzzles() {
        assert!(parse_puzzles("").unwrap().is_empty());
        assert!(parse_puzzles("Grid 01\n\nGrid 02\n").unwrap().is_empty());
    }
}
