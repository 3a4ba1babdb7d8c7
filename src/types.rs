//! FlintOthello - Type definitions
//!
//! This module provides the core type definitions for representing board
//! cells, the side to move, and board coordinates, plus the text encoding
//! of a move in the referee protocol.

/// State of a single board cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

/// The side to move at a game node. Dark moves first in Othello.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Dark,
    Light,
}

impl Side {
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Dark => Side::Light,
            Side::Light => Side::Dark,
        }
    }

    /// The cell value this side's discs occupy.
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Side::Dark => Cell::Dark,
            Side::Light => Cell::Light,
        }
    }
}

/// A (row, col) board coordinate, both in [0, 8).
///
/// A `Position` produced by move generation always refers to a cell that was
/// `Empty` in the board it was generated against.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Position {
        debug_assert!(row < 8 && col < 8);
        Position { row, col }
    }

    /// Flat row-major index into a 64-cell board.
    #[inline]
    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }
}

/// Column letters for move notation. The wire format is column-first, then
/// the 1-based row number: (row 2, col 3) encodes as "D3".
pub const COL_NAMES: &[u8; 8] = b"ABCDEFGH";
pub const ROW_NAMES: &[u8; 8] = b"12345678";

/// Encode a position in referee notation (column letter + row number).
pub fn encode_move(pos: Position) -> String {
    format!(
        "{}{}",
        COL_NAMES[pos.col as usize] as char,
        ROW_NAMES[pos.row as usize] as char
    )
}

/// Decode referee notation back into a position.
pub fn decode_move(text: &str) -> Option<Position> {
    let mut chars = text.chars();
    let col_ch = chars.next()?;
    let row_ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    let col = match col_ch {
        'A'..='H' => col_ch as u8 - b'A',
        _ => return None,
    };
    let row = match row_ch {
        '1'..='8' => row_ch as u8 - b'1',
        _ => return None,
    };

    Some(Position::new(row, col))
}
