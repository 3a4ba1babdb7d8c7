//! FlintOthello - Board representation
//!
//! An 8x8 Othello board stored as a flat row-major array of 64 cells. The
//! board is an immutable value: `apply_move` returns a new board instead of
//! mutating in place, so the search can branch on copies without aliasing.

use crate::types::{Cell, Position, Side};

/// All 8 flanking directions (straight + diagonal) as (d_row, d_col).
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Corner coordinates, the cells the evaluator weighs separately.
pub const CORNERS: [(u8, u8); 4] = [(0, 0), (0, 7), (7, 0), (7, 7)];

/// Wire characters for the MOVE payload: empty / dark / light.
const WIRE_EMPTY: char = '0';
const WIRE_DARK: char = '1';
const WIRE_LIGHT: char = '2';

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [Cell; 64],
}

impl Board {
    /// An entirely empty board.
    pub fn empty() -> Board {
        Board {
            cells: [Cell::Empty; 64],
        }
    }

    /// The standard opening position: the four center cells form the cross
    /// pattern, (3,3)/(4,4) light and (3,4)/(4,3) dark.
    pub fn opening() -> Board {
        let mut board = Board::empty();
        board.cells[3 * 8 + 3] = Cell::Light;
        board.cells[3 * 8 + 4] = Cell::Dark;
        board.cells[4 * 8 + 3] = Cell::Dark;
        board.cells[4 * 8 + 4] = Cell::Light;
        board
    }

    /// Parse the 64-character MOVE payload (row-major, `0`/`1`/`2`).
    /// Returns `None` on wrong length or an invalid symbol.
    pub fn from_wire(text: &str) -> Option<Board> {
        if text.chars().count() != 64 {
            return None;
        }

        let mut cells = [Cell::Empty; 64];
        for (i, ch) in text.chars().enumerate() {
            cells[i] = match ch {
                WIRE_EMPTY => Cell::Empty,
                WIRE_DARK => Cell::Dark,
                WIRE_LIGHT => Cell::Light,
                _ => return None,
            };
        }

        Some(Board { cells })
    }

    /// Encode the board in the same 64-character wire format.
    pub fn to_wire(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell {
                Cell::Empty => WIRE_EMPTY,
                Cell::Dark => WIRE_DARK,
                Cell::Light => WIRE_LIGHT,
            })
            .collect()
    }

    #[inline]
    pub fn cell(&self, row: u8, col: u8) -> Cell {
        self.cells[row as usize * 8 + col as usize]
    }

    /// Number of discs the given side has on the board.
    pub fn count(&self, side: Side) -> u32 {
        let disc = side.cell();
        self.cells.iter().filter(|&&c| c == disc).count() as u32
    }

    /// Number of corner cells the given side occupies.
    pub fn corner_count(&self, side: Side) -> u32 {
        let disc = side.cell();
        CORNERS
            .iter()
            .filter(|&&(r, c)| self.cell(r, c) == disc)
            .count() as u32
    }

    /// All legal moves for `side`, in row-major scan order.
    ///
    /// The ordering is part of the contract: alpha-beta tie-breaking keeps
    /// the first move that reaches the best value, so generation order
    /// determines which of several equal moves the engine plays.
    pub fn legal_moves(&self, side: Side) -> Vec<Position> {
        let mut moves = Vec::new();
        for row in 0..8 {
            for col in 0..8 {
                let pos = Position::new(row, col);
                if self.is_legal_move(pos, side) {
                    moves.push(pos);
                }
            }
        }
        moves
    }

    /// A move is legal iff the target cell is empty and at least one
    /// direction flanks a run of opponent discs.
    pub fn is_legal_move(&self, pos: Position, side: Side) -> bool {
        if self.cells[pos.index()] != Cell::Empty {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.flanks(pos, side, dr, dc))
    }

    /// Does placing `side`'s disc at `pos` flank at least one opponent disc
    /// in direction (dr, dc)? Requires a run of one or more opponent discs
    /// immediately adjacent, terminated by a same-side disc before the edge.
    fn flanks(&self, pos: Position, side: Side, dr: i8, dc: i8) -> bool {
        let opp = side.opponent().cell();

        let mut r = pos.row as i8 + dr;
        let mut c = pos.col as i8 + dc;
        let mut seen_opponent = false;

        while (0..8).contains(&r) && (0..8).contains(&c) {
            match self.cells[r as usize * 8 + c as usize] {
                Cell::Empty => return false,
                cell if cell == opp => {
                    seen_opponent = true;
                    r += dr;
                    c += dc;
                }
                // Own disc ends the run; it flanks only if an opponent
                // disc was seen in between.
                _ => return seen_opponent,
            }
        }

        false
    }

    /// Place `side`'s disc at `pos` and flip every flanked run, returning
    /// the resulting board. Calling this with a position not drawn from
    /// `legal_moves` is a programming error.
    pub fn apply_move(&self, pos: Position, side: Side) -> Board {
        debug_assert!(
            self.is_legal_move(pos, side),
            "apply_move called with illegal move {:?} for {:?}",
            pos,
            side
        );

        let own = side.cell();
        let opp = side.opponent().cell();

        let mut next = *self;
        next.cells[pos.index()] = own;

        for &(dr, dc) in &DIRECTIONS {
            if !self.flanks(pos, side, dr, dc) {
                continue;
            }
            let mut r = pos.row as i8 + dr;
            let mut c = pos.col as i8 + dc;
            while next.cells[r as usize * 8 + c as usize] == opp {
                next.cells[r as usize * 8 + c as usize] = own;
                r += dr;
                c += dc;
            }
        }

        next
    }
}
