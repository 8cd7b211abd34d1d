use super::board::{Board, Cell};
use super::coordinate::Coordinate;

/// Immutable snapshot of every cell plus both knight positions.
///
/// The player to move is not stored. Each ply blocks exactly one cell, so it follows from the
/// number of blocked cells.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TranspositionEntry {
    rows: Box<[Box<[Cell]>]>,
    p1_position: Coordinate,
    p2_position: Coordinate,
}

impl TranspositionEntry {
    pub fn new(board: &Board, p1_position: Coordinate, p2_position: Coordinate) -> Self {
        let rows = board
            .rows()
            .map(|row| row.to_vec().into_boxed_slice())
            .collect();

        Self {
            rows,
            p1_position,
            p2_position,
        }
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> {
        self.rows.iter().map(|row| &**row)
    }

    pub fn p1_position(&self) -> Coordinate {
        self.p1_position
    }

    pub fn p2_position(&self) -> Coordinate {
        self.p2_position
    }

    /// Position labels of player 1 and player 2.
    pub fn labels(&self) -> (String, String) {
        (self.p1_position.to_string(), self.p2_position.to_string())
    }

    pub fn num_blocked(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|c| **c == Cell::Blocked)
            .count()
    }
}
