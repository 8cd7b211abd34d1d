use std::fmt::{self, Display, Formatter};

use super::coordinate::Coordinate;

/// Contents of a single cell. The numeric values are stable and used in transposition entries.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Player1 = 1,
    Player2 = 2,
    /// Previously occupied by a knight. Never becomes available again.
    Blocked = 3,
}

impl Cell {
    pub fn for_player(player: usize) -> Self {
        match player {
            1 => Cell::Player1,
            2 => Cell::Player2,
            _ => panic!("Player must be 1 or 2, got {}", player),
        }
    }

    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Player1),
            2 => Some(Cell::Player2),
            3 => Some(Cell::Blocked),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Player1 => '1',
            Cell::Player2 => '2',
            Cell::Blocked => 'X',
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Fixed size grid stored row by row.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, coord: Coordinate) -> Cell {
        self.cells[self.index(coord)]
    }

    pub fn set(&mut self, coord: Coordinate, cell: Cell) {
        let idx = self.index(coord);
        self.cells[idx] = cell;
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.column() < self.width && coord.row() < self.height
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Overwrites every cell. `rows` must have the board's dimensions.
    pub fn copy_from_rows<'a>(&mut self, rows: impl ExactSizeIterator<Item = &'a [Cell]>) {
        assert_eq!(rows.len(), self.height, "Row count does not match board");

        for (dest, row) in self.cells.chunks_mut(self.width).zip(rows) {
            dest.copy_from_slice(row);
        }
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.height)
            .flat_map(move |row| (0..self.width).map(move |col| Coordinate::new(col, row)))
    }

    fn index(&self, coord: Coordinate) -> usize {
        assert!(
            self.contains(coord),
            "Coordinate {} is outside of the {}x{} board",
            coord,
            self.width,
            self.height
        );

        coord.row() * self.width + coord.column()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3, 2);
        assert_eq!(board.count(Cell::Empty), 6);
        assert_eq!(board.rows().count(), 2);
        assert!(board.rows().all(|row| row.len() == 3));
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(4, 4);
        let coord = Coordinate::new(1, 2);
        board.set(coord, Cell::Blocked);

        assert_eq!(board.get(coord), Cell::Blocked);
        assert_eq!(board.rows().nth(2).unwrap()[1], Cell::Blocked);
        assert_eq!(board.count(Cell::Blocked), 1);
    }

    #[test]
    #[should_panic]
    fn test_get_outside_board_panics() {
        let board = Board::new(4, 4);
        board.get(Coordinate::new(4, 0));
    }

    #[test]
    fn test_copy_from_rows() {
        let mut source = Board::new(3, 3);
        source.set(Coordinate::new(2, 0), Cell::Player2);
        source.set(Coordinate::new(0, 1), Cell::Blocked);

        let mut board = Board::new(3, 3);
        board.set(Coordinate::new(1, 1), Cell::Player1);
        let rows = source.rows().collect::<Vec<_>>();
        board.copy_from_rows(rows.into_iter());

        assert_eq!(board, source);
    }

    #[test]
    fn test_cell_values() {
        for cell in [Cell::Empty, Cell::Player1, Cell::Player2, Cell::Blocked] {
            assert_eq!(Cell::from_value(cell.value()), Some(cell));
        }
        assert_eq!(Cell::from_value(4), None);
    }

    #[test]
    fn test_cell_symbols() {
        let symbols = [Cell::Empty, Cell::Player1, Cell::Player2, Cell::Blocked]
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert_eq!(symbols, ".12X");
    }

    #[test]
    fn test_coordinates_cover_board() {
        let board = Board::new(2, 3);
        let coords = board.coordinates().collect::<Vec<_>>();
        assert_eq!(coords.len(), 6);
        assert_eq!(coords[0], Coordinate::new(0, 0));
        assert_eq!(coords[5], Coordinate::new(1, 2));
    }
}
