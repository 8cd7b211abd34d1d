use super::board::{Board, Cell};
use super::constants::{KNIGHT_OFFSETS, LOSE_SCORE, MAX_BOARD_WIDTH, NEUTRAL_SCORE};
use super::coordinate::Coordinate;
use super::error::KnightsError;
use super::transposition_entry::TranspositionEntry;

/// The board, both knights and the player to move.
///
/// The state is mutated in place. A search explores a tree by taking a transposition entry,
/// applying a move and restoring the entry afterwards instead of cloning the state per node.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameState {
    board: Board,
    positions: [Coordinate; 2],
    p1_turn_to_move: bool,
}

impl GameState {
    /// Player 1 starts at A1 and player 2 in the opposite corner.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "Board dimensions must be positive, got {}x{}",
            width,
            height
        );
        assert!(
            width <= MAX_BOARD_WIDTH,
            "Board width must be at most {}, got {}",
            MAX_BOARD_WIDTH,
            width
        );

        let p1_position = Coordinate::new(0, 0);
        let p2_position = Coordinate::new(width - 1, height - 1);

        let mut board = Board::new(width, height);
        board.set(p1_position, Cell::Player1);
        board.set(p2_position, Cell::Player2);

        Self {
            board,
            positions: [p1_position, p2_position],
            p1_turn_to_move: true,
        }
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, coord: Coordinate) -> Cell {
        self.board.get(coord)
    }

    pub fn player_to_move(&self) -> usize {
        if self.p1_turn_to_move {
            1
        } else {
            2
        }
    }

    pub fn position(&self, player: usize) -> Coordinate {
        self.positions[player - 1]
    }

    /// Number of plies played so far. Every ply blocks exactly one cell.
    pub fn move_number(&self) -> usize {
        self.board.count(Cell::Blocked)
    }

    /// Parses a label and checks that it lies on this board.
    pub fn parse_label(&self, label: &str) -> Result<Coordinate, KnightsError> {
        let coord = label.parse::<Coordinate>()?;

        if self.board.contains(coord) {
            Ok(coord)
        } else {
            Err(KnightsError::InvalidLabel(label.to_string()))
        }
    }

    /// Destinations of the player to move in knight offset order.
    pub fn legal_moves(&self) -> Vec<Coordinate> {
        let position = self.position(self.player_to_move());
        let width = self.width();
        let height = self.height();

        KNIGHT_OFFSETS
            .iter()
            .filter_map(|offset| position.offset(*offset, width, height))
            .filter(|dest| self.board.get(*dest) == Cell::Empty)
            .collect()
    }

    pub fn legal_move_labels(&self) -> Vec<String> {
        self.legal_moves().iter().map(|c| c.to_string()).collect()
    }

    /// Parses `label` and checks that it is a legal destination for the player to move.
    pub fn check_move(&self, label: &str) -> Result<Coordinate, KnightsError> {
        let coord = self.parse_label(label)?;
        let legal_moves = self.legal_moves();

        if legal_moves.contains(&coord) {
            Ok(coord)
        } else {
            Err(KnightsError::IllegalMove {
                label: label.to_string(),
                legal: legal_moves.iter().map(|c| c.to_string()).collect(),
            })
        }
    }

    /// Applies a move given as a label, rejecting labels that are not currently legal.
    ///
    /// The state is unchanged when an error is returned.
    pub fn apply_move(&mut self, label: &str) -> Result<(), KnightsError> {
        let coord = self.check_move(label)?;
        self.take_action(coord);
        Ok(())
    }

    /// Moves the knight of the player to move to `coord` and passes the turn.
    ///
    /// `coord` must be one of `legal_moves()`. This is not checked in release builds.
    pub fn take_action(&mut self, coord: Coordinate) {
        debug_assert!(
            self.legal_moves().contains(&coord),
            "{} is not a legal move",
            coord
        );

        let player = self.player_to_move();
        let from = self.positions[player - 1];

        self.board.set(from, Cell::Blocked);
        self.board.set(coord, Cell::for_player(player));
        self.positions[player - 1] = coord;
        self.p1_turn_to_move = !self.p1_turn_to_move;
    }

    pub fn is_terminal(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// The player to move has lost. Identical to `is_terminal` under these rules.
    pub fn is_lose(&self) -> bool {
        self.is_terminal()
    }

    /// Evaluation from the perspective of the player to move.
    pub fn score(&self) -> i32 {
        if self.is_lose() {
            LOSE_SCORE
        } else {
            NEUTRAL_SCORE
        }
    }

    pub fn transposition_entry(&self) -> TranspositionEntry {
        TranspositionEntry::new(&self.board, self.positions[0], self.positions[1])
    }

    /// Resets every cell, both positions and the player to move to the values in `entry`.
    pub fn restore(&mut self, entry: &TranspositionEntry) {
        self.board.copy_from_rows(entry.rows());
        self.positions = [entry.p1_position(), entry.p2_position()];
        self.p1_turn_to_move = entry.num_blocked() % 2 == 0;
    }
}

impl engine::GameState for GameState {
    type Entry = TranspositionEntry;

    fn transposition_entry(&self) -> Self::Entry {
        self.transposition_entry()
    }

    fn restore(&mut self, entry: &Self::Entry) {
        self.restore(entry)
    }
}
