pub const ASCII_LETTER_A: u8 = 65;

/// Labels use a single letter per column.
pub const MAX_BOARD_WIDTH: usize = 26;

/// Score of a state whose player to move has lost.
pub const LOSE_SCORE: i32 = -100;
pub const NEUTRAL_SCORE: i32 = 0;

/// Knight offsets as (column delta, row delta). Legal moves are generated in this order.
pub const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];
