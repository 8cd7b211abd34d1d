pub mod board;
pub mod constants;
pub mod coordinate;
pub mod engine;
pub mod error;
pub mod game_state;
pub mod transposition_entry;

mod display;

pub use crate::board::*;
pub use crate::constants::*;
pub use crate::coordinate::*;
pub use crate::engine::*;
pub use crate::error::*;
pub use crate::game_state::*;
pub use crate::transposition_entry::*;
