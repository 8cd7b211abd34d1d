mod negamax;
mod transposition_table;

pub use crate::negamax::*;
pub use crate::transposition_table::*;
