use std::fmt::{self, Display, Formatter};

use crate::{Coordinate, GameState};

/// Each line is a column, labeled by its letter, listing the cells from row 1 upwards.
impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        write!(f, " ")?;

        for row in 0..self.height() {
            write!(f, " {}", row + 1)?;
        }

        writeln!(f)?;

        for column in 0..self.width() {
            let letter = Coordinate::new(column, 0).col_letter();
            write!(f, "{}", letter)?;

            for row in 0..self.height() {
                let cell = self.cell(Coordinate::new(column, row));
                write!(f, " {}", cell)?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
