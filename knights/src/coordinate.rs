use serde::de::Error;
use serde::de::{Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::constants::ASCII_LETTER_A;
use super::error::KnightsError;

/// A zero based (column, row) position on the board.
///
/// The label form is the column letter followed by the one based row, so `(3, 4)` is `D5`.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Coordinate {
    column: usize,
    row: usize,
}

impl Coordinate {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col_letter(&self) -> char {
        (self.column as u8 + ASCII_LETTER_A) as char
    }

    /// Applies a (column, row) offset, returning `None` if the result leaves a
    /// `width` x `height` board.
    pub fn offset(
        &self,
        (column_delta, row_delta): (isize, isize),
        width: usize,
        height: usize,
    ) -> Option<Self> {
        let column = self.column.checked_add_signed(column_delta)?;
        let row = self.row.checked_add_signed(row_delta)?;

        if column < width && row < height {
            Some(Self { column, row })
        } else {
            None
        }
    }
}

fn invalid_label(s: &str) -> KnightsError {
    KnightsError::InvalidLabel(s.to_string())
}

impl FromStr for Coordinate {
    type Err = KnightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let column = chars
            .next()
            .filter(|c| c.is_ascii_uppercase())
            .ok_or_else(|| invalid_label(s))?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_label(s));
        }

        let row = digits.parse::<usize>().map_err(|_| invalid_label(s))?;
        if row == 0 {
            return Err(invalid_label(s));
        }

        Ok(Coordinate::new(
            (column as u8 - ASCII_LETTER_A) as usize,
            row - 1,
        ))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.col_letter(), self.row + 1)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct CoordinateVisitor {}

impl CoordinateVisitor {
    fn new() -> Self {
        Self {}
    }
}

impl<'de> Visitor<'de> for CoordinateVisitor {
    type Value = Coordinate;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("Expecting a column letter followed by a row number, e.g. D5.")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        v.parse::<Coordinate>().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(CoordinateVisitor::new())
    }
}
