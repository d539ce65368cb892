//! Grid locations: validated coordinates on the 10x10 battle grid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{in_grid, BOARD_SIZE, ROW_LETTERS};
use crate::errors::domain::{DomainError, ValidationKind};

/// A cell on the battle grid.
///
/// `x` is the column (0..=9), `y` is the row (0..=9). Construction is the
/// only place bounds are checked; a `GridLocation` value is always on the
/// grid. The textual form is one row letter `A..J` followed by one column
/// digit `0..9`, so `"B4"` is `(x: 4, y: 1)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridLocation {
    x: u8,
    y: u8,
}

impl GridLocation {
    pub fn new(x: u8, y: u8) -> Result<Self, DomainError> {
        if !in_grid(x, y) {
            return Err(DomainError::validation(
                ValidationKind::OutOfGrid,
                format!("({x}, {y}) is outside the {BOARD_SIZE}x{BOARD_SIZE} grid"),
            ));
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    /// The raw coordinate pair, for footprint math against undeployed cells.
    pub fn coords(&self) -> (u8, u8) {
        (self.x, self.y)
    }

    /// True when `other` is orthogonally adjacent: exactly one coordinate
    /// differs by exactly 1. A location is never its own neighbour.
    pub fn is_neighbour(&self, other: &GridLocation) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx + dy == 1
    }

    /// Render the letter+digit form, e.g. `(4, 1)` -> `"B4"`.
    pub fn to_text(&self) -> String {
        format!("{}{}", ROW_LETTERS[self.y as usize], self.x)
    }
}

impl FromStr for GridLocation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(row), Some(col), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(format_error(s));
        };
        let y = ROW_LETTERS
            .iter()
            .position(|&c| c == row)
            .ok_or_else(|| format_error(s))?;
        let x = col.to_digit(10).ok_or_else(|| format_error(s))?;
        GridLocation::new(x as u8, y as u8)
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

fn format_error(input: &str) -> DomainError {
    DomainError::validation(
        ValidationKind::LocationFormat,
        format!("{input:?} is not a letter+digit grid location"),
    )
}
