//! Two‑dimensional grid coordinates.

use std::fmt;

/// A cell position: `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl Coord {
    /// Create a coordinate from a column and a row.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Manhattan (taxicab) distance to another coordinate.
    pub fn manhattan(&self, other: &Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(u32, u32)> for Coord {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for (u32, u32) {
    fn from(val: Coord) -> Self {
        (val.x, val.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{};{}]", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan() {
        let a = Coord::new(2, 2);
        assert_eq!(a.manhattan(&Coord::new(2, 1)), 1);
        assert_eq!(a.manhattan(&Coord::new(0, 2)), 2);
        assert_eq!(a.manhattan(&Coord::new(0, 0)), 4);
        assert_eq!(a.manhattan(&a), 0);
    }

    #[test]
    fn conversions() {
        let c: Coord = (3, 1).into();
        assert_eq!(c, Coord::new(3, 1));
        assert_eq!(<(u32, u32)>::from(c), (3, 1));
        assert_eq!(c.to_string(), "[3;1]");
    }
}
