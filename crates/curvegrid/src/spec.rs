//! Validated grid geometry.

use crate::{
    coord::Coord,
    error::{Error, Result},
};

/// Largest supported order: `side = 2^15`, so `side * side` still fits in a
/// `u32` index.
pub const MAX_ORDER: u32 = 15;

/// Side length of a square power-of-two grid, with derived order and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSpec {
    /// Cells per axis.
    side: u32,
    /// `log2(side)`.
    order: u32,
}

impl GridSpec {
    /// Validate `side`: it must be a non-zero power of two no larger than
    /// `2^MAX_ORDER`.
    pub fn new(side: u32) -> Result<Self> {
        if side == 0 || side & (side - 1) != 0 {
            return Err(Error::InvalidSize(side));
        }
        let order = side.trailing_zeros();
        if order > MAX_ORDER {
            return Err(Error::TooLarge(side));
        }
        Ok(Self { side, order })
    }

    /// Cells per axis.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Number of bits per axis.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Total number of cells, `side * side`.
    pub fn length(&self) -> u32 {
        self.side * self.side
    }

    /// Fail unless `coord` lies on the grid.
    pub fn check_coord(&self, coord: Coord) -> Result<()> {
        if coord.x >= self.side || coord.y >= self.side {
            return Err(Error::CoordOutOfRange {
                x: coord.x,
                y: coord.y,
                side: self.side,
            });
        }
        Ok(())
    }

    /// Fail unless `index` lies in `[0, length)`.
    pub fn check_index(&self, index: u32) -> Result<()> {
        if index >= self.length() {
            return Err(Error::IndexOutOfRange {
                index,
                length: self.length(),
            });
        }
        Ok(())
    }

    /// Row-major offset of a coordinate, without bounds checks.
    #[inline]
    pub(crate) fn offset(&self, coord: Coord) -> usize {
        coord.y as usize * self.side as usize + coord.x as usize
    }
}
