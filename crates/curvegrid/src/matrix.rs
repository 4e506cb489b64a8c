//! A square, power-of-two sized matrix stored as one contiguous row-major
//! buffer.

use std::ops::{Index, IndexMut};

use crate::{
    coord::Coord,
    cursor::{Cursor, CursorMut},
    curve::Curve,
    error::{self, Error},
    iter::{Iter, IterMut, Walk},
    spec::GridSpec,
};

/// An `n×n` grid of values; `n` is a power of two fixed at construction.
///
/// Cell `(x, y)` lives at offset `y * n + x`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SquareMatrix<T> {
    /// Validated side length.
    spec: GridSpec,
    /// Row-major cells, always `n * n` long.
    cells: Vec<T>,
}

impl<T: Clone> SquareMatrix<T> {
    /// Create an `n×n` matrix with every cell set to `fill`.
    ///
    /// Fails with [`Error::InvalidSize`] when `n` is zero or not a power of
    /// two, and with [`Error::TooLarge`] when `n * n` would not fit in a
    /// `u32`.
    pub fn new(n: u32, fill: T) -> error::Result<Self> {
        let spec = GridSpec::new(n)?;
        log::trace!("allocating {n}x{n} matrix");
        Ok(Self {
            spec,
            cells: vec![fill; spec.length() as usize],
        })
    }
}

impl<T> SquareMatrix<T> {
    /// Create an `n×n` matrix whose cells are produced by `f`, called in
    /// row-major order.
    pub fn from_fn(n: u32, mut f: impl FnMut(Coord) -> T) -> error::Result<Self> {
        let spec = GridSpec::new(n)?;
        let cells = (0..n)
            .flat_map(|y| (0..n).map(move |x| Coord::new(x, y)))
            .map(&mut f)
            .collect();
        Ok(Self { spec, cells })
    }

    /// Grid geometry.
    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    /// Cells per axis.
    pub fn side(&self) -> u32 {
        self.spec.side()
    }

    /// Number of cells, `n * n`.
    pub fn linear_size(&self) -> u32 {
        self.spec.length()
    }

    /// Cell at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> error::Result<&T> {
        let coord = Coord::new(x, y);
        self.spec.check_coord(coord)?;
        Ok(&self.cells[self.spec.offset(coord)])
    }

    /// Mutable cell at column `x`, row `y`.
    pub fn get_mut(&mut self, x: u32, y: u32) -> error::Result<&mut T> {
        let coord = Coord::new(x, y);
        self.spec.check_coord(coord)?;
        let offset = self.spec.offset(coord);
        Ok(&mut self.cells[offset])
    }

    /// Overwrite the cell at column `x`, row `y`.
    pub fn set(&mut self, x: u32, y: u32, value: T) -> error::Result<()> {
        *self.get_mut(x, y)? = value;
        Ok(())
    }

    /// Cell at row-major offset `index`.
    pub fn at(&self, index: u32) -> error::Result<&T> {
        self.spec.check_index(index)?;
        Ok(&self.cells[index as usize])
    }

    /// Mutable cell at row-major offset `index`.
    pub fn at_mut(&mut self, index: u32) -> error::Result<&mut T> {
        self.spec.check_index(index)?;
        Ok(&mut self.cells[index as usize])
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> {
        self.cells.chunks_exact(self.side() as usize)
    }

    /// Consume the matrix, returning the row-major cells.
    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }

    /// A cursor at the first position of `curve`.
    pub fn cursor<C: Curve>(&self, curve: C) -> Cursor<'_, T, C> {
        Cursor::new(self, curve, 0)
    }

    /// A mutable cursor at the first position of `curve`.
    pub fn cursor_mut<C: Curve>(&mut self, curve: C) -> CursorMut<'_, T, C> {
        CursorMut::new(self, curve, 0)
    }

    /// Iterate over all cells in the order of `curve`.
    pub fn iter<C: Curve>(&self, curve: C) -> Iter<'_, T, C> {
        Iter::new(self, curve)
    }

    /// Iterate mutably over all cells in the order of `curve`.
    pub fn iter_mut<C: Curve>(&mut self, curve: C) -> IterMut<'_, T, C> {
        IterMut::new(self, curve)
    }

    /// Assign successive items of `values` to the cells in the order of
    /// `curve`, stopping when either runs out. Returns the number of cells
    /// written.
    pub fn fill_along<C, I>(&mut self, curve: C, values: I) -> usize
    where
        C: Curve,
        I: IntoIterator<Item = T>,
    {
        let spec = self.spec;
        let mut written = 0;
        for (coord, value) in Walk::new(spec, curve).zip(values) {
            self.cells[spec.offset(coord)] = value;
            written += 1;
        }
        log::debug!(
            "filled {written} of {} cells along {}",
            self.linear_size(),
            curve.name()
        );
        written
    }

    /// Row-major slice access for cursors and iterators.
    pub(crate) fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }
}

/// Panics when the coordinate is off the grid; use [`SquareMatrix::get`] for
/// a checked lookup.
impl<T> Index<Coord> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &T {
        if let Err(e) = self.spec.check_coord(coord) {
            panic!("{e}");
        }
        &self.cells[self.spec.offset(coord)]
    }
}

impl<T> IndexMut<Coord> for SquareMatrix<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut T {
        if let Err(e) = self.spec.check_coord(coord) {
            panic!("{e}");
        }
        let offset = self.spec.offset(coord);
        &mut self.cells[offset]
    }
}

impl<T> TryFrom<Vec<T>> for SquareMatrix<T> {
    type Error = Error;

    /// Wrap a row-major buffer whose length is the square of a power of two.
    fn try_from(cells: Vec<T>) -> Result<Self, Self::Error> {
        let len = u32::try_from(cells.len()).map_err(|_| Error::TooLarge(u32::MAX))?;
        let side = len.isqrt();
        if side * side != len {
            return Err(Error::InvalidSize(len));
        }
        let spec = GridSpec::new(side)?;
        Ok(Self { spec, cells })
    }
}
