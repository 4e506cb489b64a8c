//! Bidirectional cursors that walk a matrix in curve order.
//!
//! A cursor is a position in `[0, n²]` on a curve, bound to one matrix. The
//! position `n²` is the end sentinel: it can be reached and compared, but not
//! dereferenced. Stepping never clamps; positions use wrapping arithmetic,
//! so walking off either end yields a position that every accessor reports
//! as out of range.

use std::ptr;

use crate::{
    coord::Coord,
    curve::Curve,
    error::{self, Error},
    matrix::SquareMatrix,
};

/// Shared cursor over a [`SquareMatrix`].
///
/// `Cursor` is `Copy`, so the postfix forms simply return the previous value.
#[derive(Debug)]
pub struct Cursor<'a, T, C> {
    /// The borrowed matrix.
    matrix: &'a SquareMatrix<T>,
    /// Traversal order.
    curve: C,
    /// Linear curve position.
    position: u32,
}

impl<T, C: Copy> Clone for Cursor<'_, T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, C: Copy> Copy for Cursor<'_, T, C> {}

impl<'a, T, C: Curve> Cursor<'a, T, C> {
    /// Bind a cursor to `matrix` at `position`.
    pub fn new(matrix: &'a SquareMatrix<T>, curve: C, position: u32) -> Self {
        Self {
            matrix,
            curve,
            position,
        }
    }

    /// A cursor at position 0 on the same matrix.
    pub fn begin(&self) -> Self {
        Self::new(self.matrix, self.curve, 0)
    }

    /// The end sentinel, one past the last cell.
    pub fn end(&self) -> Self {
        Self::new(self.matrix, self.curve, self.matrix.linear_size())
    }

    /// Current curve position.
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Whether this cursor sits on the end sentinel.
    pub fn is_end(&self) -> bool {
        self.position == self.matrix.linear_size()
    }

    /// The traversal order.
    pub fn curve(&self) -> C {
        self.curve
    }

    /// Coordinate of the current cell.
    pub fn coord(&self) -> error::Result<Coord> {
        self.curve.coord(self.matrix.spec(), self.position)
    }

    /// Dereference: the cell at the current position. Fails at the end
    /// sentinel or anywhere outside `[0, n²)`.
    pub fn get(&self) -> error::Result<&'a T> {
        let c = self.coord()?;
        self.matrix.get(c.x, c.y)
    }

    /// Prefix increment.
    pub fn advance(&mut self) -> &mut Self {
        self.position = self.position.wrapping_add(1);
        self
    }

    /// Prefix decrement.
    pub fn retreat(&mut self) -> &mut Self {
        self.position = self.position.wrapping_sub(1);
        self
    }

    /// Postfix increment: step forward, returning the cursor as it was.
    pub fn post_advance(&mut self) -> Self {
        let prev = *self;
        self.advance();
        prev
    }

    /// Postfix decrement: step back, returning the cursor as it was.
    pub fn post_retreat(&mut self) -> Self {
        let prev = *self;
        self.retreat();
        prev
    }

    /// Compare positions. Fails with [`Error::IncompatibleIterators`] when
    /// the cursors are bound to different matrix instances, even if their
    /// contents are equal.
    pub fn try_eq(&self, other: &Self) -> error::Result<bool> {
        if !ptr::eq(self.matrix, other.matrix) {
            return Err(Error::IncompatibleIterators);
        }
        Ok(self.position == other.position)
    }
}

/// Exclusive cursor over a [`SquareMatrix`], allowing writes through
/// [`CursorMut::get_mut`].
///
/// Only one can exist per matrix at a time, so it is compared against
/// positions rather than other cursors.
#[derive(Debug)]
pub struct CursorMut<'a, T, C> {
    /// The borrowed matrix.
    matrix: &'a mut SquareMatrix<T>,
    /// Traversal order.
    curve: C,
    /// Linear curve position.
    position: u32,
}

impl<'a, T, C: Curve> CursorMut<'a, T, C> {
    /// Bind a cursor to `matrix` at `position`.
    pub fn new(matrix: &'a mut SquareMatrix<T>, curve: C, position: u32) -> Self {
        Self {
            matrix,
            curve,
            position,
        }
    }

    /// Current curve position.
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Move to an absolute position.
    pub fn seek(&mut self, position: u32) -> &mut Self {
        self.position = position;
        self
    }

    /// Whether this cursor sits on the end sentinel.
    pub fn is_end(&self) -> bool {
        self.position == self.matrix.linear_size()
    }

    /// Coordinate of the current cell.
    pub fn coord(&self) -> error::Result<Coord> {
        self.curve.coord(self.matrix.spec(), self.position)
    }

    /// Dereference for reading.
    pub fn get(&self) -> error::Result<&T> {
        let c = self.coord()?;
        self.matrix.get(c.x, c.y)
    }

    /// Dereference for writing.
    pub fn get_mut(&mut self) -> error::Result<&mut T> {
        let c = self.coord()?;
        self.matrix.get_mut(c.x, c.y)
    }

    /// Overwrite the current cell.
    pub fn set(&mut self, value: T) -> error::Result<()> {
        *self.get_mut()? = value;
        Ok(())
    }

    /// Prefix increment.
    pub fn advance(&mut self) -> &mut Self {
        self.position = self.position.wrapping_add(1);
        self
    }

    /// Prefix decrement.
    pub fn retreat(&mut self) -> &mut Self {
        self.position = self.position.wrapping_sub(1);
        self
    }

    /// Downgrade to a shared cursor at the same position.
    pub fn into_cursor(self) -> Cursor<'a, T, C> {
        Cursor::new(self.matrix, self.curve, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{GrayCode, Hilbert};

    #[test]
    fn begin_end() -> error::Result<()> {
        let m = SquareMatrix::new(4, 0u8)?;
        let c = m.cursor(Hilbert);
        assert_eq!(c.begin().position(), 0);
        assert_eq!(c.end().position(), 16);
        assert!(c.end().is_end());
        assert!(!c.try_eq(&c.end())?);
        assert!(c.try_eq(&c.begin())?);
        Ok(())
    }

    #[test]
    fn prefix_and_postfix() -> error::Result<()> {
        let m = SquareMatrix::from_fn(2, |c| (c.x, c.y))?;
        let mut c = m.cursor(Hilbert);
        assert_eq!(*c.get()?, (0, 0));
        assert_eq!(*c.advance().get()?, (0, 1));

        let prev = c.post_advance();
        assert_eq!(prev.position(), 1);
        assert_eq!(c.position(), 2);
        assert_eq!(*c.get()?, (1, 1));

        let prev = c.post_retreat();
        assert_eq!(prev.position(), 2);
        assert_eq!(*c.retreat().get()?, (0, 0));
        Ok(())
    }

    #[test]
    fn end_is_not_dereferenceable() -> error::Result<()> {
        let m = SquareMatrix::new(4, 0u8)?;
        let end = m.cursor(GrayCode).end();
        assert_eq!(
            end.get(),
            Err(Error::IndexOutOfRange {
                index: 16,
                length: 16
            })
        );

        // Stepping before the start wraps to an out-of-range position.
        let mut c = m.cursor(GrayCode);
        c.retreat();
        assert!(c.get().unwrap_err().is_out_of_range());
        c.advance();
        assert!(c.get().is_ok());
        Ok(())
    }

    #[test]
    fn different_matrices_are_incompatible() -> error::Result<()> {
        let a = SquareMatrix::new(2, 1u8)?;
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(
            a.cursor(Hilbert).try_eq(&b.cursor(Hilbert)),
            Err(Error::IncompatibleIterators)
        );
        Ok(())
    }

    #[test]
    fn mutable_cursor_writes() -> error::Result<()> {
        let mut m = SquareMatrix::new(4, 0u32)?;
        let mut c = m.cursor_mut(Hilbert);
        let mut value = 0;
        while !c.is_end() {
            c.set(value)?;
            value += 1;
            c.advance();
        }
        assert!(c.get_mut().is_err());

        c.seek(3);
        assert_eq!(c.coord()?, Coord::new(0, 1));
        let shared = c.into_cursor();
        assert_eq!(*shared.get()?, 3);

        assert_eq!(*m.get(0, 0)?, 0);
        assert_eq!(*m.get(3, 0)?, 15);
        Ok(())
    }
}
