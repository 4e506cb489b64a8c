//! Standard iterator adapters over curve traversals.
//!
//! These complement [`Cursor`](crate::Cursor) for code that wants to use
//! `for` loops, `zip`, `rev` and the rest of [`Iterator`].

use std::iter::FusedIterator;

use crate::{coord::Coord, curve::Curve, matrix::SquareMatrix, spec::GridSpec};

/// Coordinates of a grid in curve order.
#[derive(Debug, Clone)]
pub struct Walk<C> {
    /// Grid being walked.
    spec: GridSpec,
    /// Traversal order.
    curve: C,
    /// Next position from the front.
    front: u32,
    /// One past the next position from the back.
    back: u32,
}

impl<C: Curve> Walk<C> {
    /// Walk every cell of `spec` in the order of `curve`.
    pub fn new(spec: GridSpec, curve: C) -> Self {
        Self {
            spec,
            curve,
            front: 0,
            back: spec.length(),
        }
    }

    /// Coordinate at `position`, which the front/back bounds keep in range.
    fn at(&self, position: u32) -> Option<Coord> {
        self.curve.coord(self.spec, position).ok()
    }
}

impl<C: Curve> Iterator for Walk<C> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.front == self.back {
            return None;
        }
        let coord = self.at(self.front)?;
        self.front += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.back - self.front) as usize;
        (len, Some(len))
    }
}

impl<C: Curve> DoubleEndedIterator for Walk<C> {
    fn next_back(&mut self) -> Option<Coord> {
        if self.front == self.back {
            return None;
        }
        let coord = self.at(self.back - 1)?;
        self.back -= 1;
        Some(coord)
    }
}

impl<C: Curve> ExactSizeIterator for Walk<C> {}

impl<C: Curve> FusedIterator for Walk<C> {}

/// Shared references to the cells of a matrix, in curve order.
#[derive(Debug, Clone)]
pub struct Iter<'a, T, C> {
    /// Row-major cells.
    cells: &'a [T],
    /// Coordinates still to visit.
    walk: Walk<C>,
}

impl<'a, T, C: Curve> Iter<'a, T, C> {
    /// Iterate over `matrix` in the order of `curve`.
    pub fn new(matrix: &'a SquareMatrix<T>, curve: C) -> Self {
        Self {
            cells: matrix.as_slice(),
            walk: Walk::new(matrix.spec(), curve),
        }
    }
}

impl<'a, T, C: Curve> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let coord = self.walk.next()?;
        self.cells.get(self.walk.spec.offset(coord))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.walk.size_hint()
    }
}

impl<T, C: Curve> DoubleEndedIterator for Iter<'_, T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let coord = self.walk.next_back()?;
        self.cells.get(self.walk.spec.offset(coord))
    }
}

impl<T, C: Curve> ExactSizeIterator for Iter<'_, T, C> {}

impl<T, C: Curve> FusedIterator for Iter<'_, T, C> {}

/// Mutable references to the cells of a matrix, in curve order.
///
/// The cells are split into a table of individually borrowed slots up front;
/// each slot is taken exactly once because the curve is a bijection.
#[derive(Debug)]
pub struct IterMut<'a, T, C> {
    /// One slot per cell in row-major order, emptied as cells are yielded.
    slots: Vec<Option<&'a mut T>>,
    /// Coordinates still to visit.
    walk: Walk<C>,
}

impl<'a, T, C: Curve> IterMut<'a, T, C> {
    /// Iterate mutably over `matrix` in the order of `curve`.
    pub fn new(matrix: &'a mut SquareMatrix<T>, curve: C) -> Self {
        let walk = Walk::new(matrix.spec(), curve);
        Self {
            slots: matrix.cells_mut().iter_mut().map(Some).collect(),
            walk,
        }
    }

    /// Take the slot for `coord`.
    fn take(&mut self, coord: Coord) -> Option<&'a mut T> {
        let offset = self.walk.spec.offset(coord);
        self.slots.get_mut(offset)?.take()
    }
}

impl<'a, T, C: Curve> Iterator for IterMut<'a, T, C> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let coord = self.walk.next()?;
        self.take(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.walk.size_hint()
    }
}

impl<T, C: Curve> DoubleEndedIterator for IterMut<'_, T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let coord = self.walk.next_back()?;
        self.take(coord)
    }
}

impl<T, C: Curve> ExactSizeIterator for IterMut<'_, T, C> {}

impl<T, C: Curve> FusedIterator for IterMut<'_, T, C> {}
