//! Square matrices walked in space‑filling curve order.
//!
//! A [`SquareMatrix`] owns an `n×n` grid in row‑major order. A [`Cursor`] (or
//! one of the iterator adapters in [`iter`]) borrows the matrix and visits its
//! cells in the order defined by a [`Curve`], translating each linear curve
//! position into a coordinate on the fly. No cells are copied or moved.
//!
//! # Supported Curves
//!
//! - Hilbert
//! - Gray Code
//!
//! ```
//! use curvegrid::{SquareMatrix, curves::Hilbert};
//!
//! let mut m = SquareMatrix::new(4, 0u32)?;
//! m.fill_along(Hilbert, 0..);
//! assert_eq!(*m.get(0, 0)?, 0);
//! assert_eq!(*m.get(3, 0)?, 15);
//! # Ok::<(), curvegrid::error::Error>(())
//! ```

/// Coordinates on the grid.
pub mod coord;
/// Bidirectional curve cursors.
pub mod cursor;
/// The `Curve` trait implemented by every traversal strategy.
mod curve;
/// Implementations of specific space‑filling curves.
pub mod curves;
/// Error types used across the crate.
pub mod error;
/// Rust iterator adapters over curve traversals.
pub mod iter;
/// The square matrix container.
pub mod matrix;
/// Internal bit operations shared by curve implementations.
#[doc(hidden)]
pub mod ops;
/// Runtime curve selection by name.
pub mod registry;
/// Text rendering helpers.
pub mod render;
/// Grid geometry shared by the matrix and the curves.
pub mod spec;

pub use crate::{
    coord::Coord,
    cursor::{Cursor, CursorMut},
    curve::Curve,
    matrix::SquareMatrix,
    registry::CurveKind,
    spec::GridSpec,
};
