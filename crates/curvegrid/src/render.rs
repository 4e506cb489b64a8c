//! Plain-text rendering of matrices and curve mappings.

use std::fmt::{self, Display, Write};

use crate::{coord::Coord, curve::Curve, error, matrix::SquareMatrix, spec::GridSpec};

/// Default column width used by the `Display` impl.
pub const DEFAULT_WIDTH: usize = 4;

/// Write `matrix` as rows of right-aligned values of at least `width`
/// characters, each followed by a space.
pub fn write_grid<T: Display>(
    out: &mut impl Write,
    matrix: &SquareMatrix<T>,
    width: usize,
) -> fmt::Result {
    for row in matrix.rows() {
        for value in row {
            write!(out, "{value:>width$} ")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// A matrix paired with a column width, displayed via [`write_grid`].
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a, T> {
    /// Matrix to render.
    pub matrix: &'a SquareMatrix<T>,
    /// Minimum column width.
    pub width: usize,
}

impl<T: Display> Display for GridView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.matrix, self.width)
    }
}

/// Render `matrix` to a string; see [`write_grid`].
pub fn grid<T: Display>(matrix: &SquareMatrix<T>, width: usize) -> String {
    GridView { matrix, width }.to_string()
}

/// One line per cell, in row-major order: `[x;y] => index => [x';y']`, where
/// the right-hand coordinate is mapped back from the index.
pub fn transform_table<C: Curve>(spec: GridSpec, curve: C) -> error::Result<String> {
    let mut out = String::new();
    for y in 0..spec.side() {
        for x in 0..spec.side() {
            let coord = Coord::new(x, y);
            let index = curve.index(spec, coord)?;
            let back = curve.coord(spec, index)?;
            out += &format!("{coord} => {index} => {back}\n");
        }
    }
    Ok(out)
}

impl<T: Display> Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self, DEFAULT_WIDTH)
    }
}
