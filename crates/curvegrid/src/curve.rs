use crate::{coord::Coord, error, spec::GridSpec};

/// A bijection between linear curve positions `[0, length)` and the cells of
/// a square grid.
///
/// Implementations are small `Copy` values (usually zero-sized), so cursors
/// and iterators can carry them by value and dispatch statically.
pub trait Curve: Copy {
    /// Short registry key, e.g. `"hilbert"`.
    fn name(&self) -> &'static str;

    /// One-paragraph description of the traversal.
    fn info(&self) -> &'static str;

    /// Curve position of `coord`. Fails when `coord` is off the grid.
    fn index(&self, spec: GridSpec, coord: Coord) -> error::Result<u32>;

    /// Coordinate visited at curve position `index`. Fails when
    /// `index >= spec.length()`.
    fn coord(&self, spec: GridSpec, index: u32) -> error::Result<Coord>;
}
