use crate::{
    coord::Coord,
    curve::Curve,
    error,
    ops::{graycode, igraycode},
    spec::GridSpec,
};

/// Traversal keyed by the Gray code of the row-major cell offset.
///
/// The cell at offset `y * side + x` is visited at position
/// `gray(y * side + x)`, so cells with consecutive offsets sit at curve
/// positions that differ in exactly one bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GrayCode;

impl Curve for GrayCode {
    fn name(&self) -> &'static str {
        "gray"
    }

    fn info(&self) -> &'static str {
        "Binary reflected Gray code of the row-major cell offset.\n\
        Neighbouring offsets land one bit apart on the curve; the walk\n\
        jumps between rows and columns rather than staying spatially local."
    }

    fn index(&self, spec: GridSpec, coord: Coord) -> error::Result<u32> {
        spec.check_coord(coord)?;
        Ok(graycode(coord.y * spec.side() + coord.x))
    }

    fn coord(&self, spec: GridSpec, index: u32) -> error::Result<Coord> {
        spec.check_index(index)?;
        let offset = igraycode(index);
        Ok(Coord::new(offset % spec.side(), offset / spec.side()))
    }
}
