use crate::{coord::Coord, curve::Curve, error, ops::rotate, spec::GridSpec};

/// Hilbert index of `(x, y)` on a grid of `side` cells per axis.
///
/// Walks the bit-planes from the most significant down, accumulating the
/// quadrant number of each plane and rotating the remaining bits into the
/// quadrant's frame. Coordinates are not bounds-checked.
pub fn hilbert_index(side: u32, x: u32, y: u32) -> u32 {
    let (mut x, mut y) = (x, y);
    let mut index = 0;
    let mut s = side / 2;
    while s > 0 {
        let rx = u32::from(x & s != 0);
        let ry = u32::from(y & s != 0);
        index += s * s * ((3 * rx) ^ ry);
        rotate(s, &mut x, &mut y, rx, ry);
        s /= 2;
    }
    index
}

/// Coordinate at Hilbert position `index` on a grid of `side` cells per axis.
///
/// Inverse of [`hilbert_index`]; `index` is not bounds-checked.
pub fn hilbert_point(side: u32, index: u32) -> Coord {
    let (mut x, mut y) = (0, 0);
    let mut t = index;
    let mut s = 1;
    while s < side {
        let rx = 1 & (t / 2);
        let ry = 1 & (t ^ rx);
        rotate(s, &mut x, &mut y, rx, ry);
        x += s * rx;
        y += s * ry;
        t /= 4;
        s *= 2;
    }
    Coord::new(x, y)
}

/// The Hilbert curve over a square power-of-two grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hilbert;

impl Curve for Hilbert {
    fn name(&self) -> &'static str {
        "hilbert"
    }

    fn info(&self) -> &'static str {
        "Classic continuous space-filling curve with excellent locality.\n\
        Consecutive positions are always horizontal or vertical neighbours,\n\
        so a walk along it keeps nearby cells close together in time."
    }

    fn index(&self, spec: GridSpec, coord: Coord) -> error::Result<u32> {
        spec.check_coord(coord)?;
        Ok(hilbert_index(spec.side(), coord.x, coord.y))
    }

    fn coord(&self, spec: GridSpec, index: u32) -> error::Result<Coord> {
        spec.check_index(index)?;
        Ok(hilbert_point(spec.side(), index))
    }
}
