//! Minimal example: fill a matrix along a Hilbert curve and print it.

use std::error::Error;

use curvegrid::{Coord, Curve, SquareMatrix, curves::Hilbert};

fn main() -> Result<(), Box<dyn Error>> {
    // snips-start: example
    // 8x8 grid, numbered in Hilbert order
    let mut matrix = SquareMatrix::new(8, 0u32)?;
    matrix.fill_along(Hilbert, 0..);
    print!("{matrix}");

    let index = Hilbert.index(matrix.spec(), Coord::new(5, 6))?;
    println!("Index of [5;6]: {index}");
    assert_eq!(*matrix.get(5, 6)?, index);
    // snips-end: example

    Ok(())
}
