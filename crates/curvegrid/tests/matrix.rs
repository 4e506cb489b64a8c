//! End-to-end behaviour of matrices walked through cursors and iterators.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use curvegrid::{
    Curve, CurveKind, SquareMatrix,
    curves::{GrayCode, Hilbert},
    error::{self, Error},
};

#[test]
fn construction_sizes() {
    for n in [1, 2, 4, 8, 16] {
        assert!(SquareMatrix::new(n, 0u8).is_ok(), "side {n}");
    }
    assert_eq!(SquareMatrix::new(0, 0u8), Err(Error::InvalidSize(0)));
    assert_eq!(SquareMatrix::new(3, 0u8), Err(Error::InvalidSize(3)));
    assert_eq!(
        SquareMatrix::new(1 << 16, 0u8),
        Err(Error::TooLarge(1 << 16))
    );
}

/// The iota fill of the reference program, written with cursors.
fn iota_with_cursors<C: Curve>(
    m: &mut SquareMatrix<i32>,
    curve: C,
    start: i32,
) -> error::Result<()> {
    let mut c = m.cursor_mut(curve);
    let mut value = start;
    while !c.is_end() {
        *c.get_mut()? = value;
        value += 1;
        c.advance();
    }
    Ok(())
}

#[test]
fn hilbert_fill_4x4() -> error::Result<()> {
    let mut m = SquareMatrix::new(4, -1)?;
    iota_with_cursors(&mut m, Hilbert, 0)?;

    assert_eq!(*m.get(0, 0)?, 0);
    let last = Hilbert.coord(m.spec(), 15)?;
    assert_eq!(*m.get(last.x, last.y)?, 15);
    assert_eq!(m.as_slice(), &[0, 1, 14, 15, 3, 2, 13, 12, 4, 7, 8, 11, 5, 6, 9, 10]);

    let mut via_iter = SquareMatrix::new(4, -1)?;
    via_iter.fill_along(Hilbert, 0..);
    assert_eq!(via_iter, m);
    Ok(())
}

#[test]
fn gray_fill_4x4() -> error::Result<()> {
    let mut m = SquareMatrix::new(4, 0)?;
    iota_with_cursors(&mut m, GrayCode, 0)?;
    assert_eq!(m.as_slice(), &[0, 1, 3, 2, 6, 7, 5, 4, 12, 13, 15, 14, 10, 11, 9, 8]);
    Ok(())
}

#[test]
fn cursor_walk_matches_iterator() -> error::Result<()> {
    let m = SquareMatrix::from_fn(8, |c| c.y * 8 + c.x)?;
    for kind in CurveKind::ALL {
        let mut from_cursor = Vec::new();
        let mut c = m.cursor(kind);
        let end = c.end();
        while !c.try_eq(&end)? {
            from_cursor.push(*c.post_advance().get()?);
        }
        let from_iter: Vec<u32> = m.iter(kind).copied().collect();
        assert_eq!(from_cursor, from_iter, "{kind}");
    }
    Ok(())
}

#[test]
fn backwards_from_end() -> error::Result<()> {
    let mut m = SquareMatrix::new(4, 0u32)?;
    m.fill_along(Hilbert, 0..);
    let mut c = m.cursor(Hilbert).end();
    let mut seen = Vec::new();
    while !c.try_eq(&c.begin())? {
        c.retreat();
        seen.push(*c.get()?);
    }
    assert_eq!(seen, (0..16).rev().collect::<Vec<_>>());
    Ok(())
}

#[test]
fn incompatible_cursors() -> error::Result<()> {
    let a = SquareMatrix::new(4, 0u8)?;
    let b = SquareMatrix::new(4, 0u8)?;
    assert_eq!(a, b);
    assert_eq!(
        a.cursor(Hilbert).try_eq(&b.cursor(Hilbert)),
        Err(Error::IncompatibleIterators)
    );
    assert_eq!(
        a.cursor(Hilbert).end().try_eq(&b.cursor(Hilbert).end()),
        Err(Error::IncompatibleIterators)
    );
    Ok(())
}

#[test]
fn dereferencing_end_fails() -> error::Result<()> {
    let mut m = SquareMatrix::new(4, 0u8)?;
    assert!(m.cursor(Hilbert).end().get().unwrap_err().is_out_of_range());

    let mut c = m.cursor_mut(GrayCode);
    c.seek(16);
    assert!(c.is_end());
    assert!(matches!(
        c.get_mut(),
        Err(Error::IndexOutOfRange { index: 16, .. })
    ));
    Ok(())
}
