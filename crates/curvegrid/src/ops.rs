//! Support operations for curve calculation.

/// Convert a binary index to its Binary Reflected Gray Code (BRGC) form.
#[inline]
pub fn graycode(x: u32) -> u32 {
    x ^ (x >> 1)
}

/// Inverse Gray code: recover binary from a BRGC value `x`.
///
/// The shift cascade covers all 32 bits, so this is the exact inverse of
/// [`graycode`] for every `u32`.
#[inline]
pub fn igraycode(x: u32) -> u32 {
    let mut b = x;
    b ^= b >> 16;
    b ^= b >> 8;
    b ^= b >> 4;
    b ^= b >> 2;
    b ^= b >> 1;
    b
}

/// Rotate/flip a quadrant of side `s` for the Hilbert mapping.
///
/// When `ry == 0` the quadrant is transposed, and additionally reflected when
/// `rx == 1`. Reflection uses wrapping arithmetic: during encoding the
/// coordinates can exceed `s - 1`, and only their bits below `s` are read
/// afterwards.
#[inline]
pub fn rotate(s: u32, x: &mut u32, y: &mut u32, rx: u32, ry: u32) {
    if ry == 0 {
        if rx == 1 {
            *x = s.wrapping_sub(1).wrapping_sub(*x);
            *y = s.wrapping_sub(1).wrapping_sub(*y);
        }
        std::mem::swap(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bit-by-bit inverse used as a reference for the cascade.
    fn igraycode_slow(x: u32) -> u32 {
        let mut g = x;
        let mut b = x;
        loop {
            if g == 0 {
                return b;
            }
            g >>= 1;
            b ^= g;
        }
    }

    #[test]
    fn test_graycode() {
        assert_eq!(graycode(3), 2);
        assert_eq!(graycode(4), 6);
        for i in 0..1024 {
            assert_eq!(igraycode(graycode(i)), i);
            assert_eq!(graycode(igraycode(i)), i);
            assert_eq!(igraycode(i), igraycode_slow(i));
        }
        for i in [u32::MAX, 1 << 31, 0xdead_beef, (1 << 30) - 1] {
            assert_eq!(igraycode(i), igraycode_slow(i));
            assert_eq!(igraycode(graycode(i)), i);
        }
    }

    #[test]
    fn test_rotate() {
        let (mut x, mut y) = (0, 1);
        rotate(2, &mut x, &mut y, 0, 1);
        assert_eq!((x, y), (0, 1));

        rotate(2, &mut x, &mut y, 0, 0);
        assert_eq!((x, y), (1, 0));

        rotate(2, &mut x, &mut y, 1, 0);
        assert_eq!((x, y), (1, 0));

        let (mut x, mut y) = (0, 0);
        rotate(4, &mut x, &mut y, 1, 0);
        assert_eq!((x, y), (3, 3));
    }

    #[test]
    fn rotate_wraps_low_bits() {
        // x = 3 exceeds s - 1 = 1; the low bit must still be the reflection.
        let (mut x, mut y) = (3, 0);
        rotate(2, &mut x, &mut y, 1, 0);
        assert_eq!(y & 1, 0);
        assert_eq!(x & 1, 1);
    }
}
