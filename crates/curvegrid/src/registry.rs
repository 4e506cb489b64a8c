//! Runtime curve selection.
//!
//! [`CurveKind`] is a tagged variant over the built-in curves. It implements
//! [`Curve`] by matching on the tag, so code that only learns the curve at
//! runtime (e.g. from a command line) can still drive the generic cursors.

use std::{fmt, str::FromStr};

use crate::{
    coord::Coord,
    curve::Curve,
    curves::{GrayCode, Hilbert},
    error::{self, Error},
    spec::GridSpec,
};

/// One of the built-in curves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// See [`Hilbert`].
    #[default]
    Hilbert,
    /// See [`GrayCode`].
    GrayCode,
}

/// Static metadata for a registered curve.
#[derive(Debug, Clone, Copy)]
pub struct CurveEntry {
    /// Registry key accepted by [`CurveKind::from_str`].
    pub key: &'static str,
    /// Human readable name.
    pub display: &'static str,
    /// Size constraints, for help output.
    pub constraints: &'static str,
    /// The curve itself.
    pub kind: CurveKind,
}

/// All registered curves.
pub const REGISTRY: &[CurveEntry] = &[
    CurveEntry {
        key: "hilbert",
        display: "Hilbert",
        constraints: "side is a power of two, 1 <= side <= 32768",
        kind: CurveKind::Hilbert,
    },
    CurveEntry {
        key: "gray",
        display: "Gray Code",
        constraints: "side is a power of two, 1 <= side <= 32768",
        kind: CurveKind::GrayCode,
    },
];

/// Registry keys of all curves, in registry order.
pub const CURVE_NAMES: &[&str] = &["hilbert", "gray"];

impl CurveKind {
    /// Every curve kind, in registry order.
    pub const ALL: [Self; 2] = [Self::Hilbert, Self::GrayCode];

    /// Registry entry describing this kind.
    pub fn entry(self) -> &'static CurveEntry {
        match self {
            Self::Hilbert => &REGISTRY[0],
            Self::GrayCode => &REGISTRY[1],
        }
    }
}

impl Curve for CurveKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Hilbert => Hilbert.name(),
            Self::GrayCode => GrayCode.name(),
        }
    }

    fn info(&self) -> &'static str {
        match self {
            Self::Hilbert => Hilbert.info(),
            Self::GrayCode => GrayCode.info(),
        }
    }

    fn index(&self, spec: GridSpec, coord: Coord) -> error::Result<u32> {
        match self {
            Self::Hilbert => Hilbert.index(spec, coord),
            Self::GrayCode => GrayCode.index(spec, coord),
        }
    }

    fn coord(&self, spec: GridSpec, index: u32) -> error::Result<Coord> {
        match self {
            Self::Hilbert => Hilbert.coord(spec, index),
            Self::GrayCode => GrayCode.coord(spec, index),
        }
    }
}

impl FromStr for CurveKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTRY
            .iter()
            .find(|entry| entry.key.eq_ignore_ascii_case(s.trim()))
            .map(|entry| entry.kind)
            .ok_or_else(|| Error::UnknownCurve(s.to_string()))
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_registry() {
        let keys: Vec<_> = REGISTRY.iter().map(|e| e.key).collect();
        assert_eq!(keys, CURVE_NAMES);
        for kind in CurveKind::ALL {
            assert_eq!(kind.entry().kind, kind);
            assert_eq!(kind.entry().key, kind.name());
        }
    }

    #[test]
    fn parse() {
        assert_eq!("hilbert".parse::<CurveKind>(), Ok(CurveKind::Hilbert));
        assert_eq!(" Gray ".parse::<CurveKind>(), Ok(CurveKind::GrayCode));
        assert_eq!(
            "zorder".parse::<CurveKind>(),
            Err(Error::UnknownCurve("zorder".into()))
        );
        assert_eq!(CurveKind::GrayCode.to_string(), "gray");
    }

    #[test]
    fn dispatch_matches_strategies() -> error::Result<()> {
        let spec = GridSpec::new(8)?;
        for i in 0..spec.length() {
            assert_eq!(CurveKind::Hilbert.coord(spec, i)?, Hilbert.coord(spec, i)?);
            assert_eq!(
                CurveKind::GrayCode.coord(spec, i)?,
                GrayCode.coord(spec, i)?
            );
        }
        Ok(())
    }
}
