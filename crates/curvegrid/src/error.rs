use thiserror::Error;

/// Errors raised by matrix construction, access, curve mapping and cursor
/// comparison. All of them are contract violations reported immediately.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested side length is zero or not a power of two.
    #[error("size must be a non-zero power of two, got {0}")]
    InvalidSize(u32),
    /// The requested side length would overflow the 32-bit curve index.
    #[error("size {0} is too large: side * side must fit in 32 bits")]
    TooLarge(u32),
    /// A coordinate lies outside `[0, side)`.
    #[error("coordinate ({x}, {y}) out of range for side {side}")]
    CoordOutOfRange {
        /// Column.
        x: u32,
        /// Row.
        y: u32,
        /// Grid side length.
        side: u32,
    },
    /// A linear index lies outside `[0, side * side)`.
    #[error("index {index} out of range for length {length}")]
    IndexOutOfRange {
        /// The offending index.
        index: u32,
        /// Number of cells in the grid.
        length: u32,
    },
    /// Two cursors bound to different matrices were compared.
    #[error("cursors refer to different matrices")]
    IncompatibleIterators,
    /// A curve name did not match any registered curve.
    #[error("unknown curve '{0}'")]
    UnknownCurve(String),
}

impl Error {
    /// Whether this error is one of the out-of-range variants.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::CoordOutOfRange { .. } | Self::IndexOutOfRange { .. }
        )
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
