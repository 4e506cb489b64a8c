/// Gray code traversal of the row-major numbering.
pub mod gray;
/// The classic Hilbert curve.
pub mod hilbert;

pub use self::{gray::GrayCode, hilbert::Hilbert};
