use flatview_table::TableError;
use thiserror::Error;

pub type Result<T, E = VectorError> = core::result::Result<T, E>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// A single-element access outside `0..len`. Never clamped.
    ///
    /// `index` is wide enough to report any `usize` or negative `i64` key
    /// exactly.
    #[error("vector index {index} out of range for length {len}")]
    IndexOutOfRange { index: i128, len: usize },

    #[error("slice step cannot be zero")]
    ZeroSliceStep,

    #[error("vector stride must be greater than zero")]
    ZeroStride,

    /// The table could not resolve a length, address, or element.
    #[error(transparent)]
    Table(#[from] TableError),
}
