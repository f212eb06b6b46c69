use thiserror::Error;

pub type Result<T, E = TableError> = core::result::Result<T, E>;

/// Failure to resolve something inside a table's buffer.
///
/// These are permanent: the buffer is immutable, so retrying the same read
/// always fails the same way.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error("read of {width} bytes at {addr} is out of bounds for a buffer of {len} bytes")]
    OutOfBounds { addr: usize, width: usize, len: usize },

    #[error("table at {pos} refers to a vtable outside the buffer")]
    InvalidVtable { pos: usize },

    #[error("string record at {addr} is not valid UTF-8")]
    InvalidUtf8 { addr: usize },

    #[error("vector length {len} exceeds the configured maximum of {max}")]
    VectorTooLong { len: usize, max: usize },

    #[error("string length {len} exceeds the configured maximum of {max}")]
    StringTooLong { len: usize, max: usize },
}
