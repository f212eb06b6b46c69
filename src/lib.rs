//! Flatview - lazy, zero-copy vector views over FlatBuffers-style records
//!
//! # Overview
//!
//! A serialized record (a "table") stores each vector field as an offset to
//! a length-prefixed run of fixed-stride elements. Flatview exposes such a
//! field as an ordered, randomly indexable, iterable sequence without copying
//! or eagerly decoding it:
//!
//! - [`Table`] resolves field offsets, lengths, addresses, scalars and strings
//!   inside a borrowed buffer.
//! - [`Vector`] views one vector field; its element kind decides how each slot
//!   is decoded (primitive, runtime-typed scalar, struct projection, string).
//! - [`VectorIter`] walks a view once, front to back.
//!
//! # Quick Start
//!
//! ```
//! use flatview::{SIZE_UOFFSET, StringVector, Table, VectorView};
//!
//! // Table at 0; field at offset 4 points to a vector of two strings.
//! let buf = [
//!     0, 0, 0, 0, // soffset (unused here)
//!     4, 0, 0, 0, // uoffset -> vector at 8
//!     2, 0, 0, 0, // len
//!     8, 0, 0, 0, // element 0 -> string at 20
//!     12, 0, 0, 0, // element 1 -> string at 28
//!     2, 0, 0, 0, b'a', b'b', 0, 0, // "ab"
//!     3, 0, 0, 0, b'x', b'y', b'z', 0, // "xyz"
//! ];
//! let table = Table::new(&buf, 0);
//! let names = StringVector::new(&table, 4, SIZE_UOFFSET).unwrap();
//!
//! let all: Vec<&str> = names.iter().collect::<Result<_, _>>().unwrap();
//! assert_eq!(all, ["ab", "xyz"]);
//! assert!(names.get(2).is_err());
//! ```

// Re-export the table accessor
pub use flatview_table::{
    Result as TableResult, SIZE_UOFFSET, StructProjection, Table, TableError, TableOptions,
    TableOptionsOverride,
};

// Re-export scalar descriptors
pub use flatview_types::{Primitive, Scalar, ScalarValue};

// Re-export vector views
pub use flatview_values::{
    ElementKind, Key, Result, ScalarVector, Scalars, Selection, SliceIndices, SliceSpec,
    StringVector, Strings, StructVector, Structs, ValueVector, Values, Vector, VectorError,
    VectorIter, VectorView,
};
