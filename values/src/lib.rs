//! Lazy, zero-copy views over vectors stored in a FlatBuffers-style table.
//!
//! A vector field is encoded as a length prefix followed by `len` elements of
//! a fixed stride. [`Vector`] reads the length once and decodes elements only
//! when asked, by index, by slice, or by iteration. Nothing is copied out of
//! the buffer: strings come back as `&str` borrowed from it and structs as
//! projections anchored in it.
//!
//! The element kind is chosen by type:
//!
//! | Alias | Element | Stride |
//! |-------|---------|--------|
//! | [`ScalarVector<P>`] | `P: Primitive` | `P::SCALAR.byte_width()` |
//! | [`ValueVector`] | [`ScalarValue`](flatview_types::ScalarValue) | width of a runtime [`Scalar`](flatview_types::Scalar) |
//! | [`StructVector<S>`] | `S: StructProjection` | explicit |
//! | [`StringVector`] | `&str` | explicit (width of the offset field) |
//!
//! # Example
//!
//! ```
//! use flatview_table::Table;
//! use flatview_values::{ScalarVector, VectorView};
//!
//! // Field at offset 4 points to the vector [10i32, 20, 30].
//! let buf = [
//!     0, 0, 0, 0, 4, 0, 0, 0, 3, 0, 0, 0,
//!     10, 0, 0, 0, 20, 0, 0, 0, 30, 0, 0, 0,
//! ];
//! let table = Table::new(&buf, 0);
//! let v = ScalarVector::<i32>::new(&table, 4).unwrap();
//!
//! assert_eq!(v.len(), 3);
//! assert_eq!(v.get(2).unwrap(), 30);
//! assert!(v.get(3).is_err());
//! assert_eq!(v.slice(1..).unwrap(), vec![20, 30]);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod dynamic;
mod error;
pub mod slice;
pub mod traits;
pub mod typed;
mod vector;

pub use dynamic::{ValueVector, Values};
pub use error::{Result, VectorError};
pub use slice::{Key, Selection, SliceIndices, SliceSpec};
pub use traits::{ElementKind, VectorView};
pub use typed::{ScalarVector, Scalars, StringVector, Strings, StructVector, Structs};
pub use vector::{Vector, VectorIter};
