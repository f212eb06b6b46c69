//! Read-only accessor over one FlatBuffers-style record.
//!
//! A [`Table`] is anchored at an absolute position inside a borrowed byte
//! buffer and resolves field offsets to values or addresses. It never copies
//! the buffer; everything it returns either is a primitive or borrows from the
//! buffer.
//!
//! Layout rules followed here (all integers little-endian):
//!
//! ```text
//! table:   pos ──▶ [soffset: i32 | fields...]        vtable at pos - soffset
//! vtable:          [len: u16 | object_len: u16 | field offset: u16 ...]
//! vector:  field ──▶ [uoffset: u32] ──▶ [len: u32 | elem 0 | elem 1 | ...]
//! string:  addr  ──▶ [uoffset: u32] ──▶ [len: u32 | utf-8 bytes | 0]
//! ```
//!
//! # Example
//!
//! ```
//! use flatview_table::Table;
//!
//! // Table at 0 (no vtable needed for direct field access); the field at
//! // offset 4 points 4 bytes forward to the vector `[7u16, 9u16]`.
//! let buf = [0, 0, 0, 0, 4, 0, 0, 0, 2, 0, 0, 0, 7, 0, 9, 0];
//! let table = Table::new(&buf, 0);
//!
//! assert_eq!(table.vector_len(4).unwrap(), 2);
//! let data = table.vector(4).unwrap();
//! assert_eq!(table.get::<u16>(data + 2).unwrap(), 9);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod error;
mod options;
mod projection;
mod table;

pub use error::{Result, TableError};
pub use options::{TableOptions, TableOptionsOverride};
pub use projection::StructProjection;
pub use table::{SIZE_UOFFSET, Table};
