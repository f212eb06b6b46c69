//! Scalar type descriptors for FlatBuffers-style binary records.
//!
//! A [`Scalar`] names a primitive element kind together with its byte width.
//! Vector views use the width as the element stride and hand the descriptor
//! back to the table when decoding. Decoding can be static, through the
//! [`Primitive`] trait, or dynamic, producing a [`ScalarValue`].
//!
//! # Example
//!
//! ```
//! use flatview_types::{Primitive, Scalar, ScalarValue};
//!
//! assert_eq!(Scalar::I32.byte_width(), 4);
//! assert_eq!(<i32 as Primitive>::SCALAR, Scalar::I32);
//!
//! let bytes = 30i32.to_le_bytes();
//! assert_eq!(i32::read_le(&bytes), Some(30));
//! assert_eq!(Scalar::I32.decode(&bytes), Some(ScalarValue::I32(30)));
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod kind;
mod primitive;

pub use kind::{Scalar, ScalarValue};
pub use primitive::Primitive;
