//! Static decoding between Rust primitives and their [`Scalar`] descriptors.
//!
//! `Primitive` plays the role of a compile-time type tag: a view generic over
//! `P: Primitive` never inspects a runtime descriptor to decode an element,
//! but it can still report [`Primitive::SCALAR`] to anyone who asks.
//!
//! # Implemented for
//!
//! - `bool`
//! - `u8`, `i8`, `u16`, `i16`, `u32`, `i32`, `u64`, `i64`
//! - `f32`, `f64`

use core::fmt::Debug;

use crate::Scalar;

/// A fixed-width primitive that can be read from little-endian bytes.
pub trait Primitive: Copy + Debug + PartialEq + Sized {
    /// Descriptor for this type. Its byte width is the stride of a vector
    /// of `Self`.
    const SCALAR: Scalar;

    /// Decode `Self` from the first `SCALAR.byte_width()` bytes of `bytes`.
    ///
    /// Returns `None` if there are not enough bytes.
    fn read_le(bytes: &[u8]) -> Option<Self>;
}

impl Primitive for bool {
    const SCALAR: Scalar = Scalar::Bool;

    fn read_le(bytes: &[u8]) -> Option<Self> {
        bytes.first().map(|b| *b != 0)
    }
}

macro_rules! impl_primitive {
    ($($ty:ty => $scalar:ident),* $(,)?) => {
        $(
            impl Primitive for $ty {
                const SCALAR: Scalar = Scalar::$scalar;

                fn read_le(bytes: &[u8]) -> Option<Self> {
                    let bytes = bytes.get(..core::mem::size_of::<$ty>())?;
                    Some(<$ty>::from_le_bytes(bytes.try_into().ok()?))
                }
            }

            static_assertions::const_assert_eq!(
                core::mem::size_of::<$ty>(),
                Scalar::$scalar.byte_width()
            );
        )*
    };
}

impl_primitive! {
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    f32 => F32,
    f64 => F64,
}
