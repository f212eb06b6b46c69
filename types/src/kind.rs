use core::fmt;

use crate::Primitive;

/// Primitive element kinds that can be stored inline in a record.
///
/// All multi-byte kinds are encoded little-endian.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scalar {
    /// Boolean stored as one byte; any non-zero byte reads as `true`.
    Bool,
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

static_assertions::assert_eq_size!(Scalar, u8);

impl Scalar {
    /// Number of bytes one value of this kind occupies.
    pub const fn byte_width(self) -> usize {
        match self {
            Scalar::Bool | Scalar::U8 | Scalar::I8 => 1,
            Scalar::U16 | Scalar::I16 => 2,
            Scalar::U32 | Scalar::I32 | Scalar::F32 => 4,
            Scalar::U64 | Scalar::I64 | Scalar::F64 => 8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Scalar::Bool => "bool",
            Scalar::U8 => "u8",
            Scalar::I8 => "i8",
            Scalar::U16 => "u16",
            Scalar::I16 => "i16",
            Scalar::U32 => "u32",
            Scalar::I32 => "i32",
            Scalar::U64 => "u64",
            Scalar::I64 => "i64",
            Scalar::F32 => "f32",
            Scalar::F64 => "f64",
        }
    }

    /// Decode a value of this kind from the start of `bytes`.
    ///
    /// Returns `None` if `bytes` is shorter than [`byte_width`](Self::byte_width).
    /// Trailing bytes are ignored.
    pub fn decode(self, bytes: &[u8]) -> Option<ScalarValue> {
        let value = match self {
            Scalar::Bool => ScalarValue::Bool(bool::read_le(bytes)?),
            Scalar::U8 => ScalarValue::U8(u8::read_le(bytes)?),
            Scalar::I8 => ScalarValue::I8(i8::read_le(bytes)?),
            Scalar::U16 => ScalarValue::U16(u16::read_le(bytes)?),
            Scalar::I16 => ScalarValue::I16(i16::read_le(bytes)?),
            Scalar::U32 => ScalarValue::U32(u32::read_le(bytes)?),
            Scalar::I32 => ScalarValue::I32(i32::read_le(bytes)?),
            Scalar::U64 => ScalarValue::U64(u64::read_le(bytes)?),
            Scalar::I64 => ScalarValue::I64(i64::read_le(bytes)?),
            Scalar::F32 => ScalarValue::F32(f32::read_le(bytes)?),
            Scalar::F64 => ScalarValue::F64(f64::read_le(bytes)?),
        };
        Some(value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded scalar whose kind is only known at runtime.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub enum ScalarValue {
    Bool(bool),
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    F32(f32),
    F64(f64),
}

impl ScalarValue {
    /// The descriptor this value was decoded with.
    pub const fn scalar(&self) -> Scalar {
        match self {
            ScalarValue::Bool(_) => Scalar::Bool,
            ScalarValue::U8(_) => Scalar::U8,
            ScalarValue::I8(_) => Scalar::I8,
            ScalarValue::U16(_) => Scalar::U16,
            ScalarValue::I16(_) => Scalar::I16,
            ScalarValue::U32(_) => Scalar::U32,
            ScalarValue::I32(_) => Scalar::I32,
            ScalarValue::U64(_) => Scalar::U64,
            ScalarValue::I64(_) => Scalar::I64,
            ScalarValue::F32(_) => Scalar::F32,
            ScalarValue::F64(_) => Scalar::F64,
        }
    }

    /// Widen any integer or boolean value to `i128`.
    ///
    /// Floats return `None`.
    pub fn as_integer(&self) -> Option<i128> {
        match *self {
            ScalarValue::Bool(v) => Some(v as i128),
            ScalarValue::U8(v) => Some(v.into()),
            ScalarValue::I8(v) => Some(v.into()),
            ScalarValue::U16(v) => Some(v.into()),
            ScalarValue::I16(v) => Some(v.into()),
            ScalarValue::U32(v) => Some(v.into()),
            ScalarValue::I32(v) => Some(v.into()),
            ScalarValue::U64(v) => Some(v.into()),
            ScalarValue::I64(v) => Some(v.into()),
            ScalarValue::F32(_) | ScalarValue::F64(_) => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match *self {
            ScalarValue::F32(v) => Some(v.into()),
            ScalarValue::F64(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Bool(v) => write!(f, "{v}"),
            ScalarValue::U8(v) => write!(f, "{v}"),
            ScalarValue::I8(v) => write!(f, "{v}"),
            ScalarValue::U16(v) => write!(f, "{v}"),
            ScalarValue::I16(v) => write!(f, "{v}"),
            ScalarValue::U32(v) => write!(f, "{v}"),
            ScalarValue::I32(v) => write!(f, "{v}"),
            ScalarValue::U64(v) => write!(f, "{v}"),
            ScalarValue::I64(v) => write!(f, "{v}"),
            ScalarValue::F32(v) => write!(f, "{v}"),
            ScalarValue::F64(v) => write!(f, "{v}"),
        }
    }
}
