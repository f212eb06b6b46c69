use core::fmt;

use flatview_types::{Primitive, Scalar, ScalarValue};

use crate::{Result, TableError, TableOptions};

/// Width of an unsigned forward offset (`uoffset`), which is also the width
/// of every length prefix.
pub const SIZE_UOFFSET: usize = 4;

const SIZE_VOFFSET: usize = 2;

/// A record anchored at `pos` inside a borrowed buffer.
///
/// `Table` is `Copy` and pointer-sized plus a few words; pass it by value
/// freely. Addresses taken and returned by its methods are absolute byte
/// positions in [`bytes`](Self::bytes), except for field offsets, which are
/// relative to [`pos`](Self::pos).
#[derive(Clone, Copy)]
pub struct Table<'a> {
    buf: &'a [u8],
    pos: usize,
    options: TableOptions,
}

impl fmt::Debug for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("pos", &self.pos)
            .field("buf_len", &self.buf.len())
            .field("options", &self.options)
            .finish()
    }
}

impl<'a> Table<'a> {
    pub fn new(buf: &'a [u8], pos: usize) -> Self {
        Self::with_options(buf, pos, TableOptions::default())
    }

    pub fn with_options(buf: &'a [u8], pos: usize, options: TableOptions) -> Self {
        Table { buf, pos, options }
    }

    /// A table over the same buffer, with the same options, anchored at `pos`.
    pub fn at(&self, pos: usize) -> Table<'a> {
        Table { pos, ..*self }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.buf
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Resolve a vtable slot to a field offset relative to `pos`.
    ///
    /// Returns `0` when the vtable is too short to contain the slot, which
    /// is how absent (default-valued) fields are encoded.
    pub fn offset(&self, vtable_slot: usize) -> Result<usize> {
        let soffset = self.get::<i32>(self.pos)?;
        let vtable = i64::try_from(self.pos)
            .ok()
            .and_then(|pos| pos.checked_sub(i64::from(soffset)))
            .and_then(|vtable| usize::try_from(vtable).ok())
            .ok_or(TableError::InvalidVtable { pos: self.pos })?;
        let vtable_len = usize::from(self.get::<u16>(vtable)?);
        if vtable_slot
            .checked_add(SIZE_VOFFSET)
            .is_none_or(|end| end > vtable_len)
        {
            return Ok(0);
        }
        Ok(usize::from(self.get::<u16>(self.add(vtable, vtable_slot, SIZE_VOFFSET)?)?))
    }

    /// Follow the `uoffset` stored at `addr`.
    pub fn indirect(&self, addr: usize) -> Result<usize> {
        let delta = self.get::<u32>(addr)? as usize;
        self.add(addr, delta, SIZE_UOFFSET)
    }

    /// Number of elements in the vector referenced by the field at
    /// `field_offset`.
    pub fn vector_len(&self, field_offset: usize) -> Result<usize> {
        let field = self.add(self.pos, field_offset, SIZE_UOFFSET)?;
        let vector = self.indirect(field)?;
        let len = self.get::<u32>(vector)? as usize;
        if let Some(max) = self.options.max_vector_len.filter(|max| len > *max) {
            tracing::debug!(field_offset, len, max, "vector length over limit");
            return Err(TableError::VectorTooLong { len, max });
        }
        Ok(len)
    }

    /// Absolute address of the first element of the vector referenced by the
    /// field at `field_offset`.
    pub fn vector(&self, field_offset: usize) -> Result<usize> {
        let field = self.add(self.pos, field_offset, SIZE_UOFFSET)?;
        let vector = self.indirect(field)?;
        self.add(vector, SIZE_UOFFSET, 0)
    }

    /// Decode the string record whose `uoffset` is stored at `addr`.
    pub fn string(&self, addr: usize) -> Result<&'a str> {
        let record = self.indirect(addr)?;
        let len = self.get::<u32>(record)? as usize;
        if let Some(max) = self.options.max_string_len.filter(|max| len > *max) {
            tracing::debug!(addr = record, len, max, "string length over limit");
            return Err(TableError::StringTooLong { len, max });
        }
        let bytes = self.read_bytes(self.add(record, SIZE_UOFFSET, 0)?, len)?;
        core::str::from_utf8(bytes).map_err(|_| TableError::InvalidUtf8 { addr: record })
    }

    /// Decode a primitive at the absolute address `addr`.
    pub fn get<P: Primitive>(&self, addr: usize) -> Result<P> {
        let width = P::SCALAR.byte_width();
        let bytes = self.read_bytes(addr, width)?;
        P::read_le(bytes).ok_or(TableError::OutOfBounds {
            addr,
            width,
            len: self.buf.len(),
        })
    }

    /// Decode a primitive of a kind only known at runtime.
    pub fn read_scalar(&self, scalar: Scalar, addr: usize) -> Result<ScalarValue> {
        let width = scalar.byte_width();
        let bytes = self.read_bytes(addr, width)?;
        scalar.decode(bytes).ok_or(TableError::OutOfBounds {
            addr,
            width,
            len: self.buf.len(),
        })
    }

    /// Read a scalar field through the vtable, falling back to `default`
    /// when the field is absent.
    pub fn get_slot<P: Primitive>(&self, vtable_slot: usize, default: P) -> Result<P> {
        match self.offset(vtable_slot)? {
            0 => Ok(default),
            field_offset => self.get(self.add(self.pos, field_offset, 0)?),
        }
    }

    fn read_bytes(&self, addr: usize, width: usize) -> Result<&'a [u8]> {
        addr.checked_add(width)
            .and_then(|end| self.buf.get(addr..end))
            .ok_or_else(|| {
                tracing::debug!(addr, width, len = self.buf.len(), "table read out of bounds");
                TableError::OutOfBounds {
                    addr,
                    width,
                    len: self.buf.len(),
                }
            })
    }

    /// `base + delta`, reporting overflow as an out-of-bounds read of `width`
    /// bytes at the (unrepresentable) target.
    fn add(&self, base: usize, delta: usize, width: usize) -> Result<usize> {
        base.checked_add(delta).ok_or(TableError::OutOfBounds {
            addr: usize::MAX,
            width,
            len: self.buf.len(),
        })
    }
}
