use flatview_table::Table;
use flatview_types::{Scalar, ScalarValue};

use crate::traits::{ElementKind, sealed};
use crate::{Result, Vector};

/// Elements are primitives described by a runtime [`Scalar`] descriptor.
///
/// Use this when the element type comes from data (for example, a
/// reflection schema) rather than from generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Values {
    scalar: Scalar,
}

pub type ValueVector<'a> = Vector<'a, Values>;

impl Values {
    pub fn new(scalar: Scalar) -> Self {
        Values { scalar }
    }

    pub fn scalar(&self) -> Scalar {
        self.scalar
    }
}

impl sealed::Sealed for Values {}

impl<'a> ElementKind<'a> for Values {
    type Element = ScalarValue;

    fn unpack(&self, table: &Table<'a>, addr: usize) -> Result<ScalarValue> {
        Ok(table.read_scalar(self.scalar, addr)?)
    }
}

impl<'a> Vector<'a, Values> {
    /// View the vector referenced by the field at `field_offset`, decoding
    /// each element as `scalar`. The stride is `scalar`'s byte width.
    pub fn new(table: &Table<'a>, field_offset: usize, scalar: Scalar) -> Result<Self> {
        Vector::with_kind(table, field_offset, scalar.byte_width(), Values::new(scalar))
    }

    pub fn from_slot(
        table: &Table<'a>,
        vtable_slot: usize,
        scalar: Scalar,
    ) -> Result<Option<Self>> {
        Vector::from_slot_with(table, vtable_slot, |table, field_offset| {
            Self::new(table, field_offset, scalar)
        })
    }

    pub fn scalar(&self) -> Scalar {
        self.kind().scalar
    }
}
