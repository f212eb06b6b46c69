use core::fmt;
use core::marker::PhantomData;

use flatview_table::{StructProjection, Table};

use crate::traits::{ElementKind, sealed};
use crate::{Result, Vector};

/// Elements are inline struct records, each projected as an `S` anchored at
/// the element's address.
pub struct Structs<S> {
    _marker: PhantomData<fn() -> S>,
}

pub type StructVector<'a, S> = Vector<'a, Structs<S>>;

impl<S> Clone for Structs<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Structs<S> {}

impl<S> fmt::Debug for Structs<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Structs")
            .field("projection", &core::any::type_name::<S>())
            .finish()
    }
}

impl<S> sealed::Sealed for Structs<S> {}

impl<'a, S: StructProjection<'a>> ElementKind<'a> for Structs<S> {
    type Element = S;

    fn unpack(&self, table: &Table<'a>, addr: usize) -> Result<S> {
        Ok(S::init(table.at(addr)))
    }
}

impl<'a, S: StructProjection<'a>> Vector<'a, Structs<S>> {
    /// View the vector of structs referenced by the field at `field_offset`.
    ///
    /// `stride` is the size of one struct record, padding included.
    pub fn new(table: &Table<'a>, field_offset: usize, stride: usize) -> Result<Self> {
        let kind = Structs {
            _marker: PhantomData,
        };
        Vector::with_kind(table, field_offset, stride, kind)
    }

    pub fn from_slot(
        table: &Table<'a>,
        vtable_slot: usize,
        stride: usize,
    ) -> Result<Option<Self>> {
        Vector::from_slot_with(table, vtable_slot, |table, field_offset| {
            Self::new(table, field_offset, stride)
        })
    }
}
