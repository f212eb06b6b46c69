use core::marker::PhantomData;

use flatview_table::Table;
use flatview_types::{Primitive, Scalar};

use crate::traits::{ElementKind, sealed};
use crate::{Result, Vector};

/// Elements are primitives of type `P`, packed at `P`'s byte width.
#[derive(Debug, Clone, Copy)]
pub struct Scalars<P> {
    scalar: Scalar,
    _marker: PhantomData<P>,
}

pub type ScalarVector<'a, P> = Vector<'a, Scalars<P>>;

impl<P: Primitive> Scalars<P> {
    fn new() -> Self {
        Scalars {
            scalar: P::SCALAR,
            _marker: PhantomData,
        }
    }
}

impl<P> sealed::Sealed for Scalars<P> {}

impl<'a, P: Primitive> ElementKind<'a> for Scalars<P> {
    type Element = P;

    fn unpack(&self, table: &Table<'a>, addr: usize) -> Result<P> {
        Ok(table.get::<P>(addr)?)
    }
}

impl<'a, P: Primitive> Vector<'a, Scalars<P>> {
    /// View the vector of `P` referenced by the field at `field_offset`.
    ///
    /// The stride is `P`'s byte width.
    pub fn new(table: &Table<'a>, field_offset: usize) -> Result<Self> {
        let kind = Scalars::<P>::new();
        Vector::with_kind(table, field_offset, kind.scalar.byte_width(), kind)
    }

    /// Like [`new`](Self::new), locating the field through the vtable.
    pub fn from_slot(table: &Table<'a>, vtable_slot: usize) -> Result<Option<Self>> {
        Vector::from_slot_with(table, vtable_slot, Self::new)
    }

    /// The descriptor elements are decoded with.
    pub fn scalar(&self) -> Scalar {
        self.kind().scalar
    }
}
