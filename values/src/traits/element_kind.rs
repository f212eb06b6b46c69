use flatview_table::Table;

use crate::Result;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// How one element of a vector is decoded from its address.
///
/// This is a sealed trait: the set of element kinds is closed. See
/// [`Structs`](crate::Structs), [`Scalars`](crate::Scalars),
/// [`Strings`](crate::Strings), and [`Values`](crate::Values).
pub trait ElementKind<'a>: sealed::Sealed {
    type Element;

    /// Decode the element stored at the absolute address `addr`.
    fn unpack(&self, table: &Table<'a>, addr: usize) -> Result<Self::Element>;
}
