use flatview_table::Table;

use crate::traits::{ElementKind, sealed};
use crate::{Result, Vector};

/// Elements are offsets to length-prefixed UTF-8 string records.
///
/// The stride is the width of the offset field, not of the strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Strings;

pub type StringVector<'a> = Vector<'a, Strings>;

impl sealed::Sealed for Strings {}

impl<'a> ElementKind<'a> for Strings {
    type Element = &'a str;

    fn unpack(&self, table: &Table<'a>, addr: usize) -> Result<&'a str> {
        Ok(table.string(addr)?)
    }
}

impl<'a> Vector<'a, Strings> {
    pub fn new(table: &Table<'a>, field_offset: usize, stride: usize) -> Result<Self> {
        Vector::with_kind(table, field_offset, stride, Strings)
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
