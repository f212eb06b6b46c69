use alloc::vec::Vec;
use core::fmt;

use flatview_table::{Table, TableError};

use crate::traits::{ElementKind, VectorView};
use crate::{Key, Result, Selection, VectorError};

mod iter;

pub use iter::VectorIter;

/// A lazy view of the vector stored in one field of a table.
///
/// The view holds a copy of the table handle, so decoded elements borrow
/// from the buffer alone, never from the view or the caller's `Table`. Only
/// the element count is cached; it is read once at construction. Each access resolves the vector's data address
/// through the table again and decodes a single element; nothing is
/// materialized up front.
///
/// `K` selects how elements are decoded. Use the aliases
/// [`ScalarVector`](crate::ScalarVector), [`ValueVector`](crate::ValueVector),
/// [`StructVector`](crate::StructVector), and
/// [`StringVector`](crate::StringVector) to construct one.
pub struct Vector<'a, K> {
    table: Table<'a>,
    field_offset: usize,
    stride: usize,
    len: usize,
    kind: K,
}

impl<K: Clone> Clone for Vector<'_, K> {
    fn clone(&self) -> Self {
        Vector {
            table: self.table,
            field_offset: self.field_offset,
            stride: self.stride,
            len: self.len,
            kind: self.kind.clone(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Vector<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("field_offset", &self.field_offset)
            .field("stride", &self.stride)
            .field("len", &self.len)
            .field("kind", &self.kind)
            .finish()
    }
}

impl<'a, K: ElementKind<'a>> Vector<'a, K> {
    pub(crate) fn with_kind(
        table: &Table<'a>,
        field_offset: usize,
        stride: usize,
        kind: K,
    ) -> Result<Self> {
        if stride == 0 {
            return Err(VectorError::ZeroStride);
        }
        let len = table.vector_len(field_offset)?;
        tracing::trace!(field_offset, stride, len, "vector view created");
        Ok(Vector {
            table: *table,
            field_offset,
            stride,
            len,
            kind,
        })
    }

    /// Resolve `vtable_slot` and build a view with `new` if the field is
    /// present. Absent fields yield `Ok(None)`.
    pub(crate) fn from_slot_with(
        table: &Table<'a>,
        vtable_slot: usize,
        new: impl FnOnce(&Table<'a>, usize) -> Result<Self>,
    ) -> Result<Option<Self>> {
        match table.offset(vtable_slot)? {
            0 => Ok(None),
            field_offset => new(table, field_offset).map(Some),
        }
    }

    pub fn table(&self) -> &Table<'a> {
        &self.table
    }

    pub fn field_offset(&self) -> usize {
        self.field_offset
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// A fresh iterator positioned before the first element.
    pub fn iter(&self) -> VectorIter<'_, 'a, K> {
        VectorIter::new(self)
    }

    /// Subscript with an index or a slice.
    ///
    /// Unlike [`slice`](VectorView::slice), a single index is never
    /// normalized: negative indices are out of range.
    pub fn lookup(&self, key: impl Into<Key>) -> Result<Selection<K::Element>> {
        match key.into() {
            Key::Index(index) => {
                let checked = usize::try_from(index)
                    .map_err(|_| self.out_of_range(i128::from(index)))?;
                self.get(checked).map(Selection::One)
            }
            Key::Slice(spec) => self.slice(spec).map(Selection::Many),
        }
    }

    /// Decode every element, stopping at the first failure.
    pub fn try_collect(&self) -> Result<Vec<K::Element>> {
        self.iter().collect()
    }

    fn element_addr(&self, index: usize) -> Result<usize> {
        let data = self.table.vector(self.field_offset)?;
        index
            .checked_mul(self.stride)
            .and_then(|delta| data.checked_add(delta))
            .ok_or(VectorError::Table(TableError::OutOfBounds {
                addr: usize::MAX,
                width: self.stride,
                len: self.table.bytes().len(),
            }))
    }

    fn out_of_range(&self, index: i128) -> VectorError {
        tracing::debug!(index, len = self.len, "vector index out of range");
        VectorError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }
}

impl<'a, K: ElementKind<'a>> VectorView<K::Element> for Vector<'a, K> {
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<K::Element> {
        if index >= self.len {
            return Err(self.out_of_range(index as i128));
        }
        let addr = self.element_addr(index)?;
        self.kind.unpack(&self.table, addr)
    }

    fn iter(&self) -> impl Iterator<Item = Result<K::Element>> + '_ {
        VectorIter::new(self)
    }
}

impl<'v, 'a, K: ElementKind<'a>> IntoIterator for &'v Vector<'a, K> {
    type Item = Result<K::Element>;
    type IntoIter = VectorIter<'v, 'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        VectorIter::new(self)
    }
}
