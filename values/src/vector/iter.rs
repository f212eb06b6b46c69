use core::iter::FusedIterator;

use crate::traits::{ElementKind, VectorView};
use crate::{Result, Vector};

/// Sequential cursor over a [`Vector`].
///
/// Starts before the first element and only moves forward. Once `len`
/// elements have been produced it is exhausted for good; create a new one
/// with [`Vector::iter`] to traverse again. The length is snapshotted when
/// the iterator is created.
///
/// An element that fails to decode is yielded as `Err` and the cursor still
/// advances past it.
pub struct VectorIter<'v, 'a, K> {
    vector: &'v Vector<'a, K>,
    next_index: usize,
    len: usize,
}

impl<'v, 'a, K: ElementKind<'a>> VectorIter<'v, 'a, K> {
    pub(crate) fn new(vector: &'v Vector<'a, K>) -> Self {
        VectorIter {
            vector,
            next_index: 0,
            len: vector.len(),
        }
    }

    pub fn has_next(&self) -> bool {
        self.next_index < self.len
    }

    /// Produce the next element, or `None` once exhausted.
    pub fn advance(&mut self) -> Option<Result<K::Element>> {
        if !self.has_next() {
            return None;
        }
        let item = self.vector.get(self.next_index);
        self.next_index += 1;
        Some(item)
    }

    /// Index of the element the next call to [`advance`](Self::advance)
    /// returns.
    pub fn position(&self) -> usize {
        self.next_index
    }
}

impl<'a, K: ElementKind<'a>> Iterator for VectorIter<'_, 'a, K> {
    type Item = Result<K::Element>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len.saturating_sub(self.next_index);
        (remaining, Some(remaining))
    }
}

impl<'a, K: ElementKind<'a>> ExactSizeIterator for VectorIter<'_, 'a, K> {}

impl<'a, K: ElementKind<'a>> FusedIterator for VectorIter<'_, 'a, K> {}
