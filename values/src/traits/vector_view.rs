use alloc::vec::Vec;

use crate::{Result, SliceSpec};

/// Random access to an ordered, finite sequence of lazily decoded elements.
pub trait VectorView<E> {
    fn len(&self) -> usize;

    /// Decode the element at `index`.
    ///
    /// Fails with [`VectorError::IndexOutOfRange`](crate::VectorError::IndexOutOfRange)
    /// unless `index < len()`.
    fn get(&self, index: usize) -> Result<E>;

    /// A fresh iterator over every element, in index order.
    fn iter(&self) -> impl Iterator<Item = Result<E>> + '_;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materialize the elements selected by `spec`, in slice order.
    ///
    /// Bounds are normalized against `len()`, never rejected; only a zero
    /// step is an error. Implementors may override this for speed but must
    /// return exactly what this per-index loop returns.
    fn slice(&self, spec: impl Into<SliceSpec>) -> Result<Vec<E>> {
        spec.into()
            .indices(self.len())?
            .map(|index| self.get(index))
            .collect()
    }
}
