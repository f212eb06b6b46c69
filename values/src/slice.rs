//! Slice and subscript keys for vector views.
//!
//! [`SliceSpec`] follows the usual sequence-slicing rules: bounds may be
//! negative (counted from the end), missing bounds default to the ends of the
//! sequence, out-of-range bounds are clamped rather than rejected, and a
//! negative step walks backwards.

use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::{Result, VectorError};

/// `start:stop:step`, each part optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliceSpec {
    pub start: Option<i64>,
    pub stop: Option<i64>,
    pub step: Option<i64>,
}

impl SliceSpec {
    pub const fn new(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Self {
        SliceSpec { start, stop, step }
    }

    /// `::`, every element in order.
    pub const fn full() -> Self {
        SliceSpec::new(None, None, None)
    }

    pub const fn with_step(self, step: i64) -> Self {
        SliceSpec {
            step: Some(step),
            ..self
        }
    }

    /// Resolve this slice against a sequence of `len` elements.
    ///
    /// Fails only when the step is zero.
    pub fn indices(&self, len: usize) -> Result<SliceIndices> {
        let step = i128::from(self.step.unwrap_or(1));
        if step == 0 {
            return Err(VectorError::ZeroSliceStep);
        }
        let len = len as i128;
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |bound: Option<i64>, default: i128| match bound.map(i128::from) {
            None => default,
            Some(b) if b < 0 => (b + len).max(lower),
            Some(b) => b.min(upper),
        };
        let start = clamp(self.start, if step < 0 { upper } else { lower });
        let stop = clamp(self.stop, if step < 0 { lower } else { upper });
        Ok(SliceIndices {
            next: start,
            stop,
            step,
        })
    }
}

fn bound(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

impl From<RangeFull> for SliceSpec {
    fn from(_: RangeFull) -> Self {
        SliceSpec::full()
    }
}

impl From<Range<usize>> for SliceSpec {
    fn from(range: Range<usize>) -> Self {
        SliceSpec::new(Some(bound(range.start)), Some(bound(range.end)), None)
    }
}

impl From<RangeFrom<usize>> for SliceSpec {
    fn from(range: RangeFrom<usize>) -> Self {
        SliceSpec::new(Some(bound(range.start)), None, None)
    }
}

impl From<RangeTo<usize>> for SliceSpec {
    fn from(range: RangeTo<usize>) -> Self {
        SliceSpec::new(None, Some(bound(range.end)), None)
    }
}

impl From<RangeInclusive<usize>> for SliceSpec {
    fn from(range: RangeInclusive<usize>) -> Self {
        let (start, end) = range.into_inner();
        SliceSpec::new(Some(bound(start)), Some(bound(end).saturating_add(1)), None)
    }
}

impl From<RangeToInclusive<usize>> for SliceSpec {
    fn from(range: RangeToInclusive<usize>) -> Self {
        SliceSpec::new(None, Some(bound(range.end).saturating_add(1)), None)
    }
}

/// The element positions selected by a resolved [`SliceSpec`].
#[derive(Debug, Clone)]
pub struct SliceIndices {
    next: i128,
    stop: i128,
    step: i128,
}

impl SliceIndices {
    fn remaining(&self) -> usize {
        let (span, step) = if self.step > 0 {
            (self.stop - self.next, self.step)
        } else {
            (self.next - self.stop, -self.step)
        };
        if span <= 0 {
            0
        } else {
            ((span - 1) / step + 1) as usize
        }
    }
}

impl Iterator for SliceIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining() == 0 {
            return None;
        }
        let index = self.next as usize;
        self.next += self.step;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for SliceIndices {}

impl FusedIterator for SliceIndices {}

/// A subscript: one position or a slice.
///
/// Only integers and slice-like values convert into a `Key`; anything else
/// is rejected by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Index(i64),
    Slice(SliceSpec),
}

macro_rules! impl_index_key {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Key {
                fn from(index: $ty) -> Self {
                    Key::Index(i64::from(index))
                }
            }
        )*
    };
}

impl_index_key!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(bound(index))
    }
}

impl From<isize> for Key {
    fn from(index: isize) -> Self {
        Key::Index(index as i64)
    }
}

macro_rules! impl_slice_key {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Key {
                fn from(spec: $ty) -> Self {
                    Key::Slice(spec.into())
                }
            }
        )*
    };
}

impl_slice_key!(
    SliceSpec,
    RangeFull,
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeInclusive<usize>,
    RangeToInclusive<usize>
);

/// The result of a subscript: one element for an index, a list for a slice.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<E> {
    One(E),
    Many(Vec<E>),
}

impl<E> Selection<E> {
    pub fn one(self) -> Option<E> {
        match self {
            Selection::One(e) => Some(e),
            Selection::Many(_) => None,
        }
    }

    pub fn many(self) -> Option<Vec<E>> {
        match self {
            Selection::One(_) => None,
            Selection::Many(v) => Some(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolve(spec: impl Into<SliceSpec>, len: usize) -> Vec<usize> {
        spec.into().indices(len).unwrap().collect()
    }

    #[test]
    fn test_forward_ranges() {
        assert_eq!(resolve(.., 4), vec![0, 1, 2, 3]);
        assert_eq!(resolve(1.., 3), vec![1, 2]);
        assert_eq!(resolve(..2, 3), vec![0, 1]);
        assert_eq!(resolve(1..=2, 5), vec![1, 2]);
        assert_eq!(resolve(..=0, 5), vec![0]);
    }

    #[test]
    fn test_bounds_are_clamped() {
        assert_eq!(resolve(2..100, 4), vec![2, 3]);
        assert_eq!(resolve(10.., 4), Vec::<usize>::new());
        assert_eq!(resolve(3..1, 4), Vec::<usize>::new());
        assert_eq!(resolve(SliceSpec::new(Some(-100), Some(2), None), 4), vec![0, 1]);
    }

    #[test]
    fn test_negative_bounds() {
        assert_eq!(resolve(SliceSpec::new(Some(-2), None, None), 5), vec![3, 4]);
        assert_eq!(resolve(SliceSpec::new(None, Some(-1), None), 3), vec![0, 1]);
    }

    #[test]
    fn test_steps() {
        assert_eq!(resolve(SliceSpec::full().with_step(2), 5), vec![0, 2, 4]);
        assert_eq!(resolve(SliceSpec::full().with_step(-1), 3), vec![2, 1, 0]);
        assert_eq!(
            resolve(SliceSpec::new(Some(4), Some(0), Some(-2)), 6),
            vec![4, 2]
        );
        assert_eq!(
            resolve(SliceSpec::new(Some(100), None, Some(-3)), 7),
            vec![6, 3, 0]
        );
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(resolve(.., 0), Vec::<usize>::new());
        assert_eq!(resolve(SliceSpec::full().with_step(-1), 0), Vec::<usize>::new());
    }

    #[test]
    fn test_zero_step() {
        let err = SliceSpec::full().with_step(0).indices(3).unwrap_err();
        assert_eq!(err, VectorError::ZeroSliceStep);
    }

    #[test]
    fn test_exact_size() {
        let indices = SliceSpec::new(Some(1), Some(8), Some(3)).indices(10).unwrap();
        assert_eq!(indices.len(), 3);
        assert_eq!(indices.collect::<Vec<_>>(), vec![1, 4, 7]);
    }

    #[test]
    fn test_key_conversions() {
        assert_eq!(Key::from(3usize), Key::Index(3));
        assert_eq!(Key::from(-1i32), Key::Index(-1));
        assert_eq!(Key::from(1..), Key::Slice(SliceSpec::new(Some(1), None, None)));
        assert_eq!(Key::from(..), Key::Slice(SliceSpec::full()));
    }
}
