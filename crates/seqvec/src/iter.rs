//! Iterators over the live prefix of a [`SeqVec`].
//!
//! These are the idiomatic companions to the cursor API: thin wrappers
//! around slice iterators, bounded to `[0, len)`. Spare capacity is
//! never yielded. Because they borrow the sequence, the compiler rules
//! out the stale-cursor hazard entirely for the duration of iteration.

use std::iter::FusedIterator;
use std::slice;
use std::vec;

use crate::seq::SeqVec;

/// Immutable iterator over a sequence's live elements.
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

/// Mutable iterator over a sequence's live elements.
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
}

/// Owning iterator over a sequence's live elements.
///
/// Spare slots are dropped when the sequence is consumed; only the live
/// prefix is yielded.
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

macro_rules! impl_borrowed_iterator {
    ($name:ident, $item:ty) => {
        impl<'a, T> Iterator for $name<'a, T> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next()
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }

            #[inline]
            fn count(self) -> usize {
                self.inner.count()
            }
        }

        impl<T> DoubleEndedIterator for $name<'_, T> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back()
            }
        }

        impl<T> ExactSizeIterator for $name<'_, T> {}

        impl<T> FusedIterator for $name<'_, T> {}
    };
}

impl_borrowed_iterator!(Iter, &'a T);
impl_borrowed_iterator!(IterMut, &'a mut T);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> SeqVec<T> {
    /// Returns an iterator over the live elements.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_slice().iter(),
        }
    }

    /// Returns a mutable iterator over the live elements.
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.as_mut_slice().iter_mut(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SeqVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SeqVec<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for SeqVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let SeqVec { buf, len } = self;
        let mut values = buf.into_vec();
        values.truncate(len);

        IntoIter {
            inner: values.into_iter(),
        }
    }
}
