//! Position handles into a sequence's storage.
//!
//! A [`Cursor`] is a weak, position-only view: it records an offset into
//! some [`SeqVec`]'s storage but borrows nothing and owns nothing. It is
//! obtained from [`SeqVec::begin`] and [`SeqVec::end`] and handed back to
//! the container for dereferencing or mutation.
//!
//! Cursors are not validated against any container and carry no
//! generation tag. A cursor becomes stale as soon as the originating
//! sequence reallocates, shifts elements, or is dropped; using a stale
//! cursor is the caller's responsibility. Misuse surfaces as a
//! deterministic panic or `None` from the checked accessors, never as
//! memory unsafety.
//!
//! [`SeqVec`]: crate::seq::SeqVec
//! [`SeqVec::begin`]: crate::seq::SeqVec::begin
//! [`SeqVec::end`]: crate::seq::SeqVec::end

use std::fmt;
use std::ops::{Add, Sub};

/// A position within a sequence's storage.
///
/// Supports bidirectional stepping ([`next`]/[`prev`]), ordering by
/// position, offset arithmetic in both operand orders, and an
/// always-non-negative [`distance`] between two cursors.
///
/// [`next`]: Cursor::next
/// [`prev`]: Cursor::prev
/// [`distance`]: Cursor::distance
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    /// Create a cursor at the given offset.
    pub(crate) fn at(index: usize) -> Self {
        Self { index }
    }

    /// The offset this cursor records.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The cursor one position forward.
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            index: self.index + 1,
        }
    }

    /// The cursor one position backward.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at position 0.
    #[must_use]
    pub fn prev(self) -> Self {
        let index = self
            .index
            .checked_sub(1)
            .expect("cursor stepped before position 0");

        Self { index }
    }

    /// Distance between two cursors, regardless of operand order.
    ///
    /// This is a distance, not a signed difference: `a.distance(b)` and
    /// `b.distance(a)` are equal. Callers that need direction must
    /// compare the cursors first.
    #[must_use]
    pub fn distance(self, other: Self) -> usize {
        self.index.abs_diff(other.index)
    }
}

impl Add<isize> for Cursor {
    type Output = Cursor;

    /// Offset the cursor by a signed amount.
    ///
    /// # Panics
    ///
    /// Panics if the resulting position would be negative.
    fn add(self, rhs: isize) -> Cursor {
        let index = self
            .index
            .checked_add_signed(rhs)
            .expect("cursor offset before position 0");

        Cursor { index }
    }
}

impl Add<Cursor> for isize {
    type Output = Cursor;

    /// Offset the cursor by a signed amount, offset-first operand order.
    ///
    /// # Panics
    ///
    /// Panics if the resulting position would be negative.
    fn add(self, rhs: Cursor) -> Cursor {
        rhs + self
    }
}

impl Sub<isize> for Cursor {
    type Output = Cursor;

    /// Offset the cursor backward by a signed amount.
    ///
    /// # Panics
    ///
    /// Panics if the resulting position would be negative.
    fn sub(self, rhs: isize) -> Cursor {
        let index = self
            .index
            .checked_add_signed(rhs.checked_neg().expect("cursor offset overflow"))
            .expect("cursor offset before position 0");

        Cursor { index }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor({})", self.index)
    }
}
