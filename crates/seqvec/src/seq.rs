//! The growable contiguous sequence container.
//!
//! [`SeqVec`] owns a single contiguous buffer allocated to full capacity.
//! A watermark (`len`) separates the live prefix `[0, len)` from the
//! spare suffix `[len, capacity)`; spare slots always hold `T::default()`
//! and are never read as meaningful data.
//!
//! # Growth policy
//!
//! When an append or insert would exceed capacity, the buffer is
//! reallocated to `capacity + capacity/2 + 1` (roughly 1.5x plus one, so
//! growth happens even from zero). This amortizes a run of N appends to
//! O(1) each, with O(log N) reallocations total.
//!
//! # Invalidation
//!
//! Every reallocation (growth, [`reserve`], [`shrink_to_fit`],
//! assignment) and every element shift ([`insert`], [`erase`])
//! invalidates previously obtained [`Cursor`]s and slices. This is a
//! contract, not an accident: cursors are plain positions, and a stale
//! one silently points at whatever occupies that position now. Re-derive
//! cursors from [`begin`]/[`end`] after any structural change.
//!
//! # Thread safety
//!
//! `SeqVec` is not internally synchronized. All mutation takes
//! `&mut self`; sharing a sequence across threads requires external
//! synchronization, as with any `Send + Sync` type mutated through a
//! lock.
//!
//! [`reserve`]: SeqVec::reserve
//! [`shrink_to_fit`]: SeqVec::shrink_to_fit
//! [`insert`]: SeqVec::insert
//! [`erase`]: SeqVec::erase
//! [`begin`]: SeqVec::begin
//! [`end`]: SeqVec::end

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use crate::cursor::Cursor;
use crate::error::SeqError;

/// A growable, contiguously stored sequence.
///
/// Elements must be default-constructible and cloneable: spare capacity
/// is kept default-filled, and reallocation clones the live prefix into
/// the new buffer.
///
/// # Example
///
/// ```rust
/// use seqvec::SeqVec;
///
/// let mut seq = SeqVec::from([1, 2, 3]);
/// seq.push(4);
///
/// assert_eq!(seq.len(), 4);
/// assert_eq!(seq[3], 4);
/// ```
pub struct SeqVec<T> {
    /// Backing storage, allocated to full capacity. Slots at and past
    /// `len` hold `T::default()`.
    pub(crate) buf: Box<[T]>,
    /// Number of live elements.
    pub(crate) len: usize,
}

impl<T: Clone + Default> SeqVec<T> {
    /// Create a sequence with `capacity` default-valued elements.
    ///
    /// Note that the new sequence is **pre-filled**, not empty:
    /// `len() == capacity()` immediately after construction. This is a
    /// deliberate contract and differs from the usual `with_capacity`
    /// convention.
    ///
    /// ```rust
    /// use seqvec::SeqVec;
    ///
    /// let seq = SeqVec::<u32>::new(3);
    /// assert_eq!(seq.len(), 3);
    /// assert_eq!(seq.as_slice(), &[0, 0, 0]);
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: Self::fresh_slots(capacity),
            len: capacity,
        }
    }

    /// Allocate `count` default-valued slots.
    fn fresh_slots(count: usize) -> Box<[T]> {
        (0..count).map(|_| T::default()).collect()
    }

    /// The capacity the growth policy reallocates to on overflow.
    fn grown_capacity(&self) -> usize {
        self.capacity() + self.capacity() / 2 + 1
    }

    /// Reallocate to exactly `new_cap` slots if that exceeds the current
    /// capacity; otherwise do nothing. Never shrinks.
    ///
    /// The live prefix is cloned into the new buffer; all previously
    /// obtained cursors and slices are invalidated.
    pub fn reserve(&mut self, new_cap: usize) {
        if new_cap > self.capacity() {
            let mut next = Self::fresh_slots(new_cap);
            next[..self.len].clone_from_slice(&self.buf[..self.len]);
            self.buf = next;
        }
    }

    /// Reallocate to exactly `len()` slots, discarding spare capacity.
    ///
    /// All previously obtained cursors and slices are invalidated.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() != self.len {
            let mut next = Self::fresh_slots(self.len);
            next.clone_from_slice(&self.buf[..self.len]);
            self.buf = next;
        }
    }

    /// Append `value`, growing the buffer first if the sequence is full.
    pub fn push(&mut self, value: T) {
        if self.is_full() {
            self.reserve(self.grown_capacity());
        }

        self.buf[self.len] = value;
        self.len += 1;
    }

    /// Remove and return the last element, resetting its slot to
    /// `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::Underflow`] if the sequence is empty.
    pub fn pop(&mut self) -> Result<T, SeqError> {
        if self.is_empty() {
            return Err(SeqError::Underflow);
        }

        self.len -= 1;

        Ok(mem::take(&mut self.buf[self.len]))
    }

    /// Insert `value` before `pos`, shifting `[pos, len)` one slot
    /// toward the tail. Returns a cursor to the inserted element.
    ///
    /// Grows the buffer first when the sequence is full; the shift runs
    /// over the fresh buffer using the position index, never a
    /// pre-growth cursor.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past `end()`.
    pub fn insert(&mut self, pos: Cursor, value: T) -> Cursor {
        let at = pos.index();

        if self.is_full() {
            self.reserve(self.grown_capacity());
        }

        // Tail-first shift: the default slot at `len` rotates down to
        // `at`, every live element in between moves up one.
        self.buf[at..=self.len].rotate_right(1);
        self.buf[at] = value;
        self.len += 1;

        Cursor::at(at)
    }

    /// Insert all of `values` before `pos`, shifting `[pos, len)` by
    /// `values.len()` slots toward the tail. Returns a cursor to the
    /// first inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past `end()`.
    pub fn insert_slice(&mut self, pos: Cursor, values: &[T]) -> Cursor {
        let at = pos.index();
        // Shift distance is fixed before the length changes.
        let shift = values.len();
        let new_len = self.len + shift;

        if new_len > self.capacity() {
            self.reserve(new_len + self.capacity() / 2 + 1);
        }

        assert!(at <= self.len, "insert position past end()");
        self.buf[at..new_len].rotate_right(shift);
        self.buf[at..at + shift].clone_from_slice(values);
        self.len = new_len;

        Cursor::at(at)
    }

    /// Remove the element at `pos`, shifting the trailing elements one
    /// slot toward the head and resetting the freed tail slot to
    /// `T::default()`.
    ///
    /// Returns a cursor to the element that now occupies the erased
    /// position, which equals `end()` when the erasure reached the tail.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is at or past `end()`.
    pub fn erase(&mut self, pos: Cursor) -> Cursor {
        let at = pos.index();

        assert!(at < self.len, "erase position at or past end()");
        self.buf[at..self.len].rotate_left(1);
        self.len -= 1;
        self.buf[self.len] = T::default();

        Cursor::at(at)
    }

    /// Remove the elements in `[first, last)`, shifting the trailing
    /// elements over the gap and resetting the freed tail slots to
    /// `T::default()`.
    ///
    /// Returns a cursor to the element that now occupies the position of
    /// the first erased element (or `end()` if the erasure reached the
    /// tail).
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or extends past `end()`.
    pub fn erase_range(&mut self, first: Cursor, last: Cursor) -> Cursor {
        let at = first.index();
        // Removal count is fixed before the length changes.
        assert!(first <= last, "inverted erase range");
        let removed = last.index() - at;
        assert!(last.index() <= self.len, "erase range past end()");

        let new_len = self.len - removed;
        self.buf[at..self.len].rotate_left(removed);
        for slot in &mut self.buf[new_len..self.len] {
            *slot = T::default();
        }
        self.len = new_len;

        Cursor::at(at)
    }

    /// Replace the contents with `count` clones of `value`.
    ///
    /// Grows via [`reserve`] when `count` exceeds the capacity;
    /// otherwise reuses the buffer and resets any now-excess trailing
    /// slots to `T::default()`.
    ///
    /// [`reserve`]: SeqVec::reserve
    pub fn assign(&mut self, count: usize, value: &T) {
        if count > self.capacity() {
            self.reserve(count);
        }

        for slot in &mut self.buf[..count] {
            *slot = value.clone();
        }
        if count < self.len {
            for slot in &mut self.buf[count..self.len] {
                *slot = T::default();
            }
        }
        self.len = count;
    }

    /// Replace the contents with clones of `values`, in order.
    ///
    /// Grows via [`reserve`] when the slice is longer than the capacity;
    /// otherwise reuses the buffer and resets any now-excess trailing
    /// slots to `T::default()`.
    ///
    /// [`reserve`]: SeqVec::reserve
    pub fn assign_from(&mut self, values: &[T]) {
        let count = values.len();

        if count > self.capacity() {
            self.reserve(count);
        }

        self.buf[..count].clone_from_slice(values);
        if count < self.len {
            for slot in &mut self.buf[count..self.len] {
                *slot = T::default();
            }
        }
        self.len = count;
    }

    /// Reset every live slot to `T::default()` and set the length to
    /// zero. Capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in &mut self.buf[..self.len] {
            *slot = T::default();
        }
        self.len = 0;
    }
}

impl<T> SeqVec<T> {
    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Total allocated slots, always `>= len()`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Whether the sequence holds no live elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the next append would force a reallocation.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Cursor at the first element.
    pub fn begin(&self) -> Cursor {
        Cursor::at(0)
    }

    /// Cursor one past the last live element.
    pub fn end(&self) -> Cursor {
        Cursor::at(self.len)
    }

    /// The live prefix as a slice, valid until the next mutation.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }

    /// The live prefix as a mutable slice, valid until the next
    /// structural mutation.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf[..self.len]
    }

    /// Reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::Underflow`] if the sequence is empty. Both
    /// the shared and mutable accessors are checked.
    pub fn front(&self) -> Result<&T, SeqError> {
        self.as_slice().first().ok_or(SeqError::Underflow)
    }

    /// Mutable reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::Underflow`] if the sequence is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, SeqError> {
        self.as_mut_slice().first_mut().ok_or(SeqError::Underflow)
    }

    /// Reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::Underflow`] if the sequence is empty.
    pub fn back(&self) -> Result<&T, SeqError> {
        self.as_slice().last().ok_or(SeqError::Underflow)
    }

    /// Mutable reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::Underflow`] if the sequence is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, SeqError> {
        self.as_mut_slice().last_mut().ok_or(SeqError::Underflow)
    }

    /// Reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::OutOfRange`] when `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, SeqError> {
        let len = self.len;

        self.as_slice()
            .get(index)
            .ok_or(SeqError::OutOfRange { index, len })
    }

    /// Mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::OutOfRange`] when `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SeqError> {
        let len = self.len;

        self.as_mut_slice()
            .get_mut(index)
            .ok_or(SeqError::OutOfRange { index, len })
    }

    /// Dereference a cursor, returning `None` when it points at or past
    /// `end()`.
    #[must_use]
    pub fn get(&self, pos: Cursor) -> Option<&T> {
        self.as_slice().get(pos.index())
    }

    /// Mutably dereference a cursor, returning `None` when it points at
    /// or past `end()`.
    #[must_use]
    pub fn get_mut(&mut self, pos: Cursor) -> Option<&mut T> {
        self.as_mut_slice().get_mut(pos.index())
    }

    /// Exchange the storage, length, and capacity of two sequences in
    /// constant time, with no element-wise work.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }
}

impl<T: Clone + Default> Default for SeqVec<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: Clone + Default> Clone for SeqVec<T> {
    /// Deep copy sized to the source's capacity, spare slots included.
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            len: self.len,
        }
    }

    /// Replace the contents entirely, reallocating to the source's
    /// length when the capacity differs (after assignment,
    /// `len() == capacity() == source.len()`).
    fn clone_from(&mut self, source: &Self) {
        if self.capacity() != source.len {
            self.buf = Self::fresh_slots(source.len);
        }
        self.buf[..source.len].clone_from_slice(source.as_slice());
        self.len = source.len;
    }
}

impl<T: Clone + Default> From<&[T]> for SeqVec<T> {
    fn from(values: &[T]) -> Self {
        Self {
            buf: values.to_vec().into_boxed_slice(),
            len: values.len(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SeqVec<T> {
    fn from(values: [T; N]) -> Self {
        let buf: Box<[T]> = Box::new(values);

        Self { buf, len: N }
    }
}

impl<T> FromIterator<T> for SeqVec<T> {
    /// Build a sequence from a range, allocating exactly the range's
    /// length.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let buf: Box<[T]> = iter.into_iter().collect();
        let len = buf.len();

        Self { buf, len }
    }
}

impl<T: Clone + Default> Extend<T> for SeqVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: PartialEq> PartialEq for SeqVec<T> {
    /// Equal iff both sequences have the same length and every pair of
    /// elements at the same index compares equal. Spare capacity does
    /// not participate.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SeqVec<T> {}

impl<T> Index<usize> for SeqVec<T> {
    type Output = T;

    /// Unchecked fast path.
    ///
    /// # Panics
    ///
    /// Panics when `index >= len()`. Use [`SeqVec::at`] for a checked
    /// `Result`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for SeqVec<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> Index<Cursor> for SeqVec<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics when the cursor points at or past `end()`, including
    /// cursors left stale by a reallocation or shift.
    #[inline]
    fn index(&self, pos: Cursor) -> &Self::Output {
        self.get(pos).expect("stale or out-of-range cursor")
    }
}

impl<T> IndexMut<Cursor> for SeqVec<T> {
    #[inline]
    fn index_mut(&mut self, pos: Cursor) -> &mut Self::Output {
        self.get_mut(pos).expect("stale or out-of-range cursor")
    }
}

impl<T: fmt::Debug> fmt::Debug for SeqVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SeqVec<T> {
    /// Diagnostic rendering of the **entire** buffer, spare slots
    /// included, with a `|` marking the live/spare boundary:
    ///
    /// ```text
    /// { 1 2 3 | 0 0 }, len=3, capacity=5
    /// ```
    ///
    /// No boundary is printed when `len() == capacity()`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for (i, slot) in self.buf.iter().enumerate() {
            if i == self.len {
                write!(f, "| ")?;
            }
            write!(f, "{slot} ")?;
        }
        write!(f, "}}, len={}, capacity={}", self.len, self.capacity())
    }
}
