//! Sequence-specific error types.

use std::error::Error;
use std::fmt;

/// Errors returned by the checked operations of a [`SeqVec`].
///
/// Only two conditions are checked: removing or reading an element from
/// an empty sequence, and a checked index past the live prefix. The
/// unchecked paths (`Index`, cursor arithmetic) panic instead of
/// returning these.
///
/// [`SeqVec`]: crate::seq::SeqVec
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeqError {
    /// `pop()`, `front()`, or `back()` on an empty sequence.
    Underflow,
    /// A checked index at or past the end of the live prefix.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
}

impl fmt::Display for SeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underflow => {
                write!(f, "sequence underflow: the sequence is empty")
            }
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for sequence of length {len}")
            }
        }
    }
}

impl Error for SeqError {}
