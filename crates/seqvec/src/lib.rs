//! A growable, contiguously stored sequence container.
//!
//! [`SeqVec`] owns one contiguous buffer, tracks a logical length
//! distinct from its allocated capacity, and offers random access,
//! amortized-constant append (1.5x + 1 growth), and mid-sequence
//! insertion/removal with shift semantics. [`Cursor`] is its companion
//! position handle: a bidirectional, arithmetic-capable offset into the
//! sequence's storage, invalidated by any reallocation or shift.
//!
//! # Quick start
//!
//! ```rust
//! use seqvec::SeqVec;
//!
//! let mut seq = SeqVec::from([1, 2, 3]);
//!
//! let pos = seq.insert(seq.begin() + 1, 9);
//! assert_eq!(seq.as_slice(), &[1, 9, 2, 3]);
//!
//! seq.erase(pos);
//! assert_eq!(seq.as_slice(), &[1, 2, 3]);
//!
//! seq.push(4);
//! assert_eq!(seq.pop(), Ok(4));
//! ```
//!
//! # Checked and unchecked paths
//!
//! Two conditions are checked and surface as [`SeqError`]: underflow
//! (`pop`/`front`/`back` on an empty sequence) and out-of-range checked
//! indexing (`at`). The fast paths — `Index`, cursor arithmetic, cursor
//! indexing — are unchecked in the sense that misuse is a caller bug;
//! it surfaces as a deterministic panic, never as memory unsafety.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod error;
pub mod iter;
pub mod seq;

// Public re-exports for the primary API surface.
pub use cursor::Cursor;
pub use error::SeqError;
pub use seq::SeqVec;
