//! Contig - contiguous growable arrays with exact growth
//!
//! # Overview
//!
//! [`Vector`] is a heap-backed sequence that keeps its elements in one
//! contiguous block, like `Vec`, with three differences that matter to
//! callers:
//!
//! - **Exact growth**: an operation that runs out of room reallocates to
//!   exactly the size it needs. `capacity() == len()` right after growth.
//! - **Allocation policy**: storage comes from an [`AllocPolicy`] value
//!   injected at construction. Any `allocator_api2` allocator works,
//!   including `&bumpalo::Bump`.
//! - **Cursors**: positions are random-access [`Cursor`]s that can be
//!   stepped, offset, compared and subtracted.
//!
//! # Quick Start
//!
//! ```
//! use contig::{Error, Vector, vector};
//!
//! let mut v = vector![9, -8, 0, 101, 1];
//! assert_eq!(v.capacity(), 5);
//!
//! // Positions are cursors; insertion returns the new element's position.
//! let pos = v.insert(v.begin() + 2, 42).unwrap();
//! assert_eq!(pos - v.begin(), 2);
//! assert_eq!(v.capacity(), 6);
//!
//! // Checked access reports the index and length.
//! assert_eq!(v.at(10), Err(Error::OutOfRange { index: 10, len: 6 }));
//!
//! // Everything a slice can do is available through deref.
//! v.sort();
//! assert_eq!(v, [-8, 0, 1, 9, 42, 101]);
//! ```
//!
//! # Arenas
//!
//! ```
//! use bumpalo::Bump;
//! use contig::Vector;
//!
//! let arena = Bump::new();
//! let mut words = Vector::new_in(&arena);
//! words.reserve(3).unwrap();
//! for w in ["a", "b", "c"] {
//!     words.push_back(w).unwrap();
//! }
//! assert_eq!(words.capacity(), 3);
//! ```
//!
//! # Fallible growth
//!
//! Growing operations return [`Result`]. Asking for more than
//! [`Vector::max_size`] elements is [`Error::CapacityExceeded`]; a policy
//! that refuses a block is [`Error::AllocFailed`]. In both cases the vector
//! is left exactly as it was.

#![cfg_attr(not(feature = "std"), no_std)]

pub use contig_core::{
    AllocPolicy, Error, Global, IntoIter, Iter, IterMut, Result, Vector, policy, swap, vector,
};
pub use contig_cursor::Cursor;
