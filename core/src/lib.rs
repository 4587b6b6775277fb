#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Contiguous growable array with exact growth and a pluggable allocation
//! policy.
//!
//! ```
//! use contig_core::{Error, vector};
//!
//! let mut v = vector![9.5, 36.6, -3.25];
//! v.insert(v.begin() + 1, 78.88).unwrap();
//!
//! assert_eq!(v, [9.5, 78.88, 36.6, -3.25]);
//! assert_eq!(v.capacity(), 4);
//! assert_eq!(v.at(4), Err(Error::OutOfRange { index: 4, len: 4 }));
//! ```

extern crate alloc;

pub(crate) use alloc::vec::Vec;

pub mod error;
mod macros;
pub mod policy;
pub mod vector;

pub use allocator_api2::alloc::Global;
pub use contig_cursor::{Cursor, Iter, IterMut};
pub use error::{Error, Result};
pub use policy::AllocPolicy;
pub use vector::{IntoIter, Vector, swap};
