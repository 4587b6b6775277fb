//! Pluggable allocation policy.
//!
//! A [`Vector`](crate::Vector) never talks to an allocator directly. It asks
//! its policy value for raw slots, hands them back when it is done, and
//! constructs and destroys elements through the same value. Every
//! [`allocator_api2`] allocator that is `Clone` is a policy out of the box:
//!
//! ```
//! use bumpalo::Bump;
//! use contig_core::{Global, Vector};
//!
//! let heap: Vector<i32, Global> = Vector::from_elem(3, &7);
//!
//! let arena = Bump::new();
//! let mut in_arena = Vector::new_in(&arena);
//! in_arena.push_back(1).unwrap();
//! assert_eq!(in_arena, [1]);
//! assert_eq!(heap, [7, 7, 7]);
//! ```
//!
//! The policy travels with the container: `clone` clones it, moves carry it,
//! `swap` exchanges it, and copy-assignment (`clone_from`) keeps the
//! destination's own policy.

use core::{alloc::Layout, mem, ptr::NonNull};

use allocator_api2::alloc::Allocator;

use crate::{Error, Result};

/// Allocation and lifetime primitives used by [`Vector`](crate::Vector).
///
/// # Safety
///
/// `allocate::<T>(n)` must return a block valid for reads and writes of `n`
/// values of `T`, suitably aligned, that stays valid until it is passed to
/// `deallocate` with the same `n` on this policy or a clone of it. Requests
/// for zero slots must be accepted.
pub unsafe trait AllocPolicy: Clone {
    /// Obtains uninitialized storage for `slots` values of `T`.
    fn allocate<T>(&self, slots: usize) -> Result<NonNull<T>>;

    /// Releases storage obtained from [`allocate`](Self::allocate).
    ///
    /// # Safety
    ///
    /// `ptr` must come from `allocate::<T>(slots)` on this policy (or a clone)
    /// and must not be used afterwards.
    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, slots: usize);

    /// Constructs `value` in an uninitialized slot.
    ///
    /// # Safety
    ///
    /// `slot` must be valid for writes and hold no live value.
    #[inline]
    unsafe fn construct<T>(&self, slot: *mut T, value: T) {
        unsafe { slot.write(value) }
    }

    /// Destroys the live value in `slot`, leaving it uninitialized.
    ///
    /// # Safety
    ///
    /// `slot` must hold a live value that is not used afterwards.
    #[inline]
    unsafe fn destroy<T>(&self, slot: *mut T) {
        unsafe { slot.drop_in_place() }
    }
}

unsafe impl<A> AllocPolicy for A
where
    A: Allocator + Clone,
{
    fn allocate<T>(&self, slots: usize) -> Result<NonNull<T>> {
        let layout = Layout::array::<T>(slots).map_err(|_| Error::CapacityExceeded {
            requested: slots,
            max: isize::MAX as usize / mem::size_of::<T>().max(1),
        })?;
        match Allocator::allocate(self, layout) {
            Ok(block) => Ok(block.cast()),
            Err(_) => Err(Error::AllocFailed {
                size: layout.size(),
                align: layout.align(),
            }),
        }
    }

    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, slots: usize) {
        // SAFETY: the same layout was formed successfully by `allocate`.
        let layout = unsafe { Layout::array::<T>(slots).unwrap_unchecked() };
        unsafe { Allocator::deallocate(self, ptr.cast(), layout) }
    }
}
