//! Random-access cursors over contiguous buffers.
//!
//! A [`Cursor<T>`] is a position inside a buffer of `T`: one raw address and
//! nothing else. It behaves like a C pointer used as an iterator. Cursors can
//! be stepped, offset, subtracted and compared without touching memory, and
//! only dereferencing them is `unsafe`.
//!
//! ```text
//! buffer:  [ a | b | c | d | . | . ]
//!            ^               ^
//!          begin            end      (end - begin == 4)
//! ```
//!
//! Cursors do not borrow the buffer they point into. That is what lets a
//! container hand out a position and later accept it back in a mutating call
//! (`insert(begin + 1, x)`), but it also means the compiler cannot tell when a
//! cursor goes stale. A cursor is valid until the owning buffer is
//! reallocated or the slot it points at is destroyed.
//!
//! # Example
//!
//! ```
//! use contig_cursor::Cursor;
//!
//! let mut data = [3, 1, 2];
//! let first = Cursor::new(data.as_mut_ptr());
//! let last = first + data.len();
//!
//! assert_eq!(last - first, 3);
//! assert_eq!(unsafe { *(first + 1).get() }, 1);
//!
//! // Slice algorithms run over any cursor pair.
//! unsafe { Cursor::slice_mut(first, last) }.sort();
//! assert_eq!(data, [1, 2, 3]);
//! ```
//!
//! # Gotchas
//!
//! - **No bounds checks**: arithmetic wraps silently. Stay within
//!   `[begin, end]` of the owning buffer before dereferencing.
//! - **Zero-sized types** are rejected at compile time: every position of a
//!   ZST buffer has the same address, so distances would be meaningless.

#![no_std]

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Add, AddAssign, Sub, SubAssign},
    ptr::NonNull,
    slice,
};

mod iter;

pub use iter::{Iter, IterMut};

/// A non-owning random-access position in a contiguous buffer.
///
/// See [crate-level docs](crate) for the validity rules.
pub struct Cursor<T> {
    ptr: *mut T,
}

static_assertions::assert_eq_size!(Cursor<u8>, usize);
static_assertions::assert_eq_size!(Cursor<[u64; 4]>, usize);
static_assertions::assert_impl_all!(Cursor<i32>: Copy, Ord, Send, Sync);

impl<T> Cursor<T> {
    const ELEM_SIZE: usize = {
        assert!(
            mem::size_of::<T>() != 0,
            "cursors over zero-sized types are not supported"
        );
        mem::size_of::<T>()
    };

    /// Creates a cursor at `ptr`.
    #[inline]
    pub const fn new(ptr: *mut T) -> Self {
        let _ = Self::ELEM_SIZE;
        Cursor { ptr }
    }

    /// Creates a cursor from a read-only address.
    ///
    /// Writing through the resulting cursor is undefined behavior unless the
    /// memory is actually mutable.
    #[inline]
    pub const fn from_const(ptr: *const T) -> Self {
        Self::new(ptr as *mut T)
    }

    #[inline]
    pub const fn as_ptr(self) -> *const T {
        self.ptr
    }

    #[inline]
    pub const fn as_mut_ptr(self) -> *mut T {
        self.ptr
    }

    /// Moves to the next element and returns the updated cursor (`++c`).
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        self.ptr = self.ptr.wrapping_add(1);
        self
    }

    /// Moves to the next element and returns the previous position (`c++`).
    #[inline]
    pub fn post_inc(&mut self) -> Self {
        let old = *self;
        self.inc();
        old
    }

    /// Moves to the previous element and returns the updated cursor (`--c`).
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        self.ptr = self.ptr.wrapping_sub(1);
        self
    }

    /// Moves to the previous element and returns the previous position (`c--`).
    #[inline]
    pub fn post_dec(&mut self) -> Self {
        let old = *self;
        self.dec();
        old
    }

    /// Signed number of elements from `origin` to `self`.
    ///
    /// Only meaningful when both cursors point into the same buffer.
    #[inline]
    pub fn distance(self, origin: Self) -> isize {
        let bytes = (self.ptr.addr() as isize).wrapping_sub(origin.ptr.addr() as isize);
        bytes / Self::ELEM_SIZE as isize
    }

    /// Exchanges the positions of two cursors.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
    }

    /// Dereferences the cursor (`*c`).
    ///
    /// # Safety
    ///
    /// The cursor must point at a live element of a buffer that outlives
    /// `'a`, and no mutable reference to that element may exist during `'a`.
    #[inline]
    pub unsafe fn get<'a>(self) -> &'a T {
        // SAFETY: guaranteed by the caller.
        unsafe { &*self.ptr }
    }

    /// Dereferences the cursor mutably.
    ///
    /// # Safety
    ///
    /// As for [`get`](Self::get), and additionally no other reference to the
    /// element may exist during `'a`. The cursor must have been derived from
    /// mutable access to the buffer.
    #[inline]
    pub unsafe fn get_mut<'a>(self) -> &'a mut T {
        // SAFETY: guaranteed by the caller.
        unsafe { &mut *self.ptr }
    }

    /// Dereferences the element `n` positions ahead (`c[n]`).
    ///
    /// # Safety
    ///
    /// Same contract as [`get`](Self::get) for the cursor `self + n`.
    #[inline]
    pub unsafe fn at<'a>(self, n: usize) -> &'a T {
        unsafe { (self + n).get() }
    }

    /// Mutable counterpart of [`at`](Self::at).
    ///
    /// # Safety
    ///
    /// Same contract as [`get_mut`](Self::get_mut) for the cursor `self + n`.
    #[inline]
    pub unsafe fn at_mut<'a>(self, n: usize) -> &'a mut T {
        unsafe { (self + n).get_mut() }
    }

    /// Views the half-open range `[first, last)` as a slice.
    ///
    /// # Safety
    ///
    /// `first <= last`, both cursors point into the same buffer, every
    /// element in between is live for `'a` and none of them is mutably
    /// borrowed during `'a`.
    #[inline]
    pub unsafe fn slice<'a>(first: Self, last: Self) -> &'a [T] {
        debug_assert!(first <= last);
        let len = last.distance(first) as usize;
        // SAFETY: guaranteed by the caller.
        unsafe { slice::from_raw_parts(first.ptr, len) }
    }

    /// Views the half-open range `[first, last)` as a mutable slice.
    ///
    /// # Safety
    ///
    /// As for [`slice`](Self::slice), and the range must not be aliased by any
    /// other reference during `'a`.
    #[inline]
    pub unsafe fn slice_mut<'a>(first: Self, last: Self) -> &'a mut [T] {
        debug_assert!(first <= last);
        let len = last.distance(first) as usize;
        // SAFETY: guaranteed by the caller.
        unsafe { slice::from_raw_parts_mut(first.ptr, len) }
    }

    /// Iterates the half-open range `[first, last)`.
    ///
    /// # Safety
    ///
    /// Same contract as [`slice`](Self::slice).
    #[inline]
    pub unsafe fn range<'a>(first: Self, last: Self) -> Iter<'a, T> {
        debug_assert!(first <= last);
        Iter::new(first, last)
    }

    /// Iterates the half-open range `[first, last)` mutably.
    ///
    /// # Safety
    ///
    /// Same contract as [`slice_mut`](Self::slice_mut).
    #[inline]
    pub unsafe fn range_mut<'a>(first: Self, last: Self) -> IterMut<'a, T> {
        debug_assert!(first <= last);
        IterMut::new(first, last)
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Cursor<T> {}

impl<T> From<*mut T> for Cursor<T> {
    fn from(ptr: *mut T) -> Self {
        Cursor::new(ptr)
    }
}

impl<T> From<NonNull<T>> for Cursor<T> {
    fn from(ptr: NonNull<T>) -> Self {
        Cursor::new(ptr.as_ptr())
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.ptr).finish()
    }
}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}
impl<T> Eq for Cursor<T> {}

impl<T> PartialOrd for Cursor<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Address order is element order because the buffer is contiguous.
impl<T> Ord for Cursor<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ptr.addr().cmp(&other.ptr.addr())
    }
}

impl<T> Hash for Cursor<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ptr.addr().hash(state);
    }
}

impl<T> AddAssign<usize> for Cursor<T> {
    #[inline]
    fn add_assign(&mut self, count: usize) {
        self.ptr = self.ptr.wrapping_add(count);
    }
}

impl<T> SubAssign<usize> for Cursor<T> {
    #[inline]
    fn sub_assign(&mut self, count: usize) {
        self.ptr = self.ptr.wrapping_sub(count);
    }
}

impl<T> Add<usize> for Cursor<T> {
    type Output = Cursor<T>;

    #[inline]
    fn add(mut self, count: usize) -> Cursor<T> {
        self += count;
        self
    }
}

impl<T> Add<Cursor<T>> for usize {
    type Output = Cursor<T>;

    #[inline]
    fn add(self, cursor: Cursor<T>) -> Cursor<T> {
        cursor + self
    }
}

impl<T> Sub<usize> for Cursor<T> {
    type Output = Cursor<T>;

    #[inline]
    fn sub(mut self, count: usize) -> Cursor<T> {
        self -= count;
        self
    }
}

impl<T> Sub for Cursor<T> {
    type Output = isize;

    #[inline]
    fn sub(self, origin: Cursor<T>) -> isize {
        self.distance(origin)
    }
}

// Same marker semantics as a shared reference: moving a cursor across threads
// is only as dangerous as sharing `&T`, and every write through it is unsafe.
unsafe impl<T: Sync> Send for Cursor<T> {}
unsafe impl<T: Sync> Sync for Cursor<T> {}
