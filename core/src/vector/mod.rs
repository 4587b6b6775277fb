//! Heap-backed contiguous sequence with exact growth.
//!
//! [`Vector`] keeps `len` live elements at the front of a buffer of `cap`
//! slots obtained from its [`AllocPolicy`]. Growth never over-allocates: an
//! operation that needs more room reallocates to exactly the size it needs,
//! so `capacity() == len()` right after any growing operation. Callers that
//! append in a loop should [`reserve`](Vector::reserve) first.
//!
//! ```text
//! ptr ──▶ [ e0 | e1 | e2 | ·· | ·· ]
//!           └──── len ───┘
//!           └──────── cap ────────┘
//! ```
//!
//! Positions are [`Cursor`]s. They do not borrow the vector, so one can be
//! taken from `begin()` and handed straight back to `insert`, but every
//! reallocation invalidates all of them.

use core::{
    alloc::Layout,
    marker::PhantomData,
    mem,
    ptr::{self, NonNull},
    slice,
};

use alloc::alloc::handle_alloc_error;
use allocator_api2::alloc::Global;
use contig_cursor::{Cursor, Iter, IterMut};

use crate::{Error, Result, policy::AllocPolicy};

mod into_iter;
mod mutation;
mod traits;

pub use into_iter::IntoIter;

/// A contiguous growable array with an injected allocation policy.
pub struct Vector<T, A: AllocPolicy = Global> {
    ptr: NonNull<T>,
    len: usize,
    cap: usize,
    alloc: A,
    phantom: PhantomData<T>,
}

static_assertions::assert_eq_size!(Vector<u8>, [usize; 3]);

unsafe impl<T: Send, A: AllocPolicy + Send> Send for Vector<T, A> {}
unsafe impl<T: Sync, A: AllocPolicy + Sync> Sync for Vector<T, A> {}

impl<T> Vector<T> {
    /// Creates an empty vector on the global heap.
    pub fn new() -> Self {
        Self::new_in(Global)
    }

    /// Creates a vector of `count` clones of `value`.
    pub fn from_elem(count: usize, value: &T) -> Self
    where
        T: Clone,
    {
        Self::from_elem_in(count, value, Global)
    }

    /// Creates a vector of `count` default values.
    pub fn with_len(count: usize) -> Self
    where
        T: Default,
    {
        Self::with_len_in(count, Global)
    }
}

impl<T, A: AllocPolicy> Vector<T, A> {
    const ELEM_SIZE: usize = {
        assert!(
            mem::size_of::<T>() != 0,
            "zero-sized element types are not supported"
        );
        mem::size_of::<T>()
    };

    /// Creates an empty vector. The policy still sees one zero-slot request.
    pub fn new_in(alloc: A) -> Self {
        Self::with_exact_capacity_in(0, alloc)
    }

    pub fn from_elem_in(count: usize, value: &T, alloc: A) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::with_exact_capacity_in(count, alloc);
        vec.fill_gap(0, count, || Some(value.clone()));
        vec
    }

    pub fn with_len_in(count: usize, alloc: A) -> Self
    where
        T: Default,
    {
        let mut vec = Self::with_exact_capacity_in(count, alloc);
        vec.fill_gap(0, count, || Some(T::default()));
        vec
    }

    /// Creates a vector holding the items of `values` in order, with
    /// capacity equal to the iterator's reported length.
    pub fn from_range_in<I>(values: I, alloc: A) -> Self
    where
        I: IntoIterator<Item = T, IntoIter: ExactSizeIterator>,
    {
        let mut iter = values.into_iter();
        let count = iter.len();
        let mut vec = Self::with_exact_capacity_in(count, alloc);
        vec.fill_gap(0, count, || iter.next());
        vec
    }

    /// Deep copy into a buffer of the same capacity owned by `alloc`.
    pub fn clone_in<B: AllocPolicy>(&self, alloc: B) -> Vector<T, B>
    where
        T: Clone,
    {
        let mut vec = Vector::with_exact_capacity_in(self.cap, alloc);
        let mut source = self.iter();
        vec.fill_gap(0, self.len, || source.next().cloned());
        vec
    }

    /// Moves the contents out, leaving `self` empty with zero capacity.
    pub fn take(&mut self) -> Self {
        let empty = Self::new_in(self.alloc.clone());
        mem::replace(self, empty)
    }

    fn with_exact_capacity_in(cap: usize, alloc: A) -> Self {
        let ptr = Self::allocate_buffer(&alloc, cap).unwrap_or_else(|err| infallible(err));
        Vector {
            ptr,
            len: 0,
            cap,
            alloc,
            phantom: PhantomData,
        }
    }

    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    // ========================================================================
    // Capacity
    // ========================================================================

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Largest capacity this vector can ever request. Depends only on the
    /// element size.
    #[inline]
    pub fn max_size(&self) -> usize {
        Self::max_slots()
    }

    fn max_slots() -> usize {
        isize::MAX as usize / Self::ELEM_SIZE
    }

    /// Ensures room for at least `new_cap` elements.
    ///
    /// Does nothing if the capacity is already sufficient, otherwise
    /// reallocates to exactly `new_cap`.
    pub fn reserve(&mut self, new_cap: usize) -> Result<()> {
        if new_cap <= self.cap {
            return Ok(());
        }
        self.reallocate(new_cap)
    }

    /// Reallocates so that `capacity() == len()`.
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        if self.cap == self.len {
            return Ok(());
        }
        self.reallocate(self.len)
    }

    /// Makes room for `additional` more elements. Grows to exactly
    /// `len + additional` when the current capacity is not enough.
    fn grow_for(&mut self, additional: usize) -> Result<()> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(Error::CapacityExceeded {
                requested: usize::MAX,
                max: Self::max_slots(),
            })?;
        if required > self.cap {
            self.reallocate(required)?;
        }
        Ok(())
    }

    /// Moves the live elements into a fresh buffer of exactly `new_cap` slots
    /// and releases the old buffer. Nothing changes if the new buffer cannot
    /// be obtained.
    fn reallocate(&mut self, new_cap: usize) -> Result<()> {
        debug_assert!(new_cap >= self.len);
        let new_ptr = Self::allocate_buffer(&self.alloc, new_cap)?;

        // SAFETY: both buffers hold at least `len` slots and are distinct
        // allocations. Relocation is a bitwise move and cannot fail, so the
        // old buffer is released only after every element has landed.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            self.alloc.deallocate(self.ptr, self.cap);
        }

        tracing::debug!(
            len = self.len,
            old_capacity = self.cap,
            new_capacity = new_cap,
            "reallocated vector storage"
        );
        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    fn allocate_buffer(alloc: &A, slots: usize) -> Result<NonNull<T>> {
        let max = Self::max_slots();
        if slots > max {
            return Err(Error::CapacityExceeded {
                requested: slots,
                max,
            });
        }
        alloc.allocate::<T>(slots).inspect_err(|err| {
            tracing::warn!(%err, slots, "allocation policy refused request");
        })
    }

    // ========================================================================
    // Element access
    // ========================================================================

    /// Bounds-checked access.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.as_slice().get(index).ok_or(Error::OutOfRange {
            index,
            len: self.len,
        })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// First element. Panics if the vector is empty.
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(first) => first,
            None => panic!("front() called on an empty vector"),
        }
    }

    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(first) => first,
            None => panic!("front_mut() called on an empty vector"),
        }
    }

    /// Last element. Panics if the vector is empty.
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(last) => last,
            None => panic!("back() called on an empty vector"),
        }
    }

    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(last) => last,
            None => panic!("back_mut() called on an empty vector"),
        }
    }

    /// Address of the buffer. Stable until the next reallocation.
    #[inline]
    pub fn data(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn data_mut(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are live.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the first `len` slots are live and `self` is borrowed mutably.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    // ========================================================================
    // Cursors and iteration
    // ========================================================================

    #[inline]
    pub fn begin(&self) -> Cursor<T> {
        Cursor::new(self.ptr.as_ptr())
    }

    #[inline]
    pub fn end(&self) -> Cursor<T> {
        self.begin() + self.len
    }

    #[inline]
    pub fn cbegin(&self) -> Cursor<T> {
        self.begin()
    }

    #[inline]
    pub fn cend(&self) -> Cursor<T> {
        self.end()
    }

    /// Cursor suitable for writing through with [`Cursor::get_mut`].
    #[inline]
    pub fn begin_mut(&mut self) -> Cursor<T> {
        Cursor::new(self.ptr.as_ptr())
    }

    #[inline]
    pub fn end_mut(&mut self) -> Cursor<T> {
        self.begin_mut() + self.len
    }

    pub fn iter(&self) -> Iter<'_, T> {
        // SAFETY: [begin, end) is the live range and stays borrowed with `self`.
        unsafe { Cursor::range(self.begin(), self.end()) }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (first, last) = (self.begin_mut(), self.end_mut());
        // SAFETY: as above, with `self` borrowed mutably.
        unsafe { Cursor::range_mut(first, last) }
    }

    /// Index of `pos` within this vector. Panics if `pos` is outside
    /// `[begin(), end()]`.
    fn index_of(&self, pos: Cursor<T>) -> usize {
        let offset = pos.distance(self.begin());
        assert!(
            offset >= 0 && offset as usize <= self.len,
            "cursor {pos:?} is outside the vector (len {})",
            self.len
        );
        offset as usize
    }

    /// Destroys the elements in `[start, end)` through the policy.
    ///
    /// # Safety
    ///
    /// The range must be live and already excluded from `len`.
    unsafe fn destroy_range(&self, start: usize, end: usize) {
        let base = self.ptr.as_ptr();
        for i in start..end {
            unsafe { self.alloc.destroy(base.add(i)) };
        }
    }
}

impl<T, A: AllocPolicy> Drop for Vector<T, A> {
    fn drop(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        // SAFETY: `[0, len)` was live; the buffer came from this policy.
        unsafe {
            self.destroy_range(0, len);
            self.alloc.deallocate(self.ptr, self.cap);
        }
    }
}

/// Exchanges the contents, capacities and policies of two vectors in O(1).
pub fn swap<T, A: AllocPolicy>(lhs: &mut Vector<T, A>, rhs: &mut Vector<T, A>) {
    lhs.swap(rhs);
}

/// Constructors and trait impls cannot return `Result`; they fail the same
/// way `alloc::vec::Vec` does.
#[cold]
pub(crate) fn infallible(err: Error) -> ! {
    if let Error::AllocFailed { size, align } = err
        && let Ok(layout) = Layout::from_size_align(size, align)
    {
        handle_alloc_error(layout);
    }
    panic!("capacity overflow: {err}");
}
