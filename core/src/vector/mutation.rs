use core::{mem, ptr};

use contig_cursor::Cursor;

use super::Vector;
use crate::{Result, policy::AllocPolicy};

impl<T, A: AllocPolicy> Vector<T, A> {
    /// Destroys every element. Capacity and `data()` are unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Destroys the elements from `len` onwards. No-op if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let old_len = mem::replace(&mut self.len, len);
        // SAFETY: `[len, old_len)` was live and is now outside `self.len`.
        unsafe { self.destroy_range(len, old_len) };
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Inserts `value` before `pos` and returns a cursor to it.
    ///
    /// Reallocates to exactly `len() + 1` if the vector is full.
    pub fn insert(&mut self, pos: Cursor<T>, value: T) -> Result<Cursor<T>> {
        self.emplace_with(pos, move || value)
    }

    /// Inserts `count` clones of `value` before `pos`.
    pub fn insert_n(&mut self, pos: Cursor<T>, count: usize, value: &T) -> Result<Cursor<T>>
    where
        T: Clone,
    {
        let index = self.index_of(pos);
        self.grow_for(count)?;
        self.fill_gap(index, count, || Some(value.clone()));
        Ok(self.begin() + index)
    }

    /// Inserts the items of `values` before `pos`, in order.
    ///
    /// The iterator's reported length decides how much room is made. If it
    /// ends early the unused room is closed again.
    pub fn insert_range<I>(&mut self, pos: Cursor<T>, values: I) -> Result<Cursor<T>>
    where
        I: IntoIterator<Item = T, IntoIter: ExactSizeIterator>,
    {
        let mut iter = values.into_iter();
        let count = iter.len();
        let index = self.index_of(pos);
        self.grow_for(count)?;
        self.fill_gap(index, count, || iter.next());
        Ok(self.begin() + index)
    }

    /// Inserts clones of `values` before `pos`.
    pub fn insert_slice(&mut self, pos: Cursor<T>, values: &[T]) -> Result<Cursor<T>>
    where
        T: Clone,
    {
        self.insert_range(pos, values.iter().cloned())
    }

    pub fn emplace(&mut self, pos: Cursor<T>, value: T) -> Result<Cursor<T>> {
        self.emplace_with(pos, move || value)
    }

    /// Constructs an element before `pos` from `make`, after room has been
    /// made for it.
    pub fn emplace_with<F>(&mut self, pos: Cursor<T>, make: F) -> Result<Cursor<T>>
    where
        F: FnOnce() -> T,
    {
        let index = self.index_of(pos);
        self.grow_for(1)?;
        let mut make = Some(make);
        self.fill_gap(index, 1, || make.take().map(|make| make()));
        Ok(self.begin() + index)
    }

    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.emplace_back(value).map(|_| ())
    }

    pub fn emplace_back(&mut self, value: T) -> Result<&mut T> {
        self.emplace_back_with(move || value)
    }

    /// Constructs an element at the end from `make`. Grows to exactly
    /// `len() + 1` if the vector is full.
    pub fn emplace_back_with<F>(&mut self, make: F) -> Result<&mut T>
    where
        F: FnOnce() -> T,
    {
        self.grow_for(1)?;
        // SAFETY: `grow_for` left at least one free slot after `len`.
        unsafe {
            let slot = self.ptr.as_ptr().add(self.len);
            self.alloc.construct(slot, make());
            self.len += 1;
            Ok(&mut *slot)
        }
    }

    /// Removes the last element, or returns `None` if the vector is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot was live and is now outside `len`.
        Some(unsafe { ptr::read(self.ptr.as_ptr().add(self.len)) })
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes the element at `pos` and returns a cursor to its successor.
    /// Panics if `pos` is `end()`.
    pub fn erase(&mut self, pos: Cursor<T>) -> Cursor<T> {
        let index = self.index_of(pos);
        assert!(index < self.len, "cannot erase the end position");
        self.erase_span(index, index + 1)
    }

    /// Removes `[first, last)` and returns a cursor to the element that
    /// followed the range.
    pub fn erase_range(&mut self, first: Cursor<T>, last: Cursor<T>) -> Cursor<T> {
        let start = self.index_of(first);
        let end = self.index_of(last);
        assert!(start <= end, "erase range {first:?}..{last:?} is reversed");
        self.erase_span(start, end)
    }

    fn erase_span(&mut self, start: usize, end: usize) -> Cursor<T> {
        let old_len = self.len;
        let base = self.ptr.as_ptr();
        // If a destructor panics the tail is leaked rather than dropped twice.
        self.len = start;
        // SAFETY: `[start, end)` is live; the tail moves into the freed slots.
        unsafe {
            self.destroy_range(start, end);
            ptr::copy(base.add(end), base.add(start), old_len - end);
        }
        self.len = old_len - (end - start);
        self.begin() + start
    }

    // ========================================================================
    // Resize and assign
    // ========================================================================

    /// Truncates to `count`, or grows to `count` filling with clones of
    /// `value`.
    pub fn resize(&mut self, count: usize, value: T) -> Result<()>
    where
        T: Clone,
    {
        self.resize_with_fill(count, || value.clone())
    }

    /// Truncates to `count`, or grows to `count` filling with defaults.
    pub fn resize_default(&mut self, count: usize) -> Result<()>
    where
        T: Default,
    {
        self.resize_with_fill(count, T::default)
    }

    fn resize_with_fill(&mut self, count: usize, mut fill: impl FnMut() -> T) -> Result<()> {
        if count <= self.len {
            self.truncate(count);
            return Ok(());
        }
        let extra = count - self.len;
        self.grow_for(extra)?;
        self.fill_gap(self.len, extra, || Some(fill()));
        Ok(())
    }

    /// Replaces the contents with `count` clones of `value`.
    pub fn assign_n(&mut self, count: usize, value: &T) -> Result<()>
    where
        T: Clone,
    {
        self.clear();
        self.insert_n(self.begin(), count, value).map(|_| ())
    }

    /// Replaces the contents with the items of `values`.
    pub fn assign_range<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T, IntoIter: ExactSizeIterator>,
    {
        self.clear();
        self.insert_range(self.begin(), values).map(|_| ())
    }

    pub fn assign_slice(&mut self, values: &[T]) -> Result<()>
    where
        T: Clone,
    {
        self.clear();
        self.insert_slice(self.begin(), values).map(|_| ())
    }

    /// Exchanges buffers, lengths, capacities and policies. No element is
    /// touched.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    // ========================================================================
    // Gap filling
    // ========================================================================

    /// Opens `count` slots at `index`, constructs elements into them from
    /// `fill` in order, and closes whatever part of the gap stays unfilled
    /// (because `fill` ran dry or panicked). Returns how many landed.
    ///
    /// The caller must have ensured `index <= len` and `len + count <= cap`.
    pub(super) fn fill_gap(
        &mut self,
        index: usize,
        count: usize,
        mut fill: impl FnMut() -> Option<T>,
    ) -> usize {
        assert!(index <= self.len && count <= self.cap - self.len);
        let tail = self.len - index;
        let base = self.ptr.as_ptr();
        // SAFETY: the destination slots are allocated; `len` stops short of
        // the moved tail until the gap is closed.
        unsafe { ptr::copy(base.add(index), base.add(index + count), tail) };
        self.len = index;

        let mut gap = Gap {
            vec: self,
            index,
            count,
            filled: 0,
            tail,
        };
        while gap.filled < gap.count {
            let Some(value) = fill() else { break };
            // SAFETY: the slot is inside the open gap and holds no live value.
            unsafe { gap.vec.alloc.construct(base.add(index + gap.filled), value) };
            gap.filled += 1;
        }
        gap.filled
    }
}

/// An open gap in the middle of a vector. Dropping it slides the tail back
/// against the last constructed element and restores `len`.
struct Gap<'a, T, A: AllocPolicy> {
    vec: &'a mut Vector<T, A>,
    index: usize,
    count: usize,
    filled: usize,
    tail: usize,
}

impl<T, A: AllocPolicy> Drop for Gap<'_, T, A> {
    fn drop(&mut self) {
        let base = self.vec.ptr.as_ptr();
        let end = self.index + self.filled;
        if self.filled < self.count {
            // SAFETY: the tail sits right after the gap; its new home is free.
            unsafe { ptr::copy(base.add(self.index + self.count), base.add(end), self.tail) };
        }
        self.vec.len = end + self.tail;
    }
}
