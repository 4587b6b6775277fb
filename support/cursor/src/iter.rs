use core::{fmt, iter::FusedIterator, marker::PhantomData};

use crate::Cursor;

/// Borrowing iterator over the half-open cursor range `[head, tail)`.
pub struct Iter<'a, T> {
    head: Cursor<T>,
    tail: Cursor<T>,
    phantom: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: Cursor<T>, tail: Cursor<T>) -> Self {
        Iter {
            head,
            tail,
            phantom: PhantomData,
        }
    }

    /// Position of the next element yielded from the front.
    pub fn cursor(&self) -> Cursor<T> {
        self.head
    }

    /// Position one past the next element yielded from the back.
    pub fn end_cursor(&self) -> Cursor<T> {
        self.tail
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &'a [T] {
        // SAFETY: the range was live for 'a when the iterator was created.
        unsafe { Cursor::slice(self.head, self.tail) }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.head == self.tail {
            return None;
        }
        // SAFETY: head is strictly before tail, so it points at a live element.
        Some(unsafe { self.head.post_inc().get() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a T> {
        if n >= self.len() {
            self.head = self.tail;
            return None;
        }
        self.head += n;
        self.next()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        // SAFETY: after the decrement tail points at the last unyielded element.
        Some(unsafe { self.tail.dec().get() })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.tail.distance(self.head) as usize
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter::new(self.head, self.tail)
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.as_slice()).finish()
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

/// Mutable iterator over the half-open cursor range `[head, tail)`.
pub struct IterMut<'a, T> {
    head: Cursor<T>,
    tail: Cursor<T>,
    phantom: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(head: Cursor<T>, tail: Cursor<T>) -> Self {
        IterMut {
            head,
            tail,
            phantom: PhantomData,
        }
    }

    pub fn cursor(&self) -> Cursor<T> {
        self.head
    }

    pub fn end_cursor(&self) -> Cursor<T> {
        self.tail
    }

    /// Consumes the iterator, returning the elements not yet yielded.
    pub fn into_slice(self) -> &'a mut [T] {
        // SAFETY: the range was exclusively borrowed for 'a and the iterator is consumed.
        unsafe { Cursor::slice_mut(self.head, self.tail) }
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: shared view of the unyielded range, tied to &self.
        unsafe { Cursor::slice(self.head, self.tail) }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.head == self.tail {
            return None;
        }
        // SAFETY: every element is yielded at most once, so the borrows are disjoint.
        Some(unsafe { self.head.post_inc().get_mut() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        // SAFETY: as in `next`.
        Some(unsafe { self.tail.dec().get_mut() })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.tail.distance(self.head) as usize
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.as_slice()).finish()
    }
}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}
