use core::{
    fmt,
    iter::FusedIterator,
    mem::ManuallyDrop,
    ptr::{self, NonNull},
};

use contig_cursor::Cursor;

use super::Vector;
use crate::policy::AllocPolicy;

/// Owning iterator returned by `Vector::into_iter`.
///
/// Elements not yet yielded are destroyed, and the buffer returned to the
/// policy, when the iterator is dropped.
pub struct IntoIter<T, A: AllocPolicy> {
    buf: NonNull<T>,
    cap: usize,
    alloc: A,
    head: Cursor<T>,
    tail: Cursor<T>,
}

impl<T, A: AllocPolicy> IntoIter<T, A> {
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [head, tail) holds the elements not yet moved out.
        unsafe { Cursor::slice(self.head, self.tail) }
    }
}

impl<T, A: AllocPolicy> IntoIterator for Vector<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> IntoIter<T, A> {
        let vec = ManuallyDrop::new(self);
        // SAFETY: `vec` is never dropped, so the policy is moved out exactly once.
        let alloc = unsafe { ptr::read(&vec.alloc) };
        IntoIter {
            buf: vec.ptr,
            cap: vec.cap,
            alloc,
            head: vec.begin(),
            tail: vec.end(),
        }
    }
}

impl<T, A: AllocPolicy> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.head == self.tail {
            return None;
        }
        // SAFETY: head is live and moves past the element being read out.
        Some(unsafe { ptr::read(self.head.post_inc().as_ptr()) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T, A: AllocPolicy> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.head == self.tail {
            return None;
        }
        // SAFETY: as in `next`, from the other end.
        Some(unsafe { ptr::read(self.tail.dec().as_ptr()) })
    }
}

impl<T, A: AllocPolicy> ExactSizeIterator for IntoIter<T, A> {
    fn len(&self) -> usize {
        self.tail.distance(self.head) as usize
    }
}

impl<T, A: AllocPolicy> FusedIterator for IntoIter<T, A> {}

impl<T: fmt::Debug, A: AllocPolicy> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, A: AllocPolicy> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        // SAFETY: [head, tail) is still live; the buffer came from `alloc`.
        unsafe {
            while self.head != self.tail {
                self.alloc.destroy(self.head.post_inc().as_mut_ptr());
            }
            self.alloc.deallocate(self.buf, self.cap);
        }
    }
}

unsafe impl<T: Send, A: AllocPolicy + Send> Send for IntoIter<T, A> {}
unsafe impl<T: Sync, A: AllocPolicy + Sync> Sync for IntoIter<T, A> {}
