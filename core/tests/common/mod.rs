//! Instrumentation shared by the integration tests.

#![allow(dead_code)]

use std::{alloc::Layout, cell::Cell, ptr::NonNull, rc::Rc};

use allocator_api2::alloc::{AllocError, Allocator, Global};

#[derive(Debug, Default)]
pub struct AllocStats {
    pub allocations: Cell<usize>,
    pub deallocations: Cell<usize>,
    pub live_bytes: Cell<usize>,
}

impl AllocStats {
    pub fn outstanding(&self) -> usize {
        self.allocations.get() - self.deallocations.get()
    }
}

/// Global-backed allocator that counts every request. Clones share counters.
#[derive(Clone, Default)]
pub struct CountingAlloc {
    pub stats: Rc<AllocStats>,
}

unsafe impl Allocator for CountingAlloc {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        let block = Global.allocate(layout)?;
        let stats = &self.stats;
        stats.allocations.set(stats.allocations.get() + 1);
        stats.live_bytes.set(stats.live_bytes.get() + layout.size());
        Ok(block)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        let stats = &self.stats;
        stats.deallocations.set(stats.deallocations.get() + 1);
        stats.live_bytes.set(stats.live_bytes.get() - layout.size());
        unsafe { Global.deallocate(ptr, layout) }
    }
}

#[derive(Debug, Default)]
pub struct Census {
    pub clones: Cell<usize>,
    pub drops: Cell<usize>,
}

/// Element that records clones and drops in a shared [`Census`].
#[derive(Debug)]
pub struct Tracked {
    pub value: i32,
    census: Rc<Census>,
}

impl Tracked {
    pub fn new(value: i32, census: &Rc<Census>) -> Self {
        Tracked {
            value,
            census: Rc::clone(census),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.census.clones.set(self.census.clones.get() + 1);
        Tracked {
            value: self.value,
            census: Rc::clone(&self.census),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.census.drops.set(self.census.drops.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
