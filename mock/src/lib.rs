//!
//! Host backed doubles for `gpu-bind` collaborators: a memory allocator
//! handing out mappable memory objects and a command encoder that records
//! what it is given.
//!

use {
    gpu_bind_types::{
        CommandEncoder, CommandUse, DeviceMemory, MemoryBarrier, MemoryPropertyFlags,
        PipelineStages,
    },
    slab::Slab,
    std::{
        cell::{Cell, UnsafeCell},
        convert::TryFrom as _,
        ptr::NonNull,
        rc::Rc,
    },
};

struct MemoryObject {
    props: MemoryPropertyFlags,
    size: u64,
    content: UnsafeCell<Box<[u8]>>,
    mapped: Cell<bool>,
}

/// Cloneable non-owning handle to a host backed memory object.
///
/// All clones refer to the same object; the object itself stays alive until
/// [`MockAllocator::deallocate`] removes it from the allocator's registry.
#[derive(Clone)]
pub struct MockMemory {
    key: usize,
    object: Rc<MemoryObject>,
}

impl MockMemory {
    /// Maps the whole memory object into host address space and returns the
    /// base address of the mapping.
    ///
    /// # Panics
    ///
    /// Panics if the object is not host visible or is already mapped.
    pub fn map(&self) -> NonNull<u8> {
        assert!(
            self.object.props.contains(MemoryPropertyFlags::HOST_VISIBLE),
            "Attempt to map non-host-visible memory"
        );
        assert!(!self.object.mapped.get(), "Already mapped");
        self.object.mapped.set(true);
        tracing::info!("Memory object mapped");
        self.base_ptr()
    }

    /// Ends the mapping window started by [`MockMemory::map`].
    ///
    /// # Panics
    ///
    /// Panics if the object is not currently mapped.
    pub fn unmap(&self) {
        assert!(self.object.mapped.get(), "Was not mapped");
        self.object.mapped.set(false);
        tracing::info!("Memory object unmapped");
    }

    fn base_ptr(&self) -> NonNull<u8> {
        let content = unsafe { &mut *self.object.content.get() };
        NonNull::new(content.as_mut_ptr()).expect("Content buffer must not be null")
    }
}

impl DeviceMemory for MockMemory {
    fn size(&self) -> u64 {
        self.object.size
    }

    fn is_host_accessible(&self) -> bool {
        self.object.props.contains(MemoryPropertyFlags::HOST_VISIBLE)
    }

    fn mapped_base(&self) -> Option<NonNull<u8>> {
        if self.object.mapped.get() {
            Some(self.base_ptr())
        } else {
            None
        }
    }
}

/// Allocator double that owns memory objects and hands out [`MockMemory`] handles.
///
/// Objects are shared through reference counting, so handles held by bound
/// resources stay valid until the matching [`MockAllocator::deallocate`].
pub struct MockAllocator {
    allocations: Slab<Rc<MemoryObject>>,
    total_allocations: u64,
    total_deallocations: u64,
}

impl MockAllocator {
    pub fn new() -> Self {
        MockAllocator {
            allocations: Slab::new(),
            total_allocations: 0,
            total_deallocations: 0,
        }
    }

    /// Allocates a zero filled memory object of `size` bytes with the
    /// specified properties.
    #[tracing::instrument(skip(self))]
    pub fn allocate(&mut self, size: u64, props: MemoryPropertyFlags) -> MockMemory {
        let size_usize = usize::try_from(size).expect("`size` doesn't fit host address space");
        let object = Rc::new(MemoryObject {
            props,
            size,
            content: UnsafeCell::new(vec![0; size_usize].into_boxed_slice()),
            mapped: Cell::new(false),
        });

        let key = self.allocations.insert(Rc::clone(&object));
        self.total_allocations += 1;
        tracing::info!("Memory object allocated");

        MockMemory { key, object }
    }

    /// Releases the memory object behind `memory`.
    ///
    /// Other handle clones become dangling in the allocator's eyes; resources
    /// must have been rebound or destroyed before this point.
    ///
    /// # Panics
    ///
    /// Panics if the object is still mapped or was not allocated from this allocator.
    #[tracing::instrument(skip(self, memory))]
    pub fn deallocate(&mut self, memory: MockMemory) {
        assert!(
            self.allocations.contains(memory.key),
            "Memory object from another allocator"
        );
        let object = self.allocations.remove(memory.key);
        assert!(
            Rc::ptr_eq(&object, &memory.object),
            "Memory object from another allocator"
        );
        assert!(!object.mapped.get(), "Deallocating mapped memory object");
        self.total_deallocations += 1;
        tracing::info!("Memory object deallocated");
    }

    pub fn total_allocations(&self) -> u64 {
        self.total_allocations
    }

    pub fn total_deallocations(&self) -> u64 {
        self.total_deallocations
    }
}

impl Default for MockAllocator {
    fn default() -> Self {
        MockAllocator::new()
    }
}

/// A memory barrier recorded by [`MockCommandEncoder`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RecordedBarrier {
    pub src_stages: PipelineStages,
    pub dst_stages: PipelineStages,
    pub barrier: MemoryBarrier,
    pub cmd_use: CommandUse,
}

/// Command encoder double that records barriers handed to it.
#[derive(Default)]
pub struct MockCommandEncoder {
    barriers: Vec<RecordedBarrier>,
}

impl MockCommandEncoder {
    pub fn new() -> Self {
        MockCommandEncoder {
            barriers: Vec::new(),
        }
    }

    /// Returns the barriers recorded so far, in recording order.
    pub fn barriers(&self) -> &[RecordedBarrier] {
        &self.barriers
    }
}

impl CommandEncoder for MockCommandEncoder {
    fn record_memory_barrier(
        &mut self,
        src_stages: PipelineStages,
        dst_stages: PipelineStages,
        barrier: &MemoryBarrier,
        cmd_use: CommandUse,
    ) {
        tracing::info!("Memory barrier recorded");
        self.barriers.push(RecordedBarrier {
            src_stages,
            dst_stages,
            barrier: *barrier,
            cmd_use,
        });
    }
}
