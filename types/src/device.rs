use core::ptr::NonNull;

/// Abstract memory object that resources are bound into.
///
/// This is the entire surface the binding layer consumes from the allocator
/// side. The allocator keeps ownership of the memory object and of its
/// mapping window; a resource only holds a non-owning handle and must never
/// deallocate, map or unmap the object itself.
pub trait DeviceMemory {
    /// Returns size of the memory object in bytes.
    fn size(&self) -> u64;

    /// Returns whether the memory object can be accessed by the host through a mapping.
    fn is_host_accessible(&self) -> bool;

    /// Returns the host address corresponding to the start of the memory
    /// object while a mapping is active.
    ///
    /// Returns `None` outside of the object's own map/unmap window.
    /// The returned address must not be cached past that window.
    fn mapped_base(&self) -> Option<NonNull<u8>>;
}

impl<'a, M> DeviceMemory for &'a M
where
    M: DeviceMemory + ?Sized,
{
    fn size(&self) -> u64 {
        M::size(*self)
    }

    fn is_host_accessible(&self) -> bool {
        M::is_host_accessible(*self)
    }

    fn mapped_base(&self) -> Option<NonNull<u8>> {
        M::mapped_base(*self)
    }
}
