use {
    crate::{binding::ResourceBinding, error::BindError, range::RangeSize, MemoryRequirements},
    core::ptr::NonNull,
    gpu_bind_types::{
        CommandEncoder, CommandUse, DeviceMemory, MemoryBarrier, PipelineStages,
    },
};

/// Contract implemented by each concrete resource kind, such as buffers and images.
///
/// Kinds embed [`ResourceBinding`] and expose it through [`Resource::binding`].
/// The provided methods serve binding and policy queries from that shared
/// state, so a kind implements only what is specific to its own layout and
/// storage.
pub trait Resource {
    /// Memory object type this resource binds into.
    type Memory: DeviceMemory;

    /// Returns the binding state of this resource.
    fn binding(&self) -> &ResourceBinding<Self::Memory>;

    /// Returns mutable binding state of this resource.
    fn binding_mut(&mut self) -> &mut ResourceBinding<Self::Memory>;

    /// Returns the memory requirements of this resource.
    ///
    /// The reported size and alignment feed the invariants enforced by
    /// [`Resource::bind_device_memory`] once the resource is realized.
    fn memory_requirements(&self) -> MemoryRequirements;

    /// Applies the specified global memory barrier.
    ///
    /// Implementations must decide via [`Resource::needs_host_read_sync`],
    /// and their own symmetric host-write check, whether a host direction
    /// transfer is required. A required transfer is performed through the
    /// bound memory's active mapping and completes before this function
    /// returns; otherwise the barrier is recorded into `encoder` tagged
    /// with `cmd_use` and no host transfer happens.
    fn apply_memory_barrier(
        &mut self,
        src_stages: PipelineStages,
        dst_stages: PipelineStages,
        barrier: &MemoryBarrier,
        encoder: &mut dyn CommandEncoder,
        cmd_use: CommandUse,
    );

    /// Copies bytes of `[offset, offset + size)` from device visible storage
    /// into the active host mapping.
    ///
    /// No-op while the resource is unbound or the bound memory has no active
    /// mapping window. The copy is synchronous: the bytes are in place when
    /// this function returns.
    fn pull_from_device(&mut self, offset: u64, size: RangeSize);

    /// Copies bytes of `[offset, offset + size)` from the active host
    /// mapping into device visible storage.
    ///
    /// No-op while the resource is unbound or the bound memory has no active
    /// mapping window. The copy is synchronous: the bytes are in place when
    /// this function returns.
    fn flush_to_device(&mut self, offset: u64, size: RangeSize);

    /// Binds this resource to `offset` within `memory`.
    ///
    /// See [`ResourceBinding::bind_device_memory`].
    fn bind_device_memory(&mut self, memory: Self::Memory, offset: u64) -> Result<(), BindError> {
        self.binding_mut().bind_device_memory(memory, offset)
    }

    /// Returns the memory object this resource is bound to.
    fn device_memory(&self) -> Option<&Self::Memory> {
        self.binding().memory()
    }

    /// Returns the byte offset in the bound memory object.
    fn device_memory_offset(&self) -> u64 {
        self.binding().memory_offset()
    }

    /// Returns the number of bytes required for the entire resource.
    fn byte_count(&self) -> u64 {
        self.binding().byte_count()
    }

    /// Returns the alignment mask required for this resource.
    fn align_mask(&self) -> u64 {
        self.binding().align_mask()
    }

    /// Returns whether the bound memory is accessible from the host.
    fn is_memory_host_accessible(&self) -> bool {
        self.binding().is_memory_host_accessible()
    }

    /// Returns the host address of the start of this resource under the
    /// bound memory's active mapping.
    fn logical_mapped_memory(&self) -> Option<NonNull<u8>> {
        self.binding().logical_mapped_memory()
    }

    /// Returns true iff `[offset, offset + size)` intersects this resource's extent.
    fn does_overlap(&self, offset: u64, size: RangeSize) -> bool {
        self.binding().does_overlap(offset, size)
    }

    /// Returns true iff `[offset, offset + size)` lies fully inside this resource's extent.
    fn does_contain(&self, offset: u64, size: RangeSize) -> bool {
        self.binding().does_contain(offset, size)
    }

    /// Returns true iff applying `barrier` requires a device-to-host pull of
    /// this resource's bytes before the barrier counts as satisfied.
    ///
    /// Kinds whose storage needs additional transitions may override this.
    fn needs_host_read_sync(
        &self,
        src_stages: PipelineStages,
        dst_stages: PipelineStages,
        barrier: &MemoryBarrier,
    ) -> bool {
        self.binding()
            .needs_host_read_sync(src_stages, dst_stages, barrier)
    }
}
