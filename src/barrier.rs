//!
//! Host synchronization policy around pipeline barriers.
//!
//! A barrier that hands resource data to host-stage consumers needs an
//! explicit device-to-host pull only when the bound memory is visible to the
//! host at all; the symmetric rule holds for host writes published to the
//! device. These predicates are the single place encoding that domain
//! transition rule, so concrete resource kinds do not repeat it in their
//! barrier application code.
//!

use {
    crate::binding::ResourceBinding,
    gpu_bind_types::{AccessFlags, DeviceMemory, MemoryBarrier, PipelineStages},
};

impl<M> ResourceBinding<M>
where
    M: DeviceMemory,
{
    /// Returns true iff applying `barrier` between `_src_stages` and
    /// `dst_stages` requires this resource's bytes to be pulled from the
    /// device to the host before the barrier counts as satisfied.
    ///
    /// Total over its inputs. Unbound resources never need the pull.
    pub fn needs_host_read_sync(
        &self,
        _src_stages: PipelineStages,
        dst_stages: PipelineStages,
        barrier: &MemoryBarrier,
    ) -> bool {
        dst_stages.contains(PipelineStages::HOST)
            && barrier.dst_access.contains(AccessFlags::HOST_READ)
            && self.is_memory_host_accessible()
    }

    /// Returns true iff `barrier` publishes host writes performed through
    /// the mapping, so the resource's bytes must be flushed to the device
    /// before the barrier counts as satisfied.
    pub fn needs_host_write_sync(
        &self,
        src_stages: PipelineStages,
        _dst_stages: PipelineStages,
        barrier: &MemoryBarrier,
    ) -> bool {
        src_stages.contains(PipelineStages::HOST)
            && barrier.src_access.contains(AccessFlags::HOST_WRITE)
            && self.is_memory_host_accessible()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::binding::ResourceBinding,
        core::ptr::NonNull,
        gpu_bind_types::DeviceMemory,
    };

    struct TestMemory {
        host_accessible: bool,
    }

    impl DeviceMemory for TestMemory {
        fn size(&self) -> u64 {
            512
        }

        fn is_host_accessible(&self) -> bool {
            self.host_accessible
        }

        fn mapped_base(&self) -> Option<NonNull<u8>> {
            None
        }
    }

    const HOST_VISIBLE: TestMemory = TestMemory {
        host_accessible: true,
    };
    const DEVICE_LOCAL: TestMemory = TestMemory {
        host_accessible: false,
    };

    fn bound_to(memory: &TestMemory) -> ResourceBinding<&TestMemory> {
        let mut binding = ResourceBinding::new(256, 15);
        binding.bind_device_memory(memory, 0).unwrap();
        binding
    }

    #[test]
    fn host_read_sync_requires_all_three_conditions() {
        let binding = bound_to(&HOST_VISIBLE);
        let barrier = MemoryBarrier {
            src_access: AccessFlags::TRANSFER_WRITE,
            dst_access: AccessFlags::HOST_READ,
        };

        assert!(binding.needs_host_read_sync(
            PipelineStages::TRANSFER,
            PipelineStages::HOST,
            &barrier,
        ));

        // Host stage missing from the destination mask.
        assert!(!binding.needs_host_read_sync(
            PipelineStages::TRANSFER,
            PipelineStages::FRAGMENT_SHADER,
            &barrier,
        ));

        // Host read missing from the destination accesses.
        assert!(!binding.needs_host_read_sync(
            PipelineStages::TRANSFER,
            PipelineStages::HOST,
            &MemoryBarrier {
                src_access: AccessFlags::TRANSFER_WRITE,
                dst_access: AccessFlags::HOST_WRITE,
            },
        ));

        // Bound memory not host accessible.
        let device_local = bound_to(&DEVICE_LOCAL);
        assert!(!device_local.needs_host_read_sync(
            PipelineStages::TRANSFER,
            PipelineStages::HOST,
            &barrier,
        ));
    }

    #[test]
    fn host_stage_may_be_part_of_a_wider_mask() {
        let binding = bound_to(&HOST_VISIBLE);

        assert!(binding.needs_host_read_sync(
            PipelineStages::TRANSFER,
            PipelineStages::HOST | PipelineStages::FRAGMENT_SHADER,
            &MemoryBarrier {
                src_access: AccessFlags::TRANSFER_WRITE,
                dst_access: AccessFlags::HOST_READ | AccessFlags::SHADER_READ,
            },
        ));
    }

    #[test]
    fn unbound_resource_never_needs_host_sync() {
        let binding = ResourceBinding::<&TestMemory>::new(256, 15);
        let barrier = MemoryBarrier {
            src_access: AccessFlags::HOST_WRITE,
            dst_access: AccessFlags::HOST_READ,
        };

        assert!(!binding.needs_host_read_sync(
            PipelineStages::HOST,
            PipelineStages::HOST,
            &barrier,
        ));
        assert!(!binding.needs_host_write_sync(
            PipelineStages::HOST,
            PipelineStages::HOST,
            &barrier,
        ));
    }

    #[test]
    fn host_write_sync_mirrors_the_source_side() {
        let binding = bound_to(&HOST_VISIBLE);
        let barrier = MemoryBarrier {
            src_access: AccessFlags::HOST_WRITE,
            dst_access: AccessFlags::TRANSFER_READ,
        };

        assert!(binding.needs_host_write_sync(
            PipelineStages::HOST,
            PipelineStages::TRANSFER,
            &barrier,
        ));
        assert!(!binding.needs_host_write_sync(
            PipelineStages::TOP_OF_PIPE,
            PipelineStages::TRANSFER,
            &barrier,
        ));
        assert!(!binding.needs_host_write_sync(
            PipelineStages::HOST,
            PipelineStages::TRANSFER,
            &MemoryBarrier {
                src_access: AccessFlags::MEMORY_WRITE,
                dst_access: AccessFlags::TRANSFER_READ,
            },
        ));
    }
}
