use bitflags::bitflags;

bitflags! {
    /// Memory properties of a memory object.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
    pub struct MemoryPropertyFlags: u8 {
        /// Hints that memory allocated with this type is most efficient for device access.
        const DEVICE_LOCAL = 0x01;

        /// Specifies that memory allocated with this type can be mapped for host access.
        const HOST_VISIBLE = 0x02;

        /// Specifies that host writes and device writes to memory allocated with this type
        /// become visible to the other side without explicit flush or invalidate.
        const HOST_COHERENT = 0x04;

        /// Specifies that memory allocated with this type is cached on the host.
        const HOST_CACHED = 0x08;

        /// Specifies that memory allocated with this type may be committed lazily.
        const LAZILY_ALLOCATED = 0x10;
    }
}

bitflags! {
    /// Stages of pipeline execution between which barriers order memory accesses.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
    pub struct PipelineStages: u32 {
        const TOP_OF_PIPE = 0x0001;
        const DRAW_INDIRECT = 0x0002;
        const VERTEX_INPUT = 0x0004;
        const VERTEX_SHADER = 0x0008;
        const FRAGMENT_SHADER = 0x0010;
        const EARLY_FRAGMENT_TESTS = 0x0020;
        const LATE_FRAGMENT_TESTS = 0x0040;
        const COLOR_ATTACHMENT_OUTPUT = 0x0080;
        const COMPUTE_SHADER = 0x0100;
        const TRANSFER = 0x0200;
        const BOTTOM_OF_PIPE = 0x0400;

        /// Pseudo-stage for reads and writes performed by the host through a mapping.
        const HOST = 0x0800;

        const ALL_GRAPHICS = 0x1000;
        const ALL_COMMANDS = 0x2000;
    }
}

bitflags! {
    /// Kinds of memory access ordered by barriers.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
    pub struct AccessFlags: u32 {
        const INDIRECT_COMMAND_READ = 0x0001;
        const INDEX_READ = 0x0002;
        const VERTEX_ATTRIBUTE_READ = 0x0004;
        const UNIFORM_READ = 0x0008;
        const SHADER_READ = 0x0010;
        const SHADER_WRITE = 0x0020;
        const COLOR_ATTACHMENT_READ = 0x0040;
        const COLOR_ATTACHMENT_WRITE = 0x0080;
        const DEPTH_STENCIL_READ = 0x0100;
        const DEPTH_STENCIL_WRITE = 0x0200;
        const TRANSFER_READ = 0x0400;
        const TRANSFER_WRITE = 0x0800;

        /// Read performed by the host through a mapping.
        const HOST_READ = 0x1000;

        /// Write performed by the host through a mapping.
        const HOST_WRITE = 0x2000;

        const MEMORY_READ = 0x4000;
        const MEMORY_WRITE = 0x8000;
    }
}

/// Describes which prior accesses a barrier makes available and which
/// subsequent accesses it makes visible.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MemoryBarrier {
    /// Accesses that must complete before the barrier.
    pub src_access: AccessFlags,

    /// Accesses that must wait for the barrier.
    pub dst_access: AccessFlags,
}
