//!
//! Implementation agnostic resource memory binding and barrier policy for Vulkan like APIs.
//!
//! A resource (buffer or image) is associated with a range of an externally
//! owned memory object via [`ResourceBinding`]. Around pipeline barriers the
//! binding decides whether data must be resynchronized between the host and
//! the device domains before the barrier counts as satisfied. Concrete
//! resource kinds implement [`Resource`] on top of that shared state.
//!

#![cfg_attr(not(feature = "std"), no_std)]

mod barrier;
mod binding;
mod error;
mod range;
mod resource;

pub use {
    self::{binding::*, error::*, range::*, resource::*},
    gpu_bind_types::*,
};

/// Memory requirements reported by a resource kind before it is realized.
///
/// `size` and `align_mask` feed back into the binding invariants once the
/// resource is bound with [`ResourceBinding::bind_device_memory`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryRequirements {
    /// Minimal size of the memory range the resource must be bound to.
    pub size: u64,

    /// Minimal alignment mask any bound offset must satisfy.
    pub align_mask: u64,

    /// Bitset of memory types the resource is compatible with.
    pub memory_types: u32,
}
