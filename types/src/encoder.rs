use crate::types::{MemoryBarrier, PipelineStages};

/// Purpose of the command being recorded.
///
/// Carried through to the encoder untouched so the command recording side
/// can attribute recorded commands to the operation that produced them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CommandUse {
    PipelineBarrier,
    CopyBuffer,
    CopyImage,
    QueueSubmit,
}

/// Abstract command stream that receives barriers not resolved on the host.
///
/// Recording is asynchronous with respect to device execution. Any host
/// transfer a barrier requires is performed by the resource before the
/// barrier reaches the encoder, never by the encoder itself.
pub trait CommandEncoder {
    /// Records a memory barrier between `src_stages` and `dst_stages`.
    fn record_memory_barrier(
        &mut self,
        src_stages: PipelineStages,
        dst_stages: PipelineStages,
        barrier: &MemoryBarrier,
        cmd_use: CommandUse,
    );
}
