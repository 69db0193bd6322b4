use core::fmt::{self, Display};

/// Failure of an attempt to bind a resource to device memory.
///
/// A failed bind leaves the previous binding untouched, so the attempt may
/// be retried with corrected parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BindError {
    /// Offset is not a multiple of the alignment required by the resource.
    InvalidAlignment,

    /// Bound range does not fit into the memory object.
    OutOfBounds,
}

impl Display for BindError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::InvalidAlignment => {
                fmt.write_str("Binding offset does not satisfy resource alignment")
            }
            BindError::OutOfBounds => {
                fmt.write_str("Binding range does not fit into the memory object")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BindError {}
