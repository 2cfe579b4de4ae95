use thiserror::Error;

/// Error type for slot-buffer allocation failures
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum AllocError {
    /// The allocator could not provide a buffer of the requested size
    #[error("buffer allocation failed: {requested} slots requested")]
    OutOfMemory {
        /// Number of slots requested from the allocator
        requested: usize,
    },
}
