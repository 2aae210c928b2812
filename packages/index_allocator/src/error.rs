use thiserror::Error;

/// Errors that can occur when allocating indices.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The index space of the chosen width is exhausted: every value below
    /// the sentinel has been issued and none has been freed.
    ///
    /// This is not retryable as-is - the caller must free an index, evict
    /// something, or switch to a wider index type.
    #[error("index space of {index_type} is exhausted: all allocatable values have been issued")]
    OutOfCapacity {
        /// Name of the index type whose value space was exhausted.
        index_type: &'static str,
    },
}

/// A specialized `Result` type for index allocation operations, returning the
/// crate's [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
