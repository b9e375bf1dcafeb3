//! Error types for layout operations.

use thiserror::Error;

/// Errors reported when arranging a sibling row of classifiers.
///
/// Arrangement errors are local: the caller fixes the offending input and
/// retries; nothing propagates beyond the arranging call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArrangeError {
    /// Two classifiers in the same row carry the same order key.
    #[error("duplicate order key {0} in row")]
    DuplicateOrder(i32),

    /// The row holds more classifiers than a single pass supports.
    #[error("too many classifiers in one row (capacity {0})")]
    TooManyClassifiers(usize),
}
