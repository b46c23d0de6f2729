//! Error types for sortbench

use thiserror::Error;

/// Main error type for sortbench operations.
///
/// Ordering failures are not recoverable: they mean an algorithm under
/// test is defective, and a timing taken from a defective run must never
/// reach the aggregates. Callers propagate them to the process boundary
/// instead of retrying.
#[derive(Debug, Error)]
pub enum SortBenchError {
    /// Sorted output holds a different number of elements than the input,
    /// so elements were dropped or duplicated.
    #[error("output holds {actual} elements, input had {expected}")]
    LengthMismatch {
        /// Element count of the input sequence.
        expected: usize,
        /// Element count of the sorted output.
        actual: usize,
    },

    /// Sorted output differs element-wise from the reference ordering.
    #[error("output diverges from the reference ordering at index {index}: expected {expected}, found {found}")]
    OrderMismatch {
        /// First index where the two sequences differ.
        index: usize,
        /// Value the reference ordering holds at that index.
        expected: i32,
        /// Value the output holds at that index.
        found: i32,
    },

    /// Benchmark configuration cannot produce a meaningful run.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing a report to disk failed.
    #[error("report I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for sortbench operations.
pub type Result<T> = std::result::Result<T, SortBenchError>;
