//! sortbench core - sorting algorithms under comparison
//!
//! This crate provides the pieces the benchmark harness measures:
//! - Eight classic sorting algorithms sharing one contract
//! - A static registry pairing each algorithm with its reporting name
//! - A verifier that gates every timed result against a reference ordering
//! - The error type shared across the sortbench crates

pub mod error;
pub mod sorts;
pub mod verify;

pub use error::{Result, SortBenchError};
pub use sorts::{
    bubble_sort, comb_sort, heap_sort, insertion_sort, merge_sort, quick_sort, selection_sort,
    shell_sort, Algorithm, SortFn, ALGORITHMS,
};
pub use verify::verify_sorted;
