//! The sorting algorithm suite.
//!
//! Eight classic strategies sharing one contract: consume a sequence,
//! return the same multiset of elements in non-decreasing order. Bubble,
//! comb, insertion, selection, shell, and heap sort reorder the buffer
//! they were handed; quick sort and merge sort allocate fresh sequences
//! as they recurse.

mod bubble;
mod comb;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;
mod shell;

pub use bubble::bubble_sort;
pub use comb::comb_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;
pub use shell::shell_sort;

/// A sorting routine as stored in the registry.
///
/// Consumes the input sequence and returns it fully ordered ascending.
pub type SortFn = fn(Vec<i32>) -> Vec<i32>;

/// A named sorting routine.
///
/// Pairs the reporting name with the function implementing it, so a
/// summary line can never drift out of step with the routine it
/// describes.
///
/// # Example
///
/// ```
/// use sortbench_core::sorts::ALGORITHMS;
///
/// let sorted = ALGORITHMS[0].run(vec![3, 1, 2]);
/// assert_eq!(sorted, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Algorithm {
    /// Name used in reports and log events.
    pub name: &'static str,
    /// The sorting routine itself.
    pub sort: SortFn,
}

impl Algorithm {
    /// Runs the algorithm on `values`.
    pub fn run(&self, values: Vec<i32>) -> Vec<i32> {
        (self.sort)(values)
    }
}

/// Every algorithm in the suite, in reporting order.
///
/// Built once at compile time and never mutated.
///
/// # Example
///
/// ```
/// use sortbench_core::sorts::ALGORITHMS;
///
/// assert_eq!(ALGORITHMS.len(), 8);
/// assert_eq!(ALGORITHMS[0].name, "Bubble Sort");
/// ```
pub const ALGORITHMS: [Algorithm; 8] = [
    Algorithm {
        name: "Bubble Sort",
        sort: bubble_sort,
    },
    Algorithm {
        name: "Comb Sort",
        sort: comb_sort,
    },
    Algorithm {
        name: "Insertion Sort",
        sort: insertion_sort,
    },
    Algorithm {
        name: "Selection Sort",
        sort: selection_sort,
    },
    Algorithm {
        name: "Quick Sort",
        sort: quick_sort,
    },
    Algorithm {
        name: "Merge Sort",
        sort: merge_sort,
    },
    Algorithm {
        name: "Shell Sort",
        sort: shell_sort,
    },
    Algorithm {
        name: "Heap Sort",
        sort: heap_sort,
    },
];

#[cfg(test)]
mod tests;
