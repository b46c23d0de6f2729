//! Shell sort.

/// Shell sort - insertion sort over a halving gap sequence.
///
/// Runs gap-separated insertion passes with the gap starting at
/// `floor(n / 2)` and halving after each pass, finishing with an
/// ordinary insertion pass at gap 1. Each chain of swaps walks back
/// toward the start and stops as soon as no swap is needed.
///
/// # Example
///
/// ```
/// use sortbench_core::sorts::shell_sort;
///
/// assert_eq!(shell_sort(vec![5, 3, 8, 1]), vec![1, 3, 5, 8]);
/// ```
pub fn shell_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    let mut gap = values.len() / 2;
    while gap > 0 {
        for i in gap..values.len() {
            let mut j = i;
            while j >= gap && values[j] < values[j - gap] {
                values.swap(j, j - gap);
                j -= gap;
            }
        }
        gap /= 2;
    }
    values
}
