//! Selection sort.

/// Selection sort - repeatedly swaps the minimum of the unsorted tail
/// into place.
///
/// For each position the scan covers every remaining position, keeping
/// the first index holding the smallest value seen (strict `<`, so ties
/// go to the leftmost occurrence), then swaps that value in. Always
/// O(n²) comparisons, at most `n - 1` swaps.
///
/// # Example
///
/// ```
/// use sortbench_core::sorts::selection_sort;
///
/// assert_eq!(selection_sort(vec![5, 3, 8, 1]), vec![1, 3, 5, 8]);
/// ```
pub fn selection_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    if values.len() <= 1 {
        return values;
    }
    for i in 0..values.len() - 1 {
        let mut min_index = i;
        for j in i..values.len() {
            if values[j] < values[min_index] {
                min_index = j;
            }
        }
        values.swap(i, min_index);
    }
    values
}
