//! Insertion sort.

/// Insertion sort - grows a sorted prefix one element at a time.
///
/// Each element is swapped leftward through the prefix until its
/// predecessor is no longer greater. O(n²) worst case, but cheap on
/// short or nearly-sorted sequences.
///
/// # Example
///
/// ```
/// use sortbench_core::sorts::insertion_sort;
///
/// assert_eq!(insertion_sort(vec![5, 3, 8, 1]), vec![1, 3, 5, 8]);
/// ```
pub fn insertion_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j] < values[j - 1] {
            values.swap(j, j - 1);
            j -= 1;
        }
    }
    values
}
