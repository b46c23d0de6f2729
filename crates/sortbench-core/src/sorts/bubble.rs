//! Bubble sort.

/// Bubble sort - repeated adjacent-exchange passes.
///
/// Each pass walks the sequence left to right and swaps every adjacent
/// out-of-order pair; a pass that swaps nothing means the sequence is
/// sorted. Takes at most `n` passes. O(n²) worst and average case, O(n)
/// when the input is already sorted.
///
/// # Example
///
/// ```
/// use sortbench_core::sorts::bubble_sort;
///
/// assert_eq!(bubble_sort(vec![5, 3, 8, 1]), vec![1, 3, 5, 8]);
/// ```
pub fn bubble_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    if values.len() <= 1 {
        return values;
    }
    while bubble_pass(&mut values) {}
    values
}

/// One full pass. Returns true if any pair was swapped.
fn bubble_pass<T: Ord>(values: &mut [T]) -> bool {
    let mut swapped = false;
    for i in 0..values.len() - 1 {
        if values[i] > values[i + 1] {
            values.swap(i, i + 1);
            swapped = true;
        }
    }
    swapped
}
