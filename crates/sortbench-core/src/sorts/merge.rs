//! Merge sort.

/// Merge sort - recursive halving with an ordered merge.
///
/// Splits at `floor(n / 2)`, sorts each half, and merges by repeatedly
/// taking the smaller front. When the fronts are equal the right half's
/// element is taken first, so equal keys do not keep their original
/// relative order. Allocates fresh sequences rather than merging in
/// place. O(n log n) in every case.
///
/// # Example
///
/// ```
/// use sortbench_core::sorts::merge_sort;
///
/// assert_eq!(merge_sort(vec![5, 3, 8, 1]), vec![1, 3, 5, 8]);
/// ```
pub fn merge_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    if values.len() <= 1 {
        return values;
    }
    let mid = values.len() / 2;
    let right = values.split_off(mid);
    merge(merge_sort(values), merge_sort(right))
}

/// Merges two sorted sequences, preferring the right front on ties.
fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if r <= l {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }
    merged.extend(left);
    merged.extend(right);
    merged
}
