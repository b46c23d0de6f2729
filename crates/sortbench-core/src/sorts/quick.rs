//! Quick sort.

/// Quick sort - recursive partitioning around a pivot taken from the end.
///
/// The pivot is always the last element of the current sub-sequence; the
/// remaining elements split into a low partition (`<=` pivot) and a high
/// partition (`>` pivot), each keeping its relative order, and the
/// partitions are sorted recursively. Allocates fresh sequences rather
/// than partitioning in place. Average O(n log n); already-sorted input
/// is the O(n²) worst case for this pivot choice.
///
/// # Example
///
/// ```
/// use sortbench_core::sorts::quick_sort;
///
/// assert_eq!(quick_sort(vec![5, 3, 8, 1]), vec![1, 3, 5, 8]);
/// ```
pub fn quick_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    if values.len() <= 1 {
        return values;
    }
    let Some(pivot) = values.pop() else {
        return values;
    };
    let mut low = Vec::new();
    let mut high = Vec::new();
    for value in values {
        if value <= pivot {
            low.push(value);
        } else {
            high.push(value);
        }
    }
    let mut sorted = quick_sort(low);
    sorted.push(pivot);
    sorted.extend(quick_sort(high));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_pivot_empties_the_low_partition() {
        // Pivot 1 sends every other element to the high partition.
        assert_eq!(quick_sort(vec![4, 2, 4, 1]), vec![1, 2, 4, 4]);
    }

    #[test]
    fn test_sorted_input_degenerates_without_breaking() {
        assert_eq!(quick_sort(vec![1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5]);
    }
}
