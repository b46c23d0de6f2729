//! Heap sort.

/// Heap sort - in-place selection through a binary max-heap.
///
/// Builds a max-heap with `heapify` calls from the last parent index
/// `n / 2 - 1` down to the root, then repeatedly swaps the root with the
/// last unsorted position and re-heapifies a heap one element shorter.
/// Children of node `i` sit at `2 * i + 1` and `2 * i + 2`. O(n log n)
/// in every case.
///
/// # Example
///
/// ```
/// use sortbench_core::sorts::heap_sort;
///
/// assert_eq!(heap_sort(vec![5, 3, 8, 1]), vec![1, 3, 5, 8]);
/// ```
pub fn heap_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    let n = values.len();
    for root in (0..n / 2).rev() {
        heapify(&mut values, n, root);
    }
    for end in (1..n).rev() {
        values.swap(0, end);
        heapify(&mut values, end, 0);
    }
    values
}

/// Restores the max-heap property for the subtree rooted at `root`,
/// considering only the first `heap_size` elements.
fn heapify<T: Ord>(values: &mut [T], heap_size: usize, root: usize) {
    let left = 2 * root + 1;
    let right = 2 * root + 2;
    let mut largest = root;

    if left < heap_size && values[left] > values[largest] {
        largest = left;
    }
    if right < heap_size && values[right] > values[largest] {
        largest = right;
    }
    if largest != root {
        values.swap(root, largest);
        heapify(values, heap_size, largest);
    }
}
