//! Comb sort.

/// Divisor applied to the gap after each pass.
const SHRINK_FACTOR: f64 = 1.23;

/// Comb sort - bubble sort over a shrinking comparison gap.
///
/// Starts with a gap of `floor(n / 1.23)` and divides it by 1.23
/// (truncating) after every pass. Once the gap reaches 1 the passes are
/// plain adjacent comparisons, and the sort stops at the first gap-1
/// pass that swaps nothing. A zero-swap pass at a wider gap does not
/// stop the sort.
///
/// # Example
///
/// ```
/// use sortbench_core::sorts::comb_sort;
///
/// assert_eq!(comb_sort(vec![5, 3, 8, 1]), vec![1, 3, 5, 8]);
/// ```
pub fn comb_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    // The gap formula yields 0 for sequences this short.
    if values.len() <= 1 {
        return values;
    }
    let mut gap = (values.len() as f64 / SHRINK_FACTOR) as usize;
    loop {
        let swapped = comb_pass(&mut values, gap);
        if gap == 1 && !swapped {
            break;
        }
        if gap > 1 {
            gap = (gap as f64 / SHRINK_FACTOR) as usize;
        }
    }
    values
}

/// One pass comparing elements `gap` apart. Returns true if any pair was
/// swapped.
fn comb_pass<T: Ord>(values: &mut [T], gap: usize) -> bool {
    let mut swapped = false;
    for i in 0..values.len() - gap {
        if values[i] > values[i + gap] {
            values.swap(i, i + gap);
            swapped = true;
        }
    }
    swapped
}
