//! Output verification against a trusted reference ordering.

use crate::error::{Result, SortBenchError};

/// Checks `output` against the reference ordering of `original`.
///
/// The reference is produced by the standard library sort, independent
/// of every algorithm under test. This runs after each timed invocation
/// as a mandatory postcondition: a failure here means the algorithm that
/// produced `output` is defective, and the run carrying it must stop.
///
/// # Errors
///
/// Returns [`SortBenchError::LengthMismatch`] if `output` and `original`
/// hold different numbers of elements, or
/// [`SortBenchError::OrderMismatch`] at the first position where
/// `output` differs from the reference ordering.
///
/// # Example
///
/// ```
/// use sortbench_core::verify::verify_sorted;
///
/// assert!(verify_sorted(&[1, 2, 3], &[3, 1, 2]).is_ok());
/// assert!(verify_sorted(&[3, 1, 2], &[3, 1, 2]).is_err());
/// ```
pub fn verify_sorted(output: &[i32], original: &[i32]) -> Result<()> {
    let mut reference = original.to_vec();
    reference.sort_unstable();

    if output.len() != reference.len() {
        return Err(SortBenchError::LengthMismatch {
            expected: reference.len(),
            actual: output.len(),
        });
    }
    for (index, (&found, &expected)) in output.iter().zip(reference.iter()).enumerate() {
        if found != expected {
            return Err(SortBenchError::OrderMismatch {
                index,
                expected,
                found,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_a_correct_ordering() {
        assert!(verify_sorted(&[1, 2, 2, 5], &[2, 5, 1, 2]).is_ok());
    }

    #[test]
    fn test_accepts_empty_sequences() {
        assert!(verify_sorted(&[], &[]).is_ok());
    }

    #[test]
    fn test_truncated_output_is_a_length_mismatch() {
        let result = verify_sorted(&[1, 2], &[2, 5, 1]);
        assert!(matches!(
            result,
            Err(SortBenchError::LengthMismatch {
                expected: 3,
                actual: 2,
            })
        ));
    }

    #[test]
    fn test_reordered_output_reports_the_first_divergent_index() {
        // Reference ordering of the input is [1, 2, 5]; the output is the
        // right length but diverges at index 1.
        let result = verify_sorted(&[1, 5, 2], &[2, 5, 1]);
        assert!(matches!(
            result,
            Err(SortBenchError::OrderMismatch {
                index: 1,
                expected: 2,
                found: 5,
            })
        ));
    }

    #[test]
    fn test_extra_elements_are_a_length_mismatch() {
        let result = verify_sorted(&[1, 1, 2, 5], &[2, 5, 1]);
        assert!(matches!(
            result,
            Err(SortBenchError::LengthMismatch { .. })
        ));
    }
}
