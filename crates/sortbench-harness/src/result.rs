//! Benchmark result table.

use std::time::Duration;

use sortbench_core::sorts::ALGORITHMS;

/// Averaged timings for one algorithm across the size sweep.
#[derive(Debug, Clone)]
pub struct AlgorithmTimings {
    name: &'static str,
    averages: Vec<Duration>,
}

impl AlgorithmTimings {
    /// Algorithm name as listed in the registry.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Averaged durations, aligned with the ordered size list.
    pub fn averages(&self) -> &[Duration] {
        &self.averages
    }
}

/// The aggregated benchmark table: one row per registered algorithm,
/// one averaged duration per swept size.
///
/// The runner builds the table incrementally; everything public on it is
/// read-only, so a table handed to reporting can no longer change.
///
/// # Example
///
/// ```
/// use sortbench_harness::{BenchmarkConfig, BenchmarkRunner};
///
/// let config = BenchmarkConfig::new().with_repeats(1).with_sizes(vec![8]).with_seed(3);
/// let results = BenchmarkRunner::new(config).unwrap().run().unwrap();
///
/// assert!(results.average_for("Heap Sort", 8).is_some());
/// assert!(results.average_for("Heap Sort", 999).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkResults {
    sizes: Vec<usize>,
    rows: Vec<AlgorithmTimings>,
}

impl BenchmarkResults {
    /// Creates an empty table with one row per registered algorithm.
    pub(crate) fn new(sizes: Vec<usize>) -> Self {
        let rows = ALGORITHMS
            .iter()
            .map(|algorithm| AlgorithmTimings {
                name: algorithm.name,
                averages: Vec::with_capacity(sizes.len()),
            })
            .collect();
        Self { sizes, rows }
    }

    /// Appends the next size's averaged duration to row `index`.
    ///
    /// Rows follow registry order; sizes must arrive in sweep order.
    pub(crate) fn push_average(&mut self, index: usize, average: Duration) {
        self.rows[index].averages.push(average);
    }

    /// The ordered input sizes the sweep ran over.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Per-algorithm rows, in registry order.
    pub fn rows(&self) -> &[AlgorithmTimings] {
        &self.rows
    }

    /// Averaged duration for one (algorithm, size) pair.
    pub fn average_for(&self, algorithm: &str, size: usize) -> Option<Duration> {
        let row = self.rows.iter().find(|row| row.name == algorithm)?;
        let index = self.sizes.iter().position(|&s| s == size)?;
        row.averages.get(index).copied()
    }

    /// Average time one algorithm spends per element, in seconds.
    ///
    /// Computed as the grand mean of (averaged duration / size) across
    /// the sweep: the per-size quotients are summed and divided by the
    /// number of sizes. Returns `None` for a name not in the registry.
    pub fn time_per_element(&self, algorithm: &str) -> Option<f64> {
        let row = self.rows.iter().find(|row| row.name == algorithm)?;
        if self.sizes.is_empty() {
            return None;
        }
        let sum: f64 = row
            .averages
            .iter()
            .zip(self.sizes.iter())
            .map(|(average, &size)| average.as_secs_f64() / size as f64)
            .sum();
        Some(sum / self.sizes.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> BenchmarkResults {
        let mut results = BenchmarkResults::new(vec![100, 200]);
        for index in 0..ALGORITHMS.len() {
            results.push_average(index, Duration::from_millis(10));
            results.push_average(index, Duration::from_millis(20));
        }
        results
    }

    #[test]
    fn test_rows_follow_the_registry() {
        let results = table();
        assert_eq!(results.rows().len(), ALGORITHMS.len());
        for (row, algorithm) in results.rows().iter().zip(ALGORITHMS.iter()) {
            assert_eq!(row.name(), algorithm.name);
            assert_eq!(row.averages().len(), 2);
        }
    }

    #[test]
    fn test_average_for_looks_up_by_name_and_size() {
        let results = table();
        assert_eq!(
            results.average_for("Bubble Sort", 200),
            Some(Duration::from_millis(20))
        );
        assert_eq!(results.average_for("Bogo Sort", 200), None);
        assert_eq!(results.average_for("Bubble Sort", 300), None);
    }

    #[test]
    fn test_time_per_element_is_the_grand_mean_of_quotients() {
        let results = table();
        // (0.010 / 100 + 0.020 / 200) / 2 = 0.0001
        let per_element = results.time_per_element("Quick Sort").unwrap();
        assert!((per_element - 0.0001).abs() < 1e-12);
    }

    #[test]
    fn test_time_per_element_rejects_unknown_names() {
        assert!(table().time_per_element("Sleep Sort").is_none());
    }
}
