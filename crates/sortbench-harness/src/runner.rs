//! Benchmark execution.

use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use sortbench_core::sorts::{Algorithm, ALGORITHMS};
use sortbench_core::verify::verify_sorted;
use sortbench_core::Result;

use crate::config::BenchmarkConfig;
use crate::generator::InputGenerator;
use crate::result::BenchmarkResults;

/// Times one algorithm on `input`, returning the elapsed wall-clock span.
///
/// The algorithm receives its own copy of `input`, taken before the
/// clock starts, so the measured span covers the sort alone. The
/// pristine original stays behind for verification, which runs on every
/// invocation: a duration is returned only for output matching the
/// reference ordering.
///
/// # Errors
///
/// Propagates the verifier's failure when the output is mis-sorted; the
/// measured duration is discarded in that case.
pub fn run_timed(algorithm: &Algorithm, input: &[i32]) -> Result<Duration> {
    let work = input.to_vec();

    let start = Instant::now();
    let output = (algorithm.sort)(work);
    let elapsed = start.elapsed();

    verify_sorted(&output, input)?;
    trace!(
        event = "sort_timed",
        algorithm = algorithm.name,
        size = input.len(),
        micros = elapsed.as_micros() as u64,
    );
    Ok(elapsed)
}

/// Divides per-algorithm duration totals by the repeat count.
fn average_totals(totals: Vec<Duration>, repeats: usize) -> Vec<Duration> {
    totals
        .into_iter()
        .map(|total| total / repeats as u32)
        .collect()
}

/// Drives the full benchmark: size sweep × repeats × algorithm suite.
///
/// Every repeat draws a fresh random sequence; every algorithm sorts its
/// own copy of that sequence, so no algorithm ever sees another's
/// mutations. Durations are summed per algorithm across the repeats of a
/// size, then divided by the repeat count.
///
/// # Example
///
/// ```
/// use sortbench_harness::{BenchmarkConfig, BenchmarkRunner};
///
/// let config = BenchmarkConfig::new().with_repeats(2).with_sizes(vec![16]).with_seed(11);
/// let mut runner = BenchmarkRunner::new(config).unwrap();
/// let results = runner.run().unwrap();
///
/// assert_eq!(results.rows().len(), 8);
/// assert_eq!(results.rows()[0].averages().len(), 1);
/// ```
#[derive(Debug)]
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    generator: InputGenerator,
}

impl BenchmarkRunner {
    /// Creates a runner, validating the configuration first.
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error, so no invalid run
    /// ever starts.
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        config.validate()?;
        let generator = match config.seed() {
            Some(seed) => InputGenerator::with_seed(seed),
            None => InputGenerator::new(),
        };
        Ok(Self { config, generator })
    }

    /// Returns the configuration this runner was built with.
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Runs the whole sweep and returns the aggregated table.
    ///
    /// # Errors
    ///
    /// Stops at the first verification failure instead of folding a
    /// defective timing into the averages.
    pub fn run(&mut self) -> Result<BenchmarkResults> {
        let repeats = self.config.repeats();
        let sizes = self.config.sizes().to_vec();

        info!(
            event = "benchmark_start",
            algorithms = ALGORITHMS.len(),
            sizes = sizes.len(),
            repeats = repeats,
        );

        let mut results = BenchmarkResults::new(sizes.clone());
        for &size in &sizes {
            let size_started = Instant::now();
            let mut totals = vec![Duration::ZERO; ALGORITHMS.len()];

            for _ in 0..repeats {
                let input = self.generator.generate(size);
                for (total, algorithm) in totals.iter_mut().zip(ALGORITHMS.iter()) {
                    *total += run_timed(algorithm, &input)?;
                }
            }

            for (index, average) in average_totals(totals, repeats).into_iter().enumerate() {
                debug!(
                    event = "size_average",
                    algorithm = ALGORITHMS[index].name,
                    size = size,
                    micros = average.as_micros() as u64,
                );
                results.push_average(index, average);
            }
            info!(
                event = "size_complete",
                size = size,
                duration_ms = size_started.elapsed().as_millis() as u64,
            );
        }

        info!(event = "benchmark_complete", sizes = sizes.len());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::SortBenchError;

    #[test]
    fn test_averaging_divides_summed_durations_by_the_repeat_count() {
        // Two repeats timed at 10 ms and 20 ms must average to 15 ms.
        let total = Duration::from_millis(10) + Duration::from_millis(20);
        let averages = average_totals(vec![total], 2);
        assert_eq!(averages, vec![Duration::from_millis(15)]);
    }

    #[test]
    fn test_run_timed_returns_a_duration_for_correct_output() {
        let algorithm = &ALGORITHMS[0];
        let duration = run_timed(algorithm, &[5, 3, 8, 1]).unwrap();
        assert!(duration >= Duration::ZERO);
    }

    #[test]
    fn test_run_timed_surfaces_a_defective_algorithm() {
        fn drops_an_element(mut values: Vec<i32>) -> Vec<i32> {
            values.pop();
            values.sort_unstable();
            values
        }
        let defective = Algorithm {
            name: "Lossy Sort",
            sort: drops_an_element,
        };

        let result = run_timed(&defective, &[5, 3, 8, 1]);
        assert!(matches!(
            result,
            Err(SortBenchError::LengthMismatch {
                expected: 4,
                actual: 3,
            })
        ));
    }

    #[test]
    fn test_run_timed_rejects_misordered_output() {
        fn reverses(mut values: Vec<i32>) -> Vec<i32> {
            values.sort_unstable();
            values.reverse();
            values
        }
        let defective = Algorithm {
            name: "Descending Sort",
            sort: reverses,
        };

        let result = run_timed(&defective, &[1, 2, 3]);
        assert!(matches!(
            result,
            Err(SortBenchError::OrderMismatch { index: 0, .. })
        ));
    }

    #[test]
    fn test_rejected_configs_never_build_a_runner() {
        let config = BenchmarkConfig::new().with_repeats(0);
        assert!(matches!(
            BenchmarkRunner::new(config),
            Err(SortBenchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_seeded_runs_share_inputs_across_algorithms() {
        let config = BenchmarkConfig::new()
            .with_repeats(1)
            .with_sizes(vec![32, 64])
            .with_seed(5);
        let mut runner = BenchmarkRunner::new(config).unwrap();
        let results = runner.run().unwrap();

        assert_eq!(results.sizes(), &[32, 64]);
        for row in results.rows() {
            assert_eq!(row.averages().len(), 2);
        }
    }
}
