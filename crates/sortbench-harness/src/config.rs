//! Benchmark configuration.

use sortbench_core::{Result, SortBenchError};

/// Default number of repeated runs averaged per input size.
pub const DEFAULT_REPEATS: usize = 3;

/// Default input-size sweep, doubling from 25 to 12,800.
pub const DEFAULT_SIZES: [usize; 10] = [25, 50, 100, 200, 400, 800, 1600, 3200, 6400, 12800];

/// Configuration for a benchmark run.
///
/// Controls the repeat count, the input-size sweep, deterministic
/// seeding, and optional export paths.
///
/// # Example
///
/// ```
/// use sortbench_harness::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new()
///     .with_repeats(5)
///     .with_sizes(vec![100, 200]);
///
/// assert_eq!(config.repeats(), 5);
/// assert_eq!(config.sizes(), &[100, 200]);
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    repeats: usize,
    sizes: Vec<usize>,
    seed: Option<u64>,
    csv_output_path: Option<String>,
    markdown_output_path: Option<String>,
    json_output_path: Option<String>,
}

impl BenchmarkConfig {
    /// Creates a configuration with the default sweep.
    ///
    /// Defaults:
    /// - repeats: 3
    /// - sizes: 25 through 12,800, doubling
    /// - seed: none (inputs drawn from the OS entropy source)
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_harness::{BenchmarkConfig, DEFAULT_SIZES};
    ///
    /// let config = BenchmarkConfig::new();
    /// assert_eq!(config.repeats(), 3);
    /// assert_eq!(config.sizes(), &DEFAULT_SIZES);
    /// ```
    pub fn new() -> Self {
        Self {
            repeats: DEFAULT_REPEATS,
            sizes: DEFAULT_SIZES.to_vec(),
            seed: None,
            csv_output_path: None,
            markdown_output_path: None,
            json_output_path: None,
        }
    }

    /// Sets the number of repeated runs averaged per size.
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_harness::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new().with_repeats(10);
    /// assert_eq!(config.repeats(), 10);
    /// ```
    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    /// Replaces the input-size sweep.
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_harness::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new().with_sizes(vec![50, 500]);
    /// assert_eq!(config.sizes(), &[50, 500]);
    /// ```
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Sets a fixed seed so every run draws identical inputs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the output path for CSV export.
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_harness::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new().with_csv_output("results.csv");
    /// assert_eq!(config.csv_output_path(), Some("results.csv"));
    /// ```
    pub fn with_csv_output(mut self, path: impl Into<String>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    /// Sets the output path for the Markdown report.
    pub fn with_markdown_output(mut self, path: impl Into<String>) -> Self {
        self.markdown_output_path = Some(path.into());
        self
    }

    /// Sets the output path for JSON export.
    pub fn with_json_output(mut self, path: impl Into<String>) -> Self {
        self.json_output_path = Some(path.into());
        self
    }

    /// Returns the repeat count.
    pub fn repeats(&self) -> usize {
        self.repeats
    }

    /// Returns the ordered input sizes.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Returns the fixed seed, if set.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the CSV output path, if set.
    pub fn csv_output_path(&self) -> Option<&str> {
        self.csv_output_path.as_deref()
    }

    /// Returns the Markdown output path, if set.
    pub fn markdown_output_path(&self) -> Option<&str> {
        self.markdown_output_path.as_deref()
    }

    /// Returns the JSON output path, if set.
    pub fn json_output_path(&self) -> Option<&str> {
        self.json_output_path.as_deref()
    }

    /// Rejects configurations that cannot produce a meaningful run.
    ///
    /// Runs with zero repeats would have nothing to average; an empty
    /// size list would sweep nothing; a zero size has no per-element
    /// time. All three fail here, before any timing starts.
    ///
    /// # Errors
    ///
    /// Returns [`SortBenchError::InvalidConfig`] naming the offending
    /// field.
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_harness::BenchmarkConfig;
    ///
    /// assert!(BenchmarkConfig::new().validate().is_ok());
    /// assert!(BenchmarkConfig::new().with_repeats(0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.repeats < 1 {
            return Err(SortBenchError::InvalidConfig(
                "repeat count must be at least 1".to_string(),
            ));
        }
        if self.sizes.is_empty() {
            return Err(SortBenchError::InvalidConfig(
                "size list must not be empty".to_string(),
            ));
        }
        if self.sizes.contains(&0) {
            return Err(SortBenchError::InvalidConfig(
                "input sizes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new()
    }
}
