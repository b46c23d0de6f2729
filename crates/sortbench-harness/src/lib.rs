//! Benchmark harness for the sortbench sorting suite.
//!
//! This crate drives the comparison: it generates random inputs, times
//! every registered algorithm on identical copies, verifies each result
//! against a reference ordering, and aggregates averaged timings into a
//! table reporting code can render.
//!
//! # Overview
//!
//! - Configure a run with [`BenchmarkConfig`] (repeats, sizes, seed,
//!   export paths)
//! - Execute it with [`BenchmarkRunner`], which walks the size sweep and
//!   averages durations per (algorithm, size) pair
//! - Read the aggregated [`BenchmarkResults`] table, or export it with
//!   [`CsvExporter`], [`MarkdownReport`], or [`JsonExporter`]
//!
//! # Example
//!
//! ```
//! use sortbench_harness::{BenchmarkConfig, BenchmarkRunner};
//!
//! let config = BenchmarkConfig::new()
//!     .with_repeats(1)
//!     .with_sizes(vec![8, 16])
//!     .with_seed(7);
//!
//! let mut runner = BenchmarkRunner::new(config).unwrap();
//! let results = runner.run().unwrap();
//!
//! assert_eq!(results.sizes(), &[8, 16]);
//! assert_eq!(results.rows().len(), 8);
//! ```

mod config;
mod generator;
mod report;
mod result;
mod runner;

pub use config::{BenchmarkConfig, DEFAULT_REPEATS, DEFAULT_SIZES};
pub use generator::{InputGenerator, VALUE_CEILING};
pub use report::{CsvExporter, JsonExporter, MarkdownReport};
pub use result::{AlgorithmTimings, BenchmarkResults};
pub use runner::{run_timed, BenchmarkRunner};

pub use sortbench_core::{Result, SortBenchError};
