//! Report generation for benchmark results.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::result::BenchmarkResults;

/// CSV exporter for the benchmark table.
///
/// One row per swept size: the size first, then every algorithm's
/// averaged duration in seconds, in registry order. The layout feeds
/// straight into external plotting.
///
/// # Example
///
/// ```
/// use sortbench_harness::{BenchmarkConfig, BenchmarkRunner, CsvExporter};
///
/// let config = BenchmarkConfig::new().with_repeats(1).with_sizes(vec![8]).with_seed(2);
/// let results = BenchmarkRunner::new(config).unwrap().run().unwrap();
///
/// let csv = CsvExporter::to_string(&results);
/// assert!(csv.starts_with("size,Bubble Sort,"));
/// assert_eq!(csv.lines().count(), 2);
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Renders the table as a CSV string.
    pub fn to_string(results: &BenchmarkResults) -> String {
        let mut output = String::new();

        write!(output, "size").unwrap();
        for row in results.rows() {
            write!(output, ",{}", row.name()).unwrap();
        }
        writeln!(output).unwrap();

        for (index, size) in results.sizes().iter().enumerate() {
            write!(output, "{}", size).unwrap();
            for row in results.rows() {
                write!(output, ",{:.9}", row.averages()[index].as_secs_f64()).unwrap();
            }
            writeln!(output).unwrap();
        }

        output
    }

    /// Writes the table as CSV to a file.
    pub fn to_file(results: &BenchmarkResults, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(results))
    }

    /// Writes the table as CSV to a writer.
    pub fn write<W: Write>(results: &BenchmarkResults, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(results).as_bytes())
    }
}

/// Markdown report generator.
///
/// Produces a human-readable report: the averaged-duration table
/// (milliseconds) and the per-algorithm time-per-element summary.
///
/// # Example
///
/// ```
/// use sortbench_harness::{BenchmarkConfig, BenchmarkRunner, MarkdownReport};
///
/// let config = BenchmarkConfig::new().with_repeats(1).with_sizes(vec![8]).with_seed(2);
/// let results = BenchmarkRunner::new(config).unwrap().run().unwrap();
///
/// let md = MarkdownReport::to_string(&results);
/// assert!(md.contains("# Sorting Benchmark"));
/// assert!(md.contains("## Time per Element"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Renders the report as a Markdown string.
    pub fn to_string(results: &BenchmarkResults) -> String {
        let mut output = String::new();

        writeln!(output, "# Sorting Benchmark").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "## Average Sort Time (ms)").unwrap();
        writeln!(output).unwrap();

        write!(output, "| Algorithm |").unwrap();
        for size in results.sizes() {
            write!(output, " n={} |", size).unwrap();
        }
        writeln!(output).unwrap();
        write!(output, "|-----------|").unwrap();
        for _ in results.sizes() {
            write!(output, "------|").unwrap();
        }
        writeln!(output).unwrap();

        for row in results.rows() {
            write!(output, "| {} |", row.name()).unwrap();
            for average in row.averages() {
                write!(output, " {:.4} |", average.as_secs_f64() * 1000.0).unwrap();
            }
            writeln!(output).unwrap();
        }
        writeln!(output).unwrap();

        writeln!(output, "## Time per Element").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| Algorithm | Seconds per element |").unwrap();
        writeln!(output, "|-----------|---------------------|").unwrap();
        for row in results.rows() {
            let per_element = results.time_per_element(row.name()).unwrap_or_default();
            writeln!(output, "| {} | {:.3e} |", row.name(), per_element).unwrap();
        }

        output
    }

    /// Writes the report to a file.
    pub fn to_file(results: &BenchmarkResults, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(results))
    }

    /// Writes the report to a writer.
    pub fn write<W: Write>(results: &BenchmarkResults, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(results).as_bytes())
    }
}

/// Serializable view of the benchmark table.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    sizes: &'a [usize],
    algorithms: Vec<JsonAlgorithmRow<'a>>,
}

/// One algorithm's timings in the JSON export.
#[derive(Debug, Serialize)]
struct JsonAlgorithmRow<'a> {
    name: &'a str,
    average_seconds: Vec<f64>,
    seconds_per_element: f64,
}

/// JSON exporter for the benchmark table.
///
/// Durations are exported as `f64` seconds so consumers do not have to
/// unpack a structured duration type.
///
/// # Example
///
/// ```
/// use sortbench_harness::{BenchmarkConfig, BenchmarkRunner, JsonExporter};
///
/// let config = BenchmarkConfig::new().with_repeats(1).with_sizes(vec![8]).with_seed(2);
/// let results = BenchmarkRunner::new(config).unwrap().run().unwrap();
///
/// let json = JsonExporter::to_string(&results);
/// assert!(json.contains("\"seconds_per_element\""));
/// ```
pub struct JsonExporter;

impl JsonExporter {
    /// Renders the table as a pretty-printed JSON string.
    pub fn to_string(results: &BenchmarkResults) -> String {
        let report = JsonReport {
            sizes: results.sizes(),
            algorithms: results
                .rows()
                .iter()
                .map(|row| JsonAlgorithmRow {
                    name: row.name(),
                    average_seconds: row.averages().iter().map(|d| d.as_secs_f64()).collect(),
                    seconds_per_element: results.time_per_element(row.name()).unwrap_or_default(),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&report).unwrap()
    }

    /// Writes the table as JSON to a file.
    pub fn to_file(results: &BenchmarkResults, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(results))
    }

    /// Writes the table as JSON to a writer.
    pub fn write<W: Write>(results: &BenchmarkResults, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(results).as_bytes())
    }
}
