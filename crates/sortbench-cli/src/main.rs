//! Command-line entry point for sortbench.

mod console;

use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing::info;

use sortbench_harness::{
    BenchmarkConfig, BenchmarkResults, BenchmarkRunner, CsvExporter, JsonExporter, MarkdownReport,
    Result, DEFAULT_REPEATS,
};

/// Comparative benchmark of classic in-memory sorting algorithms.
#[derive(Debug, Parser)]
#[command(name = "sortbench", version, about)]
struct Args {
    /// Number of repeated runs averaged per input size
    #[arg(short = 'r', long, default_value_t = DEFAULT_REPEATS)]
    repeats: usize,

    /// Fixed seed for deterministic input generation
    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated input sizes overriding the default sweep
    #[arg(long, value_delimiter = ',', value_name = "N,N,...")]
    sizes: Option<Vec<usize>>,

    /// Write the result table as CSV to this path
    #[arg(long, value_name = "PATH")]
    csv: Option<String>,

    /// Write a Markdown report to this path
    #[arg(long, value_name = "PATH")]
    markdown: Option<String>,

    /// Write the result table as JSON to this path
    #[arg(long, value_name = "PATH")]
    json: Option<String>,
}

impl Args {
    fn into_config(self) -> BenchmarkConfig {
        let mut config = BenchmarkConfig::new().with_repeats(self.repeats);
        if let Some(sizes) = self.sizes {
            config = config.with_sizes(sizes);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(path) = self.csv {
            config = config.with_csv_output(path);
        }
        if let Some(path) = self.markdown {
            config = config.with_markdown_output(path);
        }
        if let Some(path) = self.json {
            config = config.with_json_output(path);
        }
        config
    }
}

fn main() {
    let args = Args::parse();
    console::init();

    if let Err(error) = run(args) {
        eprintln!("{} {}", "error:".red().bold(), error);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    console::print_header();

    let mut runner = BenchmarkRunner::new(args.into_config())?;
    let results = runner.run()?;

    write_exports(runner.config(), &results)?;
    console::print_summary(&results);
    Ok(())
}

fn write_exports(config: &BenchmarkConfig, results: &BenchmarkResults) -> Result<()> {
    if let Some(path) = config.csv_output_path() {
        CsvExporter::to_file(results, path)?;
        info!(event = "report_written", format = "csv", path = path);
    }
    if let Some(path) = config.markdown_output_path() {
        MarkdownReport::to_file(results, path)?;
        info!(event = "report_written", format = "markdown", path = path);
    }
    if let Some(path) = config.json_output_path() {
        JsonExporter::to_file(results, path)?;
        info!(event = "report_written", format = "json", path = path);
    }
    Ok(())
}
