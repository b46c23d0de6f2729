//! Console output: tracing setup and the results summary.

use std::sync::OnceLock;
use std::time::Duration;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use sortbench_harness::BenchmarkResults;

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for the header line.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Column width for algorithm names.
const NAME_WIDTH: usize = 16;

/// Column width for one timing cell.
const CELL_WIDTH: usize = 13;

/// Initializes tracing output.
///
/// Safe to call multiple times - only the first call has effect.
/// Progress events from the harness print at info level by default;
/// `RUST_LOG` overrides the filter.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::builder()
            .with_default_directive("sortbench_harness=info".parse().unwrap())
            .from_env_lossy()
            .add_directive("sortbench=info".parse().unwrap());

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init();
    });
}

/// Prints the program header.
pub fn print_header() {
    println!(
        "{} {}",
        "sortbench".bright_cyan().bold(),
        format!("v{}", VERSION).bright_white()
    );
    println!(
        "{}",
        "comparative benchmark of classic sorting algorithms".dimmed()
    );
    println!();
}

/// Prints the averaged-duration table and the time-per-element summary.
pub fn print_summary(results: &BenchmarkResults) {
    println!();
    println!("{}", "Average sort time per input size".bold());

    let mut header = format!("{:<width$}", "Algorithm", width = NAME_WIDTH);
    for &size in results.sizes() {
        let label = format!("n={}", size.to_formatted_string(&Locale::en));
        header.push_str(&format!("{:>width$}", label, width = CELL_WIDTH));
    }
    println!("{}", header.bold());

    for row in results.rows() {
        let mut line = format!("{:<width$}", row.name(), width = NAME_WIDTH);
        for average in row.averages() {
            line.push_str(&format!(
                "{:>width$}",
                format_millis(*average),
                width = CELL_WIDTH
            ));
        }
        println!("{}", line);
    }

    println!();
    println!("{}", "Average time per element".bold());
    for row in results.rows() {
        if let Some(seconds) = results.time_per_element(row.name()) {
            println!(
                "  {:<width$}{}",
                row.name(),
                format!("{:.1e} s", seconds).bright_yellow(),
                width = NAME_WIDTH
            );
        }
    }
}

fn format_millis(duration: Duration) -> String {
    format!("{:.4} ms", duration.as_secs_f64() * 1000.0)
}
