//! End-to-end tests for the benchmark harness.

use std::fs;

use sortbench_harness::{
    BenchmarkConfig, BenchmarkRunner, CsvExporter, JsonExporter, MarkdownReport, SortBenchError,
};

fn small_run() -> sortbench_harness::BenchmarkResults {
    let config = BenchmarkConfig::new()
        .with_repeats(2)
        .with_sizes(vec![16, 32])
        .with_seed(42);
    let mut runner = BenchmarkRunner::new(config).expect("config should validate");
    runner.run().expect("every algorithm should verify")
}

#[test]
fn test_seeded_sweep_populates_the_full_table() {
    let results = small_run();

    assert_eq!(results.sizes(), &[16, 32]);
    assert_eq!(results.rows().len(), 8);
    for row in results.rows() {
        assert_eq!(row.averages().len(), 2);
        assert!(results.time_per_element(row.name()).is_some());
    }
}

#[test]
fn test_average_lookup_matches_the_rows() {
    let results = small_run();

    for row in results.rows() {
        for (index, &size) in results.sizes().iter().enumerate() {
            assert_eq!(
                results.average_for(row.name(), size),
                Some(row.averages()[index])
            );
        }
    }
}

#[test]
fn test_invalid_configurations_are_rejected_up_front() {
    let zero_repeats = BenchmarkConfig::new().with_repeats(0);
    assert!(matches!(
        BenchmarkRunner::new(zero_repeats),
        Err(SortBenchError::InvalidConfig(_))
    ));

    let no_sizes = BenchmarkConfig::new().with_sizes(vec![]);
    assert!(matches!(
        BenchmarkRunner::new(no_sizes),
        Err(SortBenchError::InvalidConfig(_))
    ));
}

#[test]
fn test_csv_export_round_trips_through_a_file() {
    let results = small_run();
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("results.csv");

    CsvExporter::to_file(&results, &path).expect("write should succeed");
    let csv = fs::read_to_string(&path).expect("read back");

    assert!(csv.starts_with("size,Bubble Sort,"));
    assert_eq!(csv.lines().count(), 3);
}

#[test]
fn test_markdown_and_json_exports_name_every_algorithm() {
    let results = small_run();
    let dir = tempfile::tempdir().expect("temp dir");

    let md_path = dir.path().join("report.md");
    MarkdownReport::to_file(&results, &md_path).expect("write markdown");
    let md = fs::read_to_string(&md_path).expect("read markdown");

    let json_path = dir.path().join("results.json");
    JsonExporter::to_file(&results, &json_path).expect("write json");
    let json = fs::read_to_string(&json_path).expect("read json");

    for row in results.rows() {
        assert!(md.contains(row.name()), "markdown misses {}", row.name());
        assert!(json.contains(row.name()), "json misses {}", row.name());
    }
}
