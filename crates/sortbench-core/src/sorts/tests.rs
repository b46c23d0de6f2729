//! Tests covering the whole algorithm suite.

use super::*;

/// Sequences exercising the shared ordering contract.
fn cases() -> Vec<Vec<i32>> {
    vec![
        vec![],
        vec![7],
        vec![5, 3, 8, 1],
        vec![2, 2, 1],
        vec![3, 1, 3],
        vec![1, 2, 3, 4, 5],
        vec![5, 4, 3, 2, 1],
        vec![0, 99, 50, 50, 99, 0, 25],
        vec![9, 8, 7, 7, 8, 9, 1, 0, 4, 4],
        vec![42, 0, 42, 0, 42, 0],
    ]
}

fn reference(values: &[i32]) -> Vec<i32> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}

#[test]
fn test_registry_lists_eight_algorithms_in_reporting_order() {
    let names: Vec<&str> = ALGORITHMS.iter().map(|a| a.name).collect();
    assert_eq!(
        names,
        vec![
            "Bubble Sort",
            "Comb Sort",
            "Insertion Sort",
            "Selection Sort",
            "Quick Sort",
            "Merge Sort",
            "Shell Sort",
            "Heap Sort",
        ]
    );
}

#[test]
fn test_every_algorithm_matches_the_reference_ordering() {
    // Matching the reference exactly also pins length and multiset.
    for algorithm in &ALGORITHMS {
        for case in cases() {
            let expected = reference(&case);
            let sorted = algorithm.run(case.clone());
            assert_eq!(sorted, expected, "{} on {:?}", algorithm.name, case);
        }
    }
}

#[test]
fn test_every_algorithm_is_idempotent() {
    for algorithm in &ALGORITHMS {
        for case in cases() {
            let once = algorithm.run(case);
            let twice = algorithm.run(once.clone());
            assert_eq!(twice, once, "{}", algorithm.name);
        }
    }
}

#[test]
fn test_empty_and_single_element_inputs_pass_through() {
    for algorithm in &ALGORITHMS {
        assert_eq!(algorithm.run(vec![]), vec![], "{}", algorithm.name);
        assert_eq!(algorithm.run(vec![7]), vec![7], "{}", algorithm.name);
    }
}

#[test]
fn test_duplicates_are_preserved() {
    for algorithm in &ALGORITHMS {
        assert_eq!(algorithm.run(vec![2, 2, 1]), vec![1, 2, 2], "{}", algorithm.name);
    }
}

#[test]
fn test_shared_example_sequence() {
    for algorithm in &ALGORITHMS {
        assert_eq!(
            algorithm.run(vec![5, 3, 8, 1]),
            vec![1, 3, 5, 8],
            "{}",
            algorithm.name
        );
    }
}
