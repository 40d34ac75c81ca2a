//! Integration tests for strategy routing.

use std::sync::Arc;

use patterns::error::StrategyError;
use patterns::strategy::{
    HeapStrategy, MaxStrategy, RoutingKey, ScanStrategy, SortingStrategy, StrategyRouter,
};

const SAMPLE: [i64; 8] = [3, 1, 4, 1, 5, 9, 2, 6];

#[test]
fn heapify_and_sorting_agree() {
    let router = StrategyRouter::standard();
    assert_eq!(router.evaluate(&SAMPLE, "heapify"), Ok(9));
    assert_eq!(router.evaluate(&SAMPLE, "sorting"), Ok(9));
    assert_eq!(router.evaluate(&SAMPLE, "scan"), Ok(9));
}

#[test]
fn routing_is_case_insensitive() {
    let router = StrategyRouter::standard();
    let results: Vec<_> = ["HEAPIFY", "heapify", "Heapify"]
        .iter()
        .map(|key| router.evaluate(&SAMPLE, key))
        .collect();
    assert!(results.iter().all(|r| *r == Ok(9)));

    let names: Vec<_> = ["HEAPIFY", "heapify", "Heapify"]
        .iter()
        .map(|key| router.resolve(key.parse::<RoutingKey>().unwrap()).name())
        .collect();
    assert_eq!(names, ["heap", "heap", "heap"]);
}

#[test]
fn unrecognized_key_fails() {
    let router = StrategyRouter::standard();
    assert_eq!(
        router.evaluate(&[1, 2, 3], "bogus"),
        Err(StrategyError::UnrecognizedRoutingKey {
            key: "bogus".to_string()
        })
    );
}

#[test]
fn empty_input_fails_for_every_key() {
    let router = StrategyRouter::standard();
    for key in RoutingKey::ALL {
        assert_eq!(router.evaluate_key(&[], key), Err(StrategyError::EmptyInput));
    }
}

#[test]
fn builder_requires_every_key() {
    let result = StrategyRouter::builder()
        .heapify(HeapStrategy)
        .sorting(SortingStrategy)
        .build();
    assert!(matches!(
        result,
        Err(StrategyError::MissingStrategy {
            key: RoutingKey::Scan
        })
    ));
}

#[test]
fn router_is_shared_across_threads() {
    let router = Arc::new(
        StrategyRouter::builder()
            .heapify(HeapStrategy)
            .sorting(SortingStrategy)
            .scan(ScanStrategy)
            .build()
            .unwrap(),
    );

    std::thread::scope(|s| {
        for t in 0..16i64 {
            let router = Arc::clone(&router);
            s.spawn(move || {
                let input: Vec<i64> = (0..=t).rev().collect();
                for key in ["heapify", "SORTING", "Scan"] {
                    assert_eq!(router.evaluate(&input, key), Ok(t));
                }
            });
        }
    });
}
