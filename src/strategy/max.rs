//! Interchangeable maximum-element algorithms.

use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::StrategyError;

/// An algorithm returning the largest element of a non-empty sequence.
///
/// Implementations are stateless and shared between threads.
pub trait MaxStrategy: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Largest element of `input`.
    ///
    /// # Errors
    /// Returns [`StrategyError::EmptyInput`] when `input` is empty.
    fn max_element(&self, input: &[i64]) -> Result<i64, StrategyError>;
}

/// Builds a max-heap over every element and reads the top.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapStrategy;

impl MaxStrategy for HeapStrategy {
    fn name(&self) -> &'static str {
        "heap"
    }

    fn max_element(&self, input: &[i64]) -> Result<i64, StrategyError> {
        debug!(len = input.len(), "Performing heap operation");
        let heap: BinaryHeap<i64> = input.iter().copied().collect();
        heap.peek().copied().ok_or(StrategyError::EmptyInput)
    }
}

/// Sorts a copy ascending and reads the last element.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortingStrategy;

impl MaxStrategy for SortingStrategy {
    fn name(&self) -> &'static str {
        "sorting"
    }

    fn max_element(&self, input: &[i64]) -> Result<i64, StrategyError> {
        debug!(len = input.len(), "Array sorting technique");
        let mut sorted = input.to_vec();
        sorted.sort_unstable();
        sorted.last().copied().ok_or(StrategyError::EmptyInput)
    }
}

/// Linear scan, O(n).
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanStrategy;

impl MaxStrategy for ScanStrategy {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn max_element(&self, input: &[i64]) -> Result<i64, StrategyError> {
        debug!(len = input.len(), "Linear scan");
        input.iter().copied().max().ok_or(StrategyError::EmptyInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [i64; 8] = [3, 1, 4, 1, 5, 9, 2, 6];

    fn all() -> [&'static dyn MaxStrategy; 3] {
        [&HeapStrategy, &SortingStrategy, &ScanStrategy]
    }

    #[test]
    fn every_strategy_finds_the_maximum() {
        for strategy in all() {
            assert_eq!(strategy.max_element(&SAMPLE), Ok(9), "{}", strategy.name());
        }
    }

    #[test]
    fn handles_negatives_and_single_elements() {
        for strategy in all() {
            assert_eq!(strategy.max_element(&[-7, -3, -12]), Ok(-3));
            assert_eq!(strategy.max_element(&[42]), Ok(42));
            assert_eq!(strategy.max_element(&[i64::MIN, i64::MAX]), Ok(i64::MAX));
        }
    }

    #[test]
    fn empty_input_is_an_error() {
        for strategy in all() {
            assert_eq!(strategy.max_element(&[]), Err(StrategyError::EmptyInput));
        }
    }

    #[test]
    fn sorting_leaves_the_input_untouched() {
        let input = SAMPLE;
        SortingStrategy.max_element(&input).unwrap();
        assert_eq!(input, SAMPLE);
    }
}
