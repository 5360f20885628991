//! # Entropy-Based Measures
//!
//! Conditional entropies of the decision given an attribute subset. Lower
//! is more significant; a subset that determines the decision scores 0.

/**
 * File: /src/measure/entropy.rs
 * Created Date: Wednesday, March 4th 2026
 * Author: Zihan
 * -----
 * Last Modified: Friday, 20th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-03-04		Zihan	Shannon conditional entropy
 * 2026-03-13		Zihan	Combination conditional entropy
 * 2026-03-20		Zihan	Partial sums leave the last result alone
 */

use super::{Direction, SignificanceMeasure};
use crate::partition::DecisionHistogram;

/// Shannon conditional entropy
/// H(D|B) = -Σ_X Σ_d (|X_d| / |U|) log2(|X_d| / |X|)
#[derive(Debug, Clone, Default)]
pub struct ShannonConditionalEntropy {
    result: Option<f64>,
}

impl ShannonConditionalEntropy {
    pub fn new() -> Self {
        Self::default()
    }

    fn class_entropy(histogram: &DecisionHistogram, universe_size: f64) -> f64 {
        let size = histogram.total() as f64;
        if histogram.is_consistent() || size == 0.0 {
            return 0.0;
        }
        histogram
            .iter()
            .map(|(_, count)| {
                let count = count as f64;
                -(count / universe_size) * (count / size).log2()
            })
            .sum()
    }

    fn entropy(classes: &[&DecisionHistogram], universe_size: usize) -> f64 {
        if universe_size == 0 {
            return 0.0;
        }
        let universe_size = universe_size as f64;
        classes
            .iter()
            .map(|h| Self::class_entropy(h, universe_size))
            .sum()
    }
}

impl SignificanceMeasure for ShannonConditionalEntropy {
    type Value = f64;

    fn name(&self) -> &'static str {
        "shannon-conditional-entropy"
    }

    fn direction(&self) -> Direction {
        Direction::Minimize
    }

    fn calculate(&mut self, classes: &[&DecisionHistogram], _attribute_len: usize, universe_size: usize) -> f64 {
        let value = Self::entropy(classes, universe_size);
        self.result = Some(value);
        value
    }

    fn result(&self) -> Option<f64> {
        self.result
    }

    fn partial(&mut self, classes: &[&DecisionHistogram], _attribute_len: usize, universe_size: usize) -> f64 {
        Self::entropy(classes, universe_size)
    }

    fn plus(&self, v1: f64, v2: f64) -> Option<f64> {
        Some(v1 + v2)
    }
}

/// Number of unordered pairs in `n` items
fn pairs(n: usize) -> f64 {
    let n = n as f64;
    n * (n - 1.0) / 2.0
}

/// Combination conditional entropy
/// CE(D|B) = Σ_X [ (|X|/|U|) C(|X|,2) - Σ_d (|X_d|/|U|) C(|X_d|,2) ] / C(|U|,2)
#[derive(Debug, Clone, Default)]
pub struct CombinationConditionalEntropy {
    result: Option<f64>,
}

impl CombinationConditionalEntropy {
    pub fn new() -> Self {
        Self::default()
    }

    fn class_entropy(histogram: &DecisionHistogram, universe_size: usize) -> f64 {
        if histogram.is_consistent() {
            return 0.0;
        }
        let n = universe_size as f64;
        let size = histogram.total();
        let whole = (size as f64 / n) * pairs(size);
        let parts: f64 = histogram
            .iter()
            .map(|(_, count)| (count as f64 / n) * pairs(count))
            .sum();
        (whole - parts) / pairs(universe_size)
    }

    fn entropy(classes: &[&DecisionHistogram], universe_size: usize) -> f64 {
        if universe_size < 2 {
            return 0.0;
        }
        classes
            .iter()
            .map(|h| Self::class_entropy(h, universe_size))
            .sum()
    }
}

impl SignificanceMeasure for CombinationConditionalEntropy {
    type Value = f64;

    fn name(&self) -> &'static str {
        "combination-conditional-entropy"
    }

    fn direction(&self) -> Direction {
        Direction::Minimize
    }

    fn calculate(&mut self, classes: &[&DecisionHistogram], _attribute_len: usize, universe_size: usize) -> f64 {
        let value = Self::entropy(classes, universe_size);
        self.result = Some(value);
        value
    }

    fn result(&self) -> Option<f64> {
        self.result
    }

    fn partial(&mut self, classes: &[&DecisionHistogram], _attribute_len: usize, universe_size: usize) -> f64 {
        Self::entropy(classes, universe_size)
    }

    fn plus(&self, v1: f64, v2: f64) -> Option<f64> {
        Some(v1 + v2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition;
    use crate::table::test_utils::{random_table, small_table};

    #[test]
    fn test_shannon_small_table() {
        let table = small_table();
        let mut measure = ShannonConditionalEntropy::new();

        // one mixed class of 2 with a 1:1 split contributes 2/4 * 1 bit
        let both = partition(&table, &[1, 2]).unwrap();
        let h = measure.calculate(&both.histograms(), 2, 4);
        assert!((h - 0.5).abs() < 1e-12);

        // no attributes: H(D) of a 2:2 split is 1 bit
        let none = partition(&table, &[]).unwrap();
        let h0 = measure.calculate(&none.histograms(), 0, 4);
        assert!((h0 - 1.0).abs() < 1e-12);
        assert_eq!(measure.result(), Some(h0));
    }

    #[test]
    fn test_combination_entropy_bounds() {
        let table = small_table();
        let mut measure = CombinationConditionalEntropy::new();
        let none = partition(&table, &[]).unwrap();
        // C(4,2)=6, class term 1*6 - (2/4*1 + 2/4*1) = 5, divided by 6
        let value = measure.calculate(&none.histograms(), 0, 4);
        assert!((value - 5.0 / 6.0).abs() < 1e-12);
        assert_eq!(measure.calculate(&none.histograms(), 0, 1), 0.0);
    }

    #[test]
    fn test_entropy_monotone_under_refinement() {
        let table = random_table(17, 200, 5, 3);
        let mut shannon = ShannonConditionalEntropy::new();
        let mut combination = CombinationConditionalEntropy::new();
        let mut attributes = Vec::new();
        let mut last = (f64::INFINITY, f64::INFINITY);
        for attribute in 1..=5 {
            attributes.push(attribute);
            let p = partition(&table, &attributes).unwrap();
            let current = (
                shannon.calculate(&p.histograms(), attributes.len(), 200),
                combination.calculate(&p.histograms(), attributes.len(), 200),
            );
            assert!(current.0 <= last.0 + 1e-12);
            assert!(current.1 <= last.1 + 1e-12);
            last = current;
        }
    }
}
