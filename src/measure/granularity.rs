/**
 * File: /src/measure/granularity.rs
 * Created Date: Friday, March 13th 2026
 * Author: Zihan
 * -----
 * Last Modified: Friday, 13th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */

use super::{Direction, SignificanceMeasure};
use crate::partition::DecisionHistogram;

/// Conditional knowledge granularity GK(D|B) = GK(B) - GK(B ∪ D),
/// with GK(B) = Σ_X |X|² / |U|².
///
/// Lower is more significant.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeGranularity {
    result: Option<f64>,
}

impl KnowledgeGranularity {
    pub fn new() -> Self {
        Self::default()
    }

    fn class_granularity(histogram: &DecisionHistogram, universe_squared: f64) -> f64 {
        if histogram.is_consistent() {
            return 0.0;
        }
        let size = histogram.total() as f64;
        let split: f64 = histogram
            .iter()
            .map(|(_, count)| (count as f64) * (count as f64))
            .sum();
        (size * size - split) / universe_squared
    }

    fn granularity(classes: &[&DecisionHistogram], universe_size: usize) -> f64 {
        if universe_size == 0 {
            return 0.0;
        }
        let universe_squared = (universe_size as f64) * (universe_size as f64);
        classes
            .iter()
            .map(|h| Self::class_granularity(h, universe_squared))
            .sum()
    }
}

impl SignificanceMeasure for KnowledgeGranularity {
    type Value = f64;

    fn name(&self) -> &'static str {
        "knowledge-granularity"
    }

    fn direction(&self) -> Direction {
        Direction::Minimize
    }

    fn calculate(&mut self, classes: &[&DecisionHistogram], _attribute_len: usize, universe_size: usize) -> f64 {
        let value = Self::granularity(classes, universe_size);
        self.result = Some(value);
        value
    }

    fn result(&self) -> Option<f64> {
        self.result
    }

    fn partial(&mut self, classes: &[&DecisionHistogram], _attribute_len: usize, universe_size: usize) -> f64 {
        Self::granularity(classes, universe_size)
    }

    fn plus(&self, v1: f64, v2: f64) -> Option<f64> {
        Some(v1 + v2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition;
    use crate::table::test_utils::small_table;

    #[test]
    fn test_granularity_small_table() {
        let table = small_table();
        let mut measure = KnowledgeGranularity::new();
        let both = partition(&table, &[1, 2]).unwrap();
        // mixed class (1,1): (4 - 2) / 16
        assert!((measure.calculate(&both.histograms(), 2, 4) - 0.125).abs() < 1e-12);
        let none = partition(&table, &[]).unwrap();
        // (16 - 8) / 16
        assert!((measure.calculate(&none.histograms(), 0, 4) - 0.5).abs() < 1e-12);
    }
}
