/**
 * File: /src/partition/histogram.rs
 * Created Date: Monday, March 2nd 2026
 * Author: Zihan
 * -----
 * Last Modified: Monday, 2nd March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */

use std::collections::BTreeMap;

/// Count of instances per decision value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionHistogram {
    counts: BTreeMap<i32, usize>,
    total: usize,
}

impl DecisionHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, decision: i32, count: usize) {
        if count == 0 {
            return;
        }
        *self.counts.entry(decision).or_insert(0) += count;
        self.total += count;
    }

    pub fn merge(&mut self, other: &DecisionHistogram) {
        for (&decision, &count) in &other.counts {
            self.add(decision, count);
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, decision: i32) -> usize {
        self.counts.get(&decision).copied().unwrap_or(0)
    }

    /// Number of distinct decisions with nonzero count
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Exactly one decision value present
    pub fn is_consistent(&self) -> bool {
        self.counts.len() == 1
    }

    /// The only decision value, if consistent
    pub fn single_decision(&self) -> Option<i32> {
        if self.is_consistent() {
            self.counts.keys().next().copied()
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.counts.iter().map(|(&d, &c)| (d, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_merge() {
        let mut a = DecisionHistogram::new();
        a.add(0, 2);
        a.add(1, 0);
        assert!(a.is_consistent());
        assert_eq!(a.single_decision(), Some(0));
        assert_eq!(a.distinct(), 1);

        let mut b = DecisionHistogram::new();
        b.add(1, 3);
        a.merge(&b);
        assert_eq!(a.total(), 5);
        assert_eq!(a.count(1), 3);
        assert!(!a.is_consistent());
        assert_eq!(a.single_decision(), None);
    }

    #[test]
    fn test_empty_histogram_is_not_consistent() {
        let h = DecisionHistogram::new();
        assert_eq!(h.total(), 0);
        assert!(!h.is_consistent());
    }
}
