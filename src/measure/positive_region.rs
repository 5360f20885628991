/**
 * File: /src/measure/positive_region.rs
 * Created Date: Tuesday, March 3rd 2026
 * Author: Zihan
 * -----
 * Last Modified: Friday, 20th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-03-20		Zihan	Partial sums leave the last result alone
 */

use super::{Direction, SignificanceMeasure};
use crate::partition::DecisionHistogram;

fn positive_count(classes: &[&DecisionHistogram]) -> usize {
    classes
        .iter()
        .filter(|h| h.is_consistent())
        .map(|h| h.total())
        .sum()
}

fn degree(classes: &[&DecisionHistogram], universe_size: usize) -> f64 {
    if universe_size == 0 {
        0.0
    } else {
        positive_count(classes) as f64 / universe_size as f64
    }
}

/// Number of instances in decision-consistent classes, |POS_B(D)|
#[derive(Debug, Clone, Default)]
pub struct PositiveRegion {
    result: Option<usize>,
}

impl PositiveRegion {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SignificanceMeasure for PositiveRegion {
    type Value = usize;

    fn name(&self) -> &'static str {
        "positive-region"
    }

    fn direction(&self) -> Direction {
        Direction::Maximize
    }

    fn calculate(&mut self, classes: &[&DecisionHistogram], _attribute_len: usize, _universe_size: usize) -> usize {
        let value = positive_count(classes);
        self.result = Some(value);
        value
    }

    fn result(&self) -> Option<usize> {
        self.result
    }

    fn partial(&mut self, classes: &[&DecisionHistogram], _attribute_len: usize, _universe_size: usize) -> usize {
        positive_count(classes)
    }

    fn plus(&self, v1: usize, v2: usize) -> Option<usize> {
        Some(v1 + v2)
    }

    fn positive_region_based(&self) -> bool {
        true
    }
}

/// Dependency degree γ_B(D) = |POS_B(D)| / |U|
#[derive(Debug, Clone, Default)]
pub struct DependencyDegree {
    result: Option<f64>,
}

impl DependencyDegree {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SignificanceMeasure for DependencyDegree {
    type Value = f64;

    fn name(&self) -> &'static str {
        "dependency-degree"
    }

    fn direction(&self) -> Direction {
        Direction::Maximize
    }

    fn calculate(&mut self, classes: &[&DecisionHistogram], _attribute_len: usize, universe_size: usize) -> f64 {
        let value = degree(classes, universe_size);
        self.result = Some(value);
        value
    }

    fn result(&self) -> Option<f64> {
        self.result
    }

    fn partial(&mut self, classes: &[&DecisionHistogram], _attribute_len: usize, universe_size: usize) -> f64 {
        degree(classes, universe_size)
    }

    fn plus(&self, v1: f64, v2: f64) -> Option<f64> {
        Some(v1 + v2)
    }

    fn positive_region_based(&self) -> bool {
        true
    }
}
