//! # Significance Measures
//!
//! A significance measure maps the decision histograms of a partition to a
//! comparable value. All greedy and termination decisions go through the
//! measure's deviation-tolerant comparator, never through raw `<`.

/**
 * File: /src/measure/mod.rs
 * Created Date: Tuesday, March 3rd 2026
 * Author: Zihan
 * -----
 * Last Modified: Friday, 13th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-03-03		Zihan	Created significance measure trait
 * 2026-03-13		Zihan	Float tolerance in the comparator
 */

pub mod cache;
pub mod entropy;
pub mod granularity;
pub mod positive_region;

pub use cache::SigCache;
pub use entropy::{CombinationConditionalEntropy, ShannonConditionalEntropy};
pub use granularity::KnowledgeGranularity;
pub use positive_region::{DependencyDegree, PositiveRegion};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReductError;
use crate::partition::DecisionHistogram;

/// Numeric significance value
pub trait Sig: Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static {
    fn zero() -> Self;

    fn as_f64(self) -> f64;

    /// Absolute slack added to every deviation, absorbing rounding when the
    /// same value is summed in a different order
    fn tolerance() -> f64 {
        0.0
    }
}

impl Sig for usize {
    fn zero() -> Self {
        0
    }

    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Sig for f64 {
    fn zero() -> Self {
        0.0
    }

    fn as_f64(self) -> f64 {
        self
    }

    fn tolerance() -> f64 {
        1e-10
    }
}

/// Whether larger or smaller values mean more significance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Maximize,
    Minimize,
}

/// Significance (feature importance) of an attribute subset.
///
/// Implementations keep the last calculated value (`result`) and may carry
/// other per-run state, so one instance belongs to one search run.
pub trait SignificanceMeasure {
    type Value: Sig;

    fn name(&self) -> &'static str;

    fn direction(&self) -> Direction;

    /// Significance of a partition given its class histograms.
    ///
    /// `attribute_len` is the size of the subset the classes were built
    /// from and `universe_size` is |U|.
    fn calculate(
        &mut self,
        classes: &[&DecisionHistogram],
        attribute_len: usize,
        universe_size: usize,
    ) -> Self::Value;

    /// Last value returned by `calculate`
    fn result(&self) -> Option<Self::Value>;

    /// Contribution of some classes of a partition, for summing with
    /// `plus`. Additive measures leave `result` untouched; the default
    /// falls back to `calculate`.
    fn partial(
        &mut self,
        classes: &[&DecisionHistogram],
        attribute_len: usize,
        universe_size: usize,
    ) -> Self::Value {
        self.calculate(classes, attribute_len, universe_size)
    }

    /// `v1` beats `v2` by more than `deviation` in the measure's direction.
    /// For minimised measures this is "`v2` exceeds `v1` by more than
    /// `deviation`".
    fn value1_is_better(&self, v1: Self::Value, v2: Self::Value, deviation: f64) -> bool {
        let slack = deviation + Self::Value::tolerance();
        match self.direction() {
            Direction::Maximize => v1.as_f64() - v2.as_f64() > slack,
            Direction::Minimize => v2.as_f64() - v1.as_f64() > slack,
        }
    }

    /// `value` is within `deviation` of `target`, i.e. `target` is not
    /// better than it
    fn reaches(&self, value: Self::Value, target: Self::Value, deviation: f64) -> bool {
        !self.value1_is_better(target, value, deviation)
    }

    /// Sum of two partial values for additively decomposable measures.
    ///
    /// A measure returning `Some` promises that the value of a partition is
    /// the sum of the values of its classes, and that splitting a
    /// decision-consistent class leaves its contribution unchanged.
    fn plus(&self, _v1: Self::Value, _v2: Self::Value) -> Option<Self::Value> {
        None
    }

    /// The value depends only on the positive-region size, so any boundary
    /// region created by coarsening is a strict loss and mixed classes
    /// contribute nothing.
    fn positive_region_based(&self) -> bool {
        false
    }
}

/// Measure selection for configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasureKind {
    PositiveRegion,
    DependencyDegree,
    ShannonEntropy,
    CombinationEntropy,
    KnowledgeGranularity,
}

impl Default for MeasureKind {
    fn default() -> Self {
        MeasureKind::PositiveRegion
    }
}

impl fmt::Display for MeasureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MeasureKind::PositiveRegion => "positive-region",
            MeasureKind::DependencyDegree => "dependency-degree",
            MeasureKind::ShannonEntropy => "shannon-entropy",
            MeasureKind::CombinationEntropy => "combination-entropy",
            MeasureKind::KnowledgeGranularity => "knowledge-granularity",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for MeasureKind {
    type Err = ReductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive-region" | "pos" => Ok(MeasureKind::PositiveRegion),
            "dependency-degree" | "dependency" => Ok(MeasureKind::DependencyDegree),
            "shannon-entropy" | "shannon" => Ok(MeasureKind::ShannonEntropy),
            "combination-entropy" | "combination" => Ok(MeasureKind::CombinationEntropy),
            "knowledge-granularity" | "granularity" => Ok(MeasureKind::KnowledgeGranularity),
            other => Err(ReductError::InvalidConfiguration(format!(
                "unknown significance measure '{}'",
                other
            ))),
        }
    }
}
