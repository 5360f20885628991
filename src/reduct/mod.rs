//! # Reduct Search
//!
//! Greedy Quick-Reduct: find the core, grow the reduct with the most
//! significant attribute until it reaches the global significance, then
//! drop redundant attributes.

/**
 * File: /src/reduct/mod.rs
 * Created Date: Friday, March 6th 2026
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 19th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-03-06		Zihan	Created reduct type and search context
 * 2026-03-19		Zihan	Decision histogram threaded through the context
 */

pub mod core_finder;
pub mod inspect;
pub mod quick;
pub mod seek;

pub use core_finder::{find_core, CoreStrategy};
pub use inspect::inspect;
pub use quick::{PhaseTimings, QuickReduct, ReductResult, ReductStats};
pub use seek::{seek_from, seek_reduct, SeekStrategy};

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ReductError;
use crate::measure::{SigCache, SignificanceMeasure};
use crate::partition::{partition, DecisionHistogram, Partition};
use crate::table::{Attribute, InstanceSource};

/// Attribute set kept in insertion order.
///
/// Equality ignores the order; `sorted` gives the canonical form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reduct {
    attributes: Vec<Attribute>,
}

impl Reduct {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_attributes<I: IntoIterator<Item = Attribute>>(attributes: I) -> Self {
        let mut reduct = Self::new();
        for attribute in attributes {
            reduct.insert(attribute);
        }
        reduct
    }

    /// Returns false if already present
    pub fn insert(&mut self, attribute: Attribute) -> bool {
        if self.contains(attribute) {
            return false;
        }
        self.attributes.push(attribute);
        true
    }

    pub fn remove(&mut self, attribute: Attribute) -> bool {
        match self.attributes.iter().position(|&a| a == attribute) {
            Some(position) => {
                self.attributes.remove(position);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, attribute: Attribute) -> bool {
        self.attributes.contains(&attribute)
    }

    /// Attributes in insertion order
    pub fn as_slice(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn iter(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.attributes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn sorted(&self) -> Vec<Attribute> {
        let mut sorted = self.attributes.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Attributes with `attribute` left out, insertion order kept
    pub fn without(&self, attribute: Attribute) -> Vec<Attribute> {
        self.attributes
            .iter()
            .copied()
            .filter(|&a| a != attribute)
            .collect()
    }

    /// Attributes with `attribute` appended
    pub fn with(&self, attribute: Attribute) -> Vec<Attribute> {
        let mut attributes = self.attributes.clone();
        if !attributes.contains(&attribute) {
            attributes.push(attribute);
        }
        attributes
    }
}

impl PartialEq for Reduct {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for Reduct {}

impl fmt::Display for Reduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.sorted())
    }
}

/// State of one search run over one universe.
///
/// Holds the measure, the partition of the full attribute set, the global
/// significance and the significance cache. Everything is computed once in
/// `new` and threaded through core finding, seeking and inspection.
pub struct SearchContext<'a, S: ?Sized, M: SignificanceMeasure> {
    source: &'a S,
    attributes: Vec<Attribute>,
    universe_size: usize,
    measure: M,
    deviation: f64,
    decision: DecisionHistogram,
    global: Partition,
    global_significance: M::Value,
    cache: SigCache<M::Value>,
    evaluations: usize,
}

impl<'a, S, M> SearchContext<'a, S, M>
where
    S: InstanceSource + ?Sized,
    M: SignificanceMeasure,
{
    /// Context over all conditional attributes of `source`
    pub fn new(source: &'a S, measure: M, deviation: f64) -> Result<Self, ReductError> {
        let attributes = source.conditional_attributes();
        Self::with_attributes(source, attributes, measure, deviation)
    }

    /// Context over a chosen attribute universe
    pub fn with_attributes(
        source: &'a S,
        attributes: Vec<Attribute>,
        mut measure: M,
        deviation: f64,
    ) -> Result<Self, ReductError> {
        validate_deviation(deviation)?;
        let mut attributes = attributes;
        attributes.sort_unstable();
        attributes.dedup();

        let universe_size = source.instance_count();
        let global = partition(source, &attributes)?;
        let decision = partition(source, &[])?.classes()[0].histogram().clone();
        let global_significance = measure.calculate(&global.histograms(), attributes.len(), universe_size);

        debug!(
            "search context: {} rows, {} instances, {} attributes, {} classes, {} decisions, global {} = {}",
            source.len(),
            universe_size,
            attributes.len(),
            global.len(),
            decision.distinct(),
            measure.name(),
            global_significance
        );

        let mut cache = SigCache::new();
        cache.insert(&attributes, global_significance);

        Ok(Self {
            source,
            attributes,
            universe_size,
            measure,
            deviation,
            decision,
            global,
            global_significance,
            cache,
            evaluations: 1,
        })
    }

    pub fn source(&self) -> &'a S {
        self.source
    }

    /// Attribute universe C, ascending
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn universe_size(&self) -> usize {
        self.universe_size
    }

    pub fn measure(&self) -> &M {
        &self.measure
    }

    pub fn deviation(&self) -> f64 {
        self.deviation
    }

    /// Decision histogram of the whole universe
    pub fn decision(&self) -> &DecisionHistogram {
        &self.decision
    }

    /// Partition of the full attribute universe
    pub fn global_partition(&self) -> &Partition {
        &self.global
    }

    pub fn global_significance(&self) -> M::Value {
        self.global_significance
    }

    pub fn cache(&self) -> &SigCache<M::Value> {
        &self.cache
    }

    /// Number of significance calculations so far
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Significance of `attributes`, from the cache or by full partition
    pub fn significance(&mut self, attributes: &[Attribute]) -> Result<M::Value, ReductError> {
        if let Some(value) = self.cache.get(attributes) {
            return Ok(value);
        }
        let partition = partition(self.source, attributes)?;
        Ok(self.evaluate_histograms(attributes, &partition.histograms()))
    }

    /// Cached significance of `attributes`, if any
    pub fn cached(&mut self, attributes: &[Attribute]) -> Option<M::Value> {
        self.cache.get(attributes)
    }

    /// Calculate the significance of `attributes` from class histograms
    /// built elsewhere, and cache it
    pub fn evaluate_histograms(&mut self, attributes: &[Attribute], classes: &[&DecisionHistogram]) -> M::Value {
        let value = self
            .measure
            .calculate(classes, attributes.len(), self.universe_size);
        self.evaluations += 1;
        self.cache.insert(attributes, value);
        value
    }

    /// Contribution of some classes, uncached. The measure's `result` keeps
    /// the last full significance.
    pub fn evaluate_partial(&mut self, attribute_len: usize, classes: &[&DecisionHistogram]) -> M::Value {
        self.evaluations += 1;
        self.measure
            .partial(classes, attribute_len, self.universe_size)
    }

    /// `value` is within the deviation of the global significance
    pub fn reaches_global(&self, value: M::Value) -> bool {
        self.measure
            .reaches(value, self.global_significance, self.deviation)
    }

    /// `v1` beats `v2` beyond the deviation
    pub fn is_better(&self, v1: M::Value, v2: M::Value) -> bool {
        self.measure.value1_is_better(v1, v2, self.deviation)
    }
}

pub fn validate_deviation(deviation: f64) -> Result<(), ReductError> {
    if !deviation.is_finite() || deviation < 0.0 {
        return Err(ReductError::InvalidDeviation(deviation));
    }
    Ok(())
}
