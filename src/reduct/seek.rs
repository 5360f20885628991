//! # Significant-Attribute Seeking Loop
//!
//! Starting from the core, repeatedly add the attribute whose addition
//! gives the best significance until the reduct reaches the global
//! significance within the deviation.
//!
//! Candidates are scanned in ascending attribute order and a candidate only
//! replaces the current best when it is better beyond the deviation, so
//! ties go to the first attribute encountered. This order decides which of
//! several equally valid reducts is returned.

/**
 * File: /src/reduct/seek.rs
 * Created Date: Tuesday, March 10th 2026
 * Author: Zihan
 * -----
 * Last Modified: Friday, 20th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-03-10		Zihan	Seeking loop with full repartition
 * 2026-03-12		Zihan	Incremental refinement of the reduct partition
 * 2026-03-16		Zihan	Nested partition with retired positive classes
 * 2026-03-20		Zihan	Nested seeking falls back for starts outside the universe
 */

use std::fmt;
use std::str::FromStr;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::{Reduct, SearchContext};
use crate::error::ReductError;
use crate::measure::{Sig, SignificanceMeasure};
use crate::partition::{partition, refine, DecisionHistogram, NestedPartition, Partition};
use crate::table::{Attribute, InstanceSource};

/// How candidate partitions are built in each seeking step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeekStrategy {
    /// Partition the universe from scratch for every candidate
    Repartition,
    /// Split the classes of the current reduct partition by the candidate
    Refinement,
    /// Split the rough classes of a nested partition, retiring classes
    /// whose contribution can no longer change
    Nested,
}

impl Default for SeekStrategy {
    fn default() -> Self {
        SeekStrategy::Nested
    }
}

impl fmt::Display for SeekStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeekStrategy::Repartition => write!(f, "repartition"),
            SeekStrategy::Refinement => write!(f, "refinement"),
            SeekStrategy::Nested => write!(f, "nested"),
        }
    }
}

impl FromStr for SeekStrategy {
    type Err = ReductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "repartition" => Ok(SeekStrategy::Repartition),
            "refinement" => Ok(SeekStrategy::Refinement),
            "nested" => Ok(SeekStrategy::Nested),
            other => Err(ReductError::InvalidConfiguration(format!(
                "unknown seek strategy '{}'",
                other
            ))),
        }
    }
}

/// Grow a reduct starting from `core`
pub fn seek_reduct<S, M>(
    ctx: &mut SearchContext<'_, S, M>,
    core: &[Attribute],
    strategy: SeekStrategy,
) -> Result<Reduct, ReductError>
where
    S: InstanceSource + ?Sized,
    M: SignificanceMeasure,
{
    seek_from(ctx, Reduct::from_attributes(core.iter().copied()), strategy)
}

/// Grow `start` until it reaches the global significance.
///
/// Fails with `ReductError::Convergence` if every attribute has been added
/// and the global significance is still out of reach.
pub fn seek_from<S, M>(
    ctx: &mut SearchContext<'_, S, M>,
    start: Reduct,
    strategy: SeekStrategy,
) -> Result<Reduct, ReductError>
where
    S: InstanceSource + ?Sized,
    M: SignificanceMeasure,
{
    ctx.source().check_attributes(start.as_slice())?;
    let strategy = effective_strategy(ctx, strategy, &start);
    match strategy {
        SeekStrategy::Repartition => {
            let mut state = RepartitionState;
            run(ctx, start, &mut state, strategy)
        }
        SeekStrategy::Refinement => {
            let mut state = RefinementState::new(ctx, &start)?;
            run(ctx, start, &mut state, strategy)
        }
        SeekStrategy::Nested => {
            let mut state = NestedState::new(ctx, &start)?;
            run(ctx, start, &mut state, strategy)
        }
    }
}

fn effective_strategy<S, M>(ctx: &SearchContext<'_, S, M>, strategy: SeekStrategy, start: &Reduct) -> SeekStrategy
where
    S: InstanceSource + ?Sized,
    M: SignificanceMeasure,
{
    if strategy != SeekStrategy::Nested {
        return strategy;
    }
    let zero = <M::Value as Sig>::zero();
    if ctx.measure().plus(zero, zero).is_none() {
        warn!(
            "{} is not additive, nested seeking falls back to refinement",
            ctx.measure().name()
        );
        return SeekStrategy::Refinement;
    }
    // atoms only carry the universe attributes
    if let Some(outside) = start.iter().find(|a| !ctx.attributes().contains(a)) {
        warn!(
            "start attribute {} is outside the universe {:?}, nested seeking falls back to refinement",
            outside,
            ctx.attributes()
        );
        return SeekStrategy::Refinement;
    }
    strategy
}

/// Per-strategy partition state carried between seeking steps
trait SeekState<S: ?Sized, M: SignificanceMeasure> {
    /// Significance of the current reduct
    fn current(&mut self, ctx: &mut SearchContext<'_, S, M>, reduct: &Reduct) -> Result<M::Value, ReductError>;

    /// Significance of the current reduct plus `attribute`
    fn evaluate(
        &mut self,
        ctx: &mut SearchContext<'_, S, M>,
        reduct: &Reduct,
        attribute: Attribute,
    ) -> Result<M::Value, ReductError>;

    /// `attribute` has been added to the reduct
    fn commit(&mut self, ctx: &mut SearchContext<'_, S, M>, attribute: Attribute) -> Result<(), ReductError>;
}

fn run<S, M, T>(
    ctx: &mut SearchContext<'_, S, M>,
    mut reduct: Reduct,
    state: &mut T,
    strategy: SeekStrategy,
) -> Result<Reduct, ReductError>
where
    S: InstanceSource + ?Sized,
    M: SignificanceMeasure,
    T: SeekState<S, M>,
{
    let mut current = state.current(ctx, &reduct)?;
    let mut steps = 0;

    while !ctx.reaches_global(current) {
        let candidates: Vec<Attribute> = ctx
            .attributes()
            .iter()
            .copied()
            .filter(|&a| !reduct.contains(a))
            .collect();

        let mut best: Option<(Attribute, M::Value)> = None;
        for attribute in candidates {
            let value = state.evaluate(ctx, &reduct, attribute)?;
            let replace = match best {
                None => true,
                Some((_, best_value)) => ctx.is_better(value, best_value),
            };
            if replace {
                best = Some((attribute, value));
            }
        }

        let (attribute, value) = match best {
            Some(best) => best,
            None => {
                return Err(ReductError::Convergence {
                    reduct: reduct.sorted(),
                    significance: current.to_string(),
                    global_significance: ctx.global_significance().to_string(),
                })
            }
        };

        reduct.insert(attribute);
        state.commit(ctx, attribute)?;
        current = value;
        steps += 1;
        debug!(
            "[seek: {}] step {}: +{} -> {} (global {})",
            strategy,
            steps,
            attribute,
            current,
            ctx.global_significance()
        );
    }

    info!(
        "[seek: {}] reached {} after {} steps with {} attributes",
        strategy,
        current,
        steps,
        reduct.len()
    );
    Ok(reduct)
}

struct RepartitionState;

impl<S, M> SeekState<S, M> for RepartitionState
where
    S: InstanceSource + ?Sized,
    M: SignificanceMeasure,
{
    fn current(&mut self, ctx: &mut SearchContext<'_, S, M>, reduct: &Reduct) -> Result<M::Value, ReductError> {
        ctx.significance(reduct.as_slice())
    }

    fn evaluate(
        &mut self,
        ctx: &mut SearchContext<'_, S, M>,
        reduct: &Reduct,
        attribute: Attribute,
    ) -> Result<M::Value, ReductError> {
        ctx.significance(&reduct.with(attribute))
    }

    fn commit(&mut self, _ctx: &mut SearchContext<'_, S, M>, _attribute: Attribute) -> Result<(), ReductError> {
        Ok(())
    }
}

/// Keeps the partition of the reduct and the refined partition of the best
/// candidate seen in the current step
struct RefinementState {
    partition: Partition,
    candidates: Vec<(Attribute, Partition)>,
}

impl RefinementState {
    fn new<S, M>(ctx: &SearchContext<'_, S, M>, start: &Reduct) -> Result<Self, ReductError>
    where
        S: InstanceSource + ?Sized,
        M: SignificanceMeasure,
    {
        Ok(Self {
            partition: partition(ctx.source(), start.as_slice())?,
            candidates: Vec::new(),
        })
    }
}

impl<S, M> SeekState<S, M> for RefinementState
where
    S: InstanceSource + ?Sized,
    M: SignificanceMeasure,
{
    fn current(&mut self, ctx: &mut SearchContext<'_, S, M>, reduct: &Reduct) -> Result<M::Value, ReductError> {
        match ctx.cached(reduct.as_slice()) {
            Some(value) => Ok(value),
            None => Ok(ctx.evaluate_histograms(reduct.as_slice(), &self.partition.histograms())),
        }
    }

    fn evaluate(
        &mut self,
        ctx: &mut SearchContext<'_, S, M>,
        reduct: &Reduct,
        attribute: Attribute,
    ) -> Result<M::Value, ReductError> {
        let attributes = reduct.with(attribute);
        let refined = refine(ctx.source(), &self.partition, attribute)?;
        let value = match ctx.cached(&attributes) {
            Some(value) => value,
            None => ctx.evaluate_histograms(&attributes, &refined.histograms()),
        };
        self.candidates.push((attribute, refined));
        Ok(value)
    }

    fn commit(&mut self, ctx: &mut SearchContext<'_, S, M>, attribute: Attribute) -> Result<(), ReductError> {
        let chosen = self
            .candidates
            .drain(..)
            .find(|(candidate, _)| *candidate == attribute)
            .map(|(_, partition)| partition);
        self.partition = match chosen {
            Some(partition) => partition,
            None => refine(ctx.source(), &self.partition, attribute)?,
        };
        self.candidates.clear();
        Ok(())
    }
}

/// Nested partition of the reduct over the full-set classes.
///
/// Rough classes whose contribution is fixed under any further refinement
/// are retired: POSITIVE classes always, NEGATIVE classes too when the
/// measure only counts the positive region. Their summed contribution is
/// kept in `retired`.
struct NestedState<V> {
    nested: NestedPartition,
    retired: V,
}

impl<V: Sig> NestedState<V> {
    fn new<S, M>(ctx: &mut SearchContext<'_, S, M>, start: &Reduct) -> Result<Self, ReductError>
    where
        S: InstanceSource + ?Sized,
        M: SignificanceMeasure<Value = V>,
    {
        let nested = NestedPartition::new(ctx.global_partition(), start.as_slice())?;
        let mut state = Self {
            nested,
            retired: V::zero(),
        };
        state.retire(ctx)?;
        Ok(state)
    }

    fn retire<S, M>(&mut self, ctx: &mut SearchContext<'_, S, M>) -> Result<(), ReductError>
    where
        S: InstanceSource + ?Sized,
        M: SignificanceMeasure<Value = V>,
    {
        let drop_negative = ctx.measure().positive_region_based();
        let fixed: Vec<&DecisionHistogram> = self
            .nested
            .classes()
            .iter()
            .filter(|c| c.region().is_positive() || (drop_negative && c.region().is_negative()))
            .map(|c| c.histogram())
            .collect();
        if fixed.is_empty() {
            return Ok(());
        }
        let attribute_len = self.nested.attributes().len();
        let contribution = ctx.evaluate_partial(attribute_len, &fixed);
        self.retired = plus(ctx, self.retired, contribution)?;

        let before = self.nested.len();
        self.nested
            .retain(|c| !(c.region().is_positive() || (drop_negative && c.region().is_negative())));
        debug!(
            "retired {} rough classes, {} left over {} instances",
            before - self.nested.len(),
            self.nested.len(),
            self.nested.instance_count()
        );
        Ok(())
    }
}

fn plus<S, M>(ctx: &SearchContext<'_, S, M>, v1: M::Value, v2: M::Value) -> Result<M::Value, ReductError>
where
    S: InstanceSource + ?Sized,
    M: SignificanceMeasure,
{
    ctx.measure().plus(v1, v2).ok_or_else(|| {
        ReductError::InvalidConfiguration(format!("{} is not additive", ctx.measure().name()))
    })
}

impl<S, M> SeekState<S, M> for NestedState<M::Value>
where
    S: InstanceSource + ?Sized,
    M: SignificanceMeasure,
{
    fn current(&mut self, ctx: &mut SearchContext<'_, S, M>, reduct: &Reduct) -> Result<M::Value, ReductError> {
        if let Some(value) = ctx.cached(reduct.as_slice()) {
            return Ok(value);
        }
        let working = self.nested.histograms();
        let partial = ctx.evaluate_partial(reduct.len(), &working);
        plus(ctx, self.retired, partial)
    }

    fn evaluate(
        &mut self,
        ctx: &mut SearchContext<'_, S, M>,
        reduct: &Reduct,
        attribute: Attribute,
    ) -> Result<M::Value, ReductError> {
        let attributes = reduct.with(attribute);
        if let Some(value) = ctx.cached(&attributes) {
            return Ok(value);
        }
        let classes = self.nested.refined_classes(attribute)?;
        let histograms: Vec<&DecisionHistogram> = classes.iter().map(|c| c.histogram()).collect();
        let partial = ctx.evaluate_partial(attributes.len(), &histograms);
        plus(ctx, self.retired, partial)
    }

    fn commit(&mut self, ctx: &mut SearchContext<'_, S, M>, attribute: Attribute) -> Result<(), ReductError> {
        self.nested = self.nested.refine(attribute)?;
        self.retire(ctx)
    }
}
