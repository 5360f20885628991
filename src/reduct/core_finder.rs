//! # Core Finder
//!
//! An attribute is core when leaving it out of the full attribute set makes
//! the significance worse than the global significance beyond the
//! deviation. Two strategies give the same set:
//! - `Naive`: one full repartition per attribute
//! - `BoundarySensitive`: one nested partition over the full-set classes,
//!   coarsened per attribute by key projection, with an early exit on the
//!   first boundary region for positive-region measures

/**
 * File: /src/reduct/core_finder.rs
 * Created Date: Monday, March 9th 2026
 * Author: Zihan
 * -----
 * Last Modified: Wednesday, 11th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-03-09		Zihan	Naive core finder
 * 2026-03-11		Zihan	Boundary-sensitive core finder
 */

use std::fmt;
use std::str::FromStr;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::SearchContext;
use crate::error::ReductError;
use crate::measure::SignificanceMeasure;
use crate::partition::{DecisionHistogram, NestedPartition};
use crate::table::{Attribute, InstanceSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoreStrategy {
    Naive,
    BoundarySensitive,
}

impl Default for CoreStrategy {
    fn default() -> Self {
        CoreStrategy::BoundarySensitive
    }
}

impl fmt::Display for CoreStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreStrategy::Naive => write!(f, "naive"),
            CoreStrategy::BoundarySensitive => write!(f, "boundary-sensitive"),
        }
    }
}

impl FromStr for CoreStrategy {
    type Err = ReductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naive" => Ok(CoreStrategy::Naive),
            "boundary-sensitive" | "boundary" => Ok(CoreStrategy::BoundarySensitive),
            other => Err(ReductError::InvalidConfiguration(format!(
                "unknown core strategy '{}'",
                other
            ))),
        }
    }
}

/// Core attributes of the context's attribute universe, ascending
pub fn find_core<S, M>(
    ctx: &mut SearchContext<'_, S, M>,
    strategy: CoreStrategy,
) -> Result<Vec<Attribute>, ReductError>
where
    S: InstanceSource + ?Sized,
    M: SignificanceMeasure,
{
    let core = match strategy {
        CoreStrategy::Naive => naive_core(ctx)?,
        CoreStrategy::BoundarySensitive => boundary_sensitive_core(ctx)?,
    };
    info!(
        "[core: {}] {} of {} attributes are core: {:?}",
        strategy,
        core.len(),
        ctx.attributes().len(),
        core
    );
    Ok(core)
}

fn naive_core<S, M>(ctx: &mut SearchContext<'_, S, M>) -> Result<Vec<Attribute>, ReductError>
where
    S: InstanceSource + ?Sized,
    M: SignificanceMeasure,
{
    let attributes = ctx.attributes().to_vec();
    let global = ctx.global_significance();
    let mut core = Vec::new();

    for &attribute in &attributes {
        let rest: Vec<Attribute> = attributes.iter().copied().filter(|&a| a != attribute).collect();
        let value = ctx.significance(&rest)?;
        let is_core = ctx.is_better(global, value);
        debug!("sig(C - {{{}}}) = {} -> core: {}", attribute, value, is_core);
        if is_core {
            core.push(attribute);
        }
    }
    Ok(core)
}

fn boundary_sensitive_core<S, M>(ctx: &mut SearchContext<'_, S, M>) -> Result<Vec<Attribute>, ReductError>
where
    S: InstanceSource + ?Sized,
    M: SignificanceMeasure,
{
    let attributes = ctx.attributes().to_vec();
    let nested = NestedPartition::new(ctx.global_partition(), &attributes)?;
    let global = ctx.global_significance();
    // a boundary region proves a strict loss only when nothing is tolerated
    let shortcut = ctx.measure().positive_region_based() && ctx.deviation() == 0.0;
    let mut core = Vec::new();

    for &attribute in &attributes {
        let rest: Vec<Attribute> = attributes.iter().copied().filter(|&a| a != attribute).collect();

        let is_core = if shortcut {
            match nested.first_boundary(&rest)? {
                Some(key) => {
                    debug!("removing {} turns rough class {} boundary -> core", attribute, key);
                    true
                }
                None => false,
            }
        } else {
            let value = match ctx.cached(&rest) {
                Some(value) => value,
                None => {
                    let classes = nested.project(&rest)?;
                    let histograms: Vec<&DecisionHistogram> = classes.iter().map(|c| c.histogram()).collect();
                    ctx.evaluate_histograms(&rest, &histograms)
                }
            };
            debug!("sig(C - {{{}}}) = {} over rough classes", attribute, value);
            ctx.is_better(global, value)
        };

        if is_core {
            core.push(attribute);
        }
    }
    Ok(core)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{
        CombinationConditionalEntropy, DependencyDegree, KnowledgeGranularity, PositiveRegion,
        ShannonConditionalEntropy,
    };
    use crate::table::test_utils::{random_table, small_table, xor_table};

    fn both<M: SignificanceMeasure + Clone>(
        table: &crate::table::DecisionTable,
        measure: M,
        deviation: f64,
    ) -> (Vec<Attribute>, Vec<Attribute>) {
        let mut naive_ctx = SearchContext::new(table, measure.clone(), deviation).unwrap();
        let mut rough_ctx = SearchContext::new(table, measure, deviation).unwrap();
        (
            find_core(&mut naive_ctx, CoreStrategy::Naive).unwrap(),
            find_core(&mut rough_ctx, CoreStrategy::BoundarySensitive).unwrap(),
        )
    }

    #[test]
    fn test_small_table_core() {
        let table = small_table();
        let (naive, rough) = both(&table, PositiveRegion::new(), 0.0);
        // removing a1 leaves POS = 0, removing a2 leaves POS = 1 < 2
        assert_eq!(naive, vec![1, 2]);
        assert_eq!(rough, naive);
    }

    #[test]
    fn test_xor_table_core() {
        let table = xor_table();
        let (naive, rough) = both(&table, PositiveRegion::new(), 0.0);
        // a1 and a2 duplicate each other, a4 is noise
        assert_eq!(naive, vec![3]);
        assert_eq!(rough, naive);
    }

    #[test]
    fn test_strategies_agree_on_random_tables() {
        for seed in 0..12 {
            let table = random_table(seed, 60 + seed as usize * 10, 6, 3);
            let (n, r) = both(&table, PositiveRegion::new(), 0.0);
            assert_eq!(n, r, "positive region, seed {}", seed);
            let (n, r) = both(&table, PositiveRegion::new(), 2.0);
            assert_eq!(n, r, "positive region with deviation, seed {}", seed);
            let (n, r) = both(&table, DependencyDegree::new(), 0.0);
            assert_eq!(n, r, "dependency, seed {}", seed);
            let (n, r) = both(&table, ShannonConditionalEntropy::new(), 0.0);
            assert_eq!(n, r, "shannon, seed {}", seed);
            let (n, r) = both(&table, CombinationConditionalEntropy::new(), 0.01);
            assert_eq!(n, r, "combination, seed {}", seed);
            let (n, r) = both(&table, KnowledgeGranularity::new(), 0.0);
            assert_eq!(n, r, "granularity, seed {}", seed);
        }
    }

    #[test]
    fn test_deviation_shrinks_core() {
        let table = random_table(99, 120, 5, 3);
        let (strict, _) = both(&table, PositiveRegion::new(), 0.0);
        let (loose, _) = both(&table, PositiveRegion::new(), 1000.0);
        assert!(loose.is_empty());
        assert!(loose.len() <= strict.len());
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("naive".parse::<CoreStrategy>().unwrap(), CoreStrategy::Naive);
        assert_eq!(
            "boundary-sensitive".parse::<CoreStrategy>().unwrap(),
            CoreStrategy::BoundarySensitive
        );
        assert!("other".parse::<CoreStrategy>().is_err());
    }
}
