//! # Quick-Reduct Driver
//!
//! Runs the three phases (core, seek, inspect) over one universe with one
//! measure and reports per-phase timings:
//!
//! ```text
//! table ─▶ SearchContext ─▶ find_core ─▶ seek_reduct ─▶ inspect ─▶ ReductResult
//! ```

/**
 * File: /src/reduct/quick.rs
 * Created Date: Thursday, March 12th 2026
 * Author: Zihan
 * -----
 * Last Modified: Friday, 20th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-03-12		Zihan	Created driver with phase timings
 * 2026-03-19		Zihan	Measure dispatch from configuration
 * 2026-03-20		Zihan	Conditional attribute count in stats
 */

use std::time::Instant;

use log::info;
use serde::{Deserialize, Serialize};

use super::{find_core, inspect, seek_reduct, Reduct, SearchContext};
use crate::config::ReductConfig;
use crate::error::ReductError;
use crate::measure::{
    CombinationConditionalEntropy, DependencyDegree, KnowledgeGranularity, MeasureKind, PositiveRegion,
    ShannonConditionalEntropy, Sig, SignificanceMeasure,
};
use crate::table::{Attribute, InstanceSource};

/// Outcome of one Quick-Reduct run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReductResult {
    pub reduct: Reduct,
    pub core: Vec<Attribute>,
    /// Name of the measure used
    pub measure: String,
    pub global_significance: f64,
    /// Significance of the final reduct
    pub significance: f64,
    pub stats: Option<ReductStats>,
}

impl ReductResult {
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Reduct {} ({} attributes), core {:?}\n{}: {:.6} (global {:.6})",
            self.reduct,
            self.reduct.len(),
            self.core,
            self.measure,
            self.significance,
            self.global_significance
        );
        if let Some(stats) = &self.stats {
            summary.push_str(&format!(
                "\n{} attributes, {} evaluations, {} cache hits, {} seeking steps, {} full-set classes",
                stats.attributes, stats.evaluations, stats.cache_hits, stats.seek_steps, stats.atoms
            ));
            summary.push_str(&format!(
                "\nphases: core {}ms, seek {}ms, inspect {}ms, total {}ms",
                stats.phase_times.core_ms,
                stats.phase_times.seek_ms,
                stats.phase_times.inspect_ms,
                stats.phase_times.total_ms
            ));
        }
        summary
    }
}

/// Statistics from one Quick-Reduct run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReductStats {
    /// Conditional attributes of the source
    pub attributes: usize,
    /// Significance calculations, including partial ones
    pub evaluations: usize,
    pub cache_hits: usize,
    /// Equivalence classes of the full attribute set
    pub atoms: usize,
    /// Attributes added by the seeking loop
    pub seek_steps: usize,
    pub phase_times: PhaseTimings,
}

/// Time spent in each phase (ms)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhaseTimings {
    pub global_ms: u64,
    pub core_ms: u64,
    pub seek_ms: u64,
    pub inspect_ms: u64,
    pub total_ms: u64,
}

/// Greedy attribute reduction driven by a `ReductConfig`
#[derive(Debug, Clone, Default)]
pub struct QuickReduct {
    config: ReductConfig,
}

impl QuickReduct {
    pub fn new(config: ReductConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReductConfig {
        &self.config
    }

    /// Run with the configured measure
    pub fn run<S>(&self, source: &S) -> Result<ReductResult, ReductError>
    where
        S: InstanceSource + ?Sized,
    {
        match self.config.measure {
            MeasureKind::PositiveRegion => self.run_with(source, PositiveRegion::new()),
            MeasureKind::DependencyDegree => self.run_with(source, DependencyDegree::new()),
            MeasureKind::ShannonEntropy => self.run_with(source, ShannonConditionalEntropy::new()),
            MeasureKind::CombinationEntropy => self.run_with(source, CombinationConditionalEntropy::new()),
            MeasureKind::KnowledgeGranularity => self.run_with(source, KnowledgeGranularity::new()),
        }
    }

    /// Run with any measure, ignoring the configured `MeasureKind`
    pub fn run_with<S, M>(&self, source: &S, measure: M) -> Result<ReductResult, ReductError>
    where
        S: InstanceSource + ?Sized,
        M: SignificanceMeasure,
    {
        self.config.validate()?;
        let start_time = Instant::now();
        let attribute_count = source.attribute_count();
        info!(
            "[quick-reduct] {} instances, {} conditional attributes, measure {}, deviation {}",
            source.instance_count(),
            attribute_count,
            measure.name(),
            self.config.deviation
        );

        let global_start = Instant::now();
        let mut ctx = SearchContext::new(source, measure, self.config.deviation)?;
        let global_ms = global_start.elapsed().as_millis() as u64;
        info!(
            "[quick-reduct] global {} = {} over {} classes in {}ms",
            ctx.measure().name(),
            ctx.global_significance(),
            ctx.global_partition().len(),
            global_ms
        );

        let core_start = Instant::now();
        let core = find_core(&mut ctx, self.config.core_strategy)?;
        let core_ms = core_start.elapsed().as_millis() as u64;
        info!("[quick-reduct] core {:?} found in {}ms", core, core_ms);

        let seek_start = Instant::now();
        let candidate = seek_reduct(&mut ctx, &core, self.config.seek_strategy)?;
        let seek_ms = seek_start.elapsed().as_millis() as u64;
        let seek_steps = candidate.len() - core.len();
        info!(
            "[quick-reduct] candidate {} after {} steps in {}ms",
            candidate, seek_steps, seek_ms
        );

        let inspect_start = Instant::now();
        let reduct = if self.config.inspect {
            inspect(&mut ctx, &candidate)?
        } else {
            candidate
        };
        let inspect_ms = inspect_start.elapsed().as_millis() as u64;

        let significance = ctx.significance(reduct.as_slice())?;
        let total_ms = start_time.elapsed().as_millis() as u64;
        info!(
            "[quick-reduct] reduct {} with {} = {} in {}ms",
            reduct,
            ctx.measure().name(),
            significance,
            total_ms
        );

        let stats = if self.config.collect_stats {
            Some(ReductStats {
                attributes: attribute_count,
                evaluations: ctx.evaluations(),
                cache_hits: ctx.cache().hits(),
                atoms: ctx.global_partition().len(),
                seek_steps,
                phase_times: PhaseTimings {
                    global_ms,
                    core_ms,
                    seek_ms,
                    inspect_ms,
                    total_ms,
                },
            })
        } else {
            None
        };

        Ok(ReductResult {
            reduct,
            core,
            measure: ctx.measure().name().to_string(),
            global_significance: ctx.global_significance().as_f64(),
            significance: significance.as_f64(),
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduct::{CoreStrategy, SeekStrategy};
    use crate::table::test_utils::{random_table, small_table, xor_table};
    use crate::table::CompactedTable;

    #[test]
    fn test_small_table_reduct() {
        let table = small_table();
        let result = QuickReduct::default().run(&table).unwrap();
        assert_eq!(result.reduct.sorted(), vec![1, 2]);
        assert_eq!(result.core, vec![1, 2]);
        assert_eq!(result.global_significance, 2.0);
        assert_eq!(result.significance, 2.0);
        assert_eq!(result.measure, "positive-region");
        let stats = result.stats.unwrap();
        assert_eq!(stats.seek_steps, 0);
        assert_eq!(stats.attributes, 2);
        assert_eq!(stats.atoms, 3);
    }

    #[test]
    fn test_xor_reduct_every_measure() {
        let table = xor_table();
        for measure in [
            MeasureKind::PositiveRegion,
            MeasureKind::DependencyDegree,
            MeasureKind::ShannonEntropy,
            MeasureKind::CombinationEntropy,
            MeasureKind::KnowledgeGranularity,
        ] {
            let config = ReductConfig {
                measure,
                ..ReductConfig::default()
            };
            let result = QuickReduct::new(config).run(&table).unwrap();
            // core {a3}, then a1 wins the tie with its duplicate a2
            assert_eq!(result.core, vec![3], "{}", measure);
            assert_eq!(result.reduct.as_slice(), &[3, 1], "{}", measure);
            assert_eq!(result.stats.unwrap().attributes, 4);
        }
    }

    #[test]
    fn test_compacted_table_gives_same_reduct() {
        let table = random_table(17, 300, 5, 2);
        let compacted = CompactedTable::from_source(&table);
        let config = ReductConfig {
            measure: MeasureKind::ShannonEntropy,
            ..ReductConfig::default()
        };
        let quick = QuickReduct::new(config);
        let plain = quick.run(&table).unwrap();
        let hashed = quick.run(&compacted).unwrap();
        assert_eq!(plain.reduct.as_slice(), hashed.reduct.as_slice());
        assert!((plain.global_significance - hashed.global_significance).abs() < 1e-9);
    }

    #[test]
    fn test_strategy_combinations_agree() {
        let table = random_table(31, 240, 7, 3);
        let mut reducts = Vec::new();
        for core_strategy in [CoreStrategy::Naive, CoreStrategy::BoundarySensitive] {
            for seek_strategy in [SeekStrategy::Repartition, SeekStrategy::Refinement, SeekStrategy::Nested] {
                let config = ReductConfig {
                    core_strategy,
                    seek_strategy,
                    ..ReductConfig::default()
                };
                reducts.push(QuickReduct::new(config).run(&table).unwrap().reduct);
            }
        }
        for reduct in &reducts[1..] {
            assert_eq!(reduct.as_slice(), reducts[0].as_slice());
        }
    }

    #[test]
    fn test_without_inspection_or_stats() {
        let table = xor_table();
        let config = ReductConfig {
            inspect: false,
            collect_stats: false,
            ..ReductConfig::default()
        };
        let result = QuickReduct::new(config).run(&table).unwrap();
        assert!(result.stats.is_none());
        assert_eq!(result.reduct.as_slice(), &[3, 1]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let table = small_table();
        let config = ReductConfig {
            deviation: -1.0,
            ..ReductConfig::default()
        };
        let err = QuickReduct::new(config).run(&table).unwrap_err();
        assert_eq!(err, ReductError::InvalidDeviation(-1.0));
    }
}
