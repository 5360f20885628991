//! Integration tests for Quick-Reduct
//!
//! Tests the full search with all three phases:
//! 1. Core finding
//! 2. Significant-attribute seeking
//! 3. Redundancy inspection

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rough_reduct::measure::{
    CombinationConditionalEntropy, DependencyDegree, KnowledgeGranularity, PositiveRegion,
    ShannonConditionalEntropy,
};
use rough_reduct::partition::{classify_class, refine, Region};
use rough_reduct::population::{mates_within, repair, Candidate, CandidateKind};
use rough_reduct::reduct::{find_core, inspect, seek_reduct};
use rough_reduct::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Random table whose decision is `(a2 + a5) % 2`, other attributes noise
fn create_planted_table(rows: usize, attributes: usize, values: i32, seed: u64) -> DecisionTable {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..rows)
        .map(|_| {
            let mut row: Vec<i32> = (0..=attributes).map(|_| rng.random_range(0..values)).collect();
            row[0] = (row[2] + row[5]) % 2;
            row
        })
        .collect();
    DecisionTable::from_rows(rows).unwrap()
}

fn create_random_table(rows: usize, attributes: usize, values: i32, seed: u64) -> DecisionTable {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..rows)
        .map(|_| {
            let mut row: Vec<i32> = (0..=attributes).map(|_| rng.random_range(0..values)).collect();
            row[0] = rng.random_range(0..3);
            row
        })
        .collect();
    DecisionTable::from_rows(rows).unwrap()
}

fn assert_is_reduct<M: SignificanceMeasure>(table: &DecisionTable, measure: M, deviation: f64, reduct: &Reduct) {
    let mut ctx = SearchContext::new(table, measure, deviation).unwrap();
    let value = ctx.significance(reduct.as_slice()).unwrap();
    assert!(ctx.reaches_global(value), "{} does not reach the global significance", reduct);
    for attribute in reduct.iter() {
        let without = ctx.significance(&reduct.without(attribute)).unwrap();
        assert!(
            !ctx.reaches_global(without),
            "{} is redundant in {}",
            attribute,
            reduct
        );
    }
}

#[test]
fn test_planted_reduct_is_recovered() {
    init();
    let table = create_planted_table(2000, 6, 3, 1);
    for measure in [
        MeasureKind::PositiveRegion,
        MeasureKind::DependencyDegree,
        MeasureKind::ShannonEntropy,
        MeasureKind::KnowledgeGranularity,
    ] {
        let config = ReductConfig {
            measure,
            ..ReductConfig::default()
        };
        let result = QuickReduct::new(config).run(&table).unwrap();
        assert_eq!(result.core, vec![2, 5], "{}", measure);
        assert_eq!(result.reduct.sorted(), vec![2, 5], "{}", measure);
    }
}

#[test]
fn test_reducts_are_valid_for_every_measure() {
    init();
    let table = create_random_table(300, 8, 3, 7);
    let quick = |measure| {
        QuickReduct::new(ReductConfig {
            measure,
            ..ReductConfig::default()
        })
        .run(&table)
        .unwrap()
        .reduct
    };
    assert_is_reduct(&table, PositiveRegion::new(), 0.0, &quick(MeasureKind::PositiveRegion));
    assert_is_reduct(&table, DependencyDegree::new(), 0.0, &quick(MeasureKind::DependencyDegree));
    assert_is_reduct(&table, ShannonConditionalEntropy::new(), 0.0, &quick(MeasureKind::ShannonEntropy));
    assert_is_reduct(
        &table,
        CombinationConditionalEntropy::new(),
        0.0,
        &quick(MeasureKind::CombinationEntropy),
    );
    assert_is_reduct(
        &table,
        KnowledgeGranularity::new(),
        0.0,
        &quick(MeasureKind::KnowledgeGranularity),
    );
}

#[test]
fn test_deviation_is_honoured() {
    init();
    let table = create_random_table(400, 8, 3, 13);
    for deviation in [0.0, 0.05, 0.2] {
        let config = ReductConfig {
            measure: MeasureKind::DependencyDegree,
            deviation,
            ..ReductConfig::default()
        };
        let result = QuickReduct::new(config).run(&table).unwrap();
        assert!(result.global_significance - result.significance <= deviation + 1e-9);
        assert_is_reduct(&table, DependencyDegree::new(), deviation, &result.reduct);
    }
}

#[test]
fn test_phases_by_hand_match_driver() {
    init();
    let table = create_random_table(250, 7, 3, 21);
    let mut ctx = SearchContext::new(&table, ShannonConditionalEntropy::new(), 0.0).unwrap();
    let core = find_core(&mut ctx, CoreStrategy::BoundarySensitive).unwrap();
    let candidate = seek_reduct(&mut ctx, &core, SeekStrategy::Nested).unwrap();
    let reduct = inspect(&mut ctx, &candidate).unwrap();

    let config = ReductConfig {
        measure: MeasureKind::ShannonEntropy,
        ..ReductConfig::default()
    };
    let result = QuickReduct::new(config).run(&table).unwrap();
    assert_eq!(result.core, core);
    assert_eq!(result.reduct.as_slice(), reduct.as_slice());
    for attribute in &core {
        assert!(reduct.contains(*attribute));
    }
}

#[test]
fn test_refinement_never_worsens_significance() {
    let table = create_random_table(300, 6, 4, 5);
    let mut measure = ShannonConditionalEntropy::new();
    let mut base = partition(&table, &[]).unwrap();
    let mut previous = measure.calculate(&base.histograms(), 0, table.instance_count());
    for attribute in [4, 1, 6, 2] {
        let refined = refine(&table, &base, attribute).unwrap();
        assert!(refined.len() >= base.len());
        assert_eq!(refined.instance_count(), 300);
        let value = measure.calculate(&refined.histograms(), refined.attributes().len(), 300);
        assert!(value <= previous + 1e-12);
        previous = value;
        base = refined;
    }
}

#[test]
fn test_partition_invariants() {
    let table = create_random_table(500, 5, 3, 9);
    let partition = partition(&table, &[3, 1]).unwrap();
    let mut seen = vec![false; table.len()];
    for class in partition.classes() {
        assert_eq!(class.histogram().total(), class.instance_count());
        for &row in class.members() {
            assert!(!seen[row]);
            seen[row] = true;
        }
        if let Region::Positive = classify_class(class, false) {
            assert_eq!(class.histogram().distinct(), 1);
        }
    }
    assert!(seen.into_iter().all(|s| s));
}

#[test]
fn test_compacted_universe() {
    init();
    let table = create_planted_table(1500, 5, 2, 3);
    let compacted = CompactedTable::from_source(&table);
    assert!(compacted.len() <= 32);
    assert_eq!(compacted.instance_count(), 1500);

    let quick = QuickReduct::default();
    let plain = quick.run(&table).unwrap();
    let hashed = quick.run(&compacted).unwrap();
    assert_eq!(plain.reduct, hashed.reduct);
    assert_eq!(plain.global_significance, hashed.global_significance);
}

#[test]
fn test_population_repair() {
    init();
    let table = create_planted_table(1000, 6, 3, 4);
    let mut ctx = SearchContext::new(&table, PositiveRegion::new(), 0.0).unwrap();
    let mut population = vec![
        Candidate::new(CandidateKind::Chromosome, vec![true, false, false, false, false, false]),
        Candidate::new(CandidateKind::Particle, vec![false, true, false, false, true, false]),
        Candidate::new(CandidateKind::Harmony, vec![true; 6]),
    ];
    for candidate in population.iter_mut() {
        let reduct = repair(&mut ctx, candidate, SeekStrategy::Nested).unwrap();
        assert_is_reduct(&table, PositiveRegion::new(), 0.0, &reduct);
        assert_eq!(candidate.fitness, Some(1000.0));
    }
    // every repaired candidate now encodes {a2, a5}
    assert_eq!(mates_within(&population, 0, 0), vec![1, 2]);
}

#[test]
fn test_result_serializes() {
    let table = create_planted_table(600, 6, 3, 2);
    let result = QuickReduct::default().run(&table).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: ReductResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back.reduct, result.reduct);
    assert_eq!(back.core, result.core);
    assert_eq!(back.measure, "positive-region");

    let config: ReductConfig = serde_json::from_str(&serde_json::to_string(&ReductConfig::default()).unwrap()).unwrap();
    assert_eq!(config.seek_strategy, SeekStrategy::Nested);
}

#[test]
fn test_configuration_errors() {
    let empty = DecisionTable::from_rows(vec![]).unwrap();
    assert_eq!(
        QuickReduct::default().run(&empty).unwrap_err(),
        ReductError::EmptyUniverse
    );

    let table = create_random_table(20, 3, 2, 1);
    assert_eq!(
        partition(&table, &[4]).unwrap_err(),
        ReductError::AttributeOutOfRange {
            attribute: 4,
            attribute_count: 3
        }
    );
    assert_eq!(
        partition(&table, &[0, 1]).unwrap_err(),
        ReductError::DecisionAttributeInSubset
    );
    assert_eq!(
        DecisionTable::from_rows(vec![vec![0, 1], vec![1]]).unwrap_err(),
        ReductError::RaggedRow {
            row: 1,
            expected: 2,
            found: 1
        }
    );
}
