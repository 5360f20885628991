//! Shared test tables for partitioning and reduct search
use super::DecisionTable;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// (a1, a2, d) = {(1,1,0), (1,1,1), (1,2,0), (2,2,1)}, stored decision first
pub fn small_table() -> DecisionTable {
    DecisionTable::from_rows(vec![
        vec![0, 1, 1],
        vec![1, 1, 1],
        vec![0, 1, 2],
        vec![1, 2, 2],
    ])
    .unwrap()
}

/// Decision is `a1 xor a3`; a2 duplicates a1 and a4 is noise
pub fn xor_table() -> DecisionTable {
    let mut rows = Vec::new();
    for a1 in 0..2 {
        for a3 in 0..2 {
            for a4 in 0..3 {
                rows.push(vec![a1 ^ a3, a1, a1, a3, a4]);
            }
        }
    }
    DecisionTable::from_rows(rows).unwrap()
}

/// Seeded random table with `attributes` conditional columns
pub fn random_table(seed: u64, rows: usize, attributes: usize, values: i32) -> DecisionTable {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..rows)
        .map(|_| {
            (0..=attributes)
                .map(|c| if c == 0 { rng.random_range(0..2) } else { rng.random_range(0..values) })
                .collect()
        })
        .collect();
    DecisionTable::from_rows(rows).unwrap()
}
