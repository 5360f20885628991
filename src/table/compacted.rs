/**
 * File: /src/table/compacted.rs
 * Created Date: Wednesday, March 4th 2026
 * Author: Zihan
 * -----
 * Last Modified: Wednesday, 4th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-03-04		Zihan	Hash-compacted decision table
 */

use std::collections::HashMap;

use log::debug;

use super::{Attribute, InstanceSource};

/// Decision table where identical rows (conditional values and decision)
/// are hashed into one record carrying a multiplicity.
///
/// Partitioning a compacted table gives the same classes, histograms and
/// significances as partitioning the original, with fewer rows to scan.
#[derive(Debug, Clone)]
pub struct CompactedTable {
    records: Vec<Box<[i32]>>,
    counts: Vec<usize>,
    origins: Vec<Vec<usize>>,
    attribute_count: usize,
}

impl CompactedTable {
    pub fn from_source<S: InstanceSource + ?Sized>(source: &S) -> Self {
        let attribute_count = source.attribute_count();
        let mut index: HashMap<Box<[i32]>, usize> = HashMap::new();
        let mut records = Vec::new();
        let mut counts = Vec::new();
        let mut origins: Vec<Vec<usize>> = Vec::new();

        for row in 0..source.len() {
            let values: Box<[i32]> = (0..=attribute_count)
                .map(|attribute| source.value(row, attribute))
                .collect();
            match index.get(&values) {
                Some(&record) => {
                    counts[record] += source.weight(row);
                    origins[record].push(row);
                }
                None => {
                    index.insert(values.clone(), records.len());
                    records.push(values);
                    counts.push(source.weight(row));
                    origins.push(vec![row]);
                }
            }
        }

        debug!(
            "compacted {} rows into {} records",
            source.len(),
            records.len()
        );

        Self {
            records,
            counts,
            origins,
            attribute_count,
        }
    }

    /// Rows of the source table folded into `record`
    pub fn origins(&self, record: usize) -> &[usize] {
        &self.origins[record]
    }
}

impl InstanceSource for CompactedTable {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn attribute_count(&self) -> usize {
        self.attribute_count
    }

    fn value(&self, row: usize, attribute: Attribute) -> i32 {
        self.records[row][attribute]
    }

    fn weight(&self, row: usize) -> usize {
        self.counts[row]
    }
}
